//! Part selection state and combination naming.

use crate::category::Category;
use crate::error::ComboError;
use crate::part::Part;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label shown while the combination is incomplete.
pub const PLACEHOLDER_LABEL: &str = "COMBINATION STATS";

/// One slot per category, each holding a part or nothing.
///
/// # Examples
///
/// ```rust
/// use combostat::{Category, Selection};
///
/// let selection = Selection::default();
/// assert!(selection.get(Category::Blade).is_none());
/// assert_eq!(selection.missing(), Category::ALL.to_vec());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub blade: Option<Part>,
    pub ratchet: Option<Part>,
    pub bit: Option<Part>,
}

impl Selection {
    /// The part in a slot, if any.
    pub fn get(&self, category: Category) -> Option<&Part> {
        self.slot(category).as_ref()
    }

    /// Fill or clear a slot.
    pub fn set(&mut self, category: Category, part: Option<Part>) {
        *self.slot_mut(category) = part;
    }

    fn slot(&self, category: Category) -> &Option<Part> {
        match category {
            Category::Blade => &self.blade,
            Category::Ratchet => &self.ratchet,
            Category::Bit => &self.bit,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<Part> {
        match category {
            Category::Blade => &mut self.blade,
            Category::Ratchet => &mut self.ratchet,
            Category::Bit => &mut self.bit,
        }
    }

    /// Filled slots, in slot order.
    pub fn filled(&self) -> impl Iterator<Item = &Part> {
        Category::ALL.into_iter().filter_map(move |c| self.get(c))
    }

    /// Empty slots, in slot order.
    pub fn missing(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.get(*c).is_none())
            .collect()
    }

    /// Whether all three slots are filled.
    pub fn is_complete(&self) -> bool {
        self.blade.is_some() && self.ratchet.is_some() && self.bit.is_some()
    }
}

/// Name of a complete combination.
///
/// Only obtainable from a selection with every slot filled, so a
/// partial label can never reach the comparison registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CombinationLabel(String);

impl CombinationLabel {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CombinationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name the combination: blade name, a space, ratchet name and the bit's
/// short code, all uppercased.
///
/// Returns `None` when any slot is empty.
///
/// # Examples
///
/// ```rust
/// use combostat::{combination_label, Part, Selection};
///
/// let part = |name: &str| -> Part {
///     serde_json::from_value(serde_json::json!({"id": 1, "name": name, "type": "x"})).unwrap()
/// };
/// let selection = Selection {
///     blade: Some(part("Dran Sword")),
///     ratchet: Some(part("3-60")),
///     bit: Some(part("F (Flat)")),
/// };
///
/// assert_eq!(combination_label(&selection).unwrap().as_str(), "DRAN SWORD 3-60F");
/// ```
pub fn combination_label(selection: &Selection) -> Option<CombinationLabel> {
    match (&selection.blade, &selection.ratchet, &selection.bit) {
        (Some(blade), Some(ratchet), Some(bit)) => {
            let text = format!("{} {}{}", blade.name, ratchet.name, bit.short_code());
            Some(CombinationLabel(text.to_uppercase()))
        }
        _ => None,
    }
}

/// Like [`combination_label`], but reports which slots are empty.
pub fn require_label(selection: &Selection) -> Result<CombinationLabel, ComboError> {
    combination_label(selection).ok_or_else(|| ComboError::IncompleteCombination {
        missing: selection.missing(),
    })
}

/// Text for the combination heading: the label, or the placeholder.
pub fn display_label(selection: &Selection) -> String {
    combination_label(selection)
        .map(CombinationLabel::into_string)
        .unwrap_or_else(|| PLACEHOLDER_LABEL.to_string())
}
