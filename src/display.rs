//! Presentation helpers.
//!
//! Maps aggregate stats and parts to the strings and fill percentages a
//! front end renders. Nothing here owns state.

use crate::aggregate::AggregateStats;
use crate::category::{Category, StatKind};
use crate::error::ComboError;
use crate::part::Part;
use serde::{Deserialize, Serialize};

/// Per-stat bar ceilings.
///
/// These are calibration values, not limits: a total above its ceiling
/// is valid and simply renders as a full bar.
///
/// # Examples
///
/// ```rust
/// use combostat::{StatCeilings, StatKind};
///
/// let ceilings = StatCeilings::default();
/// assert_eq!(ceilings.bar_percent(StatKind::Attack, 65), 50.0);
/// assert_eq!(ceilings.bar_percent(StatKind::Attack, 260), 100.0);
/// assert_eq!(ceilings.bar_percent(StatKind::Dash, 30), 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatCeilings {
    pub attack: f64,
    pub defense: f64,
    pub endurance: f64,
    pub dash: f64,
    pub burst_resistance: f64,
}

impl StatCeilings {
    pub const DEFAULT_ATTACK: f64 = 130.0;
    pub const DEFAULT_DEFENSE: f64 = 130.0;
    pub const DEFAULT_ENDURANCE: f64 = 130.0;
    pub const DEFAULT_DASH: f64 = 60.0;
    pub const DEFAULT_BURST_RESISTANCE: f64 = 100.0;

    /// Ceiling for one stat.
    pub fn get(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Endurance => self.endurance,
            StatKind::Dash => self.dash,
            StatKind::BurstResistance => self.burst_resistance,
        }
    }

    /// Every ceiling must be finite and positive.
    pub fn validate(&self) -> Result<(), ComboError> {
        for kind in StatKind::ALL {
            let value = self.get(kind);
            if !value.is_finite() || value <= 0.0 {
                return Err(ComboError::InvalidCeiling { stat: kind, value });
            }
        }
        Ok(())
    }

    /// Bar fill for a value, in percent.
    pub fn bar_percent(&self, kind: StatKind, value: i64) -> f64 {
        bar_percent(value, self.get(kind))
    }
}

impl Default for StatCeilings {
    fn default() -> Self {
        Self {
            attack: Self::DEFAULT_ATTACK,
            defense: Self::DEFAULT_DEFENSE,
            endurance: Self::DEFAULT_ENDURANCE,
            dash: Self::DEFAULT_DASH,
            burst_resistance: Self::DEFAULT_BURST_RESISTANCE,
        }
    }
}

/// `value / ceiling * 100`, clamped to `[0, 100]`.
///
/// A non-positive ceiling yields an empty bar.
pub fn bar_percent(value: i64, ceiling: f64) -> f64 {
    if ceiling.is_nan() || ceiling <= 0.0 {
        return 0.0;
    }
    (value as f64 / ceiling * 100.0).clamp(0.0, 100.0)
}

/// Weight with one decimal and a gram suffix, e.g. `"51.5g"`.
pub fn format_weight(grams: f64) -> String {
    format!("{:.1}g", grams)
}

/// One rendered bar stat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatLine {
    pub stat: StatKind,
    pub value: String,
    pub bar_percent: f64,
}

/// Everything the stats panel shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsDisplay {
    /// Bar stats in axis order.
    pub lines: Vec<StatLine>,
    /// Weight has no bar.
    pub weight: String,
}

impl StatsDisplay {
    /// Render totals against a set of ceilings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combostat::{AggregateStats, StatCeilings, StatsDisplay};
    ///
    /// let totals = AggregateStats { attack: 130, dash: 45, weight: 51.46, ..Default::default() };
    /// let display = StatsDisplay::render(&totals, &StatCeilings::default());
    ///
    /// assert_eq!(display.lines[0].value, "130");
    /// assert_eq!(display.lines[0].bar_percent, 100.0);
    /// assert_eq!(display.lines[3].bar_percent, 75.0);
    /// assert_eq!(display.weight, "51.5g");
    /// ```
    pub fn render(totals: &AggregateStats, ceilings: &StatCeilings) -> Self {
        let lines = StatKind::ALL
            .into_iter()
            .map(|kind| {
                let value = totals.get(kind);
                StatLine {
                    stat: kind,
                    value: value.to_string(),
                    bar_percent: ceilings.bar_percent(kind, value),
                }
            })
            .collect();
        Self {
            lines,
            weight: format_weight(totals.weight),
        }
    }

    /// The line for one stat.
    pub fn line(&self, kind: StatKind) -> Option<&StatLine> {
        self.lines.iter().find(|l| l.stat == kind)
    }
}

/// What a preview region shows for one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartPreview {
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    pub title: String,
    pub subtitle: String,
}

impl PartPreview {
    /// Preview for a slot. An empty slot shows a placeholder title.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combostat::{Category, PartPreview};
    ///
    /// let empty = PartPreview::for_slot(Category::Ratchet, None);
    /// assert!(!empty.visible);
    /// assert_eq!(empty.title, "No Ratchet Selected");
    /// ```
    pub fn for_slot(category: Category, part: Option<&Part>) -> Self {
        match part {
            Some(part) => Self {
                visible: true,
                image_uri: part.image.clone(),
                title: part.name.clone(),
                subtitle: part
                    .description
                    .as_deref()
                    .filter(|d| !d.is_empty())
                    .unwrap_or(part.kind.as_str())
                    .to_string(),
            },
            None => Self {
                visible: false,
                image_uri: None,
                title: format!("No {} Selected", category.display_name()),
                subtitle: String::new(),
            },
        }
    }
}
