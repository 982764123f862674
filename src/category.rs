//! Part categories and stat kinds.
//!
//! Provides `Category`, naming the three interchangeable slots of a
//! combination, and `StatKind`, naming the five stats that carry a bar
//! and a chart axis. Weight is deliberately not a `StatKind`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three part slots of a combination.
///
/// # Examples
///
/// ```rust
/// use combostat::Category;
///
/// assert_eq!(Category::Ratchet.as_str(), "ratchet");
/// assert_eq!(Category::Bit.display_name(), "Bit");
/// assert_eq!(Category::ALL.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Blade,
    Ratchet,
    Bit,
}

impl Category {
    /// All categories in slot order.
    pub const ALL: [Category; 3] = [Category::Blade, Category::Ratchet, Category::Bit];

    /// Lowercase identifier, as used in commands and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Blade => "blade",
            Category::Ratchet => "ratchet",
            Category::Bit => "bit",
        }
    }

    /// Capitalised name, as shown to a user.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Blade => "Blade",
            Category::Ratchet => "Ratchet",
            Category::Bit => "Bit",
        }
    }

    /// Name of the catalog collection holding parts of this category.
    pub fn collection(self) -> &'static str {
        match self {
            Category::Blade => "blades",
            Category::Ratchet => "ratchets",
            Category::Bit => "bits",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stat that is shown as a bar and plotted on the radar chart.
///
/// Declaration order is axis order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Attack,
    Defense,
    Endurance,
    Dash,
    BurstResistance,
}

impl StatKind {
    /// All bar stats in axis order.
    pub const ALL: [StatKind; 5] = [
        StatKind::Attack,
        StatKind::Defense,
        StatKind::Endurance,
        StatKind::Dash,
        StatKind::BurstResistance,
    ];

    /// Field name as it appears in catalog documents.
    pub fn as_str(self) -> &'static str {
        match self {
            StatKind::Attack => "attack",
            StatKind::Defense => "defense",
            StatKind::Endurance => "endurance",
            StatKind::Dash => "dash",
            StatKind::BurstResistance => "burst_resistance",
        }
    }

    /// Radar chart axis label.
    ///
    /// ```rust
    /// use combostat::StatKind;
    ///
    /// assert_eq!(StatKind::BurstResistance.axis_label(), "Burst Res.");
    /// ```
    pub fn axis_label(self) -> &'static str {
        match self {
            StatKind::Attack => "Attack",
            StatKind::Defense => "Defense",
            StatKind::Endurance => "Endurance",
            StatKind::Dash => "Dash",
            StatKind::BurstResistance => "Burst Res.",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
