//! Aggregate stats module.
//!
//! Contains `AggregateStats`, the field-wise sum of every selected
//! part's stats, and `aggregate`, the pure function that derives it
//! from a `Selection`.

use crate::category::StatKind;
use crate::selection::Selection;
use crate::source::StatSource;
use serde::{Deserialize, Serialize};

/// Summed stats of a combination.
///
/// This is read-only, copyable and fully determined by the selection it
/// was computed from. A snapshot of it is frozen into every comparison
/// entry.
///
/// # Examples
///
/// ```rust
/// use combostat::{AggregateStats, StatKind};
///
/// let stats = AggregateStats { attack: 45, weight: 51.5, ..Default::default() };
/// assert_eq!(stats.get(StatKind::Attack), 45);
/// assert_eq!(stats.chart_series(), [45, 0, 0, 0, 0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub attack: i64,
    pub defense: i64,
    pub endurance: i64,
    pub dash: i64,
    pub burst_resistance: i64,
    /// Total weight in grams.
    pub weight: f64,
}

impl AggregateStats {
    /// Sum the contributions of any number of sources.
    ///
    /// An empty iterator yields all zeros.
    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: StatSource,
    {
        let mut totals = Self::default();
        for source in sources {
            totals.add_source(&source);
        }
        totals
    }

    // Integer sums saturate; catalogs may carry any i64.
    fn add_source<S: StatSource + ?Sized>(&mut self, source: &S) {
        self.attack = self.attack.saturating_add(source.stat(StatKind::Attack));
        self.defense = self.defense.saturating_add(source.stat(StatKind::Defense));
        self.endurance = self.endurance.saturating_add(source.stat(StatKind::Endurance));
        self.dash = self.dash.saturating_add(source.stat(StatKind::Dash));
        self.burst_resistance = self
            .burst_resistance
            .saturating_add(source.stat(StatKind::BurstResistance));
        self.weight += source.weight_grams();
    }

    /// Value of a single bar stat.
    pub fn get(&self, kind: StatKind) -> i64 {
        match kind {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Endurance => self.endurance,
            StatKind::Dash => self.dash,
            StatKind::BurstResistance => self.burst_resistance,
        }
    }

    /// The five bar stats in radar axis order. Weight is not plotted.
    pub fn chart_series(&self) -> [i64; 5] {
        StatKind::ALL.map(|kind| self.get(kind))
    }
}

/// Derive the totals of a selection.
///
/// Sums over the filled slots only; empty slots contribute nothing.
///
/// # Examples
///
/// ```rust
/// use combostat::{aggregate, AggregateStats, Selection};
///
/// assert_eq!(aggregate(&Selection::default()), AggregateStats::default());
/// ```
pub fn aggregate(selection: &Selection) -> AggregateStats {
    AggregateStats::from_sources(selection.filled())
}
