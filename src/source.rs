//! Stat sources module.
//!
//! A source is anything that contributes to a combination's totals.
//! Contributions from every selected source are summed (additive).
//! Sources are stateless and deterministic: the same part always
//! contributes the same values.

use crate::category::StatKind;
use crate::part::{Part, PartStats};

/// Trait for things that contribute to aggregate stats.
///
/// A missing value must be reported as zero, never as an error.
///
/// # Examples
///
/// ```rust
/// use combostat::{Part, StatKind, StatSource};
///
/// let part: Part = serde_json::from_str(
///     r#"{"id": 1, "name": "3-60", "type": "Ratchet", "stats": {"endurance": 20}}"#,
/// ).unwrap();
///
/// assert_eq!(part.stat(StatKind::Endurance), 20);
/// assert_eq!(part.stat(StatKind::Attack), 0);
/// assert_eq!(part.weight_grams(), 0.0);
/// ```
pub trait StatSource {
    /// Contribution to a bar stat.
    fn stat(&self, kind: StatKind) -> i64;

    /// Contribution to total weight, in grams.
    fn weight_grams(&self) -> f64;
}

impl StatSource for PartStats {
    fn stat(&self, kind: StatKind) -> i64 {
        self.get(kind)
    }

    fn weight_grams(&self) -> f64 {
        0.0
    }
}

impl StatSource for Part {
    fn stat(&self, kind: StatKind) -> i64 {
        self.stats.map(|s| s.get(kind)).unwrap_or(0)
    }

    fn weight_grams(&self) -> f64 {
        match self.weight {
            Some(w) if w.is_finite() => w,
            _ => 0.0,
        }
    }
}

impl<T: StatSource + ?Sized> StatSource for &T {
    fn stat(&self, kind: StatKind) -> i64 {
        (**self).stat(kind)
    }

    fn weight_grams(&self) -> f64 {
        (**self).weight_grams()
    }
}
