//! Catalog part records.
//!
//! A `Part` is immutable once loaded. Every optional numeric field is
//! treated as zero when it is absent, so no part can contribute an
//! undefined value to a total.

use crate::category::StatKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a part, unique within its collection.
///
/// This is the only id type the crate uses. Text coming from picker
/// widgets is normalised with [`PartId::parse_selection`].
///
/// # Examples
///
/// ```rust
/// use combostat::PartId;
///
/// assert_eq!(PartId::parse_selection("12"), Some(PartId(12)));
/// assert_eq!(PartId::parse_selection(" 3 "), Some(PartId(3)));
/// assert_eq!(PartId::parse_selection(""), None);
/// assert_eq!(PartId::parse_selection("abc"), None);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(pub u32);

impl PartId {
    /// Parse a picker value. Empty or non-numeric text means "no selection".
    pub fn parse_selection(raw: &str) -> Option<PartId> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<u32>().ok().map(PartId)
    }
}

impl From<u32> for PartId {
    fn from(id: u32) -> Self {
        PartId(id)
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-part stat block. Any field missing from the catalog is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartStats {
    pub attack: i64,
    pub defense: i64,
    pub endurance: i64,
    pub dash: i64,
    pub burst_resistance: i64,
}

impl PartStats {
    /// Value of a single stat.
    pub fn get(&self, kind: StatKind) -> i64 {
        match kind {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Endurance => self.endurance,
            StatKind::Dash => self.dash,
            StatKind::BurstResistance => self.burst_resistance,
        }
    }
}

/// A selectable catalog item.
///
/// # Examples
///
/// ```rust
/// use combostat::Part;
///
/// let part: Part = serde_json::from_str(
///     r#"{"id": 1, "name": "F (Flat)", "type": "Attack", "weight": 2.1}"#,
/// ).unwrap();
///
/// assert_eq!(part.name, "F (Flat)");
/// assert!(part.stats.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<PartStats>,
}

impl Part {
    /// The bit's short code: its name up to the first space.
    pub fn short_code(&self) -> &str {
        self.name.split(' ').next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_rejects_negative() {
        assert_eq!(PartId::parse_selection("-1"), None);
    }

    #[test]
    fn test_partial_stats_default_to_zero() {
        let stats: PartStats = serde_json::from_str(r#"{"attack": 12}"#).unwrap();
        assert_eq!(stats.attack, 12);
        assert_eq!(stats.get(StatKind::Dash), 0);
        assert_eq!(stats.get(StatKind::BurstResistance), 0);
    }

    #[test]
    fn test_part_full_record() {
        let part: Part = serde_json::from_str(
            r#"{
                "id": 4,
                "name": "Dran Sword",
                "type": "Attack",
                "description": "Three-bladed attacker",
                "image": "assets/dran_sword.png",
                "weight": 35.0,
                "stats": {"attack": 40, "defense": 20, "endurance": 10, "dash": 5, "burst_resistance": 15}
            }"#,
        )
        .unwrap();
        assert_eq!(part.id, PartId(4));
        assert_eq!(part.kind, "Attack");
        assert_eq!(part.image.as_deref(), Some("assets/dran_sword.png"));
        assert_eq!(part.stats.unwrap().get(StatKind::Attack), 40);
    }

    #[test]
    fn test_part_requires_name() {
        let result: Result<Part, _> = serde_json::from_str(r#"{"id": 1, "type": "Bit"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_short_code() {
        let part: Part =
            serde_json::from_str(r#"{"id": 1, "name": "GF (Gear Flat)", "type": "Bit"}"#).unwrap();
        assert_eq!(part.short_code(), "GF");

        let bare: Part = serde_json::from_str(r#"{"id": 2, "name": "R", "type": "Bit"}"#).unwrap();
        assert_eq!(bare.short_code(), "R");
    }
}
