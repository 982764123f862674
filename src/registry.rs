//! Comparison registry module.
//!
//! Holds the committed combinations in insertion order and keeps the two
//! views of them, the comparison table and the radar chart, in step.
//! Every mutation touches the entry list, the table and the chart inside
//! one `&mut self` call, so the three never disagree about which entries
//! exist.

use crate::aggregate::AggregateStats;
use crate::category::StatKind;
use crate::display::format_weight;
use crate::palette::{ChartColor, Palette};
use crate::selection::CombinationLabel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

static NEXT_ENTRY_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier of a comparison entry.
///
/// Ids come from a process-wide monotonic counter and are never reused,
/// even across registries or for back-to-back commits.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl EntryId {
    fn next() -> Self {
        EntryId(NEXT_ENTRY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// A frozen, named snapshot of a combination's totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub id: EntryId,
    pub label: String,
    pub stats: AggregateStats,
}

/// A rendered table row. Cells are display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub entry_id: EntryId,
    pub label: String,
    pub attack: String,
    pub defense: String,
    pub endurance: String,
    pub dash: String,
    pub burst_resistance: String,
    pub weight: String,
}

impl TableRow {
    fn from_entry(entry: &ComparisonEntry) -> Self {
        let stats = &entry.stats;
        Self {
            entry_id: entry.id,
            label: entry.label.clone(),
            attack: stats.attack.to_string(),
            defense: stats.defense.to_string(),
            endurance: stats.endurance.to_string(),
            dash: stats.dash.to_string(),
            burst_resistance: stats.burst_resistance.to_string(),
            weight: format_weight(stats.weight),
        }
    }
}

/// Table view of the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonTable {
    rows: Vec<TableRow>,
}

impl ComparisonTable {
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn ids(&self) -> BTreeSet<EntryId> {
        self.rows.iter().map(|r| r.entry_id).collect()
    }
}

/// One radar series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub entry_id: EntryId,
    pub label: String,
    /// Raw totals in axis order. Weight is excluded.
    pub data: [i64; 5],
    pub color: ChartColor,
}

/// Radar chart view of the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonChart {
    datasets: Vec<ChartDataset>,
}

impl ComparisonChart {
    pub const SUGGESTED_MIN: f64 = 0.0;
    pub const SUGGESTED_MAX: f64 = 100.0;

    /// Axis labels in series order.
    pub fn axis_labels() -> [&'static str; 5] {
        StatKind::ALL.map(StatKind::axis_label)
    }

    pub fn datasets(&self) -> &[ChartDataset] {
        &self.datasets
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    fn ids(&self) -> BTreeSet<EntryId> {
        self.datasets.iter().map(|d| d.entry_id).collect()
    }
}

/// Result of a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveOutcome {
    /// Whether the id was present.
    pub removed: bool,
    /// Whether the registry is empty afterwards; the comparison panel
    /// should be hidden when it is.
    pub now_empty: bool,
}

/// Ordered set of committed combinations and its two views.
///
/// # Examples
///
/// ```rust
/// use combostat::{AggregateStats, ComparisonRegistry, Palette};
///
/// let mut registry = ComparisonRegistry::new(Palette::default());
/// assert!(!registry.is_visible());
///
/// // Labels come from complete selections; see `Configurator::commit`.
/// # let label = {
/// #     let part = |n: &str| -> combostat::Part {
/// #         serde_json::from_value(serde_json::json!({"id": 1, "name": n, "type": "x"})).unwrap()
/// #     };
/// #     let sel = combostat::Selection { blade: Some(part("A")), ratchet: Some(part("1-60")), bit: Some(part("F (Flat)")) };
/// #     combostat::combination_label(&sel).unwrap()
/// # };
/// let id = registry.commit(label, AggregateStats::default());
/// assert!(registry.is_visible());
/// assert_eq!(registry.table().len(), 1);
/// assert_eq!(registry.chart().len(), 1);
///
/// let outcome = registry.remove(id);
/// assert!(outcome.removed && outcome.now_empty);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComparisonRegistry {
    entries: Vec<ComparisonEntry>,
    table: ComparisonTable,
    chart: ComparisonChart,
    palette: Palette,
}

impl ComparisonRegistry {
    pub fn new(palette: Palette) -> Self {
        Self {
            entries: Vec::new(),
            table: ComparisonTable::default(),
            chart: ComparisonChart::default(),
            palette,
        }
    }

    /// Append a snapshot to the registry, the table and the chart.
    ///
    /// The series colour is picked from the number of datasets already on
    /// the chart.
    pub fn commit(&mut self, label: CombinationLabel, stats: AggregateStats) -> EntryId {
        self.commit_dataset(label, stats).entry_id
    }

    /// Like [`commit`](Self::commit), returning the chart series created
    /// for the new entry.
    pub fn commit_dataset(&mut self, label: CombinationLabel, stats: AggregateStats) -> &ChartDataset {
        let entry = ComparisonEntry {
            id: EntryId::next(),
            label: label.into_string(),
            stats,
        };
        let color = self.palette.color_for(self.chart.len());

        self.table.rows.push(TableRow::from_entry(&entry));
        self.chart.datasets.push(ChartDataset {
            entry_id: entry.id,
            label: entry.label.clone(),
            data: stats.chart_series(),
            color,
        });
        debug!(entry = %entry.id, label = %entry.label, "comparison entry committed");

        self.entries.push(entry);
        &self.chart.datasets[self.chart.datasets.len() - 1]
    }

    /// Remove an entry from the registry and both views.
    ///
    /// Unknown ids are a no-op.
    pub fn remove(&mut self, id: EntryId) -> RemoveOutcome {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.table.rows.retain(|r| r.entry_id != id);
        self.chart.datasets.retain(|d| d.entry_id != id);
        let removed = self.entries.len() != before;
        if removed {
            debug!(entry = %id, "comparison entry removed");
        }
        RemoveOutcome {
            removed,
            now_empty: self.entries.is_empty(),
        }
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.table.rows.clear();
        self.chart.datasets.clear();
    }

    /// Entries in insertion order.
    pub fn list_entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn table(&self) -> &ComparisonTable {
        &self.table
    }

    pub fn chart(&self) -> &ComparisonChart {
        &self.chart
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the comparison panel should be shown.
    pub fn is_visible(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Whether the entries, the table and the chart name the same ids.
    pub fn is_mirrored(&self) -> bool {
        let entries: BTreeSet<EntryId> = self.entries.iter().map(|e| e.id).collect();
        entries == self.table.ids() && entries == self.chart.ids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::{Part, PartId};
    use crate::selection::{combination_label, Selection};

    fn label(blade: &str) -> CombinationLabel {
        let part = |name: &str| Part {
            id: PartId(1),
            name: name.into(),
            kind: "Test".into(),
            description: None,
            image: None,
            weight: None,
            stats: None,
        };
        let selection = Selection {
            blade: Some(part(blade)),
            ratchet: Some(part("3-60")),
            bit: Some(part("F (Flat)")),
        };
        combination_label(&selection).unwrap()
    }

    fn stats(attack: i64) -> AggregateStats {
        AggregateStats {
            attack,
            defense: 25,
            endurance: 35,
            dash: 45,
            burst_resistance: 35,
            weight: 51.5,
        }
    }

    #[test]
    fn test_commit_updates_all_views() {
        let mut registry = ComparisonRegistry::default();
        let id = registry.commit(label("Dran Sword"), stats(45));

        assert_eq!(registry.len(), 1);
        let row = &registry.table().rows()[0];
        assert_eq!(row.entry_id, id);
        assert_eq!(row.label, "DRAN SWORD 3-60F");
        assert_eq!(row.attack, "45");
        assert_eq!(row.weight, "51.5g");

        let dataset = &registry.chart().datasets()[0];
        assert_eq!(dataset.entry_id, id);
        assert_eq!(dataset.data, [45, 25, 35, 45, 35]);
        assert_eq!(dataset.color, crate::palette::NEON[0]);
        assert!(registry.is_mirrored());
    }

    #[test]
    fn test_commit_dataset_describes_new_entry() {
        let mut registry = ComparisonRegistry::default();
        registry.commit(label("First"), stats(1));
        let dataset = registry.commit_dataset(label("Second"), stats(2)).clone();

        let entry = registry.list_entries().last().unwrap();
        assert_eq!(dataset.entry_id, entry.id);
        assert_eq!(dataset.label, "SECOND 3-60F");
        assert_eq!(dataset.label, entry.label);
        assert_eq!(dataset.color, registry.palette().color_for(1));
        assert_eq!(dataset.data, [2, 25, 35, 45, 35]);
    }

    #[test]
    fn test_ids_unique_for_rapid_commits() {
        let mut registry = ComparisonRegistry::default();
        let ids: BTreeSet<_> = (0..100)
            .map(|i| registry.commit(label("Dran Sword"), stats(i)))
            .collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_ids_unique_across_registries() {
        let mut a = ComparisonRegistry::default();
        let mut b = ComparisonRegistry::default();
        let first = a.commit(label("A"), stats(1));
        let second = b.commit(label("B"), stats(2));
        assert_ne!(first, second);
    }

    #[test]
    fn test_insertion_order() {
        let mut registry = ComparisonRegistry::default();
        registry.commit(label("One"), stats(1));
        registry.commit(label("Two"), stats(2));
        registry.commit(label("Three"), stats(3));
        let labels: Vec<_> = registry
            .list_entries()
            .iter()
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(labels, vec!["ONE 3-60F", "TWO 3-60F", "THREE 3-60F"]);
        let chart_labels: Vec<_> = registry
            .chart()
            .datasets()
            .iter()
            .map(|d| d.label.as_str())
            .collect();
        assert_eq!(labels, chart_labels);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut registry = ComparisonRegistry::default();
        let keep = registry.commit(label("Keep"), stats(1));
        let dropped = registry.commit(label("Drop"), stats(2));

        let first = registry.remove(dropped);
        assert_eq!(
            first,
            RemoveOutcome {
                removed: true,
                now_empty: false
            }
        );
        let snapshot = registry.list_entries().to_vec();

        let second = registry.remove(dropped);
        assert!(!second.removed);
        assert_eq!(registry.list_entries(), snapshot.as_slice());
        assert_eq!(registry.get(keep).unwrap().label, "KEEP 3-60F");
        assert!(registry.is_mirrored());
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut registry = ComparisonRegistry::default();
        let outcome = registry.remove(EntryId(u64::MAX));
        assert!(!outcome.removed);
        assert!(outcome.now_empty);
    }

    #[test]
    fn test_remove_last_signals_empty() {
        let mut registry = ComparisonRegistry::default();
        let id = registry.commit(label("Solo"), stats(1));
        assert!(registry.is_visible());
        let outcome = registry.remove(id);
        assert!(outcome.now_empty);
        assert!(!registry.is_visible());
        assert!(registry.table().is_empty());
        assert!(registry.chart().is_empty());
    }

    #[test]
    fn test_seventh_entry_reuses_first_color() {
        let mut registry = ComparisonRegistry::default();
        for i in 0..7 {
            registry.commit(label("Dran Sword"), stats(i));
        }
        let datasets = registry.chart().datasets();
        assert_eq!(datasets[6].color, datasets[0].color);
        assert_ne!(datasets[1].color, datasets[0].color);
    }

    #[test]
    fn test_color_follows_count_after_removal() {
        let mut registry = ComparisonRegistry::default();
        let a = registry.commit(label("A"), stats(1));
        registry.commit(label("B"), stats(2));
        registry.remove(a);
        // One dataset left, so the next one takes palette index 1.
        let c = registry.commit(label("C"), stats(3));
        let dataset = registry
            .chart()
            .datasets()
            .iter()
            .find(|d| d.entry_id == c)
            .unwrap();
        assert_eq!(dataset.color, registry.palette().color_for(1));
    }

    #[test]
    fn test_clear() {
        let mut registry = ComparisonRegistry::default();
        registry.commit(label("A"), stats(1));
        registry.commit(label("B"), stats(2));
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.is_mirrored());
    }

    #[test]
    fn test_axis_labels() {
        assert_eq!(
            ComparisonChart::axis_labels(),
            ["Attack", "Defense", "Endurance", "Dash", "Burst Res."]
        );
    }

    #[test]
    fn test_entry_id_display() {
        assert_eq!(EntryId(42).to_string(), "row-42");
    }
}
