//! Combination state manager.
//!
//! Provides the `Configurator` type, the main entry point of the crate.
//! It owns the catalog, the current selection, the derived totals and
//! the comparison registry, and exposes them through a small command
//! interface that any front end, including a headless test harness, can
//! drive.

use crate::aggregate::{aggregate, AggregateStats};
use crate::catalog::Catalog;
use crate::category::Category;
use crate::config::ConfiguratorConfig;
use crate::display::{PartPreview, StatCeilings, StatsDisplay};
use crate::error::ComboError;
use crate::palette::ChartColor;
use crate::part::{Part, PartId};
use crate::registry::{
    ChartDataset, ComparisonChart, ComparisonEntry, ComparisonRegistry, ComparisonTable, EntryId, RemoveOutcome,
};
use crate::selection::{combination_label, display_label, require_label, CombinationLabel, Selection};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Which comparison view is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Table,
    Chart,
}

/// A discrete user action.
///
/// # Examples
///
/// ```rust
/// use combostat::{Category, Command, PartId};
///
/// let command: Command =
///     serde_json::from_str(r#"{"command": "select", "category": "bit", "id": 3}"#).unwrap();
/// assert_eq!(command, Command::Select { category: Category::Bit, id: Some(PartId(3)) });
///
/// let clear: Command = serde_json::from_str(r#"{"command": "select", "category": "bit"}"#).unwrap();
/// assert_eq!(clear, Command::Select { category: Category::Bit, id: None });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Fill or clear a slot.
    Select {
        category: Category,
        #[serde(default)]
        id: Option<PartId>,
    },
    /// Snapshot the current combination into the comparison.
    Commit,
    /// Drop a comparison entry.
    Remove { entry_id: EntryId },
    /// Switch between the table and the chart.
    ToggleView { view: ViewMode },
    /// Drop every comparison entry.
    Clear,
}

/// What a command changed, for the front end to re-render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Selected {
        category: Category,
        part: Option<PartId>,
        preview: PartPreview,
        label: String,
        can_commit: bool,
        totals: AggregateStats,
        display: StatsDisplay,
    },
    Committed {
        entry_id: EntryId,
        label: String,
        color: ChartColor,
    },
    Removed {
        entry_id: EntryId,
        removed: bool,
        comparison_visible: bool,
    },
    ViewChanged {
        view: ViewMode,
    },
    Cleared,
}

/// The combination state manager.
///
/// Built from an already loaded catalog, so no command can run before the
/// catalog is available.
///
/// # Examples
///
/// ```rust
/// use combostat::{Catalog, Category, Configurator, PartId};
///
/// let catalog = Catalog::from_json_str(r#"{
///     "blades": [{"id": 1, "name": "Dran Sword", "type": "Attack",
///                 "stats": {"attack": 40, "defense": 20, "endurance": 10, "dash": 5, "burst_resistance": 15}}],
///     "ratchets": [{"id": 1, "name": "3-60", "type": "Ratchet",
///                 "stats": {"attack": 5, "defense": 5, "endurance": 20, "dash": 10, "burst_resistance": 0}}],
///     "bits": [{"id": 1, "name": "F (Flat)", "type": "Attack",
///                 "stats": {"attack": 0, "defense": 0, "endurance": 5, "dash": 30, "burst_resistance": 20}}]
/// }"#).unwrap();
///
/// let mut configurator = Configurator::with_defaults(catalog);
/// assert!(!configurator.can_commit());
///
/// configurator.select(Category::Blade, Some(PartId(1)));
/// configurator.select(Category::Ratchet, Some(PartId(1)));
/// configurator.select(Category::Bit, Some(PartId(1)));
///
/// assert_eq!(configurator.display_label(), "DRAN SWORD 3-60F");
/// assert_eq!(configurator.totals().attack, 45);
///
/// let id = configurator.commit().unwrap();
/// assert_eq!(configurator.list_entries()[0].id, id);
/// ```
#[derive(Debug, Clone)]
pub struct Configurator {
    catalog: Catalog,
    selection: Selection,
    totals: AggregateStats,
    ceilings: StatCeilings,
    registry: ComparisonRegistry,
    view: ViewMode,
}

impl Configurator {
    /// Create a configurator with validated settings.
    pub fn new(catalog: Catalog, config: ConfiguratorConfig) -> Result<Self, ComboError> {
        config.validate()?;
        info!(parts = catalog.len(), "configurator initialised");
        Ok(Self::build(catalog, config))
    }

    /// Create a configurator with stock ceilings and palette.
    pub fn with_defaults(catalog: Catalog) -> Self {
        Self::build(catalog, ConfiguratorConfig::default())
    }

    fn build(catalog: Catalog, config: ConfiguratorConfig) -> Self {
        Self {
            catalog,
            selection: Selection::default(),
            totals: AggregateStats::default(),
            ceilings: config.ceilings,
            registry: ComparisonRegistry::new(config.palette),
            view: ViewMode::default(),
        }
    }

    /// Fill a slot with the part of that id, or clear it.
    ///
    /// An id missing from the category's collection clears the slot.
    /// Returns the part now in the slot.
    pub fn select(&mut self, category: Category, id: Option<PartId>) -> Option<&Part> {
        let part = id.and_then(|id| {
            let found = self.catalog.find(category, id).cloned();
            if found.is_none() {
                warn!(%category, %id, "unknown part id, clearing slot");
            }
            found
        });
        debug!(%category, part = part.as_ref().map(|p| p.name.as_str()), "slot updated");
        self.selection.set(category, part);
        self.totals = aggregate(&self.selection);
        self.selection.get(category)
    }

    /// Select from a picker value; empty or non-numeric text clears the slot.
    pub fn select_raw(&mut self, category: Category, raw: &str) -> Option<&Part> {
        self.select(category, PartId::parse_selection(raw))
    }

    /// Snapshot the current combination.
    ///
    /// Fails with `IncompleteCombination` if any slot is empty.
    pub fn commit(&mut self) -> Result<EntryId, ComboError> {
        self.commit_dataset().map(|d| d.entry_id)
    }

    fn commit_dataset(&mut self) -> Result<&ChartDataset, ComboError> {
        let label = require_label(&self.selection)?;
        let entries = self.registry.len() + 1;
        let dataset = self.registry.commit_dataset(label, self.totals);
        info!(entry = %dataset.entry_id, entries, "combination added to comparison");
        Ok(dataset)
    }

    /// Drop a comparison entry. Unknown ids are a no-op.
    pub fn remove(&mut self, id: EntryId) -> RemoveOutcome {
        self.registry.remove(id)
    }

    /// Drop every comparison entry.
    pub fn clear_comparison(&mut self) {
        self.registry.clear();
    }

    /// Switch the active comparison view.
    pub fn toggle_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Run one command.
    pub fn apply(&mut self, command: Command) -> Result<Event, ComboError> {
        match command {
            Command::Select { category, id } => {
                let part = self.select(category, id).map(|p| p.id);
                Ok(Event::Selected {
                    category,
                    part,
                    preview: self.preview(category),
                    label: self.display_label(),
                    can_commit: self.can_commit(),
                    totals: self.totals,
                    display: self.stats_display(),
                })
            }
            Command::Commit => {
                let dataset = self.commit_dataset()?;
                Ok(Event::Committed {
                    entry_id: dataset.entry_id,
                    label: dataset.label.clone(),
                    color: dataset.color,
                })
            }
            Command::Remove { entry_id } => {
                let outcome = self.remove(entry_id);
                Ok(Event::Removed {
                    entry_id,
                    removed: outcome.removed,
                    comparison_visible: !outcome.now_empty,
                })
            }
            Command::ToggleView { view } => {
                self.toggle_view(view);
                Ok(Event::ViewChanged { view })
            }
            Command::Clear => {
                self.clear_comparison();
                Ok(Event::Cleared)
            }
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current totals of the selection.
    pub fn totals(&self) -> AggregateStats {
        self.totals
    }

    pub fn ceilings(&self) -> &StatCeilings {
        &self.ceilings
    }

    /// Totals rendered against the configured ceilings.
    pub fn stats_display(&self) -> StatsDisplay {
        StatsDisplay::render(&self.totals, &self.ceilings)
    }

    /// Preview for one slot.
    pub fn preview(&self, category: Category) -> PartPreview {
        PartPreview::for_slot(category, self.selection.get(category))
    }

    /// Combination label, if every slot is filled.
    pub fn label(&self) -> Option<CombinationLabel> {
        combination_label(&self.selection)
    }

    /// Combination label, or the placeholder heading.
    pub fn display_label(&self) -> String {
        display_label(&self.selection)
    }

    /// Whether the commit action should be enabled.
    pub fn can_commit(&self) -> bool {
        self.selection.is_complete()
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Whether the comparison panel should be shown.
    pub fn is_comparison_visible(&self) -> bool {
        self.registry.is_visible()
    }

    /// Entries in display order.
    pub fn list_entries(&self) -> &[ComparisonEntry] {
        self.registry.list_entries()
    }

    pub fn table(&self) -> &ComparisonTable {
        self.registry.table()
    }

    pub fn chart(&self) -> &ComparisonChart {
        self.registry.chart()
    }

    pub fn registry(&self) -> &ComparisonRegistry {
        &self.registry
    }
}
