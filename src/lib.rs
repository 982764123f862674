//! # combostat - Deterministic Combination Configurator
//!
//! The headless core of a three-part combination builder:
//! - **Selection** of one blade, one ratchet and one bit from a static catalog
//! - **Aggregation** of the selected parts' stats into live totals
//! - **Comparison** of frozen snapshots in a table and a radar chart that
//!   always list the same entries
//!
//! ## Core Concepts
//!
//! ### Data Flow
//!
//! ```text
//! [Catalog] → select → [Selection] → aggregate → [AggregateStats]
//!                                                    │
//!                                  commit ───────────┴──→ [ComparisonRegistry]
//!                                                          ├─ ComparisonTable
//!                                                          └─ ComparisonChart
//! ```
//!
//! 1. **Catalog** is loaded once and validated as a whole
//! 2. **Selection** holds one optional part per category
//! 3. **AggregateStats** are recomputed from the selection after every change
//! 4. **ComparisonRegistry** keeps committed snapshots and both views in step
//!
//! ## Example
//!
//! ```rust
//! use combostat::*;
//!
//! let catalog = Catalog::from_json_str(r#"{
//!     "blades":   [{"id": 1, "name": "Dran Sword", "type": "Attack", "stats": {"attack": 40}}],
//!     "ratchets": [{"id": 1, "name": "3-60", "type": "Ratchet", "stats": {"attack": 5}}],
//!     "bits":     [{"id": 1, "name": "F (Flat)", "type": "Attack"}]
//! }"#).unwrap();
//!
//! let mut configurator = Configurator::with_defaults(catalog);
//! for category in Category::ALL {
//!     configurator.apply(Command::Select { category, id: Some(PartId(1)) }).unwrap();
//! }
//!
//! assert_eq!(configurator.totals().attack, 45);
//! configurator.apply(Command::Commit).unwrap();
//! assert_eq!(configurator.table().len(), configurator.chart().len());
//! ```
//!
//! ## Modules
//!
//! - [`category`] - Part categories and bar stats
//! - [`part`] - Part records and ids
//! - [`catalog`] - Catalog loading and lookup
//! - [`source`] - What a part contributes to totals
//! - [`aggregate`] - Totals of a selection
//! - [`selection`] - Selection state and combination labels
//! - [`display`] - Bar ceilings, formatting and previews
//! - [`palette`] - Chart series colours
//! - [`registry`] - Comparison entries and their views
//! - [`configurator`] - State manager and command interface
//! - [`config`] - Settings
//! - [`error`] - Error types

pub mod aggregate;
pub mod catalog;
pub mod category;
pub mod config;
pub mod configurator;
pub mod display;
pub mod error;
pub mod palette;
pub mod part;
pub mod registry;
pub mod selection;
pub mod source;

// Re-export main types for convenience
pub use aggregate::{aggregate, AggregateStats};
pub use catalog::{Catalog, PickerOption};
pub use category::{Category, StatKind};
pub use config::ConfiguratorConfig;
pub use configurator::{Command, Configurator, Event, ViewMode};
pub use error::ComboError;
pub use part::{Part, PartId, PartStats};
pub use source::StatSource;

// Re-export presentation types
pub use display::{bar_percent, format_weight, PartPreview, StatCeilings, StatLine, StatsDisplay};
pub use palette::{ChartColor, Palette};

// Re-export comparison types
pub use registry::{
    ChartDataset, ComparisonChart, ComparisonEntry, ComparisonRegistry, ComparisonTable, EntryId,
    RemoveOutcome, TableRow,
};
pub use selection::{
    combination_label, display_label, require_label, CombinationLabel, Selection, PLACEHOLDER_LABEL,
};
