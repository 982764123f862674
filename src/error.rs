//! Error types for catalog loading and combination management.
//!
//! All errors the configurator can report are represented by the
//! `ComboError` enum.

use crate::category::{Category, StatKind};
use crate::part::PartId;
use thiserror::Error;

/// Format a list of empty slots as a readable string.
fn format_missing(missing: &[Category]) -> String {
    if missing.is_empty() {
        return String::from("(none)");
    }
    missing
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that can occur while loading a catalog or driving a configurator.
///
/// # Examples
///
/// ```rust
/// use combostat::{Category, ComboError};
///
/// let err = ComboError::IncompleteCombination {
///     missing: vec![Category::Bit],
/// };
/// assert_eq!(err.to_string(), "Incomplete combination, missing: bit");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ComboError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {message}")]
    CatalogIo { path: String, message: String },

    /// The catalog document is not valid JSON or does not match the
    /// part schema (missing collection, malformed part).
    #[error("Malformed catalog: {0}")]
    CatalogParse(String),

    /// Two parts in the same collection share an id.
    #[error("Duplicate {category} id in catalog: {id}")]
    DuplicatePartId { category: Category, id: PartId },

    /// A commit was attempted while one or more slots were empty.
    #[error("Incomplete combination, missing: {}", format_missing(.missing))]
    IncompleteCombination { missing: Vec<Category> },

    /// A bar ceiling was zero, negative or not finite.
    #[error("Invalid ceiling for {stat}: {value}")]
    InvalidCeiling { stat: StatKind, value: f64 },

    /// The configuration file could not be read or parsed.
    #[error("Invalid configuration: {0}")]
    ConfigParse(String),
}
