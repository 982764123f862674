//! Static part catalog.
//!
//! The catalog is loaded once, validated as a whole, and never mutated.
//! A document missing a collection, holding a malformed part, or
//! repeating an id inside one collection is rejected outright; there is
//! no partially loaded catalog.

use crate::category::Category;
use crate::error::ComboError;
use crate::part::{Part, PartId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// The three part collections.
///
/// # Examples
///
/// ```rust
/// use combostat::{Catalog, Category, PartId};
///
/// let catalog = Catalog::from_json_str(r#"{
///     "blades":   [{"id": 1, "name": "Dran Sword", "type": "Attack"}],
///     "ratchets": [{"id": 1, "name": "3-60", "type": "Ratchet"}],
///     "bits":     [{"id": 1, "name": "F (Flat)", "type": "Attack"}]
/// }"#).unwrap();
///
/// let blade = catalog.find(Category::Blade, PartId(1)).unwrap();
/// assert_eq!(blade.name, "Dran Sword");
/// assert!(catalog.find(Category::Bit, PartId(9)).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    blades: Vec<Part>,
    ratchets: Vec<Part>,
    bits: Vec<Part>,
}

/// Catalog document as written, before id validation.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    blades: Vec<Part>,
    ratchets: Vec<Part>,
    bits: Vec<Part>,
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = ComboError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        Catalog::new(raw.blades, raw.ratchets, raw.bits)
    }
}

/// One entry offered by a part picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerOption {
    pub id: PartId,
    pub name: String,
}

impl Catalog {
    /// Build a catalog from already parsed collections.
    ///
    /// Fails with `DuplicatePartId` if an id repeats within a collection.
    pub fn new(blades: Vec<Part>, ratchets: Vec<Part>, bits: Vec<Part>) -> Result<Self, ComboError> {
        let catalog = Self {
            blades,
            ratchets,
            bits,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a catalog document.
    pub fn from_json_str(json: &str) -> Result<Self, ComboError> {
        let raw: RawCatalog =
            serde_json::from_str(json).map_err(|e| ComboError::CatalogParse(e.to_string()))?;
        Catalog::try_from(raw)
    }

    /// Parse and validate a catalog document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ComboError> {
        let raw: RawCatalog =
            serde_json::from_reader(reader).map_err(|e| ComboError::CatalogParse(e.to_string()))?;
        Catalog::try_from(raw)
    }

    /// Read, parse and validate a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ComboError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading catalog");
        let text = std::fs::read_to_string(path).map_err(|e| ComboError::CatalogIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let catalog = Self::from_json_str(&text)?;
        info!(
            blades = catalog.blades.len(),
            ratchets = catalog.ratchets.len(),
            bits = catalog.bits.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), ComboError> {
        for category in Category::ALL {
            let mut seen = HashSet::new();
            for part in self.parts(category) {
                if !seen.insert(part.id) {
                    return Err(ComboError::DuplicatePartId {
                        category,
                        id: part.id,
                    });
                }
            }
        }
        Ok(())
    }

    /// All parts of a category, in catalog order.
    pub fn parts(&self, category: Category) -> &[Part] {
        match category {
            Category::Blade => &self.blades,
            Category::Ratchet => &self.ratchets,
            Category::Bit => &self.bits,
        }
    }

    /// Look up a part by id within its category.
    pub fn find(&self, category: Category, id: PartId) -> Option<&Part> {
        self.parts(category).iter().find(|p| p.id == id)
    }

    /// Picker entries for a category, in catalog order.
    pub fn options(&self, category: Category) -> Vec<PickerOption> {
        self.parts(category)
            .iter()
            .map(|p| PickerOption {
                id: p.id,
                name: p.name.clone(),
            })
            .collect()
    }

    /// Total number of parts across all collections.
    pub fn len(&self) -> usize {
        self.blades.len() + self.ratchets.len() + self.bits.len()
    }

    /// Whether every collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
