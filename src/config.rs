//! Configurator settings.
//!
//! Every field has a default, so an empty document (or no file at all)
//! yields the stock bar ceilings and the neon chart palette.

use crate::display::StatCeilings;
use crate::error::ComboError;
use crate::palette::Palette;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for a [`Configurator`](crate::Configurator).
///
/// # Examples
///
/// ```rust
/// use combostat::ConfiguratorConfig;
///
/// let config = ConfiguratorConfig::from_json_str(r#"{"ceilings": {"dash": 80}}"#).unwrap();
/// assert_eq!(config.ceilings.dash, 80.0);
/// assert_eq!(config.ceilings.attack, 130.0);
/// assert_eq!(config.palette.len(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfiguratorConfig {
    /// Bar ceilings used by the stats display.
    pub ceilings: StatCeilings,
    /// Chart series colours, assigned round robin.
    pub palette: Palette,
    /// Catalog to load when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl ConfiguratorConfig {
    /// Parse and validate a configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, ComboError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ComboError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ComboError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ComboError::ConfigParse(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&text)
    }

    /// Check ceilings and palette.
    pub fn validate(&self) -> Result<(), ComboError> {
        self.ceilings.validate()?;
        self.palette.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::StatKind;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ConfiguratorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ConfiguratorConfig::default());
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_rejects_negative_ceiling() {
        let result = ConfiguratorConfig::from_json_str(r#"{"ceilings": {"attack": -5}}"#);
        assert_eq!(
            result,
            Err(ComboError::InvalidCeiling {
                stat: StatKind::Attack,
                value: -5.0,
            })
        );
    }

    #[test]
    fn test_rejects_empty_palette() {
        let result = ConfiguratorConfig::from_json_str(r#"{"palette": []}"#);
        assert!(matches!(result, Err(ComboError::ConfigParse(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = ConfiguratorConfig::from_json_str("{ceilings");
        assert!(matches!(result, Err(ComboError::ConfigParse(_))));
    }

    #[test]
    fn test_catalog_path() {
        let config =
            ConfiguratorConfig::from_json_str(r#"{"catalog_path": "assets/parts.json"}"#).unwrap();
        assert_eq!(
            config.catalog_path.as_deref(),
            Some(Path::new("assets/parts.json"))
        );
    }
}
