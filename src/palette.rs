//! Chart series colours.
//!
//! Series are coloured round robin from a fixed, ordered palette. The
//! colour index is the number of datasets already on the chart, modulo
//! the palette size, so the seventh series of a six colour palette
//! reuses the first colour.

use crate::error::ComboError;
use serde::{Deserialize, Serialize};

/// Opacity of a series' filled area.
pub const FILL_ALPHA: f32 = 0.2;

/// An opaque RGB colour used for a series outline and, translucent, for
/// its fill.
///
/// # Examples
///
/// ```rust
/// use combostat::ChartColor;
///
/// let green = ChartColor::new(0, 255, 186);
/// assert_eq!(green.border_css(), "rgba(0, 255, 186, 1)");
/// assert_eq!(green.background_css(), "rgba(0, 255, 186, 0.2)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ChartColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Outline and point colour.
    pub fn border_css(&self) -> String {
        format!("rgba({}, {}, {}, 1)", self.r, self.g, self.b)
    }

    /// Fill colour.
    pub fn background_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, FILL_ALPHA)
    }
}

/// The neon series colours: green, blue, magenta, yellow, purple, orange.
pub const NEON: [ChartColor; 6] = [
    ChartColor::new(0, 255, 186),
    ChartColor::new(0, 210, 255),
    ChartColor::new(255, 0, 90),
    ChartColor::new(255, 204, 0),
    ChartColor::new(157, 0, 255),
    ChartColor::new(255, 100, 0),
];

/// Ordered list of series colours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<ChartColor>);

impl Palette {
    /// Build a palette. An empty list is rejected.
    pub fn new(colors: Vec<ChartColor>) -> Result<Self, ComboError> {
        let palette = Self(colors);
        palette.validate()?;
        Ok(palette)
    }

    pub fn validate(&self) -> Result<(), ComboError> {
        if self.0.is_empty() {
            return Err(ComboError::ConfigParse(
                "chart palette must contain at least one colour".into(),
            ));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Colour for the next series of a chart that already holds
    /// `dataset_count` series.
    ///
    /// ```rust
    /// use combostat::Palette;
    ///
    /// let palette = Palette::default();
    /// assert_eq!(palette.color_for(6), palette.color_for(0));
    /// assert_ne!(palette.color_for(1), palette.color_for(0));
    /// ```
    pub fn color_for(&self, dataset_count: usize) -> ChartColor {
        dataset_count
            .checked_rem(self.0.len())
            .and_then(|i| self.0.get(i))
            .copied()
            .unwrap_or(NEON[0])
    }

    pub fn colors(&self) -> &[ChartColor] {
        &self.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(NEON.to_vec())
    }
}
