use serde::{Deserialize, Serialize};

use crate::core::PaletteColors;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Ordered slice/bar colors applied by index, cycling when a series is
/// longer than the palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: PaletteColors,
}

impl Palette {
    pub fn new(colors: impl IntoIterator<Item = Color>) -> ChartResult<Self> {
        let colors: PaletteColors = colors.into_iter().collect();
        if colors.is_empty() {
            return Err(ChartError::InvalidData(
                "palette must contain at least one color".to_owned(),
            ));
        }
        for color in &colors {
            color.validate()?;
        }
        Ok(Self { colors })
    }

    pub fn from_hex<'a>(hex: impl IntoIterator<Item = &'a str>) -> ChartResult<Self> {
        let colors = hex
            .into_iter()
            .map(Color::from_hex)
            .collect::<ChartResult<Vec<_>>>()?;
        Self::new(colors)
    }

    /// Dashboard palette: danger/success first so two-slice status charts
    /// read naturally, then categorical accents.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            colors: PaletteColors::from_slice(&[
                Color::rgb8(0xff, 0x4d, 0x4d),
                Color::rgb8(0x4c, 0xaf, 0x50),
                Color::rgb8(0x36, 0xa2, 0xeb),
                Color::rgb8(0xff, 0xcd, 0x56),
                Color::rgb8(0xff, 0x98, 0x00),
                Color::rgb8(0x9f, 0x7a, 0xea),
            ]),
        }
    }

    /// Insights palette used by the dark-mode aware model charts.
    #[must_use]
    pub fn premium() -> Self {
        Self {
            colors: PaletteColors::from_slice(&[
                Color::rgb8(0x10, 0xb9, 0x81),
                Color::rgb8(0xef, 0x44, 0x44),
                Color::rgb8(0x63, 0x66, 0xf1),
                Color::rgb8(0x8b, 0x5c, 0xf6),
                Color::rgb8(0xec, 0x48, 0x99),
                Color::rgb8(0xf5, 0x9e, 0x0b),
                Color::rgb8(0x3b, 0x82, 0xf6),
            ]),
        }
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn into_colors(self) -> PaletteColors {
        self.colors
    }
}
