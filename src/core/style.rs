use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Theme;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Palette storage; dashboards rarely need more than eight slice colors.
pub type PaletteColors = SmallVec<[Color; 8]>;

/// Theme-dependent colors. These are the only style fields a theme change
/// may touch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub text: Color,
    pub muted_text: Color,
    pub grid: Color,
    pub tooltip_background: Color,
    pub legend_text: Color,
}

impl ThemeColors {
    pub const LIGHT: Self = Self {
        text: Color::rgb8(0x2d, 0x37, 0x48),
        muted_text: Color::rgb8(0x71, 0x80, 0x96),
        grid: Color::rgba8(0, 0, 0, 0.05),
        tooltip_background: Color::rgba8(0, 0, 0, 0.8),
        legend_text: Color::rgb8(0x2d, 0x37, 0x48),
    };

    pub const DARK: Self = Self {
        text: Color::rgb8(0xf1, 0xf5, 0xf9),
        muted_text: Color::rgb8(0x94, 0xa3, 0xb8),
        grid: Color::rgba8(255, 255, 255, 0.1),
        tooltip_background: Color::rgba8(15, 23, 42, 0.98),
        legend_text: Color::rgb8(0xe2, 0xe8, 0xf0),
    };

    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }

    fn validate(self) -> ChartResult<()> {
        self.text.validate()?;
        self.muted_text.validate()?;
        self.grid.validate()?;
        self.tooltip_background.validate()?;
        self.legend_text.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontStyle {
    pub family: String,
    pub size_px: f64,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            family: "'Inter', 'Segoe UI', Tahoma, sans-serif".to_owned(),
            size_px: 12.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    EaseOutCubic,
    #[default]
    EaseOutQuart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationStyle {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Default for AnimationStyle {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            easing: Easing::EaseOutQuart,
        }
    }
}

/// Fully resolved styling handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub theme: Theme,
    pub colors: ThemeColors,
    pub palette: PaletteColors,
    pub border_color: Color,
    pub border_width: f64,
    pub font: FontStyle,
    pub animation: AnimationStyle,
}

impl ChartStyle {
    #[must_use]
    pub fn new(theme: Theme, palette: PaletteColors) -> Self {
        Self {
            theme,
            colors: ThemeColors::for_theme(theme),
            palette,
            border_color: Color::rgb(1.0, 1.0, 1.0),
            border_width: 3.0,
            font: FontStyle::default(),
            animation: AnimationStyle::default(),
        }
    }

    /// Recomputes the theme-dependent fields and leaves everything else as is.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.colors = ThemeColors::for_theme(theme);
    }

    /// Returns the palette color for a data index, cycling through the palette.
    #[must_use]
    pub fn color_for_index(&self, index: usize) -> Option<Color> {
        if self.palette.is_empty() {
            return None;
        }
        Some(self.palette[index % self.palette.len()])
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.palette.is_empty() {
            return Err(ChartError::InvalidData(
                "chart palette must not be empty".to_owned(),
            ));
        }
        for color in &self.palette {
            color.validate()?;
        }
        self.colors.validate()?;
        self.border_color.validate()?;
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.font.size_px.is_finite() || self.font.size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
