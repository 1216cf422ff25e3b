use crate::core::{
    AnimationStyle, AxisTitles, ChartConfig, ChartKind, ChartStyle, FontStyle, SeriesData, Theme,
    TooltipFormat,
};
use crate::error::ChartResult;
use crate::render::{Color, RendererBackend, SurfaceProvider};

use super::{ChartLifecycleManager, Palette, RenderDefaults};

/// Single parameterized entry point for chart configurations: one
/// `(kind, palette, series)` tuple plus optional presentation overrides.
#[derive(Debug, Clone)]
pub struct ChartConfigBuilder {
    kind: ChartKind,
    palette: Palette,
    series: SeriesData,
    title: Option<String>,
    subtitle: Option<String>,
    axis_titles: AxisTitles,
    tooltip: TooltipFormat,
    aria_label: Option<String>,
    font: FontStyle,
    animation: AnimationStyle,
    border: Option<(Color, f64)>,
}

impl ChartConfigBuilder {
    #[must_use]
    pub fn new(kind: ChartKind, palette: Palette, series: SeriesData) -> Self {
        Self {
            kind,
            palette,
            series,
            title: None,
            subtitle: None,
            axis_titles: AxisTitles::default(),
            tooltip: TooltipFormat::default(),
            aria_label: None,
            font: FontStyle::default(),
            animation: AnimationStyle::default(),
            border: None,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn axis_titles(mut self, x: Option<&str>, y: Option<&str>) -> Self {
        self.axis_titles = AxisTitles {
            x: x.map(str::to_owned),
            y: y.map(str::to_owned),
        };
        self
    }

    #[must_use]
    pub fn tooltip(mut self, tooltip: TooltipFormat) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn animation(mut self, animation: AnimationStyle) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn border(mut self, color: Color, width: f64) -> Self {
        self.border = Some((color, width));
        self
    }

    #[must_use]
    pub fn with_render_defaults(mut self, defaults: &RenderDefaults) -> Self {
        self.font = defaults.font.clone();
        self.animation = defaults.animation;
        self
    }

    /// Resolves the configuration against `theme` and validates it.
    ///
    /// The lifecycle manager re-resolves theme fields against the live
    /// `ThemeState` on creation, so `theme` only matters for configs that are
    /// inspected before binding.
    pub fn build(self, theme: Theme) -> ChartResult<ChartConfig> {
        let mut style = ChartStyle::new(theme, self.palette.into_colors());
        style.font = self.font;
        style.animation = self.animation;
        if let Some((color, width)) = self.border {
            style.border_color = color;
            style.border_width = width;
        }

        let aria_label = self
            .aria_label
            .unwrap_or_else(|| format!("{} chart", self.kind.name()));

        let config = ChartConfig {
            kind: self.kind,
            series: self.series,
            style,
            title: self.title,
            subtitle: self.subtitle,
            axis_titles: self.axis_titles,
            tooltip: self.tooltip,
            aria_label,
        };
        config.validate()?;
        Ok(config)
    }
}

impl<P, B> ChartLifecycleManager<P, B>
where
    P: SurfaceProvider,
    B: RendererBackend<Surface = P::Surface>,
{
    /// Starts a builder preloaded with the manager's configured render
    /// defaults (font and animation).
    #[must_use]
    pub fn config_builder(
        &self,
        kind: ChartKind,
        palette: Palette,
        series: SeriesData,
    ) -> ChartConfigBuilder {
        ChartConfigBuilder::new(kind, palette, series)
            .with_render_defaults(&self.config.render_defaults)
    }
}
