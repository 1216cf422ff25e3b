pub mod chart_config;
pub mod series;
pub mod style;
pub mod theme;
pub mod tooltip;

pub use chart_config::{AxisTitles, ChartConfig, ChartKind};
pub use series::{LengthAdjustment, SeriesData};
pub use style::{AnimationStyle, ChartStyle, Easing, FontStyle, PaletteColors, ThemeColors};
pub use theme::{Theme, ThemeState};
pub use tooltip::{TooltipFormat, share_percent};
