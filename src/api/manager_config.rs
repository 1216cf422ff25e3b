use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{AnimationStyle, FontStyle};
use crate::error::{ChartError, ChartResult};

/// Font and animation defaults applied by
/// `ChartLifecycleManager::config_builder`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderDefaults {
    #[serde(default)]
    pub font: FontStyle,
    #[serde(default)]
    pub animation: AnimationStyle,
}

/// Public lifecycle-manager configuration.
///
/// Serializable so hosts can ship it alongside their page/dashboard setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerConfig {
    #[serde(default = "default_resize_quiet_window_ms")]
    pub resize_quiet_window_ms: u64,
    #[serde(default = "default_surface_role")]
    pub surface_role: String,
    #[serde(default)]
    pub render_defaults: RenderDefaults,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            resize_quiet_window_ms: default_resize_quiet_window_ms(),
            surface_role: default_surface_role(),
            render_defaults: RenderDefaults::default(),
        }
    }
}

impl ManagerConfig {
    /// Sets the resize debounce quiet window.
    #[must_use]
    pub fn with_resize_quiet_window_ms(mut self, window_ms: u64) -> Self {
        self.resize_quiet_window_ms = window_ms;
        self
    }

    #[must_use]
    pub fn with_render_defaults(mut self, defaults: RenderDefaults) -> Self {
        self.render_defaults = defaults;
        self
    }

    #[must_use]
    pub fn resize_quiet_window(&self) -> Duration {
        Duration::from_millis(self.resize_quiet_window_ms)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.surface_role.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "surface role must not be empty".to_owned(),
            ));
        }
        let font_size = self.render_defaults.font.size_px;
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(ChartError::InvalidData(
                "default font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse manager config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize manager config: {e}"))
        })
    }
}

fn default_resize_quiet_window_ms() -> u64 {
    250
}

fn default_surface_role() -> String {
    "img".to_owned()
}
