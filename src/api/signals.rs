use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::Theme;
use crate::render::{RendererBackend, SurfaceProvider};

use super::ChartLifecycleManager;

/// Push-based host signal. Hosts translate their toolkit's observers (DOM
/// mutation observers, media queries, window resize events, data callbacks)
/// into these and hand them to `dispatch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExternalSignal {
    ThemeChanged(Theme),
    ViewportResized,
    SeriesArrived { id: String, values: Vec<f64> },
}

impl<P, B> ChartLifecycleManager<P, B>
where
    P: SurfaceProvider,
    B: RendererBackend<Surface = P::Surface>,
{
    /// Routes a host signal observed now. See `dispatch_at`.
    pub fn dispatch(&mut self, signal: ExternalSignal) -> bool {
        self.dispatch_at(signal, Instant::now())
    }

    /// Routes a host signal to its lifecycle operation.
    ///
    /// Returns `false` only when a series arrives for an unregistered id or
    /// is rejected.
    pub fn dispatch_at(&mut self, signal: ExternalSignal, now: Instant) -> bool {
        match signal {
            ExternalSignal::ThemeChanged(theme) => {
                self.apply_theme_change(theme);
                true
            }
            ExternalSignal::ViewportResized => {
                self.handle_viewport_resize_at(now);
                true
            }
            ExternalSignal::SeriesArrived { id, values } => self.update_series(&id, values),
        }
    }
}
