use serde::{Deserialize, Serialize};

use crate::core::{LengthAdjustment, Theme};

/// Lifecycle events streamed to observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    BindingCreated { id: String, generation: u64 },
    BindingReplaced { id: String, previous_generation: u64, generation: u64 },
    BindingReleased { id: String, generation: u64 },
    SeriesUpdated { id: String, adjustment: LengthAdjustment },
    ThemeApplied { theme: Theme, bindings: usize },
    RenderPass { rendered: usize, failed: usize },
    SurfaceMissing { id: String },
    ConstructionFailed { id: String },
}

/// Hook interface for host-side bookkeeping (analytics, test recorders, status
/// widgets). Observers see events after the manager state has changed and
/// cannot mutate bindings.
pub trait LifecycleObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &LifecycleEvent);
}
