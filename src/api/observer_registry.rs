use crate::error::{ChartError, ChartResult};
use crate::extensions::{LifecycleEvent, LifecycleObserver};
use crate::render::{RendererBackend, SurfaceProvider};

use super::ChartLifecycleManager;

impl<P, B> ChartLifecycleManager<P, B>
where
    P: SurfaceProvider,
    B: RendererBackend<Surface = P::Surface>,
{
    /// Adds an observer to the lifecycle event stream.
    ///
    /// Observer ids are non-empty and unique per manager; events reach
    /// observers in registration order.
    pub fn register_observer(&mut self, observer: Box<dyn LifecycleObserver>) -> ChartResult<()> {
        let id = observer.id();
        if id.is_empty() {
            return Err(ChartError::InvalidData(
                "lifecycle observer needs a non-empty id".to_owned(),
            ));
        }
        if self.has_observer(id) {
            return Err(ChartError::InvalidData(format!(
                "lifecycle observer `{id}` is already listening"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Detaches the observer named `observer_id`. Returns `false` when no
    /// such observer was listening.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        let before = self.observers.len();
        self.observers.retain(|observer| observer.id() != observer_id);
        self.observers.len() != before
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }

    pub(super) fn emit(&mut self, event: LifecycleEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}
