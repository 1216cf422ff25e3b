use serde::{Deserialize, Serialize};

use crate::core::ChartConfig;
use crate::render::RendererInstance;

/// Value handle returned by `create_or_replace`.
///
/// `generation` is unique per constructed renderer, so a handle kept across a
/// replace no longer matches the current binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BindingHandle {
    pub id: String,
    pub generation: u64,
}

/// Association between a chart id, its display surface and the live renderer
/// instance. The binding exclusively owns the instance and releases it at most
/// once, at the latest when dropped.
pub struct ChartBinding<S, I: RendererInstance> {
    id: String,
    surface: S,
    config: ChartConfig,
    instance: Option<I>,
    generation: u64,
}

impl<S, I: RendererInstance> ChartBinding<S, I> {
    pub(crate) fn new(
        id: String,
        surface: S,
        config: ChartConfig,
        instance: I,
        generation: u64,
    ) -> Self {
        Self {
            id,
            surface,
            config,
            instance: Some(instance),
            generation,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn instance(&self) -> Option<&I> {
        self.instance.as_ref()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.instance.is_some()
    }

    #[must_use]
    pub fn handle(&self) -> BindingHandle {
        BindingHandle {
            id: self.id.clone(),
            generation: self.generation,
        }
    }

    pub(crate) fn config_mut(&mut self) -> &mut ChartConfig {
        &mut self.config
    }

    /// Splits the binding into its config and live instance so callers can
    /// push config state into the renderer without cloning.
    pub(crate) fn parts_mut(&mut self) -> (&str, &ChartConfig, Option<&mut I>) {
        (&self.id, &self.config, self.instance.as_mut())
    }

    /// Releases the renderer. Returns `false` when it was already released.
    pub fn release(&mut self) -> bool {
        match self.instance.take() {
            Some(mut instance) => {
                instance.release();
                true
            }
            None => false,
        }
    }
}

impl<S, I: RendererInstance> Drop for ChartBinding<S, I> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<S, I: RendererInstance> std::fmt::Debug for ChartBinding<S, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartBinding")
            .field("id", &self.id)
            .field("generation", &self.generation)
            .field("live", &self.is_live())
            .field("kind", &self.config.kind)
            .finish_non_exhaustive()
    }
}
