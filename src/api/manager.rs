use indexmap::IndexMap;
use tracing::{debug, error, trace, warn};

use crate::core::{ChartConfig, LengthAdjustment, SeriesData, Theme, ThemeState};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{LifecycleEvent, LifecycleObserver};
use crate::render::{RendererBackend, RendererInstance, SurfaceProvider};

use super::{BindingHandle, ChartBinding, ManagerConfig, ResizeDebouncer};

/// Binding type stored by a manager over surface provider `P` and backend `B`.
pub type ManagerBinding<P, B> =
    ChartBinding<<P as SurfaceProvider>::Surface, <B as RendererBackend>::Instance>;

/// Single authority over renderer instance lifetime.
///
/// Owns the registry of chart bindings keyed by id, binds them to surfaces
/// looked up through `P`, constructs renderers through `B`, and reacts to
/// theme and viewport signals pushed by the host.
pub struct ChartLifecycleManager<P, B>
where
    P: SurfaceProvider,
    B: RendererBackend<Surface = P::Surface>,
{
    pub(super) bindings: IndexMap<String, ManagerBinding<P, B>>,
    pub(super) surfaces: P,
    pub(super) backend: B,
    pub(super) theme_state: ThemeState,
    pub(super) config: ManagerConfig,
    pub(super) resize: ResizeDebouncer,
    pub(super) observers: Vec<Box<dyn LifecycleObserver>>,
    pub(super) applied_theme: Theme,
    pub(super) observed_theme_state: Theme,
    pub(super) next_generation: u64,
    pub(super) render_passes: u64,
}

impl<P, B> ChartLifecycleManager<P, B>
where
    P: SurfaceProvider,
    B: RendererBackend<Surface = P::Surface>,
{
    #[must_use]
    pub fn new(surfaces: P, backend: B, theme_state: ThemeState) -> Self {
        let config = ManagerConfig::default();
        Self::build(surfaces, backend, theme_state, config)
    }

    pub fn with_config(
        surfaces: P,
        backend: B,
        theme_state: ThemeState,
        config: ManagerConfig,
    ) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self::build(surfaces, backend, theme_state, config))
    }

    fn build(surfaces: P, backend: B, theme_state: ThemeState, config: ManagerConfig) -> Self {
        let applied_theme = theme_state.current();
        Self {
            bindings: IndexMap::new(),
            surfaces,
            backend,
            theme_state,
            resize: ResizeDebouncer::new(config.resize_quiet_window()),
            config,
            observers: Vec::new(),
            applied_theme,
            observed_theme_state: applied_theme,
            next_generation: 0,
            render_passes: 0,
        }
    }

    /// Binds `config` to the surface named `id`, replacing any previous
    /// binding for that id.
    ///
    /// The previous renderer is released before the new one is constructed.
    /// Theme-dependent style fields are resolved against the applied theme,
    /// after picking up any change to the shared `ThemeState`. Failures are
    /// logged and returned; they never affect other bindings.
    pub fn create_or_replace(
        &mut self,
        id: &str,
        mut config: ChartConfig,
    ) -> ChartResult<BindingHandle> {
        let Some(surface) = self.surfaces.surface_by_id(id) else {
            warn!(id, "display surface missing; chart not created");
            self.emit(LifecycleEvent::SurfaceMissing { id: id.to_owned() });
            return Err(ChartError::DisplaySurfaceMissing { id: id.to_owned() });
        };
        self.sync_theme_state();

        let previous_generation = self.bindings.get_mut(id).map(|previous| {
            previous.release();
            previous.generation()
        });

        let theme = self.applied_theme;
        config.style.apply_theme(theme);
        self.surfaces
            .label_surface(&surface, &self.config.surface_role, &config.aria_label);

        let constructed = config
            .validate()
            .and_then(|()| self.backend.construct(&surface, &config));
        let instance = match constructed {
            Ok(instance) => instance,
            Err(err) => {
                error!(id, error = %err, "renderer construction failed; chart left unregistered");
                // The released predecessor must not linger as a dead entry.
                self.bindings.shift_remove(id);
                self.emit(LifecycleEvent::ConstructionFailed { id: id.to_owned() });
                return Err(ChartError::RendererConstructionFailed {
                    id: id.to_owned(),
                    reason: err.to_string(),
                });
            }
        };

        self.next_generation += 1;
        let generation = self.next_generation;
        let binding = ChartBinding::new(id.to_owned(), surface, config, instance, generation);
        let handle = binding.handle();
        self.bindings.insert(id.to_owned(), binding);

        match previous_generation {
            Some(previous_generation) => {
                debug!(id, previous_generation, generation, ?theme, "chart replaced");
                self.emit(LifecycleEvent::BindingReplaced {
                    id: id.to_owned(),
                    previous_generation,
                    generation,
                });
            }
            None => {
                debug!(id, generation, ?theme, "chart created");
                self.emit(LifecycleEvent::BindingCreated {
                    id: id.to_owned(),
                    generation,
                });
            }
        }
        Ok(handle)
    }

    /// Replaces the primary series values of `id` in place and requests a
    /// re-render without reconstructing the renderer.
    ///
    /// Returns `false` for unregistered ids and for non-finite input. Values
    /// longer than the label set are truncated; shorter ones are padded
    /// with `0.0`.
    pub fn update_series(&mut self, id: &str, values: Vec<f64>) -> bool {
        self.sync_theme_state();
        let Some(binding) = self.bindings.get_mut(id) else {
            debug!(id, "series update for unregistered chart ignored");
            return false;
        };

        let adjustment = match binding.config_mut().series.replace_values(values) {
            Ok(adjustment) => adjustment,
            Err(err) => {
                warn!(id, error = %err, "rejecting series update");
                return false;
            }
        };
        if adjustment != LengthAdjustment::Exact {
            warn!(id, ?adjustment, "series length did not match labels; values adjusted");
        }

        push_series(binding);
        trace!(id, "series updated in place");
        self.emit(LifecycleEvent::SeriesUpdated {
            id: id.to_owned(),
            adjustment,
        });
        true
    }

    /// Replaces values and labels of `id` together. Returns `false` for
    /// unregistered ids.
    pub fn replace_series(&mut self, id: &str, series: SeriesData) -> bool {
        self.sync_theme_state();
        let Some(binding) = self.bindings.get_mut(id) else {
            debug!(id, "series replacement for unregistered chart ignored");
            return false;
        };
        binding.config_mut().series = series;
        push_series(binding);
        self.emit(LifecycleEvent::SeriesUpdated {
            id: id.to_owned(),
            adjustment: LengthAdjustment::Exact,
        });
        true
    }

    /// Releases and unregisters one binding. Returns `false` when `id` is
    /// not registered.
    pub fn destroy(&mut self, id: &str) -> bool {
        let Some(mut binding) = self.bindings.shift_remove(id) else {
            return false;
        };
        binding.release();
        let generation = binding.generation();
        drop(binding);
        debug!(id, generation, "chart destroyed");
        self.emit(LifecycleEvent::BindingReleased {
            id: id.to_owned(),
            generation,
        });
        true
    }

    /// Releases every renderer and clears the registry. Safe on an empty
    /// registry.
    pub fn destroy_all(&mut self) {
        if self.bindings.is_empty() {
            return;
        }
        let released: Vec<(String, u64)> = self
            .bindings
            .drain(..)
            .map(|(id, mut binding)| {
                binding.release();
                (id, binding.generation())
            })
            .collect();
        debug!(count = released.len(), "all charts destroyed");
        for (id, generation) in released {
            self.emit(LifecycleEvent::BindingReleased { id, generation });
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.bindings.contains_key(id)
    }

    #[must_use]
    pub fn binding(&self, id: &str) -> Option<&ManagerBinding<P, B>> {
        self.bindings.get(id)
    }

    /// Registered ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Returns `true` when `handle` still names the live binding for its id.
    #[must_use]
    pub fn is_current(&self, handle: &BindingHandle) -> bool {
        self.bindings
            .get(&handle.id)
            .is_some_and(|binding| binding.generation() == handle.generation)
    }

    #[must_use]
    pub fn theme_state(&self) -> &ThemeState {
        &self.theme_state
    }

    #[must_use]
    pub fn applied_theme(&self) -> Theme {
        self.applied_theme
    }

    #[must_use]
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    #[must_use]
    pub fn surfaces(&self) -> &P {
        &self.surfaces
    }

    pub fn surfaces_mut(&mut self) -> &mut P {
        &mut self.surfaces
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

fn push_series<S, I: RendererInstance>(binding: &mut ChartBinding<S, I>) {
    let (id, config, instance) = binding.parts_mut();
    let Some(instance) = instance else {
        return;
    };
    if let Err(err) = instance
        .set_data(&config.series)
        .and_then(|()| instance.request_render())
    {
        warn!(id, error = %err, "renderer rejected series update");
    }
}
