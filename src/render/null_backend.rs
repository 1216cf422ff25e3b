use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::core::{ChartConfig, ChartStyle, SeriesData};
use crate::error::{ChartError, ChartResult};
use crate::render::{RendererBackend, RendererInstance, SurfaceProvider};

/// Surface handle produced by `NullSurfaceProvider`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullSurface {
    pub id: String,
}

/// In-memory surface registry used by tests and headless hosts.
#[derive(Debug, Default)]
pub struct NullSurfaceProvider {
    surfaces: BTreeSet<String>,
    labels: IndexMap<String, (String, String)>,
}

impl NullSurfaceProvider {
    #[must_use]
    pub fn with_surfaces<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            surfaces: ids.into_iter().map(Into::into).collect(),
            labels: IndexMap::new(),
        }
    }

    pub fn add_surface(&mut self, id: impl Into<String>) {
        self.surfaces.insert(id.into());
    }

    pub fn remove_surface(&mut self, id: &str) -> bool {
        self.surfaces.remove(id)
    }

    /// Returns the `(role, label)` pair last attached to a surface.
    #[must_use]
    pub fn surface_label(&self, id: &str) -> Option<(&str, &str)> {
        self.labels
            .get(id)
            .map(|(role, label)| (role.as_str(), label.as_str()))
    }
}

impl SurfaceProvider for NullSurfaceProvider {
    type Surface = NullSurface;

    fn surface_by_id(&self, id: &str) -> Option<NullSurface> {
        self.surfaces
            .contains(id)
            .then(|| NullSurface { id: id.to_owned() })
    }

    fn label_surface(&mut self, surface: &NullSurface, role: &str, label: &str) {
        self.labels
            .insert(surface.id.clone(), (role.to_owned(), label.to_owned()));
    }
}

/// One renderer call observed by the null backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NullRenderEvent {
    Constructed { surface: String, instance: u64 },
    DataSet { instance: u64 },
    Restyled { instance: u64 },
    Rendered { instance: u64 },
    Released { instance: u64 },
}

/// Shared call log so tests can observe instances after the manager took
/// ownership of them.
#[derive(Debug, Clone, Default)]
pub struct NullRenderLog {
    events: Rc<RefCell<Vec<NullRenderEvent>>>,
}

impl NullRenderLog {
    fn push(&self, event: NullRenderEvent) {
        self.events.borrow_mut().push(event);
    }

    #[must_use]
    pub fn events(&self) -> Vec<NullRenderEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    #[must_use]
    pub fn constructed_count(&self) -> usize {
        self.count(|event| matches!(event, NullRenderEvent::Constructed { .. }))
    }

    #[must_use]
    pub fn released_count(&self) -> usize {
        self.count(|event| matches!(event, NullRenderEvent::Released { .. }))
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.count(|event| matches!(event, NullRenderEvent::Rendered { .. }))
    }

    #[must_use]
    pub fn restyle_count(&self) -> usize {
        self.count(|event| matches!(event, NullRenderEvent::Restyled { .. }))
    }

    /// Instances constructed and not yet released, in construction order.
    #[must_use]
    pub fn live_instances(&self) -> Vec<u64> {
        let events = self.events.borrow();
        let mut live: Vec<u64> = Vec::new();
        for event in events.iter() {
            match event {
                NullRenderEvent::Constructed { instance, .. } => live.push(*instance),
                NullRenderEvent::Released { instance } => live.retain(|id| id != instance),
                _ => {}
            }
        }
        live
    }

    /// Number of `release` calls observed for a single instance.
    #[must_use]
    pub fn release_calls_for(&self, instance: u64) -> usize {
        self.count(|event| *event == NullRenderEvent::Released { instance })
    }

    fn count(&self, predicate: impl Fn(&NullRenderEvent) -> bool) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| predicate(event))
            .count()
    }
}

/// Headless renderer backend. It validates configs like a real engine would
/// and records every call in a shared `NullRenderLog`.
#[derive(Debug, Default)]
pub struct NullRendererBackend {
    log: NullRenderLog,
    next_instance: u64,
    failing_constructs: BTreeSet<String>,
    failing_renders: BTreeSet<String>,
    failing_restyles: BTreeSet<String>,
}

impl NullRendererBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn log(&self) -> NullRenderLog {
        self.log.clone()
    }

    /// Makes `construct` fail for the given surface id.
    pub fn fail_construct_on(&mut self, surface_id: impl Into<String>) {
        self.failing_constructs.insert(surface_id.into());
    }

    /// Makes `request_render` fail for instances bound to the given surface.
    pub fn fail_render_on(&mut self, surface_id: impl Into<String>) {
        self.failing_renders.insert(surface_id.into());
    }

    /// Makes `restyle` fail for instances bound to the given surface.
    pub fn fail_restyle_on(&mut self, surface_id: impl Into<String>) {
        self.failing_restyles.insert(surface_id.into());
    }
}

impl RendererBackend for NullRendererBackend {
    type Surface = NullSurface;
    type Instance = NullInstance;

    fn construct(
        &mut self,
        surface: &NullSurface,
        config: &ChartConfig,
    ) -> ChartResult<NullInstance> {
        if self.failing_constructs.contains(&surface.id) {
            return Err(ChartError::InvalidData(format!(
                "null backend refused surface `{}`",
                surface.id
            )));
        }
        config.validate()?;

        self.next_instance += 1;
        let instance = self.next_instance;
        self.log.push(NullRenderEvent::Constructed {
            surface: surface.id.clone(),
            instance,
        });

        Ok(NullInstance {
            instance,
            surface_id: surface.id.clone(),
            series: config.series.clone(),
            style: config.style.clone(),
            fail_renders: self.failing_renders.contains(&surface.id),
            fail_restyles: self.failing_restyles.contains(&surface.id),
            log: self.log.clone(),
        })
    }
}

/// Instance handle produced by `NullRendererBackend`.
#[derive(Debug)]
pub struct NullInstance {
    instance: u64,
    surface_id: String,
    series: SeriesData,
    style: ChartStyle,
    fail_renders: bool,
    fail_restyles: bool,
    log: NullRenderLog,
}

impl NullInstance {
    #[must_use]
    pub fn instance_id(&self) -> u64 {
        self.instance
    }

    #[must_use]
    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    #[must_use]
    pub fn series(&self) -> &SeriesData {
        &self.series
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }
}

impl RendererInstance for NullInstance {
    fn set_data(&mut self, series: &SeriesData) -> ChartResult<()> {
        self.series = series.clone();
        self.log.push(NullRenderEvent::DataSet {
            instance: self.instance,
        });
        Ok(())
    }

    fn restyle(&mut self, style: &ChartStyle) -> ChartResult<()> {
        if self.fail_restyles {
            return Err(ChartError::InvalidData(format!(
                "null backend restyle failure on `{}`",
                self.surface_id
            )));
        }
        style.validate()?;
        self.style = style.clone();
        self.log.push(NullRenderEvent::Restyled {
            instance: self.instance,
        });
        Ok(())
    }

    fn request_render(&mut self) -> ChartResult<()> {
        if self.fail_renders {
            return Err(ChartError::InvalidData(format!(
                "null backend render failure on `{}`",
                self.surface_id
            )));
        }
        self.log.push(NullRenderEvent::Rendered {
            instance: self.instance,
        });
        Ok(())
    }

    fn release(&mut self) {
        self.log.push(NullRenderEvent::Released {
            instance: self.instance,
        });
    }
}
