mod null_backend;
mod primitives;

pub use null_backend::{
    NullInstance, NullRenderEvent, NullRenderLog, NullRendererBackend, NullSurface,
    NullSurfaceProvider,
};
pub use primitives::Color;

use crate::core::{ChartConfig, ChartStyle, SeriesData};
use crate::error::ChartResult;

/// Host-side lookup of pre-existing display surfaces (canvas elements,
/// widgets, offscreen targets). The lifecycle manager never creates
/// surfaces, it only binds to them.
pub trait SurfaceProvider {
    type Surface;

    fn surface_by_id(&self, id: &str) -> Option<Self::Surface>;

    /// Attaches basic accessibility metadata to a surface before a chart is
    /// bound to it. Hosts without an accessibility tree can ignore it.
    fn label_surface(&mut self, _surface: &Self::Surface, _role: &str, _label: &str) {}
}

/// Contract implemented by any charting engine.
///
/// Construction may fail; every successfully constructed instance is paired
/// with exactly one `RendererInstance::release` by the lifecycle manager.
pub trait RendererBackend {
    type Surface;
    type Instance: RendererInstance;

    fn construct(
        &mut self,
        surface: &Self::Surface,
        config: &ChartConfig,
    ) -> ChartResult<Self::Instance>;
}

/// One live chart owned by a binding.
pub trait RendererInstance {
    fn set_data(&mut self, series: &SeriesData) -> ChartResult<()>;
    fn restyle(&mut self, style: &ChartStyle) -> ChartResult<()>;
    fn request_render(&mut self) -> ChartResult<()>;
    fn release(&mut self);
}
