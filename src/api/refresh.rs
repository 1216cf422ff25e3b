use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::ChartConfig;
use crate::error::ChartError;
use crate::render::{RendererBackend, SurfaceProvider};

use super::ChartLifecycleManager;

/// One chart to (re)create during a full refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDefinition {
    pub id: String,
    pub config: ChartConfig,
}

impl ChartDefinition {
    #[must_use]
    pub fn new(id: impl Into<String>, config: ChartConfig) -> Self {
        Self {
            id: id.into(),
            config,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RefreshReport {
    pub created: Vec<String>,
    pub failed: IndexMap<String, ChartError>,
}

impl RefreshReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl<P, B> ChartLifecycleManager<P, B>
where
    P: SurfaceProvider,
    B: RendererBackend<Surface = P::Surface>,
{
    /// Replaces the whole registry: every binding is released, then each
    /// definition is created independently.
    pub fn refresh<I>(&mut self, definitions: I) -> RefreshReport
    where
        I: IntoIterator<Item = ChartDefinition>,
    {
        self.destroy_all();
        let mut report = RefreshReport::default();
        for definition in definitions {
            match self.create_or_replace(&definition.id, definition.config) {
                Ok(_) => report.created.push(definition.id),
                Err(err) => {
                    report.failed.insert(definition.id, err);
                }
            }
        }
        info!(
            created = report.created.len(),
            failed = report.failed.len(),
            "charts refreshed"
        );
        report
    }
}
