use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{ChartConfig, Theme};
use crate::error::{ChartError, ChartResult};
use crate::render::{RendererBackend, SurfaceProvider};

use super::ChartLifecycleManager;

pub const MANAGER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingSnapshot {
    pub generation: u64,
    pub live: bool,
    pub config: ChartConfig,
}

/// Serializable deterministic registry snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerSnapshot {
    pub applied_theme: Theme,
    pub resize_pending: bool,
    pub render_passes: u64,
    pub bindings: IndexMap<String, BindingSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ManagerSnapshot,
}

impl<P, B> ChartLifecycleManager<P, B>
where
    P: SurfaceProvider,
    B: RendererBackend<Surface = P::Surface>,
{
    #[must_use]
    pub fn snapshot(&self) -> ManagerSnapshot {
        let bindings = self
            .bindings
            .iter()
            .map(|(id, binding)| {
                (
                    id.clone(),
                    BindingSnapshot {
                        generation: binding.generation(),
                        live: binding.is_live(),
                        config: binding.config().clone(),
                    },
                )
            })
            .collect();
        ManagerSnapshot {
            applied_theme: self.applied_theme,
            resize_pending: self.resize.is_pending(),
            render_passes: self.render_passes,
            bindings,
        }
    }
}

impl BindingSnapshot {
    /// Renders the binding's series as `label,value` CSV rows under a
    /// header. Labels containing separators or quotes are quoted.
    #[must_use]
    pub fn series_csv(&self) -> String {
        let series = &self.config.series;
        let mut csv = String::from("Label,Value\n");
        for (label, value) in series.labels().iter().zip(series.values()) {
            csv.push_str(&csv_field(label));
            csv.push(',');
            csv.push_str(&value.to_string());
            csv.push('\n');
        }
        csv
    }
}

impl ManagerSnapshot {
    /// CSV export of one binding's series; `None` for unregistered ids.
    #[must_use]
    pub fn series_csv(&self, id: &str) -> Option<String> {
        self.bindings.get(id).map(BindingSnapshot::series_csv)
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ManagerSnapshotJsonContractV1 {
            schema_version: MANAGER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ManagerSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ManagerSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != MANAGER_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_owned()
    }
}
