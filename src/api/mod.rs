mod binding;
mod config_builder;
mod data_source;
mod manager;
mod manager_config;
mod observer_registry;
mod palette;
mod refresh;
mod render_pass;
mod resize_debouncer;
mod signals;
mod snapshot;

pub use binding::{BindingHandle, ChartBinding};
pub use config_builder::ChartConfigBuilder;
pub use data_source::{SeriesSource, StaticSeriesSource, fetch_series_or};
pub use manager::{ChartLifecycleManager, ManagerBinding};
pub use manager_config::{ManagerConfig, RenderDefaults};
pub use palette::Palette;
pub use refresh::{ChartDefinition, RefreshReport};
pub use render_pass::RenderPassReport;
pub use resize_debouncer::ResizeDebouncer;
pub use signals::ExternalSignal;
pub use snapshot::{
    BindingSnapshot, MANAGER_SNAPSHOT_JSON_SCHEMA_V1, ManagerSnapshot,
    ManagerSnapshotJsonContractV1,
};
