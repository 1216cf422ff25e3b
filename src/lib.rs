//! chart-lifecycle: renderer-agnostic chart binding lifecycle manager.
//!
//! The crate owns creation, in-place update, theme-aware restyling and
//! teardown of chart renderer instances bound to host display surfaces.
//! Charting engines and surface hosts plug in through the traits in
//! [`render`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfigBuilder, ChartLifecycleManager, ManagerConfig};
pub use error::{ChartError, ChartResult};
