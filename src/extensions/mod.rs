//! Optional hook modules live here.
//!
//! Keep extensions decoupled from the lifecycle core paths.

pub mod observers;

pub use observers::{LifecycleEvent, LifecycleObserver};
