// File: presenced-core/src/lib.rs

pub mod notification;
pub mod reconciler;
pub mod service;
pub mod transform;

pub use presenced_common::error::Error;
pub use reconciler::SessionReconciler;
pub use service::{PresenceService, ServiceState};
pub use transform::transform;
