// File: presenced-common/src/models/mod.rs
pub mod config;
pub mod notification;
pub mod observation;
pub mod presence;

pub use config::{PresenceButton, PresenceConfig};
pub use notification::{ActionKind, NotificationAction, NotificationSpec, PRESENCE_NOTIFICATION_ID};
pub use observation::Observation;
pub use presence::{PresenceState, PresenceStatus, PublishFields};
