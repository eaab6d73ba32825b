// File: presenced-common/src/traits/presence_traits.rs
//
// Capability set the reconciliation core is wired against. Everything here
// is implemented by the host: the core never talks to a concrete detector,
// presence transport, preference store, or notification surface.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use crate::error::Error;
use crate::models::notification::NotificationSpec;
use crate::models::observation::Observation;
use crate::models::presence::PublishFields;

/// Push source of [`Observation`] events. One logical subscription per
/// service run; `begin`/`end` bracket the running state and a fresh
/// subscription may be opened after every `end`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObservationSource: Send + Sync {
    async fn begin(&self) -> Result<mpsc::Receiver<Observation>, Error>;
    async fn end(&self) -> Result<(), Error>;
}

/// The external rich-presence transport. All calls may block and may fail;
/// failures are recoverable from the core's point of view.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionClient: Send + Sync {
    /// Open the session. Buttons and status are read from `fields`.
    async fn create(&self, fields: &PublishFields, started_at: DateTime<Utc>) -> Result<(), Error>;
    /// Patch the already-open session. Button fields are ignored here.
    async fn update(&self, fields: &PublishFields, now: DateTime<Utc>) -> Result<(), Error>;
    async fn is_active(&self) -> bool;
    /// End the session. Must be a no-op when no session is open.
    async fn close(&self) -> Result<(), Error>;
}

/// Synchronous key/value preference reads. Keys and defaults are documented
/// in [`crate::models::config`].
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore: Send + Sync {
    fn get_bool(&self, key: &str, default: bool) -> bool;
    fn get_string(&self, key: &str, default: &str) -> String;
}

/// Where status-indicator payloads go. `notification_id` is always
/// [`crate::models::notification::PRESENCE_NOTIFICATION_ID`]; the sink must
/// replace, not stack, notifications sharing an id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DisplaySink: Send + Sync {
    async fn show(&self, notification_id: u32, spec: &NotificationSpec) -> Result<(), Error>;
}
