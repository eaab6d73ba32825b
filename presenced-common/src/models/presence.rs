use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::config::PresenceButton;
use crate::models::observation::Observation;

/// Online status published with a freshly created session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresenceStatus {
    Online,
    Idle,
    DoNotDisturb,
    Invisible,
}

/// The policy-transformed subset of an [`Observation`] actually sent to the
/// external session. Produced by `transform`, consumed by the reconciler.
///
/// Buttons travel inside the fields: the session client applies them on
/// create and ignores them on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishFields {
    pub name: String,
    pub details: String,
    pub state: String,
    pub large_image: Option<String>,
    pub small_image: Option<String>,
    pub show_timestamps: bool,
    pub status: PresenceStatus,
    pub buttons: Vec<PresenceButton>,
}

/// Mutable state for the single external session. Owned exclusively by the
/// reconciler; re-derived fresh on every service start, never persisted.
#[derive(Debug, Clone, Default)]
pub struct PresenceState {
    /// True iff the external client currently has an open session.
    pub session_active: bool,
    /// Set once when a session goes inactive -> active, untouched while the
    /// session stays active.
    pub started_at: Option<DateTime<Utc>>,
    /// The last observation successfully pushed out, kept for diagnostics.
    pub last_published: Option<Observation>,
}
