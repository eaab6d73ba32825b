use serde::{Deserialize, Serialize};

/// The one notification id this service ever uses. The "service enabled"
/// placeholder and every observation-derived update reuse it, so the host
/// surface shows a single persistent indicator instead of a stream of them.
pub const PRESENCE_NOTIFICATION_ID: u32 = 2292;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Dismisses the indicator and asks the host to stop the service.
    Dismiss,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAction {
    pub label: String,
    pub kind: ActionKind,
}

impl NotificationAction {
    pub fn dismiss(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ActionKind::Dismiss,
        }
    }
}

/// Payload for the persistent status indicator. Rendering is the display
/// sink's problem; this is just the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSpec {
    pub title: String,
    pub body: String,
    pub actions: Vec<NotificationAction>,
}
