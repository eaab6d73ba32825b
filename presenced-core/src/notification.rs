//! Derives the persistent status-indicator payload from an observation. The
//! indicator mirrors what was observed, never whether the session call
//! succeeded, so this stays independent of the reconciler.

use presenced_common::models::notification::{NotificationAction, NotificationSpec};
use presenced_common::models::observation::Observation;

const EXIT_LABEL: &str = "Exit";

pub fn render(obs: &Observation) -> NotificationSpec {
    NotificationSpec {
        title: obs.name.clone(),
        body: obs.details.clone().unwrap_or_default(),
        actions: vec![NotificationAction::dismiss(EXIT_LABEL)],
    }
}

/// Placeholder shown on service start, before the first observation lands.
pub fn service_enabled() -> NotificationSpec {
    NotificationSpec {
        title: "Service enabled".to_string(),
        body: String::new(),
        actions: vec![NotificationAction::dismiss(EXIT_LABEL)],
    }
}
