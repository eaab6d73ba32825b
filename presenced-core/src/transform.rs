//! The publish-field policy: maps a raw observation plus the current user
//! preferences into the exact fields pushed to the session. Pure and total,
//! so the whole policy is table-testable.

use presenced_common::models::config::PresenceConfig;
use presenced_common::models::observation::Observation;
use presenced_common::models::presence::{PresenceStatus, PublishFields};

/// At most this many buttons ever reach the session.
const MAX_BUTTONS: usize = 2;

/// Placeholder published when the chosen name source is absent upstream. The
/// remote service rejects a truly empty name, an empty-but-present value is
/// fine.
const NAME_PLACEHOLDER: &str = " ";

pub fn transform(obs: &Observation, cfg: &PresenceConfig) -> PublishFields {
    let (name, details) = if cfg.swap_name_and_details {
        (
            obs.details
                .clone()
                .unwrap_or_else(|| NAME_PLACEHOLDER.to_string()),
            obs.name.clone(),
        )
    } else {
        (obs.name.clone(), obs.details.clone().unwrap_or_default())
    };

    let buttons = if cfg.use_buttons {
        cfg.buttons
            .iter()
            .filter(|b| !b.label.is_empty())
            .take(MAX_BUTTONS)
            .cloned()
            .collect()
    } else {
        Vec::new()
    };

    PublishFields {
        name,
        details,
        state: obs.state.clone(),
        large_image: obs.large_image.clone(),
        small_image: obs.small_image.clone(),
        show_timestamps: cfg.show_timestamps,
        status: PresenceStatus::DoNotDisturb,
        buttons,
    }
}
