use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::traits::presence_traits::ConfigStore;

pub const KEY_SWAP_NAME_AND_DETAILS: &str = "swap_name_and_details";
pub const KEY_SHOW_TIMESTAMPS: &str = "show_timestamps";
pub const KEY_USE_BUTTONS: &str = "use_buttons";
/// JSON document with up to two label/url pairs, see [`StoredButtons`].
pub const KEY_BUTTONS: &str = "buttons";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceButton {
    pub label: String,
    pub url: String,
}

/// User preferences read at each reconciliation. The core only reads these;
/// the store itself is owned by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceConfig {
    pub swap_name_and_details: bool,
    pub show_timestamps: bool,
    pub use_buttons: bool,
    pub buttons: Vec<PresenceButton>,
}

/// Wire shape of the stored button document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredButtons {
    #[serde(default)]
    button1: String,
    #[serde(default, rename = "button1Url")]
    button1_url: String,
    #[serde(default)]
    button2: String,
    #[serde(default, rename = "button2Url")]
    button2_url: String,
}

impl StoredButtons {
    fn into_buttons(self) -> Vec<PresenceButton> {
        let mut buttons = Vec::new();
        if !self.button1.is_empty() || !self.button1_url.is_empty() {
            buttons.push(PresenceButton {
                label: self.button1,
                url: self.button1_url,
            });
        }
        if !self.button2.is_empty() || !self.button2_url.is_empty() {
            buttons.push(PresenceButton {
                label: self.button2,
                url: self.button2_url,
            });
        }
        buttons
    }
}

impl PresenceConfig {
    /// Snapshots all preference keys. Called once per observation so toggles
    /// flipped by the user take effect on the very next event, without any
    /// cached process-wide state.
    pub fn load(store: &dyn ConfigStore) -> Self {
        let raw = store.get_string(KEY_BUTTONS, "{}");
        let stored: StoredButtons = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("malformed button document, falling back to empty set: {e}");
                StoredButtons::default()
            }
        };
        Self {
            swap_name_and_details: store.get_bool(KEY_SWAP_NAME_AND_DETAILS, false),
            show_timestamps: store.get_bool(KEY_SHOW_TIMESTAMPS, false),
            use_buttons: store.get_bool(KEY_USE_BUTTONS, false),
            buttons: stored.into_buttons(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::presence_traits::MockConfigStore;

    fn store_with(buttons_json: &'static str, flags: fn(&str) -> bool) -> MockConfigStore {
        let mut store = MockConfigStore::new();
        store
            .expect_get_string()
            .returning(move |key, default| {
                if key == KEY_BUTTONS {
                    buttons_json.to_string()
                } else {
                    default.to_string()
                }
            });
        store.expect_get_bool().returning(move |key, _| flags(key));
        store
    }

    #[test]
    fn load_defaults_when_store_is_empty() {
        let store = store_with("{}", |_| false);
        let cfg = PresenceConfig::load(&store);
        assert_eq!(cfg, PresenceConfig::default());
    }

    #[test]
    fn load_reads_toggles_and_buttons() {
        let store = store_with(
            r#"{"button1":"GitHub","button1Url":"https://github.com/me","button2":"","button2Url":""}"#,
            |key| key == KEY_SWAP_NAME_AND_DETAILS || key == KEY_USE_BUTTONS,
        );
        let cfg = PresenceConfig::load(&store);
        assert!(cfg.swap_name_and_details);
        assert!(!cfg.show_timestamps);
        assert!(cfg.use_buttons);
        assert_eq!(
            cfg.buttons,
            vec![PresenceButton {
                label: "GitHub".to_string(),
                url: "https://github.com/me".to_string(),
            }]
        );
    }

    #[test]
    fn load_keeps_url_only_entries_for_downstream_filtering() {
        let store = store_with(r#"{"button2Url":"https://example.com"}"#, |_| true);
        let cfg = PresenceConfig::load(&store);
        assert_eq!(cfg.buttons.len(), 1);
        assert!(cfg.buttons[0].label.is_empty());
    }

    #[test]
    fn malformed_button_document_falls_back_to_empty() {
        let store = store_with("not json at all", |_| false);
        let cfg = PresenceConfig::load(&store);
        assert!(cfg.buttons.is_empty());
    }
}
