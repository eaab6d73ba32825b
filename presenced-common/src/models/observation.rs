use serde::{Deserialize, Serialize};

/// One snapshot of what the user is currently doing (foreground app or media
/// playback), as reported by the external detector. Immutable; one per event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Display name of the activity. Always present, may be empty.
    pub name: String,
    /// Secondary line (e.g. song title, window title). Absent when the
    /// detector has nothing to report for it.
    pub details: Option<String>,
    pub state: String,
    pub large_image: Option<String>,
    pub small_image: Option<String>,
}

impl Observation {
    pub fn new(name: impl Into<String>, details: Option<String>, state: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            details,
            state: state.into(),
            large_image: None,
            small_image: None,
        }
    }
}
