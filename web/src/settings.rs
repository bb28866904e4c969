use crate::utils::*;
use memorito_core::ButtonCount;
use serde::{Deserialize, Serialize};

/// Player preferences remembered between visits. Results are never stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct Settings {
    pub last_count: Option<ButtonCount>,
}

impl Settings {
    /// Text to put in the count input before the player types anything.
    pub(crate) fn prefill(&self, forced: Option<&str>) -> String {
        match (forced, self.last_count) {
            (Some(forced), _) => forced.to_string(),
            (None, Some(count)) => count.to_string(),
            (None, None) => String::new(),
        }
    }

    pub(crate) fn remember(count: ButtonCount) {
        let settings = Self {
            last_count: Some(count),
        };
        settings.local_save();
    }
}

impl StorageKey for Settings {
    const KEY: &'static str = "memorito:settings";
}
