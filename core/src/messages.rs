use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

/// Every message the game itself asks for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    EnterValidNumber,
    ExcellentMemory,
    WrongOrder,
}

impl MessageKey {
    pub const ALL: [Self; 3] = [
        Self::EnterValidNumber,
        Self::ExcellentMemory,
        Self::WrongOrder,
    ];

    pub const fn as_str(self) -> &'static str {
        use MessageKey::*;
        match self {
            EnterValidNumber => "enter_valid_number",
            ExcellentMemory => "excellent_memory",
            WrongOrder => "wrong_order",
        }
    }

    const fn default_text(self) -> &'static str {
        use MessageKey::*;
        match self {
            EnterValidNumber => "Please enter a number between 3 and 7.",
            ExcellentMemory => "Excellent memory!",
            WrongOrder => "Wrong order!",
        }
    }
}

/// Lookup table from message key to user-facing text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageRepository {
    messages: BTreeMap<String, String>,
}

impl MessageRepository {
    pub fn new(messages: BTreeMap<String, String>) -> Self {
        Self { messages }
    }

    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(
            entries
                .into_iter()
                .map(|(key, text)| (key.into(), text.into()))
                .collect(),
        )
    }

    pub fn get_message(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Text for a known key, or the raw key when the catalog lacks it.
    pub fn message(&self, key: MessageKey) -> &str {
        self.get_message(key.as_str()).unwrap_or_else(|| {
            log::warn!("missing message for key {:?}", key.as_str());
            key.as_str()
        })
    }

    pub fn missing_keys(&self) -> impl Iterator<Item = MessageKey> + '_ {
        MessageKey::ALL
            .into_iter()
            .filter(|key| !self.messages.contains_key(key.as_str()))
    }
}

impl Default for MessageRepository {
    fn default() -> Self {
        Self::from_entries(
            MessageKey::ALL
                .into_iter()
                .map(|key| (key.as_str().to_string(), key.default_text())),
        )
    }
}
