use thiserror::Error;

use crate::MessageKey;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Button count must be an integer from 3 to 7")]
    InvalidCount,
    #[error("Session is not waiting to be scrambled")]
    NotInSetup,
    #[error("Session is not scrambling")]
    NotScrambling,
    #[error("Session is not accepting clicks")]
    NotAwaitingClicks,
    #[error("No such button in this session")]
    UnknownButton,
    #[error("Event belongs to a session that was replaced")]
    StaleSession,
}

impl GameError {
    /// Message shown to the player, for errors the player caused.
    pub const fn message_key(self) -> Option<MessageKey> {
        match self {
            Self::InvalidCount => Some(MessageKey::EnterValidNumber),
            _ => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
