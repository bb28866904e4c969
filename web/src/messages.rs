use memorito_core::MessageRepository;
use thiserror::Error;

const EN_CATALOG: &str = include_str!("../messages/en.toml");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid message catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Message catalog has no text for {0:?}")]
    MissingKey(&'static str),
}

/// Parses a flat `key = "text"` TOML table and checks that every message the game uses is present.
pub fn parse_catalog(source: &str) -> Result<MessageRepository, CatalogError> {
    let messages: MessageRepository = toml::from_str(source)?;
    if let Some(key) = messages.missing_keys().next() {
        return Err(CatalogError::MissingKey(key.as_str()));
    }
    Ok(messages)
}

pub fn load_catalog() -> MessageRepository {
    parse_catalog(EN_CATALOG).unwrap_or_else(|err| {
        log::error!("{}, falling back to built-in messages", err);
        MessageRepository::default()
    })
}
