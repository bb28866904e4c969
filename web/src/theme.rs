use crate::utils::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";

    pub(crate) const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "light",
            Dark => "dark",
        }
    }

    /// Auto, then light, then dark, then back to auto.
    pub(crate) const fn cycle(theme: Option<Self>) -> Option<Self> {
        use Theme::*;
        match theme {
            None => Some(Light),
            Some(Light) => Some(Dark),
            Some(Dark) => None,
        }
    }

    pub(crate) const fn label(theme: Option<Self>) -> &'static str {
        match theme {
            None => "auto",
            Some(theme) => theme.scheme(),
        }
    }

    fn update_html(theme: Option<Self>) {
        use gloo::utils::document;
        let Some(html) = document().document_element() else {
            log::error!("document has no root element, theme not applied");
            return;
        };
        if let Some(theme) = theme {
            let scheme = theme.scheme();
            log::debug!("theme-scheme: {}", scheme);
            if let Err(err) = html.set_attribute(Self::ATTR_NAME, scheme) {
                log::error!("failed to set theme: {:?}", err);
            }
        } else {
            log::debug!("no theme preference");
            if let Err(err) = html.remove_attribute(Self::ATTR_NAME) {
                log::error!("failed to set theme: {:?}", err);
            }
        }
    }

    pub(crate) fn init() -> Option<Self> {
        let theme = Self::local_load();
        Self::update_html(theme);
        theme
    }

    pub(crate) fn apply(theme: Option<Self>) {
        match theme {
            Some(theme) => theme.local_save(),
            None => Self::local_clear(),
        }
        Self::update_html(theme);
    }
}

impl StorageKey for Theme {
    const KEY: &'static str = "memorito:theme";
}
