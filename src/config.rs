use log::{warn, Level};
use serde::Deserialize;
use thiserror::Error;

/// Id of the inline `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no #{0} element in the document")]
    Missing(&'static str),
    #[error("malformed site config: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
    pub interval_ms: u32,
    /// When false the carousel keeps advancing under the pointer and focus.
    pub pausable: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: 3000,
            pausable: true,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChatConfig {
    pub reply_delay_ms: u32,
    pub greeting: String,
    pub canned_reply: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 500,
            greeting: "Hello - how can we help today? Please avoid sharing sensitive details here."
                .to_string(),
            canned_reply: "Thanks - a member of our team will reply shortly.".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConsentConfig {
    pub storage_key: String,
}

impl Default for ConsentConfig {
    fn default() -> Self {
        Self {
            storage_key: "nlo-cookies-ok".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub carousel: CarouselConfig,
    pub chat: ChatConfig,
    pub consent: ConsentConfig,
    pub contact: ContactConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "info@newleafoasis.co.uk".to_string(),
            phone: "+44 (0)1234 567 890".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_document() -> Result<Self, ConfigError> {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .ok_or(ConfigError::Missing(CONFIG_ELEMENT_ID))?;
        Self::from_json(&raw)
    }

    /// Reads the page config, falling back to defaults when it is absent or broken.
    pub fn load() -> Self {
        match Self::from_document() {
            Ok(config) => config,
            Err(ConfigError::Missing(_)) => Self::default(),
            Err(err) => {
                warn!("{err}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.carousel.interval_ms, 3000);
        assert!(config.carousel.pausable);
        assert_eq!(config.chat.reply_delay_ms, 500);
        assert_eq!(config.consent.storage_key, "nlo-cookies-ok");
    }

    #[test]
    fn always_running_carousel_is_expressible() {
        let config =
            SiteConfig::from_json(r#"{"carousel": {"interval_ms": 2000, "pausable": false}}"#)
                .unwrap();
        assert_eq!(
            config.carousel,
            CarouselConfig {
                interval_ms: 2000,
                pausable: false
            }
        );
        assert_eq!(config.chat, ChatConfig::default());
    }

    #[test]
    fn partial_section_keeps_other_fields() {
        let config = SiteConfig::from_json(r#"{"chat": {"reply_delay_ms": 800}}"#).unwrap();
        assert_eq!(config.chat.reply_delay_ms, 800);
        assert_eq!(config.chat.canned_reply, ChatConfig::default().canned_reply);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = SiteConfig::from_json("{carousel:").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }
}
