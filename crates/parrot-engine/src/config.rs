//! Configuration types for the parrot chat page.
//!
//! Every field is optional in the JSON file; missing fields fall back to
//! the defaults of the demo page.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Placeholder substituted with the user's text in the reply template.
pub const MESSAGE_PLACEHOLDER: &str = "{message}";

/// Main configuration for parrot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Bot message shown as message #1.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Template for the synthesized reply. Must contain `{message}`.
    #[serde(default = "default_reply_template")]
    pub reply_template: String,

    /// Delay before the synthesized reply is appended.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Page header title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Page header subtitle.
    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    /// Placeholder shown in the empty input.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Color theme.
    #[serde(default)]
    pub theme: ThemeName,

    /// Maximum page width in columns; wider terminals center the page.
    #[serde(default = "default_max_width")]
    pub max_width: u16,

    /// Maximum width of a message bubble in columns.
    #[serde(default = "default_bubble_width")]
    pub bubble_width: u16,
}

fn default_greeting() -> String {
    "Hello! How can I help you today?".into()
}

fn default_reply_template() -> String {
    "I received your message: \"{message}\". This is a demo response.".into()
}

fn default_reply_delay_ms() -> u64 {
    1000
}

fn default_title() -> String {
    "Chatbot Assistant".into()
}

fn default_subtitle() -> String {
    "Ask me anything".into()
}

fn default_placeholder() -> String {
    "Type your message...".into()
}

fn default_max_width() -> u16 {
    100
}

fn default_bubble_width() -> u16 {
    48
}

/// Color theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// White page with blue accents.
    #[default]
    Light,
    /// Dark background for dark terminals.
    Dark,
}

impl std::str::FromStr for ThemeName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ConfigError::Invalid(format!("unknown theme: {other}"))),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Self = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.greeting.trim().is_empty() {
            return Err(ConfigError::Invalid("greeting must not be empty".into()));
        }
        if !self.reply_template.contains(MESSAGE_PLACEHOLDER) {
            return Err(ConfigError::Invalid(format!(
                "reply_template must contain {MESSAGE_PLACEHOLDER}"
            )));
        }
        Ok(())
    }

    /// Reply delay as a [`Duration`].
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            reply_template: default_reply_template(),
            reply_delay_ms: default_reply_delay_ms(),
            title: default_title(),
            subtitle: default_subtitle(),
            placeholder: default_placeholder(),
            theme: ThemeName::default(),
            max_width: default_max_width(),
            bubble_width: default_bubble_width(),
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A value failed validation.
    #[error("Invalid config: {0}")]
    Invalid(String),
}
