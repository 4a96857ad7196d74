use marquee_core::chat::{ChatLinkBuilder, DEFAULT_CHAT_BASE_URL, DEFAULT_MESSAGE_TEMPLATE};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    pub booking: BookingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Start with the sample listings and approval queue
    #[serde(default = "default_true")]
    pub seed_fixtures: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { seed_fixtures: true }
    }
}

fn default_true() -> bool { true }

#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    #[serde(default = "default_chat_base_url")]
    pub base_url: String,
    #[serde(default = "default_message_template")]
    pub message_template: String,
}

fn default_chat_base_url() -> String { DEFAULT_CHAT_BASE_URL.to_string() }
fn default_message_template() -> String { DEFAULT_MESSAGE_TEMPLATE.to_string() }

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: default_chat_base_url(),
            message_template: default_message_template(),
        }
    }
}

impl ChatConfig {
    pub fn link_builder(&self) -> ChatLinkBuilder {
        ChatLinkBuilder::new(self.base_url.clone(), self.message_template.clone())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingConfig {
    pub payment_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig { port: 8080 },
            catalog: CatalogConfig::default(),
            chat: ChatConfig::default(),
            booking: BookingConfig {
                payment_base_url: "https://pay.marquee.example/checkout".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `MARQUEE__SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("MARQUEE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
