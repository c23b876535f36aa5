use crate::i18n::Locale;
use anyhow::{anyhow, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub bind_addr: String,

    // Content
    pub content_file: String,
    pub export_dir: String,

    // Site
    pub site_url: String,
    pub default_locale: Locale,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .with_context(|| format!("PORT is not a valid port: {value}"))?,
                Err(_) => 3000,
            },
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string()),

            // Content
            content_file: std::env::var("CONTENT_FILE")
                .unwrap_or_else(|_| "content/snapshot.json".to_string()),
            export_dir: std::env::var("EXPORT_DIR").unwrap_or_else(|_| "public".to_string()),

            // Site
            site_url: std::env::var("SITE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            default_locale: match std::env::var("DEFAULT_LOCALE") {
                Ok(code) => Locale::from_code(&code)
                    .ok_or_else(|| anyhow!("DEFAULT_LOCALE {code:?} is not a supported locale"))?,
                Err(_) => Locale::default_locale(),
            },
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
