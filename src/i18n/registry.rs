//! Locale registry: Single source of truth for the site's content locales.
//!
//! The set is closed: every article, every locale-prefixed URL and every
//! negotiated redirect must land on one of these codes. The registry is a
//! lazily-initialized singleton behind `OnceLock`.

use std::sync::OnceLock;

/// Configuration for a supported content locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Primary language subtag used in URLs and article records (e.g., "en", "vi")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Vietnamese")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Tiếng Việt")
    pub native_name: &'static str,

    /// Open Graph locale string used for page metadata (e.g., "en_US")
    pub og_locale: &'static str,

    /// Whether this is the fallback locale for negotiation (only one should be true)
    pub is_default: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Look up a locale configuration by its exact code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Look up a locale configuration ignoring ASCII case.
    ///
    /// Language tags are case-insensitive, so `"EN"` and `"en"` name the same
    /// locale when they arrive in a request header.
    pub fn get_ignore_case(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales
            .iter()
            .find(|locale| locale.code.eq_ignore_ascii_case(code))
    }

    /// All supported locales, in declaration order.
    ///
    /// Static path enumeration iterates this list, so the order is part of the
    /// deterministic output.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// The default locale configuration.
    ///
    /// # Panics
    /// Panics if the registry does not declare exactly one default locale
    /// (this indicates a programming error in `default_locales`).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a code names a supported locale (exact match).
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// The two content locales of the site. Vietnamese is the default.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            og_locale: "en_US",
            is_default: false,
        },
        LocaleConfig {
            code: "vi",
            name: "Vietnamese",
            native_name: "Tiếng Việt",
            og_locale: "vi_VN",
            is_default: true,
        },
    ]
}
