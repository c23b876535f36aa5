//! Locale type: a content locale validated against the registry.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated content locale.
///
/// Only codes present in the [`LocaleRegistry`] can be turned into a
/// `Locale`, so holding one is proof that the code is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };

    pub const VIETNAMESE: Locale = Locale { code: "vi" };

    /// Create a Locale from an exact locale code (e.g., "en", "vi").
    ///
    /// Returns `None` for unknown codes; callers decide whether that is a
    /// not-found (URL segment) or a load error (article record).
    pub fn from_code(code: &str) -> Option<Locale> {
        LocaleRegistry::get()
            .get_by_code(code)
            .map(|config| Locale { code: config.code })
    }

    /// Like [`Locale::from_code`] but ignoring ASCII case.
    pub fn from_code_ignore_case(code: &str) -> Option<Locale> {
        LocaleRegistry::get()
            .get_ignore_case(code)
            .map(|config| Locale { code: config.code })
    }

    /// The registry's default locale.
    pub fn default_locale() -> Locale {
        Locale {
            code: LocaleRegistry::get().default_locale().code,
        }
    }

    /// Every supported locale, in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_all()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a `Locale` built through this module.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be registered")
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn og_locale(&self) -> &'static str {
        self.config().og_locale
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}
