//! Accept-Language negotiation.
//!
//! Parsing and matching are separate steps: [`parse_accept_language`] turns
//! the raw header into an ordered preference list, and [`pick_locale`] walks
//! that list against the supported locales. Preferences are tried in header
//! order; weights only serve to drop `q=0` entries.

use crate::i18n::Locale;

/// One entry of an Accept-Language header.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePreference {
    /// The language tag as sent by the client (e.g., "fr-FR", "en", "*")
    pub tag: String,

    /// Quality weight, 1.0 when absent or unparseable
    pub weight: f32,
}

impl LanguagePreference {
    /// The primary subtag, i.e. the part before any regional suffix.
    pub fn base(&self) -> &str {
        self.tag.split('-').next().unwrap_or(&self.tag)
    }
}

/// Parse an Accept-Language header value into preferences, in header order.
///
/// Empty entries are skipped, as are entries weighted `q=0` (explicitly not
/// acceptable).
pub fn parse_accept_language(header: &str) -> Vec<LanguagePreference> {
    header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() {
                return None;
            }

            let weight = pieces
                .find_map(|param| param.trim().strip_prefix("q="))
                .and_then(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);

            Some(LanguagePreference {
                tag: tag.to_string(),
                weight,
            })
        })
        .filter(|pref| pref.weight > 0.0)
        .collect()
}

/// Pick the first preference that names a supported locale.
///
/// For each preference, the full tag is tried first, then its base subtag.
/// Falls back to `default` when nothing matches.
pub fn pick_locale(preferences: &[LanguagePreference], default: Locale) -> Locale {
    preferences
        .iter()
        .find_map(|pref| {
            Locale::from_code_ignore_case(&pref.tag)
                .or_else(|| Locale::from_code_ignore_case(pref.base()))
        })
        .unwrap_or(default)
}

/// Negotiate a locale from an optional Accept-Language header value.
pub fn negotiate(header: Option<&str>, default: Locale) -> Locale {
    match header {
        Some(value) => pick_locale(&parse_accept_language(value), default),
        None => default,
    }
}
