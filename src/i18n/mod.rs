//! Internationalization (i18n): the closed set of content locales and
//! Accept-Language negotiation.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported locales and their metadata
//! - `locale`: Validated `Locale` type used everywhere a locale code travels
//! - `negotiation`: Accept-Language parsing and best-locale matching
//!
//! # Example
//!
//! ```rust,ignore
//! use locale_blog::i18n::{negotiate, Locale};
//!
//! let english = Locale::from_code("en").unwrap();
//! let target = negotiate(Some("fr-FR,en;q=0.5"), Locale::default_locale());
//! assert_eq!(target, english);
//! ```

mod locale;
mod negotiation;
mod registry;

pub use locale::Locale;
pub use negotiation::{negotiate, parse_accept_language, pick_locale, LanguagePreference};
pub use registry::{LocaleConfig, LocaleRegistry};
