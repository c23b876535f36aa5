use thiserror::Error;

/// Problems with the content snapshot itself.
///
/// These surface at load time (or, for `MissingAuthor`, whenever a page needs
/// the author record) and are fatal: nothing is rendered from a snapshot that
/// fails them.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed content snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid date {value:?} on {slug}")]
    InvalidDate { slug: String, value: String },

    #[error("article {slug} uses unsupported locale {locale:?}")]
    UnsupportedLocale { slug: String, locale: String },

    #[error("duplicate article slug {0}")]
    DuplicateSlug(String),

    #[error("no default author record available for locale {locale}")]
    MissingAuthor { locale: String },
}

/// Rejected listing requests. Both map to "not found" at the HTTP edge.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListingError {
    #[error("page {0:?} is out of range")]
    PageOutOfRange(String),

    #[error("unsupported locale segment {0:?}")]
    UnknownLocale(String),
}
