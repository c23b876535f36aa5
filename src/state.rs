use crate::config::Config;
use crate::index::ContentIndex;
use std::sync::Arc;

/// Shared, read-only request state.
///
/// The index is built once at startup and never mutated, so handlers read it
/// concurrently without locks.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub index: Arc<ContentIndex>,
}

impl AppState {
    pub fn new(config: Config, index: ContentIndex) -> Self {
        Self {
            config: Arc::new(config),
            index: Arc::new(index),
        }
    }
}
