//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use faq_context::WebsiteContext;

use crate::config::Config;
use crate::entities::SqliteStore;
use crate::llm::LanguageModel;

/// State shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Conversation log.
    pub store: Arc<SqliteStore>,
    /// Website fetcher; owns the page cache shared by all requests.
    pub site: Arc<WebsiteContext>,
    /// Hosted language model.
    pub llm: Arc<dyn LanguageModel>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("site", &self.site.base_url())
            .field("model", &self.llm.model())
            .finish_non_exhaustive()
    }
}
