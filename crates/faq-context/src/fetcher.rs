//! Website context: fetch relevant pages, extract facts, fall back offline.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use crate::error::ContextError;
use crate::extract::extract_key_information;
use crate::fallback::fallback_for;
use crate::format::format_summary;
use crate::html::html_to_text;
use crate::site::{SitePage, detect_relevant_pages};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Builder for [`WebsiteContext`].
pub struct WebsiteContextBuilder {
    base_url: String,
    timeout: Duration,
}

impl WebsiteContextBuilder {
    /// Per-request timeout (default: 10 s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<WebsiteContext, ContextError> {
        let base_url = self.base_url.trim_end_matches('/').to_owned();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ContextError::InvalidBaseUrl(self.base_url));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("it-IT,it;q=0.9,en-US;q=0.5"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(self.timeout)
            .build()?;

        Ok(WebsiteContext {
            base_url,
            client,
            cache: Mutex::new(HashMap::new()),
        })
    }
}

/// Fetches pages of one website and turns them into prompt context.
///
/// Successfully fetched page text is kept in an in-memory map for the
/// lifetime of the value; nothing is ever evicted.
#[derive(Debug)]
pub struct WebsiteContext {
    base_url: String,
    client: Client,
    cache: Mutex<HashMap<SitePage, String>>,
}

impl WebsiteContext {
    pub fn builder(base_url: impl Into<String>) -> WebsiteContextBuilder {
        WebsiteContextBuilder {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of pages currently cached.
    pub fn cached_pages(&self) -> usize {
        self.cache.lock().map(|c| c.len()).unwrap_or(0)
    }

    /// Plain text of `page`, from the cache or the network.
    ///
    /// Returns `None` (after logging) when the page cannot be retrieved.
    pub async fn page_text(&self, page: SitePage) -> Option<String> {
        if let Ok(cache) = self.cache.lock() {
            if let Some(text) = cache.get(&page) {
                debug!(%page, "using cached page content");
                return Some(text.clone());
            }
        }

        match self.fetch_page(page).await {
            Ok(text) => {
                info!(%page, chars = text.chars().count(), "page content downloaded");
                if let Ok(mut cache) = self.cache.lock() {
                    cache.insert(page, text.clone());
                }
                Some(text)
            }
            Err(ContextError::Forbidden { url }) => {
                warn!(%page, %url, "page access forbidden");
                None
            }
            Err(e) => {
                warn!(%page, error = %e, "site unreachable");
                None
            }
        }
    }

    async fn fetch_page(&self, page: SitePage) -> Result<String, ContextError> {
        let url = format!("{}{}", self.base_url, page.path());
        debug!(%url, "downloading page");

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::FORBIDDEN {
            return Err(ContextError::Forbidden { url });
        }
        let html = response.error_for_status()?.text().await?;
        Ok(html_to_text(&html))
    }

    /// Context for `query`: detects the relevant pages and summarises them.
    pub async fn search(&self, query: &str) -> String {
        let pages = detect_relevant_pages(query);
        self.context_for(query, &pages).await
    }

    /// Summarise `pages` for `query`, or return fallback text when none of
    /// them yields extractable facts. Never fails.
    pub async fn context_for(&self, query: &str, pages: &[SitePage]) -> String {
        debug!(?pages, "consulting website pages");

        let mut extracted = Vec::with_capacity(pages.len());
        for &page in pages {
            let Some(text) = self.page_text(page).await else {
                continue;
            };
            let facts = extract_key_information(&text, page);
            if !facts.is_empty() {
                extracted.push((page, facts));
            }
        }

        if extracted.is_empty() {
            info!("no website page usable; using fallback text");
            return fallback_for(query);
        }

        format_summary(&extracted).unwrap_or_else(|| {
            info!("nothing worth reporting in website pages; using fallback text");
            fallback_for(query)
        })
    }
}
