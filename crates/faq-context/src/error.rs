use thiserror::Error;

/// Errors that can be returned while fetching website pages.
///
/// These never reach the HTTP caller: [`crate::WebsiteContext::search`]
/// logs them and degrades to fallback text.
#[derive(Debug, Error)]
pub enum ContextError {
    /// An HTTP request failed (network error, timeout, non-2xx status, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The site refused the request with `403 Forbidden`.
    #[error("access forbidden: {url}")]
    Forbidden { url: String },

    /// The configured base URL is not an absolute http(s) URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
