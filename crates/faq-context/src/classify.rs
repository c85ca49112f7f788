//! Query routing: FAQ answer or website lookup.

use crate::faq::{FaqEntry, match_faq};
use crate::site::{SitePage, detect_relevant_pages};

/// Where the material for answering a message comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The message is one of the fixed FAQ questions.
    Faq(&'static FaqEntry),
    /// The message needs website content from these pages (never empty).
    Website(Vec<SitePage>),
}

impl Route {
    /// Short tag reported to API callers.
    pub fn source(&self) -> &'static str {
        match self {
            Route::Faq(_) => "faq",
            Route::Website(_) => "website",
        }
    }
}

/// Classify `message`. An FAQ match always wins over website pages.
pub fn classify(message: &str) -> Route {
    match match_faq(message) {
        Some(entry) => Route::Faq(entry),
        None => Route::Website(detect_relevant_pages(message)),
    }
}
