//! Query routing and context assembly for the FAQ chatbot.
//!
//! A user message is either one of the fixed FAQ questions or something the
//! company website may answer. [`prepare`] classifies the message, fetches
//! and summarises the relevant website pages when needed, and assembles the
//! [`Prompt`] for the language model.
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), faq_context::ContextError> {
//! let site = faq_context::WebsiteContext::builder("https://alomana.com").build()?;
//! let prepared = faq_context::prepare(&site, "Quali sono i prezzi?").await;
//! println!("{}", prepared.prompt.system);
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod faq;
pub mod fetcher;
pub mod format;
pub mod html;
pub mod prompt;
pub mod site;

pub use classify::{Route, classify};
pub use error::ContextError;
pub use faq::{FAQ, FaqEntry, OUT_OF_SCOPE_REPLY, match_faq};
pub use fetcher::{WebsiteContext, WebsiteContextBuilder};
pub use prompt::{PreparedQuery, Prompt, build_prompt, prepare};
pub use site::{SitePage, detect_relevant_pages};
