//! Prompt assembly.

use std::fmt::Write as _;

use tracing::debug;

use crate::classify::{Route, classify};
use crate::faq::{FAQ, OUT_OF_SCOPE_REPLY};
use crate::fetcher::WebsiteContext;

/// A prompt ready to send to a chat model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// System instruction: FAQ rules plus any extra context.
    pub system: String,
    /// The user's turn.
    pub user: String,
}

/// Result of routing a message and assembling its prompt.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    pub route: Route,
    /// Website text merged into the prompt; `None` for FAQ routes.
    pub website_context: Option<String>,
    pub prompt: Prompt,
}

fn faq_rules() -> String {
    let mut rules = String::from("1. Rispondi SOLO alle seguenti FAQ della startup tech:\n");
    for entry in FAQ {
        let _ = writeln!(rules, "   - \"{}\" → \"{}\"", entry.question, entry.answer);
    }
    let _ = write!(
        rules,
        "\n2. Se l'utente chiede qualcosa NON nelle FAQ sopra, rispondi:\n   \"{OUT_OF_SCOPE_REPLY}\"\n\
         \n3. Non inventare informazioni non presenti nelle FAQ sopra."
    );
    rules
}

/// Build the prompt for `message` given its route and optional website text.
pub fn build_prompt(message: &str, route: &Route, website_context: Option<&str>) -> Prompt {
    let mut system = faq_rules();

    match route {
        Route::Faq(entry) => {
            let _ = write!(
                system,
                "\n\nLa domanda dell'utente corrisponde alla FAQ \"{}\".",
                entry.question
            );
        }
        Route::Website(_) => {
            if let Some(context) = website_context.filter(|c| !c.trim().is_empty()) {
                let _ = write!(
                    system,
                    "\n\n4. Puoi usare anche le seguenti informazioni dal sito web aziendale, \
                     senza aggiungere altro:\n{context}"
                );
            }
        }
    }

    Prompt {
        system,
        user: message.trim().to_owned(),
    }
}

/// Route `message`, fetch website context when the route needs it, and
/// assemble the prompt.
pub async fn prepare(site: &WebsiteContext, message: &str) -> PreparedQuery {
    let route = classify(message);
    debug!(source = route.source(), ?route, "message classified");

    let website_context = match &route {
        Route::Faq(_) => None,
        Route::Website(pages) => Some(site.context_for(message, pages).await),
    };
    let prompt = build_prompt(message, &route, website_context.as_deref());

    PreparedQuery {
        route,
        website_context,
        prompt,
    }
}
