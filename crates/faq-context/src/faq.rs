//! The fixed FAQ set.
//!
//! Questions are answered verbatim by the model; [`match_faq`] decides
//! whether an incoming message is one of them.

/// A single pre-authored question/answer pair.
#[derive(Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    /// Lower-case substrings that identify the question in a user message.
    pub keywords: &'static [&'static str],
}

/// Reply for anything outside the FAQ set.
pub const OUT_OF_SCOPE_REPLY: &str = "Mi dispiace, posso rispondere solo alle FAQ aziendali.";

pub static FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Che prodotto sviluppate?",
        answer: "Sviluppiamo soluzioni AI",
        keywords: &["che prodotto", "cosa sviluppate", "prodotto sviluppate", "what do you build"],
    },
    FaqEntry {
        question: "Dove avete la sede?",
        answer: "Siamo una startup di Milano con team remoto",
        keywords: &["dove avete la sede", "dove siete", "dove si trova la sede", "where are you based"],
    },
    FaqEntry {
        question: "Come funziona il vostro prodotto?",
        answer: "Utilizziamo Vertex AI di Google",
        keywords: &["come funziona", "how does it work"],
    },
    FaqEntry {
        question: "Chi può usare il prodotto?",
        answer: "Aziende che gestiscono grandi volumi di documenti",
        keywords: &["chi può usare", "chi puo usare", "a chi è rivolto", "who can use"],
    },
    FaqEntry {
        question: "Quanto costa?",
        answer: "Offriamo piani personalizzati in base al numero delle richieste/volume dell'azienda",
        keywords: &["quanto costa", "how much does it cost"],
    },
];

/// Return the first FAQ entry (table order) whose keyword occurs in `message`.
pub fn match_faq(message: &str) -> Option<&'static FaqEntry> {
    let lowered = message.to_lowercase();
    FAQ.iter()
        .find(|entry| entry.keywords.iter().any(|kw| lowered.contains(kw)))
}
