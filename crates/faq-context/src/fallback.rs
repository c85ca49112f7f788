//! Hard-coded context used when the website yields nothing usable.

use crate::site::SitePage;

struct Fallback {
    page: SitePage,
    text: &'static str,
    keywords: &'static [&'static str],
}

/// Checked in order; the first keyword hit wins.
static PAGE_FALLBACKS: &[Fallback] = &[
    Fallback {
        page: SitePage::Pricing,
        text: "Offriamo piani personalizzati in base al numero delle richieste/volume dell'azienda. \
               Contattaci per un preventivo su misura.",
        keywords: &["prezzo", "costo", "piano", "pricing"],
    },
    Fallback {
        page: SitePage::Company,
        text: "Alomana è una startup tech innovativa di Milano specializzata in soluzioni AI. \
               Il nostro team sviluppa tecnologie all'avanguardia per aziende.",
        keywords: &["azienda", "team", "storia", "mission"],
    },
    Fallback {
        page: SitePage::Careers,
        text: "Alomana è sempre alla ricerca di talenti nel settore AI e tech. \
               Siamo una startup in crescita con sede a Milano.",
        keywords: &["lavoro", "carriere", "posizioni"],
    },
    Fallback {
        page: SitePage::Contact,
        text: "Alomana ha sede a Milano con team distribuito. \
               Contattaci tramite il nostro sito web per informazioni specifiche.",
        keywords: &["contatti", "sede", "email"],
    },
    Fallback {
        page: SitePage::Blog,
        text: "Il nostro blog copre argomenti su AI, startup, tecnologia e innovazione nel settore tech.",
        keywords: &["blog", "articoli", "news"],
    },
];

const GENERAL_FALLBACK: &str = "Alomana è una startup tech che sviluppa soluzioni AI innovative \
                                per aziende che gestiscono grandi volumi di documenti, con sede a Milano.";

/// Fallback text for `query`, tagged with the page it stands in for.
pub fn fallback_for(query: &str) -> String {
    let lowered = query.to_lowercase();
    PAGE_FALLBACKS
        .iter()
        .find(|fb| fb.keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|fb| format!("[FALLBACK - {}] {}", fb.page.label(), fb.text))
        .unwrap_or_else(|| format!("[FALLBACK] {GENERAL_FALLBACK}"))
}
