//! Pages of the company website and the keywords that select them.

use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// A page of the website that can supply context.
///
/// Declaration order is the table order used by [`detect_relevant_pages`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum SitePage {
    Home,
    Pricing,
    Company,
    Blog,
    Careers,
    Contact,
}

impl SitePage {
    /// Path relative to the site base URL.
    pub fn path(self) -> &'static str {
        match self {
            SitePage::Home => "/",
            SitePage::Pricing => "/pricing",
            SitePage::Company => "/company",
            SitePage::Blog => "/blog",
            SitePage::Careers => "/careers",
            SitePage::Contact => "/contact",
        }
    }

    /// Lower-case substrings of a query that make this page relevant.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            SitePage::Home => &["generale", "home", "informazioni", "descrizione", "chi siete"],
            SitePage::Pricing => &[
                "prezzo", "costo", "quanto costa", "pricing", "piano", "abbonamento", "tariffe",
                "prezzi",
            ],
            SitePage::Company => &[
                "azienda", "chi siete", "storia", "team", "fondatori", "company", "about",
                "mission",
            ],
            SitePage::Blog => &[
                "blog", "articoli", "news", "notizie", "aggiornamenti", "post", "contenuti",
            ],
            SitePage::Careers => &[
                "lavoro", "carriere", "assunzioni", "posizioni", "jobs", "careers",
                "opportunità", "hiring",
            ],
            SitePage::Contact => &[
                "contatti", "email", "telefono", "indirizzo", "contact", "sede", "ufficio",
            ],
        }
    }

    /// Upper-case label used in formatted summaries and fallback tags.
    pub fn label(self) -> &'static str {
        match self {
            SitePage::Home => "HOME",
            SitePage::Pricing => "PRICING",
            SitePage::Company => "COMPANY",
            SitePage::Blog => "BLOG",
            SitePage::Careers => "CAREERS",
            SitePage::Contact => "CONTACT",
        }
    }
}

/// Every page with a keyword contained in `query`, in table order.
///
/// Returns `[SitePage::Home]` when nothing matches, so the result is never
/// empty.
pub fn detect_relevant_pages(query: &str) -> Vec<SitePage> {
    let lowered = query.to_lowercase();
    let mut pages: Vec<SitePage> = SitePage::iter()
        .filter(|page| page.keywords().iter().any(|kw| lowered.contains(kw)))
        .collect();
    if pages.is_empty() {
        pages.push(SitePage::Home);
    }
    pages
}
