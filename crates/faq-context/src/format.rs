//! Formatting of extracted facts into a single context line.

use crate::extract::PageFacts;
use crate::site::SitePage;

const MENTION_CHARS: usize = 150;

/// (label, field, how many values to show)
type Part = (&'static str, &'static str, usize);

fn page_parts(page: SitePage) -> &'static [Part] {
    match page {
        SitePage::Pricing => &[("Piani", "plans", 3), ("Prezzi", "prices", 3)],
        SitePage::Company => &[("Team", "team_info", 2), ("Mission", "mission", 1)],
        SitePage::Careers => &[("Posizioni", "positions", 2), ("Benefici", "benefits", 2)],
        SitePage::Contact => &[("Email", "email", 1), ("Tel", "phone", 1), ("Indirizzo", "address", 1)],
        SitePage::Blog => &[("Post recenti", "recent_posts", 2), ("Argomenti", "topics", 3)],
        SitePage::Home => &[],
    }
}

/// Render the facts of every page that produced some, in the given order.
///
/// Returns `None` when no section could be built, in which case the caller
/// should use fallback text instead.
pub fn format_summary(pages: &[(SitePage, PageFacts)]) -> Option<String> {
    let mut sections: Vec<String> = Vec::new();

    for (page, facts) in pages {
        let parts: Vec<String> = page_parts(*page)
            .iter()
            .filter_map(|(label, field, take)| {
                let values = facts.get(field);
                if values.is_empty() {
                    return None;
                }
                let shown = &values[..values.len().min(*take)];
                Some(format!("{label}: {}", shown.join(", ")))
            })
            .collect();
        if !parts.is_empty() {
            sections.push(format!("{}: {}", page.label(), parts.join(" | ")));
        }

        if let Some(mention) = facts.get("alomana_mentions").first() {
            let short: String = mention.chars().take(MENTION_CHARS).collect();
            sections.push(format!("Info Alomana: {short}..."));
        }
    }

    if sections.is_empty() {
        None
    } else {
        Some(format!("[WEBSITE] {}", sections.join(" || ")))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::extract::extract_key_information;

    #[test]
    fn pricing_and_contact_sections() {
        let pricing = extract_key_information(
            "Piano Pro 49 euro al mese. Piano Team 99 euro al mese.",
            SitePage::Pricing,
        );
        let contact = extract_key_information(
            "Scrivici: ciao@alomana.com",
            SitePage::Contact,
        );
        let summary = format_summary(&[
            (SitePage::Pricing, pricing),
            (SitePage::Contact, contact),
        ])
        .expect("summary");
        assert_eq!(
            summary,
            "[WEBSITE] PRICING: Piani: Pro 49 euro al mese, Team 99 euro al mese \
             | Prezzi: 49 euro, 99 euro || CONTACT: Email: ciao@alomana.com"
        );
    }

    #[test]
    fn mention_is_truncated() {
        let long = format!("Alomana {}.", "x".repeat(400));
        let facts = extract_key_information(&long, SitePage::Home);
        let summary = format_summary(&[(SitePage::Home, facts)]).expect("summary");
        assert_eq!(summary, format!("[WEBSITE] Info Alomana: {}...", "x".repeat(150)));
    }

    #[test]
    fn general_facts_alone_do_not_make_a_section() {
        let facts = extract_key_information("Una soluzione per tutti.", SitePage::Home);
        assert!(!facts.is_empty());
        assert_eq!(format_summary(&[(SitePage::Home, facts)]), None);
    }
}
