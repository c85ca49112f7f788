//! Regex extraction of loosely patterned facts from page text.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::site::SitePage;

/// Facts extracted from one page, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageFacts {
    fields: BTreeMap<&'static str, Vec<String>>,
}

impl PageFacts {
    /// Values for `field`, empty when nothing was extracted.
    pub fn get(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        self.fields.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    fn insert(&mut self, field: &'static str, values: Vec<String>) {
        if !values.is_empty() {
            self.fields.insert(field, values);
        }
    }
}

struct PatternSet {
    limit: usize,
    dedup: bool,
    patterns: Vec<(&'static str, Regex)>,
}

impl PatternSet {
    fn new(limit: usize, dedup: bool, patterns: &[(&'static str, &str)]) -> Self {
        let patterns = patterns
            .iter()
            .map(|(field, pattern)| {
                (*field, Regex::new(pattern).expect("extraction pattern is valid"))
            })
            .collect();
        Self { limit, dedup, patterns }
    }

    fn apply(&self, content: &str, facts: &mut PageFacts) {
        for (field, regex) in &self.patterns {
            facts.insert(*field, find_values(regex, content, self.limit, self.dedup));
        }
    }
}

static PRICING: LazyLock<PatternSet> = LazyLock::new(|| {
    PatternSet::new(5, false, &[
        ("plans", r"(?i)(piano|plan|package|tier)\s+([a-zA-Z0-9\s]+)"),
        ("prices", r"(?i)[€$]?\s*\d+[.,]?\d*\s*(?:euro|€|\$|al mese|month|anno|year)"),
        ("features", r"(?i)(incluso|include|feature|caratteristica):\s*([^.]+)"),
    ])
});

static COMPANY: LazyLock<PatternSet> = LazyLock::new(|| {
    PatternSet::new(3, false, &[
        ("team_info", r"(?i)(fondatore|founder|ceo|team|staff):\s*([^.]+)"),
        ("mission", r"(?i)(mission|missione|obiettivo|goal):\s*([^.]+)"),
        ("history", r"(?i)(storia|fondat|nasce|history|started)([^.]+)"),
    ])
});

static CAREERS: LazyLock<PatternSet> = LazyLock::new(|| {
    PatternSet::new(3, false, &[
        ("positions", r"(?i)(posizione|position|job|lavoro):\s*([^.]+)"),
        ("requirements", r"(?i)(richiesto|required|requisiti):\s*([^.]+)"),
        ("benefits", r"(?i)(benefit|vantaggi|offriamo):\s*([^.]+)"),
    ])
});

static CONTACT: LazyLock<PatternSet> = LazyLock::new(|| {
    PatternSet::new(3, true, &[
        ("email", r"([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})"),
        ("phone", r"(\+?\d{1,3}[\s-]?\d{2,3}[\s-]?\d{3,4}[\s-]?\d{3,4})"),
        ("address", r"(?i)(via|address|indirizzo):\s*([^.]+)"),
    ])
});

static BLOG: LazyLock<PatternSet> = LazyLock::new(|| {
    PatternSet::new(5, false, &[
        ("recent_posts", r"(?i)(articolo|post|blog):\s*([^.]+)"),
        ("topics", r"(?i)(ai|artificial intelligence|machine learning|startup|tech)([^.]*)"),
    ])
});

static GENERAL: LazyLock<PatternSet> = LazyLock::new(|| {
    PatternSet::new(3, false, &[
        ("alomana_mentions", r"(?i)(alomana)([^.]*)"),
        ("ai_services", r"(?i)(ai|artificial intelligence|intelligenza artificiale)([^.]*)"),
        ("solutions", r"(?i)(soluzione|solution|servizio|service)([^.]*)"),
    ])
});

fn page_patterns(page: SitePage) -> Option<&'static PatternSet> {
    match page {
        SitePage::Pricing => Some(&*PRICING),
        SitePage::Company => Some(&*COMPANY),
        SitePage::Careers => Some(&*CAREERS),
        SitePage::Contact => Some(&*CONTACT),
        SitePage::Blog => Some(&*BLOG),
        SitePage::Home => None,
    }
}

/// Extract page-specific facts plus the general facts every page carries.
pub fn extract_key_information(content: &str, page: SitePage) -> PageFacts {
    let mut facts = PageFacts::default();
    if let Some(set) = page_patterns(page) {
        set.apply(content, &mut facts);
    }
    GENERAL.apply(content, &mut facts);
    facts
}

/// Up to `limit` non-empty values of `regex` in `content`.
///
/// The value is group 2 when the pattern has two or more groups, group 1
/// when it has one, and the whole match otherwise.
fn find_values(regex: &Regex, content: &str, limit: usize, dedup: bool) -> Vec<String> {
    let group = match regex.captures_len() {
        0 | 1 => 0,
        2 => 1,
        _ => 2,
    };
    let mut values: Vec<String> = Vec::new();
    for caps in regex.captures_iter(content) {
        if values.len() >= limit {
            break;
        }
        let Some(m) = caps.get(group) else { continue };
        let value = m.as_str().trim();
        if value.is_empty() || (dedup && values.iter().any(|v| v == value)) {
            continue;
        }
        values.push(value.to_owned());
    }
    values
}
