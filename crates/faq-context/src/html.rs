//! HTML to plain text.

use std::sync::LazyLock;

use html2text::render::text_renderer::TrivialDecorator;
use regex::Regex;

/// Elements dropped together with their content.
const STRIPPED_ELEMENTS: [&str; 4] = ["script", "style", "nav", "footer"];

/// Wide enough that html2text never breaks a word; lines are joined anyway.
const RENDER_WIDTH: usize = 10_000;

static ELEMENT_BLOCKS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    STRIPPED_ELEMENTS
        .iter()
        .map(|tag| {
            Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}\s*>"))
                .expect("element pattern is valid")
        })
        .collect()
});

/// Strip markup from `html` and collapse whitespace.
///
/// `script`, `style`, `nav` and `footer` elements are removed with their
/// content before the document is parsed. html2text handles the rest:
/// entity decoding, attribute quoting, comments.
pub fn html_to_text(html: &str) -> String {
    let mut cleaned = html.to_owned();
    for block in ELEMENT_BLOCKS.iter() {
        if block.is_match(&cleaned) {
            cleaned = block.replace_all(&cleaned, " ").into_owned();
        }
    }
    let text =
        html2text::from_read_with_decorator(cleaned.as_bytes(), RENDER_WIDTH, TrivialDecorator::new());
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::extract::extract_key_information;
    use crate::site::SitePage;

    #[test]
    fn drops_scripts_styles_and_navigation() {
        let html = r#"<html><head><style>body { color: red; }</style>
            <script type="text/javascript">var x = "<b>";</script></head>
            <body><nav><a href="/">Home</a></nav>
            <h1>Alomana</h1><p>Soluzioni   AI
            per documenti</p><footer>© 2025</footer></body></html>"#;
        assert_eq!(html_to_text(html), "Alomana Soluzioni AI per documenti");
    }

    #[test]
    fn decodes_common_entities() {
        assert_eq!(
            html_to_text("<p>R&amp;D &lt;team&gt;&nbsp;&quot;AI&quot;</p>"),
            "R&D <team> \"AI\""
        );
    }

    #[test]
    fn decodes_named_and_numeric_entities() {
        assert_eq!(
            html_to_text("<p>opportunit&agrave; &egrave; &#224; 49&euro; 19&#8364;</p>"),
            "opportunità è à 49€ 19€"
        );
    }

    #[test]
    fn quoted_angle_bracket_in_attribute_is_not_a_tag_end() {
        assert_eq!(
            html_to_text(r#"<p><a title="a>b" href="/x">Contatti</a></p>"#),
            "Contatti"
        );
    }

    #[test]
    fn entity_encoded_prices_reach_the_extractor() {
        let text = html_to_text(
            "<p>Piano Pro 49&euro; al mese</p><p>Piano Base 19&#8364; al mese</p>",
        );
        let facts = extract_key_information(&text, SitePage::Pricing);
        let prices = facts.get("prices");
        assert!(prices.iter().any(|p| p.contains("49€")), "{prices:?}");
        assert!(prices.iter().any(|p| p.contains("19€")), "{prices:?}");
    }

    #[test]
    fn removes_comments_and_uppercase_tags() {
        assert_eq!(
            html_to_text("<DIV>uno<!-- nascosto --></DIV><SCRIPT>x()</SCRIPT>due"),
            "uno due"
        );
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(html_to_text("  solo testo  "), "solo testo");
    }
}
