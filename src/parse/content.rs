//! Content extraction for audited pages
//!
//! Strips non-content subtrees (scripts, styles, navigation, footers,
//! iframes and ad blocks), then collects headings, JSON-LD blocks and the
//! visible body text.

use crate::parse::{collapse_whitespace, Headings, PageContent};
use scraper::{ElementRef, Html, Selector};

/// Character budget for extracted body text
pub const MAX_TEXT_CHARS: usize = 15_000;

/// Elements whose whole subtree is dropped
const STRIPPED_TAGS: &[&str] = &["script", "style", "nav", "footer", "iframe"];

/// Class names that mark an advertisement block
const AD_CLASSES: &[&str] = &["ads", "advertisement"];

/// Elements that separate words when their text is concatenated
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "ol", "p",
    "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Extracts the readable content of a page
///
/// Never fails: a document with nothing recognisable produces an empty
/// [`PageContent`] (see [`PageContent::is_empty`]). A JSON-LD block that does
/// not parse is skipped without affecting the rest of the extraction.
pub fn parse_page_content(html: &str) -> PageContent {
    let document = Html::parse_document(html);

    let text = extract_visible_text(&document);
    let word_count = text.split_whitespace().count();

    PageContent {
        title: extract_title(&document),
        headings: extract_headings(&document),
        text,
        meta_description: extract_meta_description(&document),
        word_count,
        structured_data: extract_structured_data(&document),
    }
}

fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .map(|element| collapse_whitespace(&element.text().collect::<String>()))
        .unwrap_or_default()
}

fn extract_meta_description(document: &Html) -> String {
    let Ok(selector) = Selector::parse(r#"meta[name="description"]"#) else {
        return String::new();
    };

    document
        .select(&selector)
        .find_map(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

fn extract_headings(document: &Html) -> Headings {
    Headings {
        h1: heading_texts(document, "h1"),
        h2: heading_texts(document, "h2"),
        h3: heading_texts(document, "h3"),
    }
}

/// Non-empty heading texts of one level, skipping stripped subtrees
fn heading_texts(document: &Html, level: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(level) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter(|element| !is_inside_stripped(element))
        .map(|element| collapse_whitespace(&element.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect()
}

fn extract_structured_data(document: &Html) -> Vec<serde_json::Value> {
    let Ok(selector) = Selector::parse(r#"script[type="application/ld+json"]"#) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| {
            let raw = element.text().collect::<String>();
            match serde_json::from_str::<serde_json::Value>(raw.trim()) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::trace!("Skipping invalid JSON-LD block: {}", e);
                    None
                }
            }
        })
        .collect()
}

fn extract_visible_text(document: &Html) -> String {
    let root = Selector::parse("body")
        .ok()
        .and_then(|selector| document.select(&selector).next())
        .unwrap_or_else(|| document.root_element());

    let mut raw = String::new();
    collect_visible_text(root, &mut raw);

    let text = collapse_whitespace(&raw);
    truncate_chars(&text, MAX_TEXT_CHARS)
}

/// Appends the text of `element`, descending into every kept child
fn collect_visible_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if is_stripped(&child_element) {
                continue;
            }

            let is_block = BLOCK_TAGS.contains(&child_element.value().name());
            if is_block {
                out.push(' ');
            }
            collect_visible_text(child_element, out);
            if is_block {
                out.push(' ');
            }
        }
    }
}

fn is_stripped(element: &ElementRef<'_>) -> bool {
    let value = element.value();
    STRIPPED_TAGS.contains(&value.name()) || value.classes().any(|c| AD_CLASSES.contains(&c))
}

fn is_inside_stripped(element: &ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| is_stripped(&ancestor))
}

/// Cuts `text` to at most `max_chars` characters on a char boundary
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].trim_end().to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title_and_meta() {
        let html = r#"<html><head><title> Guide to Shoes </title>
            <meta name="description" content=" Everything about shoes. "></head>
            <body><p>Body</p></body></html>"#;

        let content = parse_page_content(html);

        assert_eq!(content.title, "Guide to Shoes");
        assert_eq!(content.meta_description, "Everything about shoes.");
    }

    #[test]
    fn test_strip_non_content_subtrees() {
        let html = r#"<html><body>
            <nav>Home About</nav>
            <script>var tracking = 1;</script>
            <style>.x { color: red; }</style>
            <div class="sidebar ads">Buy now</div>
            <div class="advertisement">Sponsored</div>
            <iframe src="https://ads.example.com"></iframe>
            <p>Real content here.</p>
            <footer>Copyright</footer>
        </body></html>"#;

        let content = parse_page_content(html);

        assert_eq!(content.text, "Real content here.");
        assert_eq!(content.word_count, 3);
    }

    #[test]
    fn test_headings_in_document_order() {
        let html = r#"<html><body>
            <h1>Main</h1>
            <h2>First section</h2>
            <h3>Detail A</h3>
            <h2>Second section</h2>
            <h3>Detail B</h3>
        </body></html>"#;

        let content = parse_page_content(html);

        assert_eq!(content.headings.h1, vec!["Main"]);
        assert_eq!(
            content.headings.h2,
            vec!["First section", "Second section"]
        );
        assert_eq!(content.headings.h3, vec!["Detail A", "Detail B"]);
    }

    #[test]
    fn test_headings_in_stripped_subtrees_ignored() {
        let html = r#"<html><body>
            <nav><h2>Menu</h2></nav>
            <h2>Article</h2>
            <footer><h3>Links</h3></footer>
        </body></html>"#;

        let content = parse_page_content(html);

        assert_eq!(content.headings.h2, vec!["Article"]);
        assert!(content.headings.h3.is_empty());
    }

    #[test]
    fn test_structured_data_skips_invalid_blocks() {
        let html = r#"<html><head>
            <script type="application/ld+json">{"@type": "Article", "headline": "Shoes"}</script>
            <script type="application/ld+json">{ not json </script>
            <script type="application/ld+json">[{"@type": "FAQPage"}]</script>
        </head><body><p>Text</p></body></html>"#;

        let content = parse_page_content(html);

        assert_eq!(content.structured_data.len(), 2);
        assert_eq!(content.structured_data[0]["@type"], "Article");
        assert_eq!(content.structured_data[1][0]["@type"], "FAQPage");
        assert_eq!(content.text, "Text");
    }

    #[test]
    fn test_block_elements_separate_words() {
        let html = "<html><body><p>one</p><p>two</p><ul><li>three</li><li>four</li></ul></body></html>";
        let content = parse_page_content(html);
        assert_eq!(content.text, "one two three four");
    }

    #[test]
    fn test_inline_elements_do_not_split_words() {
        let html = "<html><body><p>re<b>mark</b>able text</p></body></html>";
        let content = parse_page_content(html);
        assert_eq!(content.text, "remarkable text");
    }

    #[test]
    fn test_whitespace_normalised() {
        let html = "<html><body><p>  lots \n\n of\t\tspace  </p></body></html>";
        let content = parse_page_content(html);
        assert_eq!(content.text, "lots of space");
        assert_eq!(content.word_count, 3);
    }

    #[test]
    fn test_text_capped_at_budget() {
        let body = "word ".repeat(5_000);
        let html = format!("<html><body><p>{}</p></body></html>", body);

        let content = parse_page_content(&html);

        assert!(content.text.chars().count() <= MAX_TEXT_CHARS);
        assert_eq!(content.word_count, content.text.split_whitespace().count());
        assert_eq!(content.word_count, 3_000);
    }

    #[test]
    fn test_truncate_multibyte_boundary() {
        let text = "é".repeat(10);
        assert_eq!(truncate_chars(&text, 4), "éééé");
        assert_eq!(truncate_chars("short", 10), "short");
    }

    #[test]
    fn test_malformed_html_best_effort() {
        let html = "<html><body><h2>Unclosed <p>paragraph <div>still here";
        let content = parse_page_content(html);
        assert!(content.text.contains("still here"));
        assert!(!content.headings.h2.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let content = parse_page_content("");
        assert!(content.is_empty());
        assert_eq!(content.word_count, 0);
    }
}
