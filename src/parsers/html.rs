use crate::parsers::Extraction;
use scraper::{Html, Selector};

/// Elements inside `<body>` that carry presentational or navigational noise
/// rather than readable content. They are detached before text extraction.
const NOISE_SELECTOR: &str =
    "body script, body style, body img, body input, body nav, body header, body footer";

/// Parses an HTML document and extracts its title and readable body text
///
/// Noise elements (scripts, styles, images, inputs, navigation chrome) are
/// removed from the body subtree first, then the remaining text nodes are
/// collected depth-first, trimmed per fragment and joined with newlines.
/// When the document has no `<body>`, text is taken from the whole document
/// the same way.
pub fn extract(html: &str) -> Extraction {
    let mut doc = Html::parse_document(html);

    let title = extract_title(&doc);
    strip_noise(&mut doc);
    let text = extract_text(&doc);

    ::log::debug!(
        "HTML extraction produced {} characters of text",
        text.len()
    );

    Extraction::new(title, text)
}

/// Extracts the trimmed `<title>` text, if the document has one
fn extract_title(doc: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").unwrap();

    doc.select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Detaches noise elements from the body subtree
fn strip_noise(doc: &mut Html) {
    let noise_selector = Selector::parse(NOISE_SELECTOR).unwrap();

    let noise_ids = doc
        .select(&noise_selector)
        .map(|el| el.id())
        .collect::<Vec<_>>();

    ::log::debug!("Removing {} noise elements", noise_ids.len());

    for id in noise_ids {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Collects text fragments depth-first, one trimmed fragment per line
fn extract_text(doc: &Html) -> String {
    let body_selector = Selector::parse("body").unwrap();

    let fragments: Vec<&str> = match doc.select(&body_selector).next() {
        Some(body) => body.text().collect(),
        // No body at all, fall back to the whole document
        None => doc.root_element().text().collect(),
    };

    fragments
        .iter()
        .map(|fragment| fragment.trim())
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
