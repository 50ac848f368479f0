use crate::parsers::html;
use crate::parsers::text::CleanOptions;
use crate::parsers::extract_readable;

#[test]
fn test_title_extraction() {
    let result = html::extract("<html><head><title> My Page </title></head><body></body></html>");
    assert_eq!(result.title.as_deref(), Some("My Page"));

    // Missing title
    let result = html::extract("<html><head></head><body><p>content</p></body></html>");
    assert!(result.title.is_none());

    // Empty title collapses to none
    let result = html::extract("<html><head><title>  </title></head><body></body></html>");
    assert!(result.title.is_none());
}

#[test]
fn test_noise_elements_are_removed() {
    let html = "<html><body>\
        <nav>Home About Contact</nav>\
        <header>Site header banner text</header>\
        <p>Actual readable article content here.</p>\
        <script>var tracking = true;</script>\
        <style>p { color: red; }</style>\
        <footer>Copyright notice in the footer</footer>\
        </body></html>";

    let result = html::extract(html);

    assert!(result.text.contains("Actual readable article content here."));
    assert!(!result.text.contains("Home About Contact"));
    assert!(!result.text.contains("Site header banner text"));
    assert!(!result.text.contains("tracking"));
    assert!(!result.text.contains("color: red"));
    assert!(!result.text.contains("Copyright notice"));
}

#[test]
fn test_fragments_are_joined_with_newlines() {
    let html = "<html><body>\
        <p>First paragraph of the page.</p>\
        <p>Second paragraph of the page.</p>\
        </body></html>";

    let result = html::extract(html);
    assert_eq!(
        result.text,
        "First paragraph of the page.\nSecond paragraph of the page."
    );
}

#[test]
fn test_document_without_body_falls_back_to_whole_document() {
    // The html5ever tree builder synthesizes a body for normal documents,
    // so exercise the fallback through a bare fragment-like input
    let result = html::extract("just some plain text with no markup at all");
    assert!(result.text.contains("just some plain text with no markup at all"));
}

#[test]
fn test_full_extraction_pipeline() {
    // The exact shape summarization depends on: navigation is removed and
    // short stray lines are filtered, long content survives
    let html = "<html><head><title>T</title></head><body>\
        <nav>Home</nav>\
        <p>Short</p>\
        <p>This is a sufficiently long paragraph of content.</p>\
        </body></html>";

    let result = extract_readable(html, &CleanOptions::default());

    assert_eq!(result.title.as_deref(), Some("T"));
    assert!(!result.text.contains("Home"));
    assert!(!result.text.contains("Short"));
    assert_eq!(
        result.text,
        "This is a sufficiently long paragraph of content."
    );
}
