pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

/// Result of extracting readable content from a fetched document
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Extracted document title, if present
    pub title: Option<String>,
    /// Extracted text content
    pub text: String,
}

impl Extraction {
    /// Creates a new extraction result with the given title and text
    pub fn new(title: Option<String>, text: String) -> Self {
        Self { title, text }
    }
}

/// Extracts the title and cleaned, model-ready text from an HTML document
///
/// This is the full extraction pipeline: HTML parsing with noise removal
/// followed by the short-line cleaning pass.
pub fn extract_readable(raw_html: &str, options: &text::CleanOptions) -> Extraction {
    let extraction = html::extract(raw_html);
    let cleaned = text::clean_with_options(&extraction.text, options);
    Extraction::new(extraction.title, cleaned)
}
