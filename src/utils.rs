/// Convert a URL to a filename safe for writing summaries to disk
pub fn summary_filename(url: &str) -> String {
    // Drop the protocol and replace characters that are invalid in filenames
    let name: String = url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .chars()
        .map(|c| match c {
            '/' | ':' | '?' | '&' | '=' | '#' | '%' => '_',
            other => other,
        })
        .take(100)
        .collect();

    format!("{}.md", name.trim_end_matches('_'))
}
