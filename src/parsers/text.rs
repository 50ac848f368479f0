/// Configuration options for text cleaning
#[derive(Debug, Clone, Copy)]
pub struct CleanOptions {
    /// Lines whose trimmed length is at or below this many characters are
    /// dropped. Lines that short are most likely navigation labels, menu
    /// entries or other page furniture rather than readable content.
    pub min_line_chars: usize,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self { min_line_chars: 10 }
    }
}

/// Cleans extracted page text with default options
///
/// This function prepares text for model consumption by:
/// - Trimming whitespace from each line
/// - Removing empty lines
/// - Dropping very short lines (likely navigation fragments)
///
/// The short-line filter is lossy on purpose: short legitimate sentences
/// are dropped along with menu entries and link labels.
pub fn clean(text: &str) -> String {
    clean_with_options(text, &CleanOptions::default())
}

/// Cleans extracted page text with specific options
pub fn clean_with_options(text: &str, options: &CleanOptions) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| keep_line(line, options))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returns whether a trimmed line survives the cleaning filter
pub fn keep_line(line: &str, options: &CleanOptions) -> bool {
    line.chars().count() > options.min_line_chars
}
