// Re-export modules
pub mod chat;
pub mod config;
pub mod fetcher;
pub mod parsers;
pub mod summarizer;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ReaderConfig;
pub use fetcher::{Page, PageFetcher, PageSource};
pub use summarizer::Summarizer;

/// Builder for a configured web page summarizer
///
/// Collects configuration overrides and wires the real page fetcher and
/// Ollama chat client together. All fields default to a locally hosted
/// Ollama endpoint and the stock summarization prompt.
pub struct Reader {
    config: ReaderConfig,
}

impl Reader {
    /// Create a new Reader builder with default configuration
    pub fn new() -> Self {
        Self {
            config: ReaderConfig::default(),
        }
    }

    /// Set the Ollama model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the system prompt sent with every request
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = prompt.into();
        self
    }

    /// Set the page fetch timeout in seconds
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.fetch_timeout_secs = timeout_seconds;
        self
    }

    /// Apply a complete configuration
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = ReaderConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config = ReaderConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Build the summarizer
    pub fn build(mut self) -> Summarizer {
        // Override the Ollama host with an environment variable if provided
        if let Ok(host) = std::env::var("OLLAMA_HOST") {
            if !host.is_empty() {
                self.config.ollama_host = host;
            }
        }

        ::log::info!("Reader initialized with model: {}", self.config.model);

        Summarizer::new(&self.config)
    }
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}
