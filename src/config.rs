use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default model identifier
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Default system prompt sent with every summarization request
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an assistant that analyzes the contents \
of a website and provides a short summary, ignoring text that might be navigation \
related. Respond in markdown.";

/// Configuration for the web page reader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Ollama model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// System prompt steering the model's summaries
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// Host of the Ollama endpoint
    #[serde(default = "default_ollama_host")]
    pub ollama_host: String,

    /// Port of the Ollama endpoint
    #[serde(default = "default_ollama_port")]
    pub ollama_port: u16,

    /// Timeout for page fetches, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Cleaning threshold: extracted lines at or below this many characters
    /// are dropped as likely navigation fragments
    #[serde(default = "default_min_line_chars")]
    pub min_line_chars: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            system_prompt: default_system_prompt(),
            ollama_host: default_ollama_host(),
            ollama_port: default_ollama_port(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            min_line_chars: default_min_line_chars(),
        }
    }
}

impl ReaderConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

/// Default value for model
fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// Default value for system_prompt
fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

/// Default value for ollama_host
fn default_ollama_host() -> String {
    "http://localhost".to_string()
}

/// Default value for ollama_port
fn default_ollama_port() -> u16 {
    11434
}

/// Default fetch timeout in seconds
fn default_fetch_timeout_secs() -> u64 {
    10
}

/// Default cleaning threshold in characters
fn default_min_line_chars() -> usize {
    10
}
