use crate::chat::{ChatClient, ChatMessage, OllamaChat};
use crate::config::ReaderConfig;
use crate::fetcher::{Page, PageFetcher, PageSource};
use crate::parsers::text::CleanOptions;
use std::collections::HashMap;
use std::time::Duration;

/// Summarizes web pages with a locally hosted chat model
///
/// Holds the model identifier and system prompt; both may be changed between
/// calls and affect only subsequent summaries. The public surface is total:
/// `summarize` always returns a string, folding every failure into a clearly
/// labeled error message instead of propagating it.
pub struct Summarizer {
    model: String,
    system_prompt: String,
    fetcher: Box<dyn PageSource>,
    chat: Box<dyn ChatClient>,
}

impl Summarizer {
    /// Create a summarizer wired to a real page fetcher and Ollama endpoint
    pub fn new(config: &ReaderConfig) -> Self {
        let fetcher = PageFetcher::new(
            Duration::from_secs(config.fetch_timeout_secs),
            CleanOptions {
                min_line_chars: config.min_line_chars,
            },
        );
        let chat = OllamaChat::new(config.ollama_host.clone(), config.ollama_port);

        Self::with_parts(
            config.model.clone(),
            config.system_prompt.clone(),
            Box::new(fetcher),
            Box::new(chat),
        )
    }

    /// Create a summarizer from explicit collaborators
    pub fn with_parts(
        model: String,
        system_prompt: String,
        fetcher: Box<dyn PageSource>,
        chat: Box<dyn ChatClient>,
    ) -> Self {
        Self {
            model,
            system_prompt,
            fetcher,
            chat,
        }
    }

    /// The model identifier used for subsequent calls
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The system prompt used for subsequent calls
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Replace the model identifier; affects only future calls
    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
        ::log::info!("Model updated to: {}", self.model);
    }

    /// Replace the system prompt; affects only future calls
    pub fn set_system_prompt(&mut self, prompt: impl Into<String>) {
        self.system_prompt = prompt.into();
        ::log::info!("System prompt updated");
    }

    /// Check that the configured model is installed on the endpoint
    ///
    /// Purely advisory: a missing model logs a warning with the installed
    /// list and a pull hint, an unreachable endpoint logs an error, and the
    /// summarizer stays usable either way.
    pub async fn verify_model(&self) {
        match self.chat.installed_models().await {
            Ok(models) => {
                let tagged = format!("{}:", self.model);
                let installed = models
                    .iter()
                    .any(|name| name == &self.model || name.starts_with(&tagged));

                if installed {
                    ::log::info!("Model {} is available", self.model);
                } else {
                    ::log::warn!(
                        "Model {} not found locally. Available models: {}. \
                         To install it, run: ollama pull {}",
                        self.model,
                        models.join(", "),
                        self.model
                    );
                }
            }
            Err(e) => {
                ::log::error!(
                    "Ollama connection failed: {}. \
                     Please ensure Ollama is installed and running.",
                    e
                );
            }
        }
    }

    /// Builds the user prompt for a fetched page
    pub fn user_prompt_for(&self, page: &Page) -> String {
        let mut prompt = format!("You are looking at a website titled '{}'\n", page.title);
        prompt.push_str("The contents of this website is as follows; ");
        prompt.push_str("please provide a short summary of this website in markdown. ");
        prompt.push_str("If it includes news or announcements, then summarize these too.\n\n");
        prompt.push_str(&page.text);
        prompt
    }

    /// Builds the system + user message pair for a fetched page
    pub fn messages_for(&self, page: &Page) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.system_prompt.clone()),
            ChatMessage::user(self.user_prompt_for(page)),
        ]
    }

    /// Fetch a URL and summarize its content
    ///
    /// Always returns a string: a markdown summary on success, a fixed-format
    /// access-failure message when the fetch did not succeed (no model call
    /// is made in that case), or an "Error generating summary" message when
    /// the model call fails.
    pub async fn summarize(&self, url: &str) -> String {
        let page = self.fetcher.fetch(url).await;

        if !page.is_success() {
            return format!("❌ Failed to access website: {}", url);
        }

        let messages = self.messages_for(&page);

        ::log::info!("Generating summary for: {}", page.title);

        match self.chat.chat(&self.model, &messages).await {
            Ok(summary) => {
                ::log::info!("Summary generated successfully");
                summary
            }
            Err(e) => {
                let message = format!("Error generating summary: {}", e);
                ::log::error!("{}", message);
                message
            }
        }
    }

    /// Summarize multiple URLs sequentially
    ///
    /// Each URL is processed to completion before the next begins; every
    /// entry independently carries its own success or error text. When a URL
    /// repeats, the last result wins.
    pub async fn batch_summarize(&self, urls: &[String]) -> HashMap<String, String> {
        let mut results = HashMap::new();

        for (i, url) in urls.iter().enumerate() {
            ::log::info!("Processing {}/{}: {}", i + 1, urls.len(), url);
            let summary = self.summarize(url).await;
            results.insert(url.clone(), summary);
        }

        results
    }
}
