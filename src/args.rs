use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-brief")]
#[command(about = "Summarize web pages with a locally hosted Ollama model")]
#[command(version)]
pub struct Args {
    /// URLs of the pages to summarize (several URLs run as a batch)
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Ollama model name
    #[arg(short, long)]
    pub model: Option<String>,

    /// Replacement system prompt steering the summaries
    #[arg(short, long)]
    pub system_prompt: Option<String>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Page fetch timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Directory to write one markdown summary file per URL into
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}
