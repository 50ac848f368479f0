use clap::Parser;
use page_brief::Reader;
use std::error::Error;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URLs to summarize
    #[arg(required = true)]
    urls: Vec<String>,

    /// Ollama model name
    #[arg(short, long)]
    model: Option<String>,

    /// Path to JSON configuration file
    #[arg(short, long)]
    config_file: Option<String>,

    /// Custom system prompt
    #[arg(short, long)]
    system_prompt: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    // Create a Reader builder
    let mut reader = Reader::new();

    // Apply configuration from file if specified
    if let Some(config_file) = args.config_file {
        println!("Loading configuration from file: {}", config_file);
        reader = reader.with_config_file(config_file)?;
    }

    // Apply command-line overrides
    if let Some(model) = args.model {
        println!("Overriding model: {}", model);
        reader = reader.with_model(model);
    }

    if let Some(system_prompt) = args.system_prompt {
        println!("Overriding system prompt");
        reader = reader.with_system_prompt(system_prompt);
    }

    let summarizer = reader.build();
    summarizer.verify_model().await;

    let start_time = std::time::Instant::now();
    println!("Summarizing {} URL(s)...", args.urls.len());

    let results = summarizer.batch_summarize(&args.urls).await;

    for url in &args.urls {
        if let Some(summary) = results.get(url) {
            println!("\n🔍 {}", url);
            println!("{}", "-".repeat(50));
            println!("{}", summary);
        }
    }

    let duration = start_time.elapsed();
    println!(
        "\nDone. Processed {} unique URL(s) in {:.2} seconds.",
        results.len(),
        duration.as_secs_f64()
    );

    Ok(())
}
