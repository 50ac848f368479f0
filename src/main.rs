use clap::Parser;
use page_brief::Reader;
use std::path::Path;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut reader = match &args.config {
        Some(path) => match Reader::new().with_config_file(path) {
            Ok(reader) => reader,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                return;
            }
        },
        None => Reader::new(),
    };

    // Command-line overrides take precedence over the config file
    if let Some(model) = &args.model {
        reader = reader.with_model(model.clone());
    }
    if let Some(prompt) = &args.system_prompt {
        reader = reader.with_system_prompt(prompt.clone());
    }
    if let Some(timeout) = args.timeout {
        reader = reader.with_timeout(timeout);
    }

    let summarizer = reader.build();

    // Non-fatal advisory: warns when the model is not installed locally
    summarizer.verify_model().await;

    let start_time = std::time::Instant::now();

    if args.urls.len() == 1 {
        let url = &args.urls[0];
        let summary = summarizer.summarize(url).await;
        present_summary(url, &summary, args.output_dir.as_deref());
    } else {
        let results = summarizer.batch_summarize(&args.urls).await;

        // Present in the order the URLs were given; batch results are keyed
        // by URL, so repeats collapse to a single entry
        for url in &args.urls {
            if let Some(summary) = results.get(url) {
                present_summary(url, summary, args.output_dir.as_deref());
            }
        }
    }

    let duration = start_time.elapsed();
    ::log::info!(
        "Summarization complete - processed {} URL(s) in {:.2} seconds",
        args.urls.len(),
        duration.as_secs_f64()
    );
}

/// Print a summary, and write it to the output directory when one was given
fn present_summary(url: &str, summary: &str, output_dir: Option<&Path>) {
    println!("🔍 Analyzing: {}", url);
    println!("{}", "-".repeat(50));
    println!("{}\n", summary);

    if let Some(dir) = output_dir {
        let path = dir.join(page_brief::utils::summary_filename(url));
        if let Err(e) = std::fs::create_dir_all(dir) {
            ::log::error!("Failed to create {}: {}", dir.display(), e);
            return;
        }
        match std::fs::write(&path, summary) {
            Ok(_) => ::log::info!("Wrote summary to {}", path.display()),
            Err(e) => ::log::error!("Failed to write {}: {}", path.display(), e),
        }
    }
}
