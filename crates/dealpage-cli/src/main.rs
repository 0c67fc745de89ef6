mod render;
mod urls;

use clap::Parser;

use dealpage_core::load_app_config;
use dealpage_scraper::{scrape, Engine, FrequencySummarizer, PageClient};

#[derive(Debug, Parser)]
#[command(name = "dealpage-cli")]
#[command(about = "Scrape product-page fields from one or more URLs")]
struct Cli {
    /// Product page URLs. When omitted, URLs are read from url.txt (one per
    /// line).
    urls: Vec<String>,

    /// Emit the record as JSON instead of the labeled text rendering.
    #[arg(long)]
    json: bool,

    /// File to read URLs from when none are given on the command line.
    #[arg(long, default_value = "url.txt")]
    url_file: std::path::PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loads .env (so RUST_LOG set there reaches the subscriber) before
    // initializing tracing.
    let config = load_app_config()?;
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let urls = urls::resolve_urls(&cli.urls, &cli.url_file)?;

    let client = PageClient::new(config.request_timeout_secs, &config.user_agent)?;
    let summarizer = FrequencySummarizer;
    let engine = Engine::with_summarizer(
        &summarizer,
        config.summary_sentences,
        config.summary_fallback_chars,
    );

    for url in &urls {
        match scrape(&client, &engine, url).await {
            Some(record) => {
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&record)?);
                } else {
                    render::print_record(url, &record);
                }
            }
            None => eprintln!("no data scraped for {url}"),
        }
    }

    Ok(())
}
