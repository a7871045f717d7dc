use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use books_scraper::archiver;
use books_scraper::fetcher::{DEFAULT_BASE_URL, HttpFetcher, PageSource};
use books_scraper::parser::BookParser;
use books_scraper::presenter::Presenter;
use books_scraper::scrape::{self, PageRange, RunSummary, ScrapeConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Scrape book listings from a paginated catalogue and optionally save them as JSON
#[derive(Parser, Debug)]
#[command(name = "books_scraper")]
#[command(about = "Scrapes title, price and availability for each book on a range of catalogue pages")]
struct Cli {
    /// Catalogue base URL; pages are fetched as `{base}page-{n}.html`
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// First page to fetch (1-based, inclusive)
    #[arg(short, long, default_value_t = 1)]
    start: u32,

    /// Last page to fetch (inclusive)
    #[arg(short, long, default_value_t = 50)]
    end: u32,

    /// Write results as JSON to this file, or to a timestamped file inside this directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pause between page requests, in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

impl Cli {
    fn scrape_config(&self) -> Result<ScrapeConfig> {
        Ok(ScrapeConfig {
            base_url: self.base_url.clone(),
            range: PageRange::new(self.start, self.end)?,
            delay: Duration::from_millis(self.delay_ms),
        })
    }

    /// Validates the page range, then runs the scrape against `source`.
    fn scrape<S: PageSource, W: Write>(
        &self,
        source: &S,
        parser: &BookParser,
        presenter: &mut Presenter<W>,
    ) -> Result<RunSummary> {
        let config = self.scrape_config()?;
        Ok(scrape::run(source, parser, &config, presenter)?)
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let fetcher = HttpFetcher::new(Duration::from_secs(cli.timeout_secs))?;
    let parser = BookParser::new()?;
    let mut presenter = Presenter::new(io::stdout());

    let summary = cli.scrape(&fetcher, &parser, &mut presenter)?;
    println!(
        "Scraped {} books from {} pages ({} failed).",
        summary.records, summary.pages_fetched, summary.pages_failed
    );

    if let Some(output) = &cli.output {
        let path = archiver::archive_path(output, chrono::Utc::now());
        // The presenter has already shown the error.
        if presenter.save(&path).is_err() {
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
