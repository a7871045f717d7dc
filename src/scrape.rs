use std::io::Write;
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::ScrapeError;
use crate::fetcher::{PageSource, page_url};
use crate::parser::BookParser;
use crate::presenter::Presenter;

/// Inclusive range of catalogue pages, validated before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: u32,
    end: u32,
}

impl PageRange {
    pub fn new(start: u32, end: u32) -> Result<Self, ScrapeError> {
        if start == 0 || end == 0 || start > end {
            return Err(ScrapeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn pages(&self) -> std::ops::RangeInclusive<u32> {
        self.start..=self.end
    }

    pub fn page_count(&self) -> usize {
        (self.end - self.start) as usize + 1
    }
}

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub range: PageRange,
    /// Pause between consecutive page requests.
    pub delay: Duration,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub pages_fetched: usize,
    pub pages_failed: usize,
    pub records: usize,
}

/// Fetches every page of the range in ascending order and feeds the parsed
/// books to the presenter, replacing whatever a previous run left there.
///
/// A page that cannot be fetched is reported and skipped. Pages past the end
/// of the catalogue parse to nothing and do not stop the loop. Only a broken
/// display aborts the run.
pub fn run<S, W>(
    source: &S,
    parser: &BookParser,
    config: &ScrapeConfig,
    presenter: &mut Presenter<W>,
) -> Result<RunSummary, ScrapeError>
where
    S: PageSource,
    W: Write,
{
    let range = config.range;
    let mut summary = RunSummary::default();
    presenter.clear();
    info!(
        start = range.start(),
        end = range.end(),
        pages = range.page_count(),
        base_url = %config.base_url,
        "starting scrape"
    );

    for page in range.pages() {
        if page != range.start() && !config.delay.is_zero() {
            thread::sleep(config.delay);
        }

        let url = page_url(&config.base_url, page);
        let html = match source.fetch(&url) {
            Ok(html) => html,
            Err(e) => {
                warn!(page, %url, error = %e, "page unavailable");
                summary.pages_failed += 1;
                presenter.report_failure(page, &e).map_err(ScrapeError::Display)?;
                continue;
            }
        };

        let books = parser.parse_books(&html);
        info!(page, books = books.len(), "parsed page");
        summary.pages_fetched += 1;
        summary.records += books.len();

        presenter.append(books).map_err(ScrapeError::Display)?;
        presenter
            .report_progress(page, range.end())
            .map_err(ScrapeError::Display)?;
    }

    info!(
        pages_fetched = summary.pages_fetched,
        pages_failed = summary.pages_failed,
        records = summary.records,
        "scrape finished"
    );
    Ok(summary)
}
