use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect;
use tracing::debug;

use crate::error::ScrapeError;

pub const DEFAULT_BASE_URL: &str = "https://books.toscrape.com/catalogue/";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";
const MAX_REDIRECTS: usize = 10;

/// Anything that can turn a page URL into HTML.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Catalogue pages follow `page-{n}.html` under the base URL.
pub fn page_url(base_url: &str, page: u32) -> String {
    if base_url.ends_with('/') {
        format!("{base_url}page-{page}.html")
    } else {
        format!("{base_url}/page-{page}.html")
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        debug!(url, "GET");
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(resp.text()?)
    }
}
