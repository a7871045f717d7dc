//! Scrapes book listings (title, price, availability) from the paginated
//! books.toscrape.com catalogue and archives them as JSON.

pub mod archiver;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod parser;
pub mod presenter;
pub mod scrape;

pub use error::ScrapeError;
pub use models::{Book, ResultSet};
