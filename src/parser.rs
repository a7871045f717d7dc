use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::ScrapeError;
use crate::models::Book;

const CARD: &str = "article.product_pod";
const TITLE_LINK: &str = "h3 a";
const PRICE: &str = "p.price_color";
const AVAILABILITY: &str = "p.instock.availability";

/// Extracts product cards from a catalogue listing page.
pub struct BookParser {
    card: Selector,
    title_link: Selector,
    price: Selector,
    availability: Selector,
}

fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        selector: css.to_owned(),
        reason: e.to_string(),
    })
}

impl BookParser {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            card: selector(CARD)?,
            title_link: selector(TITLE_LINK)?,
            price: selector(PRICE)?,
            availability: selector(AVAILABILITY)?,
        })
    }

    /// Returns one book per product card, in document order.
    ///
    /// A page without cards yields an empty vec. Cards missing a field keep
    /// an empty string for it.
    pub fn parse_books(&self, html: &str) -> Vec<Book> {
        let doc = Html::parse_document(html);
        doc.select(&self.card).map(|card| self.parse_card(card)).collect()
    }

    fn parse_card(&self, card: ElementRef<'_>) -> Book {
        let title = card
            .select(&self.title_link)
            .next()
            .map(|link| match link.value().attr("title") {
                Some(title) => title.trim().to_string(),
                None => collapsed_text(link),
            })
            .unwrap_or_default();

        let price = card
            .select(&self.price)
            .next()
            .map(collapsed_text)
            .unwrap_or_default();

        let availability = card
            .select(&self.availability)
            .next()
            .map(collapsed_text)
            .unwrap_or_default();

        if title.is_empty() || price.is_empty() || availability.is_empty() {
            debug!(%title, %price, %availability, "product card is missing fields");
        }

        Book {
            title,
            price,
            availability,
        }
    }
}

fn collapsed_text(el: ElementRef<'_>) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
