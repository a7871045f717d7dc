use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub price: String,
    pub availability: String,
}

/// Books collected during one scrape run, in page order then document order.
#[derive(Debug, Default)]
pub struct ResultSet {
    books: Vec<Book>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, books: impl IntoIterator<Item = Book>) {
        self.books.extend(books);
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn clear(&mut self) {
        self.books.clear();
    }

    pub fn as_slice(&self) -> &[Book] {
        &self.books
    }
}
