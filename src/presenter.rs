use std::io::{self, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::archiver;
use crate::error::ScrapeError;
use crate::models::{Book, ResultSet};

/// Owns the books of the current run and mirrors them to a display.
pub struct Presenter<W: Write> {
    results: ResultSet,
    display: W,
}

impl<W: Write> Presenter<W> {
    pub fn new(display: W) -> Self {
        Self {
            results: ResultSet::new(),
            display,
        }
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn append(&mut self, books: Vec<Book>) -> io::Result<()> {
        for book in &books {
            writeln!(
                self.display,
                "{} | {} | {}",
                book.title, book.price, book.availability
            )?;
        }
        self.results.extend(books);
        Ok(())
    }

    pub fn report_failure(&mut self, page: u32, error: &ScrapeError) -> io::Result<()> {
        writeln!(self.display, "Error fetching page {page}: {error}")
    }

    pub fn report_progress(&mut self, page: u32, end: u32) -> io::Result<()> {
        writeln!(self.display, "Processed page {page} of {end}.")
    }

    /// Writes the whole result set as JSON. The in-memory set is untouched
    /// whether or not the write succeeds.
    pub fn save(&mut self, path: &Path) -> Result<(), ScrapeError> {
        match archiver::save_to_file(self.results.as_slice(), path) {
            Ok(()) => {
                info!(path = %path.display(), records = self.results.len(), "saved results");
                let shown = writeln!(
                    self.display,
                    "Saved {} books to {}",
                    self.results.len(),
                    path.display()
                );
                if let Err(e) = shown {
                    warn!(error = %e, "could not write save confirmation to display");
                }
                Ok(())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "save failed");
                if let Err(display_err) = writeln!(self.display, "Error saving results: {e}") {
                    warn!(error = %display_err, "could not write save error to display");
                }
                Err(e)
            }
        }
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }

    pub fn into_display(self) -> W {
        self.display
    }
}
