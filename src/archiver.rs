use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::ScrapeError;
use crate::models::Book;

pub fn save_to_file(books: &[Book], path: &Path) -> Result<(), ScrapeError> {
    let json = serde_json::to_string_pretty(books)?;
    let save_err = |source| ScrapeError::Save {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(save_err)?;
    file.write_all(json.as_bytes()).map_err(save_err)?;
    Ok(())
}

/// Resolves the user's `--output` value. A directory gets a timestamped
/// `books-YYYYMMDD-HHMMSS.json` inside it; anything else is used as-is.
pub fn archive_path(output: &Path, now: DateTime<Utc>) -> PathBuf {
    if output.is_dir() {
        output.join(format!("books-{}.json", now.format("%Y%m%d-%H%M%S")))
    } else {
        output.to_path_buf()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;
    use std::process;

    /// A fresh scratch directory under the system temp dir.
    pub(crate) fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("books_scraper-{}-{name}", process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    pub(crate) fn load_from_file(path: &Path) -> Vec<Book> {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    fn books(n: usize) -> Vec<Book> {
        (0..n)
            .map(|i| Book {
                title: format!("Book \"{i}\""),
                price: format!("£{i}.99"),
                availability: "In stock".to_owned(),
            })
            .collect()
    }

    #[test]
    fn save_then_load_preserves_every_field() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("books.json");
        let original = books(40);

        save_to_file(&original, &path).unwrap();
        let loaded = load_from_file(&path);

        assert_eq!(loaded, original);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn saved_file_is_a_json_array_of_objects() {
        let dir = scratch_dir("shape");
        let path = dir.join("books.json");
        save_to_file(&books(2), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[1]["price"], "£1.99");
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn empty_set_saves_as_empty_array() {
        let dir = scratch_dir("empty");
        let path = dir.join("books.json");
        save_to_file(&[], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn unwritable_path_is_a_save_error() {
        let dir = scratch_dir("unwritable");
        let path = dir.join("missing").join("books.json");

        let err = save_to_file(&books(1), &path).unwrap_err();
        assert!(matches!(err, ScrapeError::Save { path: p, .. } if p == path));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn archive_path_names_file_inside_directory() {
        let dir = scratch_dir("archive_path");
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(
            archive_path(&dir, now),
            dir.join("books-20240309-140507.json")
        );
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn archive_path_keeps_explicit_file() {
        let now = Utc::now();
        let path = Path::new("out/books.json");
        assert_eq!(archive_path(path, now), PathBuf::from("out/books.json"));
    }
}
