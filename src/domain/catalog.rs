//! The storefront's fixed book catalog.
//!
//! The catalog is an ordered, immutable list of [`Book`] records. The built-in
//! catalog is embedded at compile time from `catalog/books.toml`; a custom
//! catalog with the same format can be loaded from a file via the
//! `catalog_file` plugin option.
//!
//! # TOML Format
//!
//! ```toml
//! [[books]]
//! id = 1
//! title = "Đắc Nhân Tâm"
//! author = "Dale Carnegie"
//! price = 86000
//! old_price = 108000
//! discount_price = 22000
//! category = "bestseller"
//! ```
//!
//! Catalog order is display order: both shelves list books in the order they
//! appear in the file.

use crate::domain::book::Book;
use crate::domain::error::{BookstoreError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// On-disk catalog document.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    books: Vec<Book>,
}

/// Immutable, ordered set of books offered by the store.
///
/// Ids are unique; constructors reject catalogs that violate this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Builds a catalog from an ordered list of books.
    ///
    /// # Errors
    ///
    /// Returns [`BookstoreError::Catalog`] if two books share an id.
    pub fn new(books: Vec<Book>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id) {
                return Err(BookstoreError::Catalog(format!("duplicate book id {}", book.id)));
            }
        }
        Ok(Self { books })
    }

    /// Returns the built-in six-book catalog.
    ///
    /// # Panics
    ///
    /// Panics if the embedded catalog fails to parse (should never occur).
    ///
    /// # Example
    ///
    /// ```rust
    /// use bookstore::Catalog;
    ///
    /// let catalog = Catalog::builtin();
    /// assert_eq!(catalog.len(), 6);
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_toml(include_str!("../../catalog/books.toml"))
            .expect("Built-in catalog should always parse")
    }

    /// Parses a catalog from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`BookstoreError::Catalog`] if the TOML is malformed, a record
    /// is missing a required field, or ids are duplicated.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)
            .map_err(|e| BookstoreError::Catalog(format!("failed to parse catalog TOML: {e}")))?;

        let catalog = Self::new(file.books)?;
        tracing::debug!(book_count = catalog.len(), "catalog parsed");
        Ok(catalog)
    }

    /// Loads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BookstoreError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Catalog::from_toml`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// All books in catalog order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Looks up a book by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::Category;
    use std::io::Write;

    #[test]
    fn builtin_catalog_has_six_unique_books() {
        let catalog = Catalog::builtin();
        let ids: Vec<u32> = catalog.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn builtin_catalog_categories() {
        let catalog = Catalog::builtin();
        let best: Vec<u32> = catalog
            .books()
            .iter()
            .filter(|b| b.category == Category::Bestseller)
            .map(|b| b.id)
            .collect();
        let trending: Vec<u32> = catalog
            .books()
            .iter()
            .filter(|b| b.category == Category::Trending)
            .map(|b| b.id)
            .collect();

        assert_eq!(best, vec![1, 2, 5]);
        assert_eq!(trending, vec![3, 4, 6]);
    }

    #[test]
    fn builtin_catalog_authors() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get(1).map(|b| b.author.as_str()), Some("Dale Carnegie"));
        assert_eq!(catalog.get(3).map(|b| b.author.as_str()), Some("Rosie Nguyễn"));
        assert_eq!(catalog.get(4).map(|b| b.author.as_str()), Some("Nguyễn Nhật Ánh"));
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let doc = r#"
            [[books]]
            id = 1
            title = "A"
            author = "X"
            price = 1
            old_price = 1
            discount_price = 0
            category = "trending"

            [[books]]
            id = 1
            title = "B"
            author = "Y"
            price = 1
            old_price = 1
            discount_price = 0
            category = "bestseller"
        "#;

        let err = Catalog::from_toml(doc).unwrap_err();
        assert!(matches!(err, BookstoreError::Catalog(_)));
    }

    #[test]
    fn missing_category_parses_as_unlisted() {
        let doc = r#"
            [[books]]
            id = 9
            title = "Orphan"
            author = "Nobody"
            price = 10
            old_price = 12
            discount_price = 2
        "#;

        let catalog = Catalog::from_toml(doc).unwrap();
        assert_eq!(catalog.get(9).map(|b| b.category), Some(Category::Unlisted));
    }

    #[test]
    fn malformed_toml_is_a_catalog_error() {
        let err = Catalog::from_toml("[[books]]\nid = \"one\"").unwrap_err();
        assert!(matches!(err, BookstoreError::Catalog(_)));
    }

    #[test]
    fn loads_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[books]]\nid = 3\ntitle = \"T\"\nauthor = \"A\"\nprice = 5\nold_price = 6\ndiscount_price = 1\ncategory = \"trending\""
        )
        .unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(3).map(|b| b.title.as_str()), Some("T"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Catalog::from_file("/nonexistent/bookstore/catalog.toml").unwrap_err();
        assert!(matches!(err, BookstoreError::Io(_)));
    }
}
