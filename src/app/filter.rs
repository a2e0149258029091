//! Search filtering and shelf partitioning.
//!
//! Derives the storefront's two shelves from the catalog and the current
//! search query:
//!
//! ```text
//! filtered     = books whose title or author contains the query (case-insensitive)
//! best_sellers = filtered ∩ category == bestseller
//! trending     = filtered ∩ category == trending
//! ```
//!
//! All three lists preserve catalog order. Matching is a plain substring test
//! on `str::to_lowercase` output; there is no locale-aware folding and no
//! diacritic normalisation, so "nguyen" does not match "Nguyễn".
//!
//! Derived lists borrow from the catalog and are recomputed on every read;
//! they are never stored alongside the query that produced them.

use crate::domain::{Book, Catalog, Category};

/// Returns whether `book` matches an already-lowercased query.
fn matches_lowered(book: &Book, query_lower: &str) -> bool {
    query_lower.is_empty()
        || book.title.to_lowercase().contains(query_lower)
        || book.author.to_lowercase().contains(query_lower)
}

/// Returns the books matching `query`, in catalog order.
///
/// An empty query matches every book.
///
/// # Example
///
/// ```rust
/// use bookstore::app::filter::filter_books;
/// use bookstore::Catalog;
///
/// let catalog = Catalog::builtin();
/// assert_eq!(filter_books(&catalog, "").len(), catalog.len());
/// assert_eq!(filter_books(&catalog, "DALE")[0].id, 1);
/// ```
#[must_use]
pub fn filter_books<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Book> {
    let query_lower = query.to_lowercase();
    catalog
        .books()
        .iter()
        .filter(|book| matches_lowered(book, &query_lower))
        .collect()
}

/// The three lists derived from a catalog and a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedLists<'a> {
    /// Every matching book, catalog order.
    pub filtered: Vec<&'a Book>,
    /// Matching books on the best-seller shelf.
    pub best_sellers: Vec<&'a Book>,
    /// Matching books on the trending shelf.
    pub trending: Vec<&'a Book>,
}

impl<'a> DerivedLists<'a> {
    /// Filters the catalog by `query` and partitions the result by category.
    ///
    /// Books with [`Category::Unlisted`] stay in `filtered` but land on
    /// neither shelf.
    #[must_use]
    pub fn compute(catalog: &'a Catalog, query: &str) -> Self {
        let _span = tracing::trace_span!("derive_lists",
            catalog_size = catalog.len(),
            query_len = query.len()
        ).entered();

        let filtered = filter_books(catalog, query);
        let best_sellers = Self::shelf(&filtered, Category::Bestseller);
        let trending = Self::shelf(&filtered, Category::Trending);

        tracing::trace!(
            filtered = filtered.len(),
            best_sellers = best_sellers.len(),
            trending = trending.len(),
            "lists derived"
        );

        Self {
            filtered,
            best_sellers,
            trending,
        }
    }

    fn shelf(filtered: &[&'a Book], category: Category) -> Vec<&'a Book> {
        filtered
            .iter()
            .copied()
            .filter(|book| book.category == category)
            .collect()
    }

    /// Books in navigation order: best-sellers first, then trending.
    #[must_use]
    pub fn shelved(&self) -> Vec<&'a Book> {
        self.best_sellers
            .iter()
            .chain(self.trending.iter())
            .copied()
            .collect()
    }
}

/// Computes character index ranges where `query` occurs in `text`,
/// case-insensitively.
///
/// Ranges are `(start, end)` char indices with exclusive end, suitable for
/// [`crate::ui::helpers::render_highlighted_text`]. Occurrences do not
/// overlap. If lowercasing changes the number of characters in `text` (a few
/// scripts expand under lowercasing) no ranges are returned rather than
/// highlighting the wrong characters.
///
/// # Example
///
/// ```rust
/// use bookstore::app::filter::match_ranges;
///
/// assert_eq!(match_ranges("Dale Carnegie", "dale"), vec![(0, 4)]);
/// assert!(match_ranges("Dale Carnegie", "").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    let text_lower = text.to_lowercase();
    let query_lower = query.to_lowercase();

    if text_lower.chars().count() != text.chars().count() {
        return vec![];
    }

    let query_chars = query_lower.chars().count();
    let mut ranges = Vec::new();
    let mut search_from = 0;

    while let Some(offset) = text_lower[search_from..].find(&query_lower) {
        let byte_start = search_from + offset;
        let start = text_lower[..byte_start].chars().count();
        ranges.push((start, start + query_chars));
        search_from = byte_start + query_lower.len();
    }

    ranges
}
