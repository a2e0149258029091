//! Book domain model.
//!
//! A [`Book`] is an immutable catalog record. Only `id`, `title`, `author` and
//! `category` carry behavior (identity, search targets and shelf placement);
//! the remaining fields are display metadata passed through to the detail
//! overlay.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by catalog records (`publish_date = "2016-03-01"`).
const CATALOG_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format shown to shoppers.
const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Shelf a book is curated into.
///
/// A book belongs to exactly one shelf. Records with a missing or unknown
/// category deserialize as [`Category::Unlisted`] and are shown on neither
/// shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Shown in the "Best Sellers" section.
    Bestseller,
    /// Shown in the "Trending" section.
    Trending,
    /// Not curated into any section.
    #[default]
    #[serde(other)]
    Unlisted,
}

impl Category {
    /// Section heading for this shelf, `None` for unlisted books.
    #[must_use]
    pub const fn shelf_title(self) -> Option<&'static str> {
        match self {
            Self::Bestseller => Some("Best Sellers"),
            Self::Trending => Some("Trending"),
            Self::Unlisted => None,
        }
    }
}

/// A book in the storefront catalog.
///
/// Prices are integer amounts in the store currency (VND); no fractional
/// units exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub price: u64,
    pub old_price: u64,
    pub discount_price: u64,
    #[serde(default)]
    pub category: Category,

    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub publish_date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub package_size: String,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "type")]
    pub book_type: String,
}

impl Book {
    /// Percentage saved relative to the old price, rounded down.
    ///
    /// Returns 0 when there is no old price or the book is not cheaper than it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookstore::Catalog;
    ///
    /// let catalog = Catalog::builtin();
    /// let book = catalog.get(1).unwrap();
    /// assert!(book.discount_percent() <= 100);
    /// ```
    #[must_use]
    pub fn discount_percent(&self) -> u64 {
        if self.old_price == 0 || self.price >= self.old_price {
            return 0;
        }
        (self.old_price - self.price) * 100 / self.old_price
    }

    /// Parsed publication date, `None` if the record's date is missing or malformed.
    #[must_use]
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.publish_date.trim(), CATALOG_DATE_FORMAT).ok()
    }

    /// Publication date formatted for display.
    ///
    /// Falls back to the raw catalog string when it cannot be parsed so that
    /// free-form dates ("2019") still show up.
    #[must_use]
    pub fn published_display(&self) -> String {
        self.published_on().map_or_else(
            || self.publish_date.clone(),
            |date| date.format(DISPLAY_DATE_FORMAT).to_string(),
        )
    }
}

/// Formats an amount with `.` thousands separators and the `đ` suffix.
///
/// # Examples
///
/// ```
/// use bookstore::domain::format_price;
///
/// assert_eq!(format_price(86_000), "86.000đ");
/// assert_eq!(format_price(1_250_000), "1.250.000đ");
/// assert_eq!(format_price(0), "0đ");
/// ```
#[must_use]
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }

    out.push('đ');
    out
}
