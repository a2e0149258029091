//! Domain layer for the bookstore plugin.
//!
//! Contains the catalog types and error model, independent of Zellij APIs and
//! of how the storefront is rendered.
//!
//! # Organization
//!
//! - [`book`]: Book record, shelf categories and price formatting
//! - [`catalog`]: The fixed, ordered catalog of books
//! - [`error`]: Error types and result alias
//!
//! # Examples
//!
//! ```
//! use bookstore::domain::{Catalog, Category};
//!
//! let catalog = Catalog::builtin();
//! let best_sellers = catalog
//!     .books()
//!     .iter()
//!     .filter(|b| b.category == Category::Bestseller)
//!     .count();
//! assert_eq!(best_sellers, 3);
//! ```

pub mod book;
pub mod catalog;
pub mod error;

pub use book::{format_price, Book, Category};
pub use catalog::Catalog;
pub use error::{BookstoreError, Result};
