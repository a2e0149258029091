//! Error types for the bookstore plugin.
//!
//! This module defines the centralized error type [`BookstoreError`] and a type alias
//! [`Result`] used throughout the crate. All variants are implemented with `thiserror`.
//!
//! The storefront itself never fails at runtime: searching, logging in and
//! opening overlays always succeed. Errors only arise while loading external
//! inputs (catalog and theme files) or when an event refers to a book that is
//! not part of the catalog.

use thiserror::Error;

/// The main error type for bookstore operations.
///
/// # Examples
///
/// ```
/// use bookstore::BookstoreError;
///
/// let err = BookstoreError::UnknownBook(42);
/// assert_eq!(err.to_string(), "Book not found in catalog: 42");
/// ```
#[derive(Debug, Error)]
pub enum BookstoreError {
    /// The catalog could not be parsed or violates a catalog invariant
    /// (for example, two books sharing an id).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from reading catalog or theme files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An event referenced a book id that does not exist in the catalog.
    #[error("Book not found in catalog: {0}")]
    UnknownBook(u32),
}

/// A specialized `Result` type for bookstore operations.
pub type Result<T> = std::result::Result<T, BookstoreError>;
