//! Error handling utilities for the solace application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use thiserror::Error;

/// Represents validation failures raised by the entry store.
///
/// Passcode mismatches are deliberately *not* represented here: a wrong
/// passcode is ordinary user feedback, reported as a `false` return from
/// [`crate::passcode::PasscodeGate::verify`], not an error.
///
/// # Examples
///
/// ```
/// use solace::errors::StoreError;
///
/// let error = StoreError::OutOfRange { position: 9, len: 3 };
/// assert!(format!("{}", error).contains("position 9"));
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// The entry text was empty after trimming whitespace.
    #[error("Entry text is empty. Write something before saving.")]
    InvalidEntry,

    /// The position does not address any entry in the collection.
    #[error("No entry at position {position} (the journal holds {len})")]
    OutOfRange {
        /// The position that was requested
        position: usize,
        /// The number of entries currently in the collection
        len: usize,
    },
}

/// Represents failures of the passcode gate.
#[derive(Debug, Error)]
pub enum PasscodeError {
    /// A new passcode was rejected for being too short.
    #[error("Passcode must be at least 4 digits (got {len})")]
    TooShort {
        /// Length of the rejected passcode
        len: usize,
    },

    /// A diary operation was attempted while the gate is not unlocked.
    #[error("The diary is locked. Unlock it with your passcode first.")]
    Locked,
}

/// Represents failures of the durable key-value storage layer.
///
/// Every variant is recoverable: the in-memory state that was current before
/// the failing call is preserved, and the caller may retry.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQLite reported an error executing a statement.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// No connection could be checked out of the pool.
    #[error("Failed to get connection from pool: {0}")]
    Pool(#[from] r2d2::Error),

    /// A stored blob could not be decoded back into its in-memory form.
    #[error("Stored '{key}' data is corrupt: {source}")]
    Corrupt {
        /// The storage key whose value failed to decode
        key: &'static str,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// A blob could not be encoded for persistence.
    #[error("Could not encode '{key}' data: {source}")]
    Encode {
        /// The storage key being written
        key: &'static str,
        /// The underlying encode error
        #[source]
        source: serde_json::Error,
    },
}

/// Represents failures when talking to external content providers.
///
/// These never abort a session: quote fetching falls back to a default
/// string and song fetching falls back to an empty list.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The HTTP request itself failed.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a body we could not interpret.
    #[error("Invalid response from provider: {0}")]
    InvalidResponse(String),
}

/// Represents all possible errors that can occur in the solace application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use solace::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use solace::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors from the entry store.
    #[error("Journal error: {0}")]
    Store(#[from] StoreError),

    /// Failures of the passcode gate.
    #[error("Passcode error: {0}")]
    Passcode(#[from] PasscodeError),

    /// Failures of the durable storage layer.
    #[error("Persistence failure: {0}")]
    Storage(#[from] StorageError),

    /// Failures of external content providers.
    #[error("Content provider error: {0}")]
    Content(#[from] ContentError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use solace::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Config("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
