//! Error types for the Recipe Explorer plugin.
//!
//! This module defines the centralized error type [`RecipeExplorerError`] and a
//! [`Result`] alias used throughout the crate. Errors are implemented with
//! `thiserror`.
//!
//! None of these errors reach the screen as a message. A failed catalog load
//! degrades to an empty catalog, and a failed event is logged and skipped.

use thiserror::Error;

/// The main error type for Recipe Explorer operations.
///
/// # Examples
///
/// ```
/// use recipe_explorer::domain::RecipeExplorerError;
///
/// fn parse_dataset() -> Result<(), RecipeExplorerError> {
///     Err(RecipeExplorerError::Catalog("expected an array of recipes".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum RecipeExplorerError {
    /// The recipe dataset could not be read or parsed.
    ///
    /// Surfaced to the UI as an empty catalog, never as a fatal error.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Covers payloads that fail to serialize or deserialize on either side
    /// of the plugin/worker boundary.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Recipe Explorer operations.
pub type Result<T> = std::result::Result<T, RecipeExplorerError>;
