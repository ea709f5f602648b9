//! Error handling for the hyperbind aggregation library.
//!
//! This module defines the main error type `Error` used throughout the
//! library, along with a convenient `Result` type alias. It uses `thiserror`
//! for easy error handling and implements conversions from common error
//! types.
//!
//! # Examples
//!
//! ```
//! use hyperbind::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     // Operations that might fail...
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type for hyperbind aggregation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for hyperbind aggregation operations
#[derive(Debug, Error)]
pub enum Error {
    /// Parameter descriptor error
    #[error("Parameter error: {0}")]
    Parameter(String),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a new parameter error
    pub fn parameter<S: Into<String>>(msg: S) -> Self {
        Self::Parameter(msg.into())
    }
}
