//! # Error Types
//!
//! Absence is not an error in this crate: an unknown duration name yields the
//! empty [`DurationValue`](crate::DurationValue), a note set that matches no
//! chord yields an empty `Vec`, and a missing voicing yields `None`.
//!
//! [`TheoryError`] covers the remaining cases, which are contract violations:
//! - `InvalidFraction` - a zero denominator reached fraction arithmetic
//! - `Overflow` - exact arithmetic left the `i64` range
//! - `InvalidInterval` / `InvalidNote` - malformed names in table data or input
//! - `InvalidTable` - a dictionary failed its integrity checks while being built
//! - `ConfigError` - YAML configuration could not be read or understood
//! - `UnknownVoicingDictionary` - a configuration named a dictionary that does not exist
//!
//! ## Usage
//! ```rust
//! use harmonia::{Fraction, TheoryError};
//!
//! match Fraction::new(3, 0) {
//!     Ok(f) => println!("{}", f),
//!     Err(TheoryError::InvalidFraction { numerator, .. }) => {
//!         eprintln!("{} over nothing", numerator);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TheoryError {
    /// A fraction with a zero denominator.
    ///
    /// # Example
    /// ```
    /// # use harmonia::TheoryError;
    /// let err = TheoryError::InvalidFraction { numerator: 1, denominator: 0 };
    /// assert_eq!(err.to_string(), "Invalid fraction 1/0: denominator must not be zero");
    /// ```
    #[error("Invalid fraction {numerator}/{denominator}: denominator must not be zero")]
    InvalidFraction { numerator: i64, denominator: i64 },

    /// Exact arithmetic left the `i64` range (e.g. a duration with dozens of dots).
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// An interval name that could not be parsed (e.g. `"3P"` or `"X"`).
    ///
    /// # Example
    /// ```
    /// # use harmonia::TheoryError;
    /// let err = TheoryError::InvalidInterval("3P".to_string());
    /// assert_eq!(err.to_string(), "Invalid interval: 3P");
    /// ```
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    /// A note name that could not be parsed (e.g. `"H#"`).
    #[error("Invalid note: {0}")]
    InvalidNote(String),

    /// A static table failed its integrity checks.
    ///
    /// # Example
    /// ```
    /// # use harmonia::TheoryError;
    /// let err = TheoryError::InvalidTable {
    ///     table: "duration".to_string(),
    ///     message: "shorthand 'h' is declared twice".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid duration table: shorthand 'h' is declared twice");
    /// ```
    #[error("Invalid {table} table: {message}")]
    InvalidTable { table: String, message: String },

    /// Invalid engine configuration.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A voicing dictionary name that is not one of the built-in sets.
    #[error("Unknown voicing dictionary: {0}")]
    UnknownVoicingDictionary(String),
}
