//! Error types for the Labor Planning Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only structurally invalid input raises an error; irregular monetary data
//! degrades to zero instead (see [`crate::models::EmployeePayrollProfile`]).

use thiserror::Error;

/// The main error type for the Labor Planning Engine.
///
/// # Example
///
/// ```
/// use labor_planning_engine::error::EngineError;
///
/// let error = EngineError::InvalidDate {
///     input: "not-a-date".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid calendar date: 'not-a-date'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A project date range was missing, unparseable, or inverted.
    #[error("Invalid project date range ({start} .. {end}): {message}")]
    InvalidRange {
        /// The start date as supplied by the caller.
        start: String,
        /// The end date as supplied by the caller.
        end: String,
        /// A description of what made the range invalid.
        message: String,
    },

    /// A date string could not be coerced into a calendar date.
    #[error("Invalid calendar date: '{input}'")]
    InvalidDate {
        /// The raw input that failed to parse.
        input: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
