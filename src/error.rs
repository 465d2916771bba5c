//! # Error Types
//!
//! This module defines the error type shared by the evolution engine, the
//! scenario contract and the history reporter. Nothing in the engine recovers
//! locally: every failure surfaces to the caller of `Evolver::start` or
//! `Evolver::run`.
//!
//! ## Examples
//!
//! Using the `Result` type in a scenario callback:
//!
//! ```rust
//! use evolver::error::{GeneticError, Result};
//!
//! fn fitness(word: &str) -> Result<f64> {
//!     if word.is_empty() {
//!         return Err(GeneticError::Scenario("cannot score an empty word".to_string()));
//!     }
//!     Ok(word.len() as f64)
//! }
//!
//! assert!(fitness("").is_err());
//! assert_eq!(fitness("moon").unwrap(), 4.0);
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use evolver::error::{GeneticError, OptionExt};
//!
//! fn fittest(scores: &[f64]) -> evolver::error::Result<f64> {
//!     scores.iter().cloned().reduce(f64::max).ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Errors raised by the evolution engine and its collaborators.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// The engine, a run request or a scenario was configured inconsistently.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// A fitness value was NaN or infinite.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// A scenario callback reported a failure of its own.
    #[error("Scenario error: {0}")]
    Scenario(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for evolution operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use evolver::error::ResultExt;
/// use std::io::Write;
///
/// fn write_line(out: &mut Vec<u8>) -> evolver::error::Result<()> {
///     writeln!(out, "Gen.").context("Failed to write header")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GeneticError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_wraps_io_error() {
        let failure: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        let err = failure.context("Failed to write history").unwrap_err();
        match err {
            GeneticError::Other(msg) => {
                assert!(msg.starts_with("Failed to write history"));
                assert!(msg.contains("pipe closed"));
            }
            other => panic!("Expected Other error, got {:?}", other),
        }
    }

    #[test]
    fn test_io_error_converts_with_question_mark() {
        fn fails() -> Result<()> {
            let write: std::result::Result<(), std::io::Error> =
                Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
            write?;
            Ok(())
        }
        assert!(matches!(fails(), Err(GeneticError::Io(_))));
    }

    #[test]
    fn test_ok_or_else_genetic() {
        let empty: Option<f64> = None;
        assert!(matches!(
            empty.ok_or_else_genetic(|| GeneticError::EmptyPopulation),
            Err(GeneticError::EmptyPopulation)
        ));
        assert_eq!(Some(1.5).ok_or_else_genetic(|| GeneticError::EmptyPopulation).unwrap(), 1.5);
    }
}
