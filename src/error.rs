//! # Error Types
//!
//! This module defines the error types used throughout the crate. The search
//! engine distinguishes configuration problems (surfaced before any evolution
//! starts) from failures inside the evolution loop itself. Note that an
//! infeasible genome is *not* an error: it is an ordinary fitness outcome,
//! represented by [`crate::fitness::Fitness::Infeasible`].
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use archipelago::error::{GeneticError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use archipelago::error::{GeneticError, OptionExt};
//! use archipelago::genome::Genome;
//!
//! fn first_genome(population: &[Genome]) -> archipelago::error::Result<Genome> {
//!     population.first().copied().ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while running the island search.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration or problem instance
    /// is provided. Raised before the search starts; not recoverable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an operator is handed an empty population.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a concurrent island task fails. A failed
    /// island fails its whole generation; the driver never merges a partial
    /// bench of islands.
    #[error("Island error: {0}")]
    Island(String),

    /// Error that occurs when the evolution driver violates one of its own
    /// invariants, e.g. finishing a run without recording a cycle winner.
    #[error("Evolution error: {0}")]
    Evolution(String),
}

/// A specialized Result type for search operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// This trait provides a convenient way to add context to errors when
/// converting from one error type to `GeneticError`.
///
/// ## Examples
///
/// ```rust
/// use archipelago::error::ResultExt;
///
/// fn parse_width(raw: &str) -> archipelago::error::Result<usize> {
///     raw.parse::<usize>().context("Failed to parse genome width")
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GeneticError` with the provided context.
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
        self.map_err(|e| GeneticError::Evolution(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
///
/// ## Examples
///
/// ```rust
/// use archipelago::error::{GeneticError, OptionExt};
///
/// fn head(values: &[u64]) -> archipelago::error::Result<u64> {
///     values.first().copied().ok_or_else_genetic(||
///         GeneticError::EmptyPopulation
///     )
/// }
/// ```
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using a
    /// closure to generate the error.
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
    fn test_error_display() {
        let err = GeneticError::Configuration("selection fraction must be in (0, 1]".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: selection fraction must be in (0, 1]"
        );

        let err = GeneticError::EmptyPopulation;
        assert!(err.to_string().contains("empty population"));
    }

    #[test]
    fn test_result_context() {
        let parsed: std::result::Result<usize, _> = "not-a-number".parse::<usize>();
        let err = parsed.context("Failed to parse genome width").unwrap_err();
        assert!(err.to_string().contains("Failed to parse genome width"));
    }

    #[test]
    fn test_option_ext() {
        let empty: Vec<u64> = Vec::new();
        let result = empty
            .first()
            .copied()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }
}
