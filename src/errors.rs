//! Root-finding error types.
//!
//! ┌ [`ConfigError`] : invalid configuration
//! │   ├ unrecognized solver name
//! │   ├ invalid tolerances / budgets
//! │   └ invalid search interval
//! │
//! └ [`SolveError`]  : per-call solver errors
//!     ├ non-finite initial guess
//!     └ exactly-zero update denominator
//!
//! Convergence failure is NOT an error: it is reported through the
//! `success` flag on [`SolveReport`] and simply causes the multi-start
//! search to discard that guess.
//!
//! [`SolveReport`]: crate::report::SolveReport

use thiserror::Error;

/// Configuration errors.
///
/// Raised eagerly, before any solving is attempted; a search that
/// returns one of these has produced no partial results.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unrecognized solver name: got {got:?} (expected \"newton-raphson\" or \"halley\")")]
    UnknownSolver { got: String },

    #[error("invalid precision: must be finite and > 0. got {got}")]
    InvalidPrecision { got: f64 },

    #[error("invalid step size: must be finite and nonzero. got {got}")]
    InvalidStepSize { got: f64 },

    #[error("invalid max_steps: must be >= 1. got {got}")]
    InvalidMaxSteps { got: usize },

    #[error("invalid interval: require finite min < max. got [{min}, {max}]")]
    InvalidInterval { min: f64, max: f64 },
}

/// Per-call solver errors.
///
/// ┌ Non-finite initial guess
/// └ Update denominator exactly zero (degenerate derivative)
///
/// Non-finite intermediate values that arise any other way are not
/// detected here; they flow through the arithmetic and manifest as a
/// convergence failure, since `|delta| < precision` is false for a
/// non-finite delta.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("degenerate derivative at x={x}: update denominator is exactly zero")]
    DegenerateDerivative { x: f64 },
}
