//! Solver definitions.
//!
//! Provides the [`Solver`] enum, which enumerates the supported
//! iterative methods, along with name parsing for configuration
//! from user-supplied strings.

use std::str::FromStr;

use crate::errors::ConfigError;

/// Root-finding solver variants.
/// - [`Solver::NewtonRaphson`] : first-order, uses f'
/// - [`Solver::Halley`]        : second-order-accelerated, uses f' and f''
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Solver {
    NewtonRaphson,
    Halley,
}

impl Solver {
    /// Solver names for the [`SolveReport::solver_name`] field and for
    /// string-based configuration.
    ///
    /// [`SolveReport::solver_name`]: crate::report::SolveReport::solver_name
    pub const fn name(self) -> &'static str {
        match self {
            Solver::NewtonRaphson => "newton-raphson",
            Solver::Halley        => "halley",
        }
    }
}

impl FromStr for Solver {
    type Err = ConfigError;

    /// Parse a solver name.
    ///
    /// # Errors
    /// - [`ConfigError::UnknownSolver`] for any name outside the
    ///   enumerated set. Callers must treat this as a configuration
    ///   error: no solving is attempted and no partial results exist.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newton-raphson" => Ok(Solver::NewtonRaphson),
            "halley"         => Ok(Solver::Halley),
            _ => Err(ConfigError::UnknownSolver { got: s.to_string() }),
        }
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
