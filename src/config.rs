//! Shared configuration for solvers and the multi-start search.
//!
//! [`SolverCfg`] — per-call solver settings
//! ├ `precision`  : convergence tolerance on |x_new - x|
//! ├ `max_steps`  : iteration budget
//! └ `step_size`  : finite-difference offset for derivative estimates
//!
//! [`SearchCfg`] — multi-start search settings
//! ├ `solver`      : which solver to run per guess ([`Solver`])
//! ├ `solver_cfg`  : [`SolverCfg`] forwarded to every solver call
//! └ `max_guesses` : number of random guesses to exhaust
//!
//! Both initialize with the defaults below via `new()` and take
//! overrides through validating `set_*` builders.

use std::str::FromStr;

use crate::algorithms::Solver;
use crate::derivative::DEFAULT_STEP_SIZE;
use crate::errors::ConfigError;

pub const DEFAULT_PRECISION: f64 = 1e-6;
pub const DEFAULT_MAX_STEPS: usize = 1_000_000;
pub const DEFAULT_MAX_GUESSES: usize = 100;

/// Solver configuration.
///
/// # Construction
/// - Use [`SolverCfg::new`] then optional setters.
///
/// # Defaults
/// - `precision` : [`DEFAULT_PRECISION`]
/// - `max_steps` : [`DEFAULT_MAX_STEPS`]
/// - `step_size` : [`DEFAULT_STEP_SIZE`]
#[derive(Debug, Copy, Clone)]
pub struct SolverCfg {
    precision: f64,
    max_steps: usize,
    step_size: f64,
}

impl SolverCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            max_steps: DEFAULT_MAX_STEPS,
            step_size: DEFAULT_STEP_SIZE,
        }
    }

    // getters
    pub fn precision(&self) -> f64   { self.precision }
    pub fn max_steps(&self) -> usize { self.max_steps }
    pub fn step_size(&self) -> f64   { self.step_size }

    pub fn set_precision(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidPrecision { got: v });
        }
        self.precision = v;
        Ok(self)
    }

    pub fn set_max_steps(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidMaxSteps { got: v });
        }
        self.max_steps = v;
        Ok(self)
    }

    /// A zero step size would divide by zero inside the derivative
    /// estimator, so it is rejected here at the configuration boundary.
    pub fn set_step_size(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v == 0.0 {
            return Err(ConfigError::InvalidStepSize { got: v });
        }
        self.step_size = v;
        Ok(self)
    }
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self::new()
    }
}

/// Multi-start search configuration.
///
/// # Construction
/// - Use [`SearchCfg::new`] then optional setters.
/// - [`SearchCfg::set_solver_name`] parses a user-supplied solver name
///   eagerly, so an unrecognized name fails before any guess is drawn.
///
/// # Defaults
/// - `solver`      : [`Solver::NewtonRaphson`]
/// - `solver_cfg`  : [`SolverCfg::new`]
/// - `max_guesses` : [`DEFAULT_MAX_GUESSES`]
#[derive(Debug, Copy, Clone)]
pub struct SearchCfg {
    solver: Solver,
    solver_cfg: SolverCfg,
    max_guesses: usize,
}

impl SearchCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            solver: Solver::NewtonRaphson,
            solver_cfg: SolverCfg::new(),
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }

    // getters
    pub fn solver(&self) -> Solver         { self.solver }
    pub fn solver_cfg(&self) -> SolverCfg  { self.solver_cfg }
    pub fn max_guesses(&self) -> usize     { self.max_guesses }

    #[must_use]
    pub fn set_solver(mut self, v: Solver) -> Self {
        self.solver = v;
        self
    }

    pub fn set_solver_name(mut self, name: &str) -> Result<Self, ConfigError> {
        self.solver = Solver::from_str(name)?;
        Ok(self)
    }

    #[must_use]
    pub fn set_solver_cfg(mut self, v: SolverCfg) -> Self {
        self.solver_cfg = v;
        self
    }

    /// Zero is allowed: the search then returns an empty root set.
    #[must_use]
    pub fn set_max_guesses(mut self, v: usize) -> Self {
        self.max_guesses = v;
        self
    }
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self::new()
    }
}
