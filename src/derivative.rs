//! Forward finite-difference derivative estimates.
//!
//! Pure functions of their inputs; no validation is performed here.
//! A zero `step_size` divides by zero — callers are responsible for
//! avoiding it (the config layer rejects it, see
//! [`SolverCfg::set_step_size`]).
//!
//! [`SolverCfg::set_step_size`]: crate::config::SolverCfg::set_step_size

/// Default finite-difference offset.
pub const DEFAULT_STEP_SIZE: f64 = 1e-6;

/// First-order forward difference: `(f(x + h) - f(x)) / h`.
#[inline]
pub fn first_derivative<F>(f: &F, x: f64, step_size: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (f(x + step_size) - f(x)) / step_size
}

/// Second derivative as a forward difference of the forward-difference
/// first derivative, with the same `step_size` at both levels.
///
/// This compounds two first-order errors and is less accurate than a
/// centered second difference; the solvers depend on this exact
/// formula, so it must not be replaced with a centered one.
#[inline]
pub fn second_derivative<F>(f: &F, x: f64, step_size: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (first_derivative(f, x + step_size, step_size) - first_derivative(f, x, step_size)) / step_size
}
