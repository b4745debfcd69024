//! Newton-Raphson method

use log::warn;

use crate::algorithms::Solver;
use crate::config::SolverCfg;
use crate::derivative::first_derivative;
use crate::errors::SolveError;
use crate::report::{SolveReport, Termination};

/// Finds a root of `f` using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton_method),
/// with a forward finite-difference derivative estimate.
///
/// # Arguments
/// - `f`             : function whose root is sought
/// - `initial_guess` : finite starting point
/// - `cfg`           : [`SolverCfg`] (precision, step budget, FD step size)
///
/// # Returns
/// [`SolveReport`] with:
/// - `root`        : last iterate (a root estimate only if `success`)
/// - `steps`       : update steps performed
/// - `success`     : `steps != max_steps - 1` at loop exit
/// - `termination` : [`Termination::PrecisionReached`] or
///   [`Termination::StepBudgetExhausted`]
/// - `solver_name` : `"newton-raphson"`
///
/// # Errors
/// - [`SolveError::InvalidGuess`]          : `initial_guess` non-finite
/// - [`SolveError::DegenerateDerivative`]  : estimated f'(x) exactly zero
///
/// # Behavior
/// - Update: `x_new = x - f(x) / f'(x)`; converged once
///   `|x_new - x| < precision`.
/// - A guard breaks one iteration early when `step == max_steps - 1`,
///   so at most `max_steps - 1` updates execute before the budget is
///   considered exhausted. Halley's method has no such guard.
/// - The `success` check `steps != max_steps - 1` consequently reports
///   failure for a run that converges exactly on its last permitted
///   update; see [`SolveReport`] for why this quirk is kept.
/// - On failure a warning is logged; the returned `root` is then not
///   guaranteed to be near a root.
///
/// # Notes
/// - Convergence is local only: poor guesses or ill-behaved functions
///   can diverge or cycle. Non-finite iterates are not detected; they
///   surface as a convergence failure at the budget limit.
pub fn newton_raphson<F>(
    f: F,
    initial_guess: f64,
    cfg: SolverCfg,
) -> Result<SolveReport, SolveError>
where
    F: Fn(f64) -> f64,
{
    if !initial_guess.is_finite() {
        return Err(SolveError::InvalidGuess { x0: initial_guess });
    }

    let precision = cfg.precision();
    let max_steps = cfg.max_steps();
    let h         = cfg.step_size();

    let mut x = initial_guess;
    let mut converged = false;
    let mut step: usize = 0;

    while !converged && step < max_steps {
        // budget guard: fires one update before the budget is reached
        if step == max_steps - 1 {
            break;
        }

        let fx = f(x);
        let fp = first_derivative(&f, x, h);
        if fp == 0.0 {
            return Err(SolveError::DegenerateDerivative { x });
        }

        let x_new = x - fx / fp;
        let delta = x_new - x;
        if delta.abs() < precision {
            converged = true;
        }
        x = x_new;
        step += 1;
    }

    let success = step != max_steps - 1;
    if !success {
        warn!("no root found in {max_steps} steps; returned x={x} is not a root");
    }

    Ok(SolveReport {
        root: x,
        steps: step,
        success,
        termination: if converged {
            Termination::PrecisionReached
        } else {
            Termination::StepBudgetExhausted
        },
        solver_name: Solver::NewtonRaphson.name(),
    })
}
