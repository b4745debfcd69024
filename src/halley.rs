//! Halley's method

use log::{debug, warn};

use crate::algorithms::Solver;
use crate::config::SolverCfg;
use crate::derivative::{first_derivative, second_derivative};
use crate::errors::SolveError;
use crate::report::{SolveReport, Termination};

/// Finds a root of `f` using
/// [Halley's method](https://en.wikipedia.org/wiki/Halley%27s_method),
/// with forward finite-difference derivative estimates.
///
/// # Arguments
/// - `f`             : function whose root is sought
/// - `initial_guess` : finite starting point
/// - `cfg`           : [`SolverCfg`] (precision, step budget, FD step size)
///
/// # Returns
/// [`SolveReport`] with `solver_name = "halley"`; see
/// [`newton_raphson`] for the shared field meanings.
///
/// # Errors
/// - [`SolveError::InvalidGuess`]          : `initial_guess` non-finite
/// - [`SolveError::DegenerateDerivative`]  : `2*f'(x)^2 - f(x)*f''(x)`
///   exactly zero
///
/// # Behavior
/// - Update: `x_new = x - (2*fx*fp) / (2*fp^2 - fx*fpp)`; converged once
///   `|x_new - x| < precision`.
/// - Unlike [`newton_raphson`] there is no early-break budget guard: a
///   non-converging run performs the full `max_steps` updates and exits
///   with `steps == max_steps`. The shared success check
///   `steps != max_steps - 1` therefore does NOT flag budget exhaustion
///   here (`success` stays true); `termination` carries the genuine stop
///   reason. This asymmetry between the two solvers is an observable
///   behavioral difference and is preserved as is.
/// - On success the step count is logged at debug level.
///
/// # Notes
/// - Cubic convergence near a simple root with a good guess; the same
///   local-convergence caveats as Newton-Raphson apply.
///
/// [`newton_raphson`]: crate::newton::newton_raphson
pub fn halley<F>(
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
        let fx  = f(x);
        let fp  = first_derivative(&f, x, h);
        let fpp = second_derivative(&f, x, h);

        let denom = 2.0 * fp * fp - fx * fpp;
        if denom == 0.0 {
            return Err(SolveError::DegenerateDerivative { x });
        }

        let x_new = x - (2.0 * fx * fp) / denom;
        let delta = x_new - x;
        if delta.abs() < precision {
            converged = true;
        }
        x = x_new;
        step += 1;
    }

    let success = step != max_steps - 1;
    if success {
        debug!("halley took {step} steps");
    } else {
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
        solver_name: Solver::Halley.name(),
    })
}
