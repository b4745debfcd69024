//! Multi-start root search.
//!
//! Drives a single-root solver from many random initial guesses across
//! an interval, retaining each successful result that is not within
//! [`ROOT_DEDUP_TOL`] of an already retained root.
//!
//! There is no guarantee that all roots will be found, especially when
//! `max_guesses` is small.

use log::{debug, info};
use rand::Rng;

use crate::algorithms::Solver;
use crate::config::SearchCfg;
use crate::errors::ConfigError;
use crate::halley::halley;
use crate::newton::newton_raphson;
use crate::report::SearchReport;

/// Minimum absolute difference between two retained roots.
pub const ROOT_DEDUP_TOL: f64 = 1e-3;

/// Searches `[min, max]` for roots of `f` by running the configured
/// solver from `max_guesses` uniform random starting points.
///
/// # Arguments
/// - `f`   : function whose roots are sought
/// - `min` : lower interval bound for guesses
/// - `max` : upper interval bound for guesses
/// - `cfg` : [`SearchCfg`] (solver choice, solver settings, guess budget)
/// - `rng` : source of randomness for the guesses; seed it for
///   reproducible searches
///
/// # Returns
/// [`SearchReport`] with the retained roots in discovery order (no
/// sorting is applied) and the number of guesses exhausted.
///
/// # Errors
/// - [`ConfigError::InvalidInterval`] : `min`/`max` non-finite or
///   `min >= max`. Returned before any guess is drawn, so there are no
///   partial results.
///
/// # Behavior
/// - A guess's result is retained only if the solver reported success
///   AND its root differs from every already retained root by at least
///   [`ROOT_DEDUP_TOL`].
/// - Per-guess solver errors (degenerate derivative) discard that guess
///   and continue, like a convergence failure.
/// - Nothing constrains the iterates to `[min, max]`: retained roots
///   may lie outside the interval. This is a documented limitation of
///   the open solvers, not a defect.
/// - The summary ("found k roots in n guesses") is logged at info level.
pub fn find_multiple_roots<F, R>(
    f: F,
    min: f64,
    max: f64,
    cfg: SearchCfg,
    rng: &mut R,
) -> Result<SearchReport, ConfigError>
where
    F: Fn(f64) -> f64,
    R: Rng,
{
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(ConfigError::InvalidInterval { min, max });
    }

    let solver      = cfg.solver();
    let solver_cfg  = cfg.solver_cfg();
    let max_guesses = cfg.max_guesses();

    let mut roots: Vec<f64> = Vec::new();
    for _ in 0..max_guesses {
        let guess = rng.gen::<f64>() * (max - min) + min;

        let outcome = match solver {
            Solver::NewtonRaphson => newton_raphson(&f, guess, solver_cfg),
            Solver::Halley        => halley(&f, guess, solver_cfg),
        };
        let report = match outcome {
            Ok(report) => report,
            Err(err) => {
                debug!("guess {guess} discarded: {err}");
                continue;
            }
        };
        if !report.success {
            continue;
        }

        // new root only if it clears the dedup tolerance against all
        // previously retained roots
        let is_new = roots
            .iter()
            .all(|root| (root - report.root).abs() >= ROOT_DEDUP_TOL);
        if is_new {
            roots.push(report.root);
        }
    }

    info!("found {} roots in {} guesses", roots.len(), max_guesses);

    Ok(SearchReport {
        roots,
        guesses: max_guesses,
        solver_name: solver.name(),
    })
}
