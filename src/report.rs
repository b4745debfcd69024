//! Defines the [`SolveReport`] struct returned by both solvers and the
//! [`SearchReport`] struct returned by the multi-start search.

/// Reasons a solver loop may stop iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    PrecisionReached,
    StepBudgetExhausted,
}

/// Final report returned by both solvers.
///
/// [`SolveReport`]
/// - `root`        : last iterate; a root estimate only if `success`
/// - `steps`       : update steps performed
/// - `success`     : whether the run is considered to have found a root
/// - `termination` : why the loop stopped ([`Termination`])
/// - `solver_name` : solver name (e.g. `"newton-raphson"`)
///
/// # Notes
/// `success` is computed as `steps != max_steps - 1` at loop exit, which
/// is NOT always equal to `termination == PrecisionReached`:
/// - Newton-Raphson that converges exactly on its last permitted update
///   reports `PrecisionReached` with `success == false`.
/// - Halley runs its full budget without an early break, leaving
///   `steps == max_steps` on exhaustion, which the success check does
///   not flag: `StepBudgetExhausted` with `success == true`.
///
/// Both quirks are deliberately preserved (the two solvers' step-budget
/// semantics differ and are not meant to be harmonized); `termination`
/// carries the genuine stop reason so callers can tell the cases apart.
#[derive(Debug, Copy, Clone)]
pub struct SolveReport {
    pub root        : f64,
    pub steps       : usize,
    pub success     : bool,
    pub termination : Termination,
    pub solver_name : &'static str,
}

/// Final report returned by the multi-start search.
///
/// [`SearchReport`]
/// - `roots`       : retained root values, in discovery order (unsorted)
/// - `guesses`     : total guesses exhausted
/// - `solver_name` : solver used for every guess
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub roots       : Vec<f64>,
    pub guesses     : usize,
    pub solver_name : &'static str,
}

impl SearchReport {
    /// Number of distinct roots retained.
    pub fn num_roots(&self) -> usize {
        self.roots.len()
    }
}
