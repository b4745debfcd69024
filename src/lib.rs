//! Derivative-based root finding for scalar real functions.
//!
//! Two open solvers refine a single guess toward a root:
//! ├ [`newton::newton_raphson`] : first-order (Newton-Raphson)
//! └ [`halley::halley`]         : second-order-accelerated (Halley)
//!
//! Both estimate derivatives numerically via [`derivative`] and report
//! their outcome through [`report::SolveReport`].
//!
//! [`search::find_multiple_roots`] drives a chosen solver from many
//! random guesses across an interval to recover possibly multiple roots,
//! deduplicating near-identical results.

// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;

// numerics
pub mod derivative;
pub mod newton;
pub mod halley;
pub mod search;
