use multiroot::config::SolverCfg;
use multiroot::errors::SolveError;
use multiroot::halley::halley;
use multiroot::newton::newton_raphson;
use multiroot::report::Termination;

type TestResult = Result<(), SolveError>;

#[test]
fn finds_positive_root_of_quadratic() -> TestResult {
    let f = |x: f64| x * x - 4.0;

    let res = halley(f, 3.0, SolverCfg::new())?;
    assert!(res.success);
    assert_eq!(res.termination, Termination::PrecisionReached);
    assert_eq!(res.solver_name, "halley");
    assert!((res.root - 2.0).abs() <= 1e-5);
    assert!(res.steps > 0);
    Ok(())
}

#[test]
fn finds_cubic_root() -> TestResult {
    let f = |x: f64| x * x * x - 27.0;

    let res = halley(f, 5.0, SolverCfg::new())?;
    assert!(res.success);
    assert!((res.root - 3.0).abs() <= 1e-5);
    Ok(())
}

#[test]
fn converges_in_no_more_steps_than_newton() -> TestResult {
    let f = |x: f64| x * x - 4.0;

    let halley_res = halley(f, 10.0, SolverCfg::new())?;
    let newton_res = newton_raphson(f, 10.0, SolverCfg::new())?;
    assert!(halley_res.success);
    assert!(newton_res.success);
    assert!(halley_res.steps <= newton_res.steps);
    Ok(())
}

#[test]
fn budget_exhaustion_runs_full_budget_and_is_not_flagged() -> TestResult {
    // no real root; near x = 0 the Halley update is x_new ~ 3x, so the
    // iterates are repelled from the only region where the delta could
    // drop below precision, and the run never converges
    let f = |x: f64| x * x + 1.0;

    let cfg = SolverCfg::new().set_max_steps(40).unwrap();
    let res = halley(f, 0.5, cfg)?;

    // no early-break guard: all 40 updates run, unlike newton-raphson
    assert_eq!(res.steps, 40);
    assert_eq!(res.termination, Termination::StepBudgetExhausted);
    // the shared success check only trips on steps == max_steps - 1,
    // so halley's exhausted budget is not flagged; callers must look
    // at `termination`
    assert!(res.success);
    Ok(())
}

#[test]
fn constant_zero_function_is_degenerate() {
    // fx, fp and fpp all estimate to exactly zero
    let f = |_x: f64| 0.0;

    let res = halley(f, 1.0, SolverCfg::new());
    assert!(matches!(
        res,
        Err(SolveError::DegenerateDerivative { .. })
    ));
}

#[test]
fn non_finite_guess_rejected() {
    let f = |x: f64| x * x - 4.0;

    let res = halley(f, f64::INFINITY, SolverCfg::new());
    assert!(matches!(res, Err(SolveError::InvalidGuess { .. })));
}
