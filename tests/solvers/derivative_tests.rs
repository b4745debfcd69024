use multiroot::derivative::{first_derivative, second_derivative, DEFAULT_STEP_SIZE};

#[test]
fn first_derivative_of_square() {
    let f = |x: f64| x * x;

    let d = first_derivative(&f, 2.0, DEFAULT_STEP_SIZE);
    assert!((d - 4.0).abs() <= 1e-3);
}

#[test]
fn first_derivative_forward_bias() {
    // forward difference of x^2 is 2x + h exactly, so the estimate
    // overshoots the analytic derivative by about h
    let f = |x: f64| x * x;
    let h = 1e-6;

    let d = first_derivative(&f, 2.0, h);
    assert!(d > 4.0);
    assert!((d - 4.0).abs() <= 10.0 * h);
}

#[test]
fn first_derivative_of_sine_at_zero() {
    let f = |x: f64| x.sin();

    let d = first_derivative(&f, 0.0, DEFAULT_STEP_SIZE);
    assert!((d - 1.0).abs() <= 1e-3);
}

#[test]
fn second_derivative_of_cube() {
    let f = |x: f64| x * x * x;

    // compounded first-order error: tolerance is much looser than for
    // the first derivative
    let d = second_derivative(&f, 1.0, 1e-4);
    assert!((d - 6.0).abs() <= 1e-1);
}

#[test]
fn second_derivative_of_linear_is_zero() {
    let f = |x: f64| 3.0 * x - 7.0;

    let d = second_derivative(&f, 2.0, 1e-4);
    assert!(d.abs() <= 1e-1);
}
