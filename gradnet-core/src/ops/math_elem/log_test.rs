use crate::autograd::grad_check::check_gradients;
use crate::autograd::Graph;
use approx::assert_relative_eq;
use std::f64::consts::E;

#[test]
fn test_log_forward_backward() {
    let mut graph = Graph::new();
    let a = graph.leaf(E);
    let b = graph.log(a);
    assert_relative_eq!(graph.value(b), 1.0, epsilon = 1e-12);

    graph.backward(b);
    assert_relative_eq!(graph.grad(a), 1.0 / E, epsilon = 1e-12);
}

#[test]
fn test_log_non_positive_is_not_special_cased() {
    let mut graph = Graph::new();
    let zero = graph.leaf(0.0);
    let negative = graph.leaf(-1.0);
    let log_zero = graph.log(zero);
    let log_negative = graph.log(negative);

    assert_eq!(graph.value(log_zero), f64::NEG_INFINITY);
    assert!(graph.value(log_negative).is_nan());

    graph.backward(log_zero);
    assert_eq!(graph.grad(zero), f64::INFINITY);
}

#[test]
fn test_log_grad_check() {
    check_gradients(|g, x| g.log(x[0]), &[0.35], 1e-7, 1e-5)
        .expect("log gradients should match finite differences");
}
