use crate::autograd::grad_check::check_gradients;
use crate::autograd::Graph;
use approx::assert_abs_diff_eq;

#[test]
fn test_tanh_matches_exponential_form() {
    for x in [-3.0, -0.5, 0.0, 0.25, 2.0] {
        let mut graph = Graph::new();
        let input = graph.leaf(x);
        let output = graph.tanh(input);
        graph.backward(output);

        let e2x = f64::exp(2.0 * x);
        let y = (e2x - 1.0) / (e2x + 1.0);
        assert_abs_diff_eq!(graph.value(output), y, epsilon = 1e-6);
        assert_abs_diff_eq!(graph.grad(input), 1.0 - y * y, epsilon = 1e-6);
    }
}

#[test]
fn test_tanh_saturates_for_large_inputs() {
    let mut graph = Graph::new();
    let input = graph.leaf(500.0);
    let output = graph.tanh(input);
    graph.backward(output);

    assert_eq!(graph.value(output), 1.0);
    assert_eq!(graph.grad(input), 0.0);
}

#[test]
fn test_tanh_grad_check() {
    check_gradients(|g, x| g.tanh(x[0]), &[-0.6], 1e-6, 1e-5)
        .expect("tanh gradients should match finite differences");
}
