use crate::autograd::grad_check::check_gradients;
use crate::autograd::Graph;
use approx::assert_abs_diff_eq;

#[test]
fn test_sigmoid_matches_reference() {
    for x in [-6.0, -1.25, 0.0, 0.5, 3.0] {
        let mut graph = Graph::new();
        let input = graph.leaf(x);
        let output = graph.sigmoid(input);
        graph.backward(output);

        let y = 1.0 / (1.0 + f64::exp(-x));
        assert_abs_diff_eq!(graph.value(output), y, epsilon = 1e-6);
        assert_abs_diff_eq!(graph.grad(input), y * (1.0 - y), epsilon = 1e-6);
    }
}

#[test]
fn test_sigmoid_at_zero() {
    let mut graph = Graph::new();
    let input = graph.leaf(0.0);
    let output = graph.sigmoid(input);
    graph.backward(output);

    assert_eq!(graph.value(output), 0.5);
    assert_eq!(graph.grad(input), 0.25);
}

#[test]
fn test_sigmoid_grad_check() {
    check_gradients(|g, x| g.sigmoid(x[0]), &[0.42], 1e-6, 1e-5)
        .expect("sigmoid gradients should match finite differences");
}
