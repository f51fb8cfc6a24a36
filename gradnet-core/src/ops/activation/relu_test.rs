use crate::autograd::grad_check::check_gradients;
use crate::autograd::Graph;

#[test]
fn test_relu_forward() {
    let mut graph = Graph::new();
    let inputs = graph.leaves(&[-2.0, -1.0, 0.0, 1.0, 2.0]);
    let outputs: Vec<_> = inputs.iter().map(|&x| graph.relu(x)).collect();
    assert_eq!(graph.values(&outputs), vec![0.0, 0.0, 0.0, 1.0, 2.0]);
}

#[test]
fn test_relu_backward_masks_non_positive_inputs() {
    for (input, expected) in [(-2.0, 0.0), (0.0, 0.0), (1e-9, 1.0), (3.5, 1.0)] {
        let mut graph = Graph::new();
        let x = graph.leaf(input);
        let scale = graph.leaf(-7.0);
        let y = graph.relu(x);
        let out = graph.mul(y, scale);
        graph.backward(out);
        // upstream gradient into relu is -7
        assert_eq!(graph.grad(x), expected * -7.0, "input {}", input);
    }
}

#[test]
fn test_relu_grad_check_away_from_kink() {
    check_gradients(|g, x| g.relu(x[0]), &[0.7], 1e-6, 1e-5)
        .expect("relu gradients should match finite differences");
    check_gradients(|g, x| g.relu(x[0]), &[-0.7], 1e-6, 1e-5)
        .expect("relu gradients should match finite differences");
}
