#[cfg(test)]
mod tests {
    use crate::autograd::Graph;
    use crate::optim::{Optimizer, Sgd};
    use approx::assert_relative_eq;

    #[test]
    fn test_sgd_basic_step() {
        let mut graph = Graph::new();
        let w = graph.leaf(1.0);
        let b = graph.leaf(-2.0);
        let x = graph.leaf(3.0);
        let wx = graph.mul(w, x);
        let y = graph.add(wx, b);
        graph.backward(y);

        let mut sgd = Sgd::new([w, b], 0.1);
        sgd.step(&mut graph);

        assert_relative_eq!(graph.value(w), 1.0 - 0.1 * 3.0);
        assert_relative_eq!(graph.value(b), -2.0 - 0.1 * 1.0);
        assert_eq!(graph.value(x), 3.0, "non-parameters are not updated");
    }

    #[test]
    fn test_sgd_zero_grad() {
        let mut graph = Graph::new();
        let w = graph.leaf(0.5);
        let y = graph.mul(w, w);
        graph.backward(y);
        assert_eq!(graph.grad(w), 1.0);

        let sgd = Sgd::new(vec![w], 0.01);
        sgd.zero_grad(&mut graph);
        assert_eq!(graph.grad(w), 0.0);
        assert_eq!(sgd.params(), &[w]);
    }

    #[test]
    fn test_sgd_minimizes_quadratic() {
        // f(w) = (w - 3)^2
        let mut graph = Graph::new();
        let w = graph.leaf(0.0);
        let target = graph.leaf(3.0);
        let mut sgd = Sgd::new([w], 0.1);

        for _ in 0..200 {
            let mark = graph.mark();
            let diff = graph.sub(w, target);
            let loss = graph.pow(diff, 2.0);
            sgd.zero_grad(&mut graph);
            graph.backward(loss);
            sgd.step(&mut graph);
            graph.rewind(mark);
        }
        assert_relative_eq!(graph.value(w), 3.0, epsilon = 1e-6);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_sgd_learning_rate_accessors() {
        let mut sgd = Sgd::new(Vec::new(), 0.9);
        assert_eq!(sgd.learning_rate(), 0.9);
        sgd.set_learning_rate(0.05);
        assert_eq!(sgd.learning_rate(), 0.05);
        assert!(sgd.params().is_empty());
    }
}
