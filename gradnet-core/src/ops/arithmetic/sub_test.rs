use crate::autograd::Graph;
use crate::ops::Operation;

#[test]
fn test_sub_forward_backward() {
    let mut graph = Graph::new();
    let a = graph.leaf(5.0);
    let b = graph.leaf(8.0);
    let c = graph.sub(a, b);
    assert_eq!(graph.value(c), -3.0);
    assert_eq!(graph.operation(c), Operation::Sub);

    graph.backward(c);
    assert_eq!(graph.grad(a), 1.0);
    assert_eq!(graph.grad(b), -1.0);
}

#[test]
fn test_sub_aliased_operand_cancels() {
    let mut graph = Graph::new();
    let a = graph.leaf(2.5);
    let c = graph.sub(a, a);
    graph.backward(c);

    assert_eq!(graph.value(c), 0.0);
    assert_eq!(graph.grad(a), 0.0);
}
