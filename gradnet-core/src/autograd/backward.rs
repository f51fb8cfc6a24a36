use super::graph::{Graph, NodeId};
use log::debug;
use std::collections::HashSet;

impl Graph {
    /// Returns every node reachable from `root`, each child before its parents.
    ///
    /// Depth-first traversal with post-order emission. The visited set is keyed
    /// by node identity, so a node shared by several parents (or used twice by
    /// the same parent) appears exactly once. An explicit stack replaces
    /// recursion: a loss summed over a batch is a very deep chain.
    pub fn topological_order(&self, root: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut visited: HashSet<NodeId> = HashSet::new();
        // (node, index of the next child to visit)
        let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
        visited.insert(root);

        while let Some(top) = stack.last_mut() {
            let (node, next_child) = *top;
            let children = &self.node(node).children;
            if next_child < children.len() {
                top.1 += 1;
                let child = children[next_child];
                debug_assert!(child < node, "cycle through node {}", node);
                if visited.insert(child) {
                    stack.push((child, 0));
                }
            } else {
                stack.pop();
                order.push(node);
            }
        }
        order
    }

    /// Reverse-mode propagation from `root`.
    ///
    /// Seeds `root` with gradient `1.0`, then replays the propagation rule of
    /// every reachable non-leaf node, parents first. Once this returns, each
    /// reachable node holds d(root)/d(node) summed over every path to `root`.
    ///
    /// Gradients accumulate: call [`Graph::zero_grad`] on the parameters first
    /// when a fresh gradient is needed.
    pub fn backward(&mut self, root: NodeId) {
        let order = self.topological_order(root);
        debug!("backward from node {}: {} reachable nodes", root, order.len());

        self.set_grad(root, 1.0);
        for &id in order.iter().rev() {
            self.propagate(id);
        }
    }

    /// Pushes the gradient of `id` into its children. No-op for leaves.
    fn propagate(&mut self, id: NodeId) {
        let node = self.node(id);
        if node.operation.is_leaf() {
            return;
        }
        let upstream = node.grad;
        let lhs = self.value(node.children[0]);
        let rhs = node.children.get(1).map_or(0.0, |&c| self.value(c));
        let partials = node.operation.partials(lhs, rhs);

        // Slot by slot: with `add(a, a)` both slots hit `a`.
        for slot in 0..self.node(id).children.len() {
            let child = self.node(id).children[slot];
            self.accumulate_grad(child, partials[slot] * upstream);
        }
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
