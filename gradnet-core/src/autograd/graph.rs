use crate::ops::Operation;
use log::debug;
use std::fmt;

/// Stable handle to a node stored in a [`Graph`].
///
/// Identity is the arena slot, never the value: two leaves holding the same
/// number are two different nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) operation: Operation,
    pub(crate) children: Vec<NodeId>,
}

/// Arena length captured by [`Graph::mark`], used to drop temporary nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphMark(usize);

/// Snapshot of one node, as handed to external renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub id: NodeId,
    pub value: f64,
    pub grad: f64,
    pub operation: Operation,
    pub children: Vec<NodeId>,
}

/// Arena holding every scalar node of a computation graph.
///
/// Nodes are appended by the operation methods (`add`, `mul`, `relu`, ...) and
/// addressed through [`NodeId`] handles. A node's children are always created
/// before it, so every child id is smaller than its parent id and the graph
/// cannot contain a cycle.
///
/// All accessors taking a [`NodeId`] panic if the id does not belong to this
/// graph (or was dropped by [`Graph::rewind`]).
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Creates a leaf node (no children, no propagation rule) with zero gradient.
    pub fn leaf(&mut self, value: f64) -> NodeId {
        self.push(value, Operation::Leaf, Vec::new())
    }

    /// Creates one leaf per value, in order.
    pub fn leaves(&mut self, values: &[f64]) -> Vec<NodeId> {
        values.iter().map(|&v| self.leaf(v)).collect()
    }

    pub(crate) fn push(&mut self, value: f64, operation: Operation, children: Vec<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        debug_assert!(
            children.iter().all(|child| child.0 < id.0),
            "children must exist before their parent"
        );
        self.nodes.push(Node {
            value,
            grad: 0.0,
            operation,
            children,
        });
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Forward value of `id`.
    pub fn value(&self, id: NodeId) -> f64 {
        self.nodes[id.0].value
    }

    /// Accumulated gradient of `id`. Only meaningful after a backward pass.
    pub fn grad(&self, id: NodeId) -> f64 {
        self.nodes[id.0].grad
    }

    /// Forward values of several nodes, in order.
    pub fn values(&self, ids: &[NodeId]) -> Vec<f64> {
        ids.iter().map(|&id| self.value(id)).collect()
    }

    /// Gradients of several nodes, in order.
    pub fn grads(&self, ids: &[NodeId]) -> Vec<f64> {
        ids.iter().map(|&id| self.grad(id)).collect()
    }

    pub fn operation(&self, id: NodeId) -> Operation {
        self.nodes[id.0].operation
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id.0].operation.is_leaf()
    }

    /// Overwrites the value of a leaf. This is how optimizers update parameters.
    ///
    /// Values of computed nodes are never rewritten: they would no longer match
    /// their children.
    pub fn set_value(&mut self, id: NodeId, value: f64) {
        debug_assert!(self.is_leaf(id), "only leaf values may be overwritten");
        self.nodes[id.0].value = value;
    }

    pub(crate) fn set_grad(&mut self, id: NodeId, grad: f64) {
        self.nodes[id.0].grad = grad;
    }

    pub(crate) fn accumulate_grad(&mut self, id: NodeId, delta: f64) {
        self.nodes[id.0].grad += delta;
    }

    /// Resets the gradient of every listed node to exactly `0.0`.
    pub fn zero_grad(&mut self, ids: &[NodeId]) {
        for &id in ids {
            self.set_grad(id, 0.0);
        }
    }

    /// Resets the gradient of every node in the graph.
    pub fn zero_grad_all(&mut self) {
        for node in &mut self.nodes {
            node.grad = 0.0;
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remembers the current arena length.
    pub fn mark(&self) -> GraphMark {
        GraphMark(self.nodes.len())
    }

    /// Drops every node created after `mark`.
    ///
    /// Handles to dropped nodes become invalid. Nodes created before the mark
    /// (parameters, inputs) keep their values and gradients.
    pub fn rewind(&mut self, mark: GraphMark) {
        if mark.0 < self.nodes.len() {
            debug!("Graph: rewinding {} -> {} nodes", self.nodes.len(), mark.0);
            self.nodes.truncate(mark.0);
        }
    }

    /// Snapshot of a single node.
    pub fn record(&self, id: NodeId) -> NodeRecord {
        let node = self.node(id);
        NodeRecord {
            id,
            value: node.value,
            grad: node.grad,
            operation: node.operation,
            children: node.children.clone(),
        }
    }

    /// Snapshots of every node reachable from `root`, children before parents.
    pub fn export(&self, root: NodeId) -> Vec<NodeRecord> {
        self.topological_order(root)
            .into_iter()
            .map(|id| self.record(id))
            .collect()
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
