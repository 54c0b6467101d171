//! Core value types shared across gsp-core.

use serde::{Deserialize, Serialize};

/// Node identifier. Graphs of size N use the dense range `0..N`.
pub type Node = usize;

/// Edge weight. Any real number is accepted; the generator draws from `[0, 1)`.
pub type Weight = f64;

/// Directed out-edge stored in the source node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Node the edge points to.
    pub target: Node,
    /// Edge weight.
    pub weight: Weight,
}

impl Edge {
    pub fn new(target: Node, weight: Weight) -> Self {
        Self { target, weight }
    }
}

/// A single `(node, value)` sample of a signal, the plain-data form handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeValue {
    pub node: Node,
    pub value: f64,
}
