//! Disjoint-set forest with path compression and union by rank.
//!
//! Used by the graph generator to reject candidate edges whose endpoints are
//! already connected.

use crate::types::Node;

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
    rank: Vec<u8>,
    components: usize,
}

impl UnionFind {
    /// Create `size` singleton sets `{0}, {1}, ..., {size - 1}`.
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
            components: size,
        }
    }

    /// Representative of the set containing `node`.
    ///
    /// Panics if `node >= len()`.
    pub fn find(&mut self, mut node: Node) -> Node {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merge the sets containing `a` and `b`. Returns `false` if they were already joined.
    pub fn union(&mut self, a: Node, b: Node) -> bool {
        let mut root_a = self.find(a);
        let mut root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        if self.rank[root_a] < self.rank[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        if self.rank[root_a] == self.rank[root_b] {
            self.rank[root_a] = self.rank[root_a].saturating_add(1);
        }
        self.components -= 1;
        true
    }

    pub fn connected(&mut self, a: Node, b: Node) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of disjoint sets.
    pub fn component_count(&self) -> usize {
        self.components
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
