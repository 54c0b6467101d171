//! Random connected weighted graph generation.
//!
//! Randomized Kruskal: every unordered pair `(i, j)` with `i < j` gets a uniform
//! weight in `[0, 1)`, the candidate list is shuffled, and a candidate becomes an
//! undirected edge only if it joins two different components. The result is a
//! random spanning tree with exactly `N - 1` undirected edges. Weights play no part
//! in the selection.
//!
//! Optionally, some of the rejected candidates are added afterwards to produce
//! graphs with cycles.

use crate::graph::Graph;
use crate::types::{Node, Weight};
use crate::union_find::UnionFind;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Generator settings, loadable from the `[generator]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of nodes.
    pub size: usize,
    /// Additional undirected edges beyond the spanning tree.
    pub extra_edges: usize,
    /// RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 7,
            extra_edges: 0,
            seed: None,
        }
    }
}

pub struct RandomWeightedGraphGenerator<R: Rng> {
    rng: R,
}

impl RandomWeightedGraphGenerator<StdRng> {
    /// Deterministic generator for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(StdRng::from_entropy()),
        }
    }
}

impl<R: Rng> RandomWeightedGraphGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Random spanning tree over `size` nodes, stored in both directions.
    pub fn generate(&mut self, size: usize) -> Graph {
        self.generate_with_extra_edges(size, 0)
    }

    /// Random spanning tree plus up to `extra_edges` further undirected edges.
    ///
    /// Extra edges are drawn from the candidates the spanning pass rejected, so the
    /// graph never holds duplicate edges; the count is capped by the number of
    /// remaining pairs.
    pub fn generate_with_extra_edges(&mut self, size: usize, extra_edges: usize) -> Graph {
        let mut candidates: Vec<(Node, Node, Weight)> =
            Vec::with_capacity(size * size.saturating_sub(1) / 2);
        for i in 0..size {
            for j in (i + 1)..size {
                candidates.push((i, j, self.rng.gen::<f64>()));
            }
        }
        candidates.shuffle(&mut self.rng);

        let mut graph = Graph::new();
        for node in 0..size {
            graph.add_node(node);
        }

        let mut components = UnionFind::new(size);
        let mut rejected = Vec::with_capacity(extra_edges.min(candidates.len()));
        let mut spanning = 0;

        for (a, b, weight) in candidates {
            if components.union(a, b) {
                graph.add_undirected_edge(a, b, weight);
                spanning += 1;
            } else if rejected.len() < extra_edges {
                rejected.push((a, b, weight));
            }
        }

        for &(a, b, weight) in &rejected {
            graph.add_undirected_edge(a, b, weight);
        }

        tracing::debug!(
            size,
            spanning_edges = spanning,
            extra_edges = rejected.len(),
            "Generated random weighted graph"
        );

        graph
    }
}

/// Random connected weighted graph of `size` nodes drawn from `rng`.
pub fn random_weighted_graph<R: Rng>(size: usize, rng: R) -> Graph {
    RandomWeightedGraphGenerator::new(rng).generate(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn undirected_pairs(graph: &Graph) -> HashSet<(Node, Node)> {
        graph
            .edge_entries()
            .map(|(src, edge)| (src.min(edge.target), src.max(edge.target)))
            .collect()
    }

    #[test]
    fn test_spanning_tree_shape() {
        let graph = RandomWeightedGraphGenerator::seeded(7).generate(50);
        assert_eq!(graph.node_count(), 50);
        assert_eq!(graph.edge_count(), 2 * 49);
        assert_eq!(undirected_pairs(&graph).len(), 49);
        assert!(graph.is_fully_connected());
        assert!(graph.is_symmetric().unwrap());
    }

    #[test]
    fn test_weights_in_unit_interval() {
        let graph = RandomWeightedGraphGenerator::seeded(3).generate(20);
        assert!(graph
            .edge_entries()
            .all(|(_, edge)| (0.0..1.0).contains(&edge.weight)));
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = RandomWeightedGraphGenerator::seeded(1).generate(50);
        let b = RandomWeightedGraphGenerator::seeded(2).generate(50);
        assert_ne!(undirected_pairs(&a), undirected_pairs(&b));
        assert!(a.is_fully_connected());
        assert!(b.is_fully_connected());
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let a = RandomWeightedGraphGenerator::seeded(42).generate(15);
        let b = RandomWeightedGraphGenerator::seeded(42).generate(15);
        let edges_a: Vec<_> = a.edge_entries().map(|(s, e)| (s, *e)).collect();
        let edges_b: Vec<_> = b.edge_entries().map(|(s, e)| (s, *e)).collect();
        assert_eq!(edges_a, edges_b);
    }

    #[test]
    fn test_trivial_sizes() {
        let empty = RandomWeightedGraphGenerator::seeded(0).generate(0);
        assert!(empty.is_empty());
        assert!(empty.is_fully_connected());

        let single = RandomWeightedGraphGenerator::seeded(0).generate(1);
        assert_eq!(single.node_count(), 1);
        assert_eq!(single.edge_count(), 0);
        assert!(single.is_fully_connected());
    }

    #[test]
    fn test_extra_edges() {
        let graph = RandomWeightedGraphGenerator::seeded(9).generate_with_extra_edges(10, 5);
        assert_eq!(undirected_pairs(&graph).len(), 9 + 5);
        assert_eq!(graph.edge_count(), 2 * 14);
        assert!(graph.is_fully_connected());
    }

    #[test]
    fn test_extra_edges_capped_at_complete_graph() {
        let graph = RandomWeightedGraphGenerator::seeded(9).generate_with_extra_edges(5, 100);
        assert_eq!(undirected_pairs(&graph).len(), 10);
        assert_eq!(graph.edge_count(), 20);
    }

    #[test]
    fn test_from_config() {
        let config = GeneratorConfig {
            size: 12,
            extra_edges: 2,
            seed: Some(5),
        };
        let graph = RandomWeightedGraphGenerator::from_config(&config)
            .generate_with_extra_edges(config.size, config.extra_edges);
        assert_eq!(graph.node_count(), 12);
        assert_eq!(undirected_pairs(&graph).len(), 13);
    }

    #[test]
    fn test_free_function_with_borrowed_rng() {
        let mut rng = StdRng::seed_from_u64(11);
        let graph = random_weighted_graph(8, &mut rng);
        assert!(graph.is_fully_connected());
        assert_eq!(graph.edge_count(), 14);
    }
}
