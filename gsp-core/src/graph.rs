//! Weighted graph with lazily derived dense matrices.
//!
//! The adjacency list is authoritative. Three dense views are derived from it:
//!
//! ```text
//! adjacency list -> weighted matrix -> Laplacian
//!               \-> adjacency matrix
//! ```
//!
//! Each view lives in its own cache cell. A mutation of the adjacency list empties
//! every cell (`Stale`); the next accessor call recomputes the view (`Fresh`).
//! The `update_*` methods force a recomputation regardless of state.
//!
//! Storage is directed: `add_edge(a, b, w)` does not imply `b -> a`. Use
//! [`Graph::add_undirected_edge`] for undirected graphs; the Laplacian is only
//! symmetric (and therefore only diagonalizable by the spectral module) when every
//! edge has an equally weighted reverse edge.

use crate::error::{GspError, Result};
use crate::types::{Edge, Node, Weight};
use nalgebra::DMatrix;
use once_cell::unsync::OnceCell;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Relative tolerance used when comparing a matrix against its transpose.
pub const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Freshness of one derived matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixState {
    /// Not computed since the last adjacency mutation.
    Stale,
    /// Computed from the current adjacency list.
    Fresh,
}

impl MatrixState {
    fn of<T>(cell: &OnceCell<T>) -> Self {
        if cell.get().is_some() {
            MatrixState::Fresh
        } else {
            MatrixState::Stale
        }
    }
}

/// Snapshot of the cache state of all derived matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheState {
    pub weighted: MatrixState,
    pub laplacian: MatrixState,
    pub adjacency: MatrixState,
}

/// Weighted directed graph over dense node ids.
///
/// `Graph` is `Send` but not `Sync`: the lazy caches are filled through `&self`
/// without synchronisation, so sharing a graph across threads requires external
/// locking.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: BTreeMap<Node, Vec<Edge>>,
    weighted: OnceCell<DMatrix<f64>>,
    laplacian: OnceCell<DMatrix<f64>>,
    adjacency_matrix: OnceCell<DMatrix<f64>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `node` exists. Idempotent; caches stay fresh if the node already exists.
    pub fn add_node(&mut self, node: Node) {
        if !self.adjacency.contains_key(&node) {
            self.adjacency.insert(node, Vec::new());
            self.invalidate();
        }
    }

    /// Append a directed edge `src -> dst`, adding both endpoints as nodes.
    ///
    /// The reverse edge is NOT added.
    pub fn add_edge(&mut self, src: Node, dst: Node, weight: Weight) {
        self.add_node(src);
        self.add_node(dst);
        self.adjacency
            .entry(src)
            .or_default()
            .push(Edge::new(dst, weight));
        self.invalidate();
    }

    /// Append both `a -> b` and `b -> a` with the same weight.
    pub fn add_undirected_edge(&mut self, a: Node, b: Node, weight: Weight) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    /// Number of nodes (keys of the adjacency list).
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edge entries.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn has_node(&self, node: Node) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.adjacency.keys().copied()
    }

    /// Out-edges of `node` in insertion order (empty for unknown nodes).
    pub fn edges(&self, node: Node) -> &[Edge] {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All directed edges as `(source, edge)` pairs.
    pub fn edge_entries(&self) -> impl Iterator<Item = (Node, &Edge)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&src, edges)| edges.iter().map(move |edge| (src, edge)))
    }

    /// Number of outgoing edges of `node` (0 for unknown nodes).
    pub fn out_degree(&self, node: Node) -> usize {
        self.edges(node).len()
    }

    /// Current freshness of every derived matrix.
    pub fn cache_state(&self) -> CacheState {
        CacheState {
            weighted: MatrixState::of(&self.weighted),
            laplacian: MatrixState::of(&self.laplacian),
            adjacency: MatrixState::of(&self.adjacency_matrix),
        }
    }

    /// Dense weighted matrix: `w[i][j]` is the weight of the first `i -> j` edge, else 0.
    pub fn weighted_matrix(&self) -> Result<&DMatrix<f64>> {
        self.weighted.get_or_try_init(|| self.compute_weighted())
    }

    /// Combinatorial Laplacian: out-degree (excluding self-loops) on the diagonal,
    /// negated weights elsewhere.
    pub fn laplacian_matrix(&self) -> Result<&DMatrix<f64>> {
        self.laplacian
            .get_or_try_init(|| self.weighted_matrix().map(laplacian_from))
    }

    /// Adjacency matrix built directly from the adjacency list, with a zero diagonal.
    pub fn adjacency_matrix(&self) -> Result<&DMatrix<f64>> {
        self.adjacency_matrix
            .get_or_try_init(|| self.compute_adjacency())
    }

    /// Force recomputation of the weighted matrix.
    pub fn update_weighted_graph(&mut self) -> Result<()> {
        let weighted = self.compute_weighted()?;
        self.weighted = OnceCell::from(weighted);
        Ok(())
    }

    /// Force recomputation of the Laplacian from the current weighted matrix.
    pub fn update_laplacian_matrix(&mut self) -> Result<()> {
        let laplacian = laplacian_from(self.weighted_matrix()?);
        tracing::debug!(matrix = "laplacian", size = laplacian.nrows(), "Derived matrix");
        self.laplacian = OnceCell::from(laplacian);
        Ok(())
    }

    /// Force recomputation of the adjacency matrix.
    pub fn update_adjacency_matrix(&mut self) -> Result<()> {
        let adjacency = self.compute_adjacency()?;
        self.adjacency_matrix = OnceCell::from(adjacency);
        Ok(())
    }

    /// Whether every node is reachable from node 0 along outgoing edges.
    ///
    /// An empty graph counts as connected; a graph without node 0 does not.
    /// Only meaningful as an undirected connectivity check when edges were
    /// added in both directions.
    pub fn is_fully_connected(&self) -> bool {
        let node_count = self.adjacency.len();
        if node_count == 0 {
            return true;
        }
        if !self.adjacency.contains_key(&0) {
            return false;
        }

        let mut visited: HashSet<Node> = HashSet::with_capacity(node_count);
        let mut stack = vec![0];

        while let Some(node) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }
            for edge in self.edges(node) {
                if !visited.contains(&edge.target) {
                    stack.push(edge.target);
                }
            }
        }

        visited.len() == node_count
    }

    /// Whether every edge has a reverse edge of equal weight.
    pub fn is_symmetric(&self) -> Result<bool> {
        Ok(is_symmetric_matrix(self.weighted_matrix()?))
    }

    fn invalidate(&mut self) {
        self.weighted.take();
        self.laplacian.take();
        self.adjacency_matrix.take();
    }

    /// Adjacency rows indexed by node id, after checking the keys are `0..N`.
    fn dense_rows(&self) -> Result<Vec<&[Edge]>> {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(expected, (&found, edges))| {
                if expected == found {
                    Ok(edges.as_slice())
                } else {
                    Err(GspError::NonDenseNodes { expected, found })
                }
            })
            .collect()
    }

    fn compute_weighted(&self) -> Result<DMatrix<f64>> {
        let rows = self.dense_rows()?;
        let size = rows.len();
        tracing::debug!(matrix = "weighted", size, "Derived matrix");
        Ok(DMatrix::from_fn(size, size, |i, j| {
            first_weight(rows[i], j).unwrap_or(0.0)
        }))
    }

    fn compute_adjacency(&self) -> Result<DMatrix<f64>> {
        let rows = self.dense_rows()?;
        let size = rows.len();
        tracing::debug!(matrix = "adjacency", size, "Derived matrix");
        Ok(DMatrix::from_fn(size, size, |i, j| {
            if i == j {
                0.0
            } else {
                first_weight(rows[i], j).unwrap_or(0.0)
            }
        }))
    }
}

/// Weight of the first edge pointing at `target`.
fn first_weight(edges: &[Edge], target: Node) -> Option<Weight> {
    edges
        .iter()
        .find(|edge| edge.target == target)
        .map(|edge| edge.weight)
}

fn laplacian_from(weighted: &DMatrix<f64>) -> DMatrix<f64> {
    let size = weighted.nrows();
    let mut laplacian = DMatrix::zeros(size, size);
    for i in 0..size {
        let mut degree = 0.0;
        for j in 0..size {
            if i != j {
                degree += weighted[(i, j)];
                laplacian[(i, j)] = -weighted[(i, j)];
            }
        }
        laplacian[(i, i)] = degree;
    }
    laplacian
}

/// Square and equal to its transpose within [`SYMMETRY_TOLERANCE`] relative to
/// the largest entry.
pub fn is_symmetric_matrix(matrix: &DMatrix<f64>) -> bool {
    if !matrix.is_square() {
        return false;
    }
    let scale = matrix.amax().max(1.0);
    let n = matrix.nrows();
    (0..n).all(|i| {
        (i + 1..n).all(|j| (matrix[(i, j)] - matrix[(j, i)]).abs() <= SYMMETRY_TOLERANCE * scale)
    })
}
