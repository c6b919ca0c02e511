//! Borrowed CSR graph view (Component B).
//!
//! The caller owns the graph; the engine only ever holds a borrow for the
//! duration of a solve. Parsing/ingest (DIMACS, CGSHOP, ...) is explicitly
//! out of scope here — the caller is responsible for producing a valid CSR
//! triple (`adj`, `start`, `deg`) with sorted neighbor lists.

use crate::error::GraphError;

/// A simple, loop-free, undirected graph in compressed-sparse-row form.
///
/// `adj` is the concatenation of each vertex's neighbor list, in ascending
/// order; `start[v]` is the offset of vertex `v`'s neighbors within `adj`;
/// `deg[v]` is the number of neighbors of `v`.
#[derive(Debug, Clone)]
pub struct Graph<'a> {
    n: usize,
    adj: &'a [usize],
    start: &'a [usize],
    deg: &'a [usize],
}

impl<'a> Graph<'a> {
    /// Builds a graph view from a CSR triple, validating the contract spelled
    /// out in spec §3/§6: sorted adjacency, no self-loops, no duplicates, and
    /// every edge present at both endpoints.
    pub fn new(adj: &'a [usize], start: &'a [usize], deg: &'a [usize]) -> Result<Self, GraphError> {
        let n = start.len();
        if deg.len() != n {
            return Err(GraphError::InconsistentLengths { start_len: n, deg_len: deg.len() });
        }
        for v in 0..n {
            let lo = start[v];
            let hi = lo
                .checked_add(deg[v])
                .ok_or(GraphError::OffsetOverflow { vertex: v })?;
            if hi > adj.len() {
                return Err(GraphError::OffsetOutOfBounds { vertex: v });
            }
            let slice = &adj[lo..hi];
            for w in slice {
                if *w == v {
                    return Err(GraphError::SelfLoop { vertex: v });
                }
                if *w >= n {
                    return Err(GraphError::VertexOutOfRange { vertex: *w });
                }
            }
            for pair in slice.windows(2) {
                if pair[0] > pair[1] {
                    return Err(GraphError::UnsortedAdjacency { vertex: v });
                }
                if pair[0] == pair[1] {
                    return Err(GraphError::DuplicateNeighbor { vertex: v, neighbor: pair[0] });
                }
            }
        }
        let g = Self { n, adj, start, deg };
        for v in 0..n {
            for w in g.neighbors(v) {
                if !g.is_adjacent(w, v) {
                    return Err(GraphError::AsymmetricEdge { u: v, v: w });
                }
            }
        }
        Ok(g)
    }

    /// Number of vertices.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Degree of vertex `v`.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.deg[v]
    }

    /// Sorted neighbor list of vertex `v`.
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adj[self.start[v]..self.start[v] + self.deg[v]]
    }

    /// Tests adjacency of `u` and `v` by binary search in `u`'s neighbor list
    /// (spec §4.B: callers supply sorted input, so a binary search replaces
    /// the teacher's linear scan / adjacency-matrix lookup).
    #[inline]
    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.neighbors(u).binary_search(&v).is_ok()
    }

    /// Iterator over vertex ids `0..n`.
    #[inline]
    pub fn vertices(&self) -> std::ops::Range<usize> {
        0..self.n
    }
}

/// Test-only helper: builds the CSR triple for a graph given as an edge
/// list, used by unit tests across this crate (graph ingest proper is out
/// of scope for the engine itself — this exists purely so tests don't need
/// to hand-write `adj`/`start`/`deg` arrays).
#[cfg(test)]
pub struct OwnedGraph {
    pub adj: Vec<usize>,
    pub start: Vec<usize>,
    pub deg: Vec<usize>,
}

#[cfg(test)]
impl OwnedGraph {
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut adj_list: Vec<Vec<usize>> = vec![Vec::new(); n];
        for &(u, v) in edges {
            adj_list[u].push(v);
            adj_list[v].push(u);
        }
        for l in &mut adj_list {
            l.sort_unstable();
            l.dedup();
        }
        let mut adj = Vec::new();
        let mut start = Vec::with_capacity(n);
        let mut deg = Vec::with_capacity(n);
        for l in &adj_list {
            start.push(adj.len());
            deg.push(l.len());
            adj.extend_from_slice(l);
        }
        Self { adj, start, deg }
    }

    pub fn view(&self) -> Graph<'_> {
        Graph::new(&self.adj, &self.start, &self.deg).unwrap()
    }
}
