//! Search state and the incremental mutator (Components C/D).
//!
//! Grounded on `BacktrackingDsaturSpace::{commit, restore}` in the teacher's
//! `src/search/coloring_dsatur_backtrack.rs`, with one deliberate deviation:
//! the teacher tracks a per-vertex, per-color adjacency *count*
//! (`nb_adj_colored[v][c]`) so that `restore` can decide in O(1) whether a
//! forbidden color is still justified by some other neighbor. Spec §4.C/D
//! instead specifies a `ColorSet` forbidden-set with no such counts, so
//! `unassign` here rescans the vertex's colored neighbors to answer "is `c`
//! still present via another neighbor?" — explicitly accepted by the spec
//! as an O(deg·deg) worst case, correctness over speed.

use bit_set::BitSet;

use crate::colorset::ColorSet;
use crate::graph::Graph;

/// Owned, mutable search state for one solve. Allocated on solve entry,
/// dropped on solve exit; the [`Graph`] it borrows and the caller's output
/// buffer are not owned by it.
#[derive(Debug)]
pub struct SearchState<'a> {
    graph: &'a Graph<'a>,
    /// `color[v]`: current color of `v`, or `None` if uncolored.
    color: Vec<Option<usize>>,
    /// `forbidden[v]`: colors used by a currently-colored neighbor of `v`.
    forbidden: Vec<ColorSet>,
    /// `dsat[v] == forbidden[v].len()`, maintained incrementally.
    dsat: Vec<usize>,
    /// Vertices with `color[v] == None`.
    uncolored: BitSet,
    /// Number of vertices currently assigned color `c`, for `c < upper_bound`.
    class_size: Vec<usize>,
    /// Number of colors in current use (`1 + max assigned color`, or 0).
    k: usize,
    /// Number of colored vertices.
    nb_colored: usize,
    /// Running upper bound on chi(G). Monotonically non-increasing.
    ub: usize,
    /// Best complete coloring found so far, valid once `ub` has been set at
    /// least once (by the DSATUR seed).
    best_color: Vec<usize>,
}

impl<'a> SearchState<'a> {
    /// Allocates a fresh, fully-uncolored search state for `graph`, with
    /// room for up to `upper_bound` color classes.
    pub fn new(graph: &'a Graph<'a>, upper_bound: usize) -> Self {
        let n = graph.n();
        let mut uncolored = BitSet::with_capacity(n);
        for v in 0..n {
            uncolored.insert(v);
        }
        Self {
            graph,
            color: vec![None; n],
            forbidden: vec![ColorSet::new(); n],
            dsat: vec![0; n],
            uncolored,
            class_size: vec![0; upper_bound],
            k: 0,
            nb_colored: 0,
            ub: upper_bound,
            best_color: vec![0; n],
        }
    }

    #[inline]
    pub fn graph(&self) -> &'a Graph<'a> {
        self.graph
    }

    #[inline]
    pub fn color_of(&self, v: usize) -> Option<usize> {
        self.color[v]
    }

    #[inline]
    pub fn forbidden(&self, v: usize) -> ColorSet {
        self.forbidden[v]
    }

    #[inline]
    pub fn dsat(&self, v: usize) -> usize {
        self.dsat[v]
    }

    #[inline]
    pub fn is_uncolored(&self, v: usize) -> bool {
        self.color[v].is_none()
    }

    #[inline]
    pub fn uncolored_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.uncolored.iter()
    }

    #[inline]
    pub fn nb_colored(&self) -> usize {
        self.nb_colored
    }

    /// Number of distinct color classes currently in use.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn ub(&self) -> usize {
        self.ub
    }

    /// Assigns color `c` to vertex `v`, updating every uncolored neighbor's
    /// `forbidden`/`dsat` (spec §4.C/D).
    pub fn assign(&mut self, v: usize, c: usize) {
        debug_assert!(self.color[v].is_none());
        debug_assert!(c <= self.k, "branching cap violated: c={} k={}", c, self.k);
        self.color[v] = Some(c);
        self.uncolored.remove(v);
        self.nb_colored += 1;
        self.class_size[c] += 1;
        if c == self.k {
            self.k += 1;
        }
        for &w in self.graph.neighbors(v) {
            if self.color[w].is_none() && !self.forbidden[w].contains(c) {
                self.forbidden[w].insert(c);
                self.dsat[w] += 1;
                log::trace!("assign({v},{c}): {w} now forbidden from {c}");
            }
        }
    }

    /// The exact inverse of [`Self::assign`]: for every uncolored neighbor
    /// `w` that had `c` forbidden, removes `c` from `forbidden[w]` only if no
    /// *other* currently-colored neighbor of `w` still uses `c`.
    pub fn unassign(&mut self, v: usize, c: usize) {
        debug_assert_eq!(self.color[v], Some(c));
        self.color[v] = None;
        self.uncolored.insert(v);
        self.nb_colored -= 1;
        self.class_size[c] -= 1;
        if self.class_size[c] == 0 {
            debug_assert_eq!(c, self.k - 1, "unassign must retire the highest-used color class");
            self.k -= 1;
        }
        for &w in self.graph.neighbors(v) {
            if self.color[w].is_none() && self.forbidden[w].contains(c) {
                let still_present = self
                    .graph
                    .neighbors(w)
                    .iter()
                    .any(|&x| x != v && self.color[x] == Some(c));
                if !still_present {
                    self.forbidden[w].remove(c);
                    self.dsat[w] -= 1;
                    log::trace!("unassign({v},{c}): {w} no longer forbidden from {c}");
                }
            }
        }
    }

    /// Records a complete assignment (`nb_colored == n`) as the new best
    /// coloring, tightening `ub` to `self.k`. Spec §4.I step 3.
    pub fn commit_best(&mut self) {
        debug_assert_eq!(self.nb_colored, self.color.len());
        self.ub = self.k;
        for (v, c) in self.color.iter().enumerate() {
            self.best_color[v] = c.expect("complete assignment has no uncolored vertex");
        }
        log::info!("improved upper bound to {} colors", self.ub);
    }

    /// Directly installs `coloring` as the best-known solution and sets
    /// `ub` to its color count, used to seed the search from the DSATUR
    /// heuristic (Component F) before branch-and-bound starts.
    pub fn seed_best(&mut self, coloring: &[usize], nb_colors: usize) {
        self.best_color.copy_from_slice(coloring);
        self.ub = nb_colors;
    }

    #[inline]
    pub fn best_color(&self) -> &[usize] {
        &self.best_color
    }

    /// Recomputes `forbidden`/`dsat` from scratch by scanning colored
    /// neighbors, for use in invariant tests (spec §8, round-trip property).
    #[cfg(test)]
    pub fn recompute_forbidden_dsat(&self) -> (Vec<ColorSet>, Vec<usize>) {
        let n = self.color.len();
        let mut forbidden = vec![ColorSet::new(); n];
        let mut dsat = vec![0usize; n];
        for v in 0..n {
            if self.color[v].is_some() {
                continue;
            }
            for &w in self.graph.neighbors(v) {
                if let Some(c) = self.color[w] {
                    if !forbidden[v].contains(c) {
                        forbidden[v].insert(c);
                        dsat[v] += 1;
                    }
                }
            }
        }
        (forbidden, dsat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::OwnedGraph;

    #[test]
    fn assign_unassign_round_trip_restores_state() {
        let g = OwnedGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let view = g.view();
        let mut st = SearchState::new(&view, 4);
        st.assign(0, 0);
        st.assign(1, 1);
        let snapshot_forbidden = (0..4).map(|v| st.forbidden(v)).collect::<Vec<_>>();
        let snapshot_dsat = (0..4).map(|v| st.dsat(v)).collect::<Vec<_>>();
        st.assign(2, 0);
        st.unassign(2, 0);
        for v in 0..4 {
            assert_eq!(st.forbidden(v), snapshot_forbidden[v], "forbidden mismatch at {v}");
            assert_eq!(st.dsat(v), snapshot_dsat[v], "dsat mismatch at {v}");
        }
    }

    #[test]
    fn dsat_matches_recomputed_forbidden() {
        let g = OwnedGraph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4), (1, 2)]);
        let view = g.view();
        let mut st = SearchState::new(&view, 5);
        st.assign(0, 0);
        st.assign(1, 1);
        let (forbidden, dsat) = st.recompute_forbidden_dsat();
        for v in 0..5 {
            if st.is_uncolored(v) {
                assert_eq!(st.forbidden(v), forbidden[v]);
                assert_eq!(st.dsat(v), dsat[v]);
                assert_eq!(st.dsat(v) as u32, st.forbidden(v).len());
            }
        }
    }

    #[test]
    fn k_tracks_highest_used_color_class() {
        let g = OwnedGraph::from_edges(3, &[(0, 1), (1, 2)]);
        let view = g.view();
        let mut st = SearchState::new(&view, 3);
        assert_eq!(st.k(), 0);
        st.assign(0, 0);
        assert_eq!(st.k(), 1);
        st.assign(1, 1);
        assert_eq!(st.k(), 2);
        st.unassign(1, 1);
        assert_eq!(st.k(), 1);
    }
}
