//! Furini per-node reduced-graph lower bound (Component H).
//!
//! At a B&B node with `k` used color classes, builds an auxiliary graph `R`
//! with one super-node per used color class and one ordinary node per
//! uncolored vertex (spec §4.H), then runs the same degree-descending
//! greedy clique as [`crate::bounds::greedy_clique`] over `R`. A clique of
//! size `q` in `R` certifies `chi >= q` for the remaining subproblem.
//!
//! Grounded on `src/solvers/clique/greedy_clique.rs`'s greedy-clique-by-degree
//! pattern, generalized to `R`'s two node kinds.

use crate::colorset::ColorSet;
use crate::state::SearchState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RNode {
    /// A used color class, identified by color index.
    Super(usize),
    /// An uncolored graph vertex.
    Vertex(usize),
}

/// Computes a lower bound on the number of additional colors required to
/// complete the partial coloring held in `state`.
///
/// Per spec §7/§9, a genuine allocation failure degrades to returning `k`
/// (the non-pruning, always-safe answer); Rust's global allocator aborts
/// the process on OOM rather than returning an error here (see
/// `DESIGN.md`'s Open Question on this), so the degenerate "no uncolored
/// vertices left" case is the only fallback actually reachable, and it
/// naturally returns `k`.
pub fn reduced_graph_lower_bound(state: &SearchState) -> usize {
    let k = state.k();
    let uncolored: Vec<usize> = state.uncolored_vertices().collect();
    let nu = uncolored.len();
    if nu == 0 {
        return k;
    }

    // super(c)-super(d) adjacency, as a k-sized array of ColorSets (k <= 63
    // always holds inside a solve, so ColorSet is reusable here).
    let mut super_adj: Vec<ColorSet> = vec![ColorSet::new(); k];
    // number of uncolored vertices seeing each color class.
    let mut sees_count = vec![0usize; k];
    for &u in &uncolored {
        let f = state.forbidden(u);
        for c in f.iter() {
            sees_count[c] += 1;
        }
        for c in f.iter() {
            for d in f.iter() {
                if c != d {
                    super_adj[c].insert(d);
                }
            }
        }
    }

    let graph = state.graph();
    let degree_of = |node: RNode| -> usize {
        match node {
            RNode::Super(c) => super_adj[c].len() as usize + sees_count[c],
            RNode::Vertex(u) => {
                let super_edges = state.forbidden(u).len() as usize;
                let vertex_edges = graph
                    .neighbors(u)
                    .iter()
                    .filter(|&&w| state.is_uncolored(w))
                    .count();
                super_edges + vertex_edges
            }
        }
    };

    let mut nodes: Vec<RNode> = (0..k).map(RNode::Super).chain(uncolored.iter().map(|&u| RNode::Vertex(u))).collect();
    nodes.sort_unstable_by(|&a, &b| degree_of(b).cmp(&degree_of(a)));

    let mut admitted_supers = ColorSet::new();
    let mut admitted_vertices: Vec<usize> = Vec::new();

    for node in nodes {
        let adjacent_to_all = match node {
            RNode::Super(c) => {
                admitted_supers.iter().all(|d| super_adj[c].contains(d))
                    && admitted_vertices.iter().all(|&w| state.forbidden(w).contains(c))
            }
            RNode::Vertex(u) => {
                admitted_supers.iter().all(|c| state.forbidden(u).contains(c))
                    && admitted_vertices.iter().all(|&w| graph.is_adjacent(u, w))
            }
        };
        if adjacent_to_all {
            match node {
                RNode::Super(c) => admitted_supers.insert(c),
                RNode::Vertex(u) => admitted_vertices.push(u),
            }
        }
    }

    let lb = admitted_supers.len() as usize + admitted_vertices.len();
    log::trace!("reduced-graph lower bound at k={k}, nu={nu}: {lb}");
    lb
}
