//! DSATUR heuristic (Component F): the initial upper bound and seed coloring.
//!
//! Grounded on the vertex tie-break rule in
//! `BacktrackingDsaturSpace::next_vertex` (teacher's
//! `src/search/coloring_dsatur_backtrack.rs`) and the algorithm sketch in
//! `src/search/dsatur_greedy.rs`'s doc comment. Deliberately does not reuse
//! [`crate::state::SearchState`]'s `ColorSet`-based bookkeeping: this
//! heuristic runs *before* the engine knows whether the graph's chromatic
//! number fits under the 63-color cap, so its own forbidden-set
//! representation (a plain growable [`bit_set::BitSet`] per vertex) is not
//! bounded at 63 colors. `solve` rejects the result afterwards if it needs
//! 64 colors or more (spec §7 contract violation).

use bit_set::BitSet;

use crate::graph::Graph;

/// Runs the DSATUR greedy heuristic to completion, returning `(coloring,
/// nb_colors)` where `coloring[v]` is `v`'s assigned color and `nb_colors`
/// is `1 + max(coloring)` (or 0 for the empty graph).
pub fn dsatur_initial_coloring(graph: &Graph) -> (Vec<usize>, usize) {
    let n = graph.n();
    let mut color: Vec<Option<usize>> = vec![None; n];
    let mut forbidden: Vec<BitSet> = vec![BitSet::new(); n];
    let mut dsat: Vec<usize> = vec![0; n];
    let mut nb_colors = 0usize;

    for _ in 0..n {
        // maximum dsat; ties by maximum degree; further ties by lowest index.
        let v = (0..n)
            .filter(|&u| color[u].is_none())
            .max_by(|&a, &b| {
                dsat[a]
                    .cmp(&dsat[b])
                    .then_with(|| graph.degree(a).cmp(&graph.degree(b)))
                    .then_with(|| b.cmp(&a)) // reversed so max_by picks the lowest index on ties
            })
            .expect("loop bound guarantees an uncolored vertex remains");

        let c = (0..)
            .find(|c| !forbidden[v].contains(*c))
            .expect("an unbounded color search always finds a free color");
        color[v] = Some(c);
        nb_colors = nb_colors.max(c + 1);

        for &w in graph.neighbors(v) {
            if color[w].is_none() && !forbidden[w].contains(c) {
                forbidden[w].insert(c);
                dsat[w] += 1;
            }
        }
    }

    let coloring: Vec<usize> = color.into_iter().map(|c| c.expect("all vertices colored")).collect();
    log::debug!("dsatur initial upper bound: {nb_colors} colors");
    (coloring, nb_colors)
}
