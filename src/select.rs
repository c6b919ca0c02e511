//! Branching/vertex-selection strategies (Component G).
//!
//! Two interchangeable selectors share the same tie-break skeleton as
//! `BacktrackingDsaturSpace::next_vertex` in the teacher
//! (`src/search/coloring_dsatur_backtrack.rs`): maximum saturation degree,
//! then maximum graph degree. Spec §4.G breaks further ties by *lowest*
//! vertex index (the teacher's own final tie-break happens to fall out the
//! other way from its comparator; the spec's ordering is what's implemented
//! here).

use crate::colorset::ColorSet;
use crate::colorset::MAX_COLORS;
use crate::state::SearchState;

/// Returns the uncolored vertices with maximum `dsat`, then among those the
/// ones with maximum degree — i.e. every vertex the classic selector would
/// consider before its final lowest-index tie-break.
fn top_by_dsat_then_degree(state: &SearchState) -> Vec<usize> {
    let graph = state.graph();
    let max_dsat = state
        .uncolored_vertices()
        .map(|v| state.dsat(v))
        .max()
        .expect("caller ensures at least one uncolored vertex");
    let dsat_tied: Vec<usize> = state
        .uncolored_vertices()
        .filter(|&v| state.dsat(v) == max_dsat)
        .collect();
    let max_degree = dsat_tied.iter().map(|&v| graph.degree(v)).max().unwrap();
    dsat_tied.into_iter().filter(|&v| graph.degree(v) == max_degree).collect()
}

/// Classic DSATUR selector: maximum `dsat`, ties by maximum degree, further
/// ties by lowest index. Returns `None` only when every vertex is colored.
pub fn classic_select(state: &SearchState) -> Option<usize> {
    if state.nb_colored() == state.graph().n() {
        return None;
    }
    top_by_dsat_then_degree(state).into_iter().min()
}

/// Sewell selector (spec §4.G.3): among the classic selector's surviving
/// candidates, picks the vertex whose remaining-color options are most
/// entangled with its uncolored neighborhood. Degrades to the classic
/// selector's output when `ub >= MAX_COLORS`, since the option-set
/// intersection can't be computed within a 63-bit `ColorSet` at that point.
pub fn sewell_select(state: &SearchState) -> Option<usize> {
    if state.nb_colored() == state.graph().n() {
        return None;
    }
    let candidates = top_by_dsat_then_degree(state);
    if candidates.len() == 1 {
        return Some(candidates[0]);
    }
    if state.ub() >= MAX_COLORS {
        return candidates.into_iter().min();
    }

    let graph = state.graph();
    let full_mask = ColorSet::full_mask(state.ub());
    let opts = |v: usize| state.forbidden(v).complement_within(&full_mask);

    let scored = candidates.into_iter().map(|v| {
        let opts_v = opts(v);
        let score: u32 = graph
            .neighbors(v)
            .iter()
            .filter(|&&u| state.is_uncolored(u))
            .map(|&u| opts_v.intersection(&opts(u)).len())
            .sum();
        (v, score)
    });

    scored
        .fold(None::<(usize, u32)>, |best, (v, score)| match best {
            None => Some((v, score)),
            Some((bv, bscore)) => {
                if score > bscore || (score == bscore && v < bv) {
                    Some((v, score))
                } else {
                    Some((bv, bscore))
                }
            }
        })
        .map(|(v, _)| v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::OwnedGraph;

    #[test]
    fn classic_select_none_when_complete() {
        let g = OwnedGraph::from_edges(2, &[(0, 1)]);
        let view = g.view();
        let mut st = SearchState::new(&view, 2);
        st.assign(0, 0);
        st.assign(1, 1);
        assert_eq!(classic_select(&st), None);
    }

    #[test]
    fn classic_select_picks_highest_dsat() {
        // star: center 0 has degree 4, leaves have degree 1. Coloring one
        // leaf raises the center's dsat above every other uncolored vertex.
        let g = OwnedGraph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]);
        let view = g.view();
        let mut st = SearchState::new(&view, 5);
        st.assign(1, 0);
        assert_eq!(classic_select(&st), Some(0));
    }

    #[test]
    fn classic_select_breaks_ties_by_lowest_index() {
        let g = OwnedGraph::from_edges(3, &[]);
        let view = g.view();
        let st = SearchState::new(&view, 3);
        assert_eq!(classic_select(&st), Some(0));
    }

    #[test]
    fn sewell_degrades_to_classic_near_color_cap() {
        let g = OwnedGraph::from_edges(3, &[]);
        let view = g.view();
        let mut st = SearchState::new(&view, MAX_COLORS);
        // push ub right up against the cap by completing enough assigns is
        // unnecessary: ub is fixed at construction for this test.
        assert_eq!(sewell_select(&st), classic_select(&st));
        let _ = &mut st;
    }

    #[test]
    fn sewell_and_classic_agree_on_single_candidate() {
        let g = OwnedGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        let view = g.view();
        let mut st = SearchState::new(&view, 4);
        st.assign(1, 0);
        st.assign(2, 1);
        // vertex 0: dsat=1 (sees color0), degree 1; vertex3: dsat=1, degree1: tie -> lowest index
        assert_eq!(classic_select(&st), sewell_select(&st));
    }
}
