//! Degree-ordered greedy clique (Component E): the initial global lower
//! bound on chi(G).
//!
//! Grounded on `src/solvers/clique/greedy_clique.rs::greedy_clique` and the
//! candidate-shrinking variant in `src/solvers/clique/bnb.rs::adhoc_greedy_clique`
//! in the teacher. Order vertices by degree descending; accept a vertex iff
//! it is adjacent to every member accepted so far.

use crate::graph::Graph;

/// Returns the size of a greedily-constructed clique, a valid lower bound
/// on omega(G) and hence on chi(G).
pub fn greedy_clique_lower_bound(graph: &Graph) -> usize {
    let n = graph.n();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_unstable_by(|&a, &b| graph.degree(b).cmp(&graph.degree(a)));

    let mut clique: Vec<usize> = Vec::new();
    for v in order {
        if clique.iter().all(|&u| graph.is_adjacent(u, v)) {
            clique.push(v);
        }
    }
    log::debug!("greedy clique lower bound: {}", clique.len());
    clique.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::OwnedGraph;

    #[test]
    fn triangle_clique_is_three() {
        let g = OwnedGraph::from_edges(3, &[(0, 1), (0, 2), (1, 2)]);
        assert_eq!(greedy_clique_lower_bound(&g.view()), 3);
    }

    #[test]
    fn edgeless_graph_clique_is_at_most_one() {
        let g = OwnedGraph::from_edges(4, &[]);
        assert_eq!(greedy_clique_lower_bound(&g.view()), 1);
    }

    #[test]
    fn empty_graph_clique_is_zero() {
        let g = OwnedGraph::from_edges(0, &[]);
        assert_eq!(greedy_clique_lower_bound(&g.view()), 0);
    }

    #[test]
    fn path_clique_is_two() {
        let g = OwnedGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(greedy_clique_lower_bound(&g.view()), 2);
    }

    #[test]
    fn star_clique_is_two() {
        // center 0 connected to 1,2,3: the only edges are through 0, so the
        // largest clique is an edge.
        let g = OwnedGraph::from_edges(4, &[(0, 1), (0, 2), (0, 3)]);
        assert_eq!(greedy_clique_lower_bound(&g.view()), 2);
    }
}
