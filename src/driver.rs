//! Branch-and-bound driver (Component I) and the public solve entry point
//! (spec §6).
//!
//! Grounded on `BacktrackingDsaturSpace::dfs_search` in the teacher
//! (`src/search/coloring_dsatur_backtrack.rs`) for the overall
//! commit/recurse/restore shape, rewritten as genuine recursion: the
//! teacher threads its own explicit decision stack (`decisions:
//! Vec<BacktrackEvent>`) because it is wired into the `dogs` search-tree
//! framework, which this crate does not depend on (see `DESIGN.md`).
//! Spec §9 treats recursion as the natural presentation of this algorithm.

use std::time::{Duration, Instant};

use crate::bounds::dsatur::dsatur_initial_coloring;
use crate::bounds::greedy_clique::greedy_clique_lower_bound;
use crate::bounds::reduced::reduced_graph_lower_bound;
use crate::colorset::MAX_COLORS;
use crate::error::SolveError;
use crate::graph::Graph;
use crate::select::{classic_select, sewell_select};
use crate::state::SearchState;

/// Branching/pruning strategy (spec §4.G/H, §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Maximum-dsat, maximum-degree, lowest-index selection; no extra pruning.
    ClassicDsatur,
    /// Sewell tie-break selection; no extra pruning.
    Sewell,
    /// Sewell selection plus the Furini reduced-graph lower bound, recomputed
    /// at every node.
    Furini,
}

/// Programmatic configuration for [`solve`] (spec §4's "configuration" is
/// this struct rather than a CLI/file surface — ingest and CLI parsing are
/// explicit Non-goals).
#[derive(Debug, Clone, Copy)]
pub struct SolveOptions {
    pub strategy: Strategy,
    pub deadline_seconds: f64,
}

impl SolveOptions {
    pub fn new(strategy: Strategy, deadline_seconds: f64) -> Self {
        Self { strategy, deadline_seconds }
    }

    /// A deadline effectively unreachable in practice (spec §6: "callers
    /// pass a large sentinel... e.g., seconds in a day" in place of the
    /// unsupported "0 means no pruning by time").
    pub fn no_deadline(strategy: Strategy) -> Self {
        Self::new(strategy, 86_400.0)
    }
}

/// One progress update, fired on the first visited node and every 500th
/// thereafter (spec §6).
#[derive(Debug, Clone, Copy)]
pub struct ProgressReport {
    pub nodes: u64,
    pub upper_bound: usize,
    pub lower_bound: usize,
    pub elapsed_seconds: f64,
    pub branches_pruned: u64,
}

/// A reentrant-safe, purely observational progress sink. Must not mutate
/// engine state — nothing is passed back to the engine through it.
pub type ProgressCallback<'p> = dyn FnMut(ProgressReport) + 'p;

/// Search statistics (spec §6).
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveStats {
    pub nodes_visited: u64,
    pub branches_pruned: u64,
    pub elapsed_seconds: f64,
}

/// Result of a solve (spec §6).
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// Number of colors used, equal to the final upper bound.
    pub colors: usize,
    /// `coloring[v]` is the color assigned to vertex `v`, in `[0, colors)`.
    pub coloring: Vec<usize>,
    /// Initial lower bound, from the greedy clique.
    pub lower_bound: usize,
    /// Initial upper bound, from the DSATUR heuristic.
    pub initial_upper_bound: usize,
    /// `true` iff `colors == lower_bound` and the search did not time out.
    pub optimal: bool,
    /// `true` iff the deadline was exceeded before the search concluded.
    pub timeout: bool,
    pub stats: SolveStats,
}

/// Computes the chromatic number of `graph` (or the best coloring found
/// before the deadline), with a machine-checkable optimality certificate.
///
/// See spec §6 for the full input/output contract and §7 for error
/// semantics.
pub fn solve(
    graph: &Graph,
    options: SolveOptions,
    progress: Option<&mut ProgressCallback>,
) -> Result<SolveOutcome, SolveError> {
    if !(options.deadline_seconds > 0.0) || !options.deadline_seconds.is_finite() {
        return Err(SolveError::InvalidDeadline(options.deadline_seconds));
    }
    // `Duration::from_secs_f64` panics above this; reject before we get there.
    if options.deadline_seconds > Duration::MAX.as_secs_f64() {
        return Err(SolveError::InvalidDeadline(options.deadline_seconds));
    }

    let n = graph.n();
    if n == 0 {
        return Ok(SolveOutcome {
            colors: 0,
            coloring: Vec::new(),
            lower_bound: 0,
            initial_upper_bound: 0,
            optimal: true,
            timeout: false,
            stats: SolveStats::default(),
        });
    }

    let start = Instant::now();
    let (dsatur_coloring, dsatur_ub) = dsatur_initial_coloring(graph);
    if dsatur_ub > MAX_COLORS {
        return Err(SolveError::TooManyColorsRequested { requested: dsatur_ub });
    }
    let lb = greedy_clique_lower_bound(graph);

    let mut state = SearchState::new(graph, dsatur_ub);
    state.seed_best(&dsatur_coloring, dsatur_ub);

    let mut search = Search {
        state,
        strategy: options.strategy,
        deadline: start + Duration::from_secs_f64(options.deadline_seconds),
        start,
        timeout: false,
        nodes_visited: 0,
        branches_pruned: 0,
        lb,
        progress,
    };

    if lb < search.state.ub() {
        search.descend();
    } else {
        log::info!("initial clique lower bound {lb} already matches the DSATUR upper bound");
    }

    let elapsed = start.elapsed().as_secs_f64();
    let ub = search.state.ub();
    let optimal = !search.timeout && ub == lb;
    if optimal {
        log::info!("proved optimal: {ub} colors after {} nodes", search.nodes_visited);
    } else if search.timeout {
        log::warn!("deadline exceeded after {} nodes; best known: {ub} colors", search.nodes_visited);
    }

    Ok(SolveOutcome {
        colors: ub,
        coloring: search.state.best_color().to_vec(),
        lower_bound: lb,
        initial_upper_bound: dsatur_ub,
        optimal,
        timeout: search.timeout,
        stats: SolveStats {
            nodes_visited: search.nodes_visited,
            branches_pruned: search.branches_pruned,
            elapsed_seconds: elapsed,
        },
    })
}

struct Search<'g, 'p> {
    state: SearchState<'g>,
    strategy: Strategy,
    deadline: Instant,
    start: Instant,
    timeout: bool,
    nodes_visited: u64,
    branches_pruned: u64,
    lb: usize,
    progress: Option<&'p mut ProgressCallback<'p>>,
}

impl<'g, 'p> Search<'g, 'p> {
    /// One level of the recursive branch-and-bound descent (spec §4.I).
    fn descend(&mut self) {
        if Instant::now() >= self.deadline {
            self.timeout = true;
            return;
        }

        self.nodes_visited += 1;
        self.report_progress();

        let n = self.state.graph().n();
        if self.state.nb_colored() == n {
            if self.state.k() < self.state.ub() {
                self.state.commit_best();
            }
            return;
        }

        // standard pruning: any completion from here uses >= ub colors.
        if self.state.k() + 1 >= self.state.ub() {
            self.branches_pruned += 1;
            return;
        }

        if self.strategy == Strategy::Furini {
            let rlb = reduced_graph_lower_bound(&self.state);
            if rlb >= self.state.ub() {
                self.branches_pruned += 1;
                return;
            }
        }

        let v = match self.strategy {
            Strategy::ClassicDsatur => classic_select(&self.state),
            Strategy::Sewell | Strategy::Furini => sewell_select(&self.state),
        }
        .expect("an uncolored vertex exists: nb_colored < n was just checked");

        let k = self.state.k();
        let ub = self.state.ub();
        let c_limit = (k + 1).min(ub.saturating_sub(1));
        let forbidden = self.state.forbidden(v);

        for c in 0..c_limit {
            if forbidden.contains(c) {
                continue;
            }
            let new_k = k.max(c + 1);
            if new_k >= self.state.ub() {
                continue;
            }
            self.state.assign(v, c);
            self.descend();
            self.state.unassign(v, c);
            if self.timeout || self.state.ub() == self.lb {
                return;
            }
        }
    }

    fn report_progress(&mut self) {
        if self.nodes_visited != 1 && self.nodes_visited % 500 != 0 {
            return;
        }
        if let Some(cb) = self.progress.as_mut() {
            cb(ProgressReport {
                nodes: self.nodes_visited,
                upper_bound: self.state.ub(),
                lower_bound: self.lb,
                elapsed_seconds: self.start.elapsed().as_secs_f64(),
                branches_pruned: self.branches_pruned,
            });
        }
    }
}
