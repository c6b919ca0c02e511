//! Exact chromatic-number solver: a DSATUR-skeleton branch-and-bound engine
//! that proves chi(G) for simple undirected graphs up to a few thousand
//! vertices, with the result accompanied by a lower bound equal to the
//! number of colors used whenever the search proves optimality.
//!
//! The engine is the entire subject of this crate; graph ingest, progress
//! presentation, CLI/packaging, and visualization are left to callers.
//! Callers supply a borrowed CSR [`Graph`] with sorted neighbor lists and
//! call [`solve`].

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

/// a set of color indices in `[0, 63)`, the engine's fundamental primitive
pub mod colorset;

/// structured error types for contract violations
pub mod error;

/// borrowed CSR graph view and adjacency queries
pub mod graph;

/// partial-coloring search state and its incremental mutator
pub mod state;

/// heuristic bound providers (greedy clique, DSATUR) and the Furini
/// reduced-graph lower bound
pub mod bounds;

/// branching/vertex-selection strategies
pub mod select;

/// the branch-and-bound driver and the public solve entry point
pub mod driver;

pub use colorset::{ColorSet, MAX_COLORS};
pub use driver::{solve, ProgressCallback, ProgressReport, SolveOptions, SolveOutcome, SolveStats, Strategy};
pub use error::{GraphError, SolveError};
pub use graph::Graph;
