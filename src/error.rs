//! Structured error types (spec §7). Contract violations fail fast and
//! produce no coloring; deadline expiry and Furini-bound resource exhaustion
//! are *not* represented here — they are outcomes, carried in
//! [`crate::SolveOutcome`] and the reduced-graph bound's return value
//! respectively.

use thiserror::Error;

/// Contract violations detected while validating a caller-supplied CSR graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// `start`/`deg` arrays disagree on vertex count.
    #[error("start array has {start_len} entries but deg array has {deg_len}")]
    InconsistentLengths { start_len: usize, deg_len: usize },

    /// `start[v] + deg[v]` overflowed `usize`.
    #[error("offset overflow computing the neighbor range of vertex {vertex}")]
    OffsetOverflow { vertex: usize },

    /// `start[v] + deg[v]` exceeds the length of `adj`.
    #[error("neighbor range of vertex {vertex} exceeds the adjacency array")]
    OffsetOutOfBounds { vertex: usize },

    /// A neighbor id is `>= n`.
    #[error("neighbor id {vertex} is out of range")]
    VertexOutOfRange { vertex: usize },

    /// A vertex lists itself as a neighbor.
    #[error("vertex {vertex} has a self-loop")]
    SelfLoop { vertex: usize },

    /// A vertex's neighbor list is not sorted ascending.
    #[error("neighbor list of vertex {vertex} is not sorted")]
    UnsortedAdjacency { vertex: usize },

    /// A vertex lists the same neighbor twice.
    #[error("vertex {vertex} lists neighbor {neighbor} more than once")]
    DuplicateNeighbor { vertex: usize, neighbor: usize },

    /// `{u,v}` appears at `u`'s list but not at `v`'s (or vice versa).
    #[error("edge {{{u},{v}}} is not symmetric")]
    AsymmetricEdge { u: usize, v: usize },
}

/// Errors returned by [`crate::solve`].
#[derive(Debug, Error)]
pub enum SolveError {
    /// The graph failed CSR validation.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The DSATUR-seeded upper bound (or a caller-specified one) is `>= 64`,
    /// which the 63-color [`crate::colorset::ColorSet`] cannot represent.
    #[error("requested/seeded upper bound of {requested} colors exceeds the 63-color cap")]
    TooManyColorsRequested { requested: usize },

    /// `deadline_seconds <= 0`, non-finite, or too large to convert to a
    /// [`std::time::Duration`]; spec §6 requires callers to pass a large
    /// sentinel instead of 0 to mean "no time pruning", not infinity.
    #[error("deadline_seconds must be a finite value in (0, Duration::MAX], got {0}")]
    InvalidDeadline(f64),
}
