//! Heuristic bound providers: greedy clique (lower bound) and DSATUR
//! (upper bound), plus the Furini reduced-graph lower bound recomputed at
//! B&B nodes.

pub mod dsatur;
pub mod greedy_clique;
pub mod reduced;
