#![forbid(unsafe_code)]

//! Greedy maximal planar graph extension over ordered sequences.
//!
//! Given a sequence of items and a pairwise scoring function, `planar` extends an existing
//! non-crossing ("projective") graph with the highest-scoring extra edges that keep it
//! non-crossing. The usual starting point is a maximum spanning tree over the same sequence
//! (see [`mst`]); [`add_edges`] accepts any non-crossing base graph.
//!
//! Pipeline: [`numa::index`] → [`candidates::generate`] → [`rank::rank`] →
//! [`insert::insert`].

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod candidates;
pub mod error;
pub mod graph;
pub mod insert;
pub mod mst;
pub mod numa;
pub mod options;
pub mod parse;
pub mod rank;
pub mod score;
pub mod wedge;

pub use error::{Error, Result};
pub use graph::{Graph, WedgeRecord};
pub use insert::EdgeBudget;
pub use mst::{EmptyMst, GreedyProjectiveMst, MstProvider};
pub use numa::{Numa, index};
pub use options::ParseOptions;
pub use parse::{Parser, add_edges, parse_sequence, parse_sequence_with};
pub use score::{
    FnScorer, PairScore, PairTable, REJECT_THRESHOLD, Scorer, Windowed, from_fn, is_acceptable,
};
pub use wedge::{Wedge, crosses, crosses_any, spans_cross};
