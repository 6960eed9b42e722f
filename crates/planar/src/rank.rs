//! Candidate ordering.

use crate::wedge::Wedge;

/// Sorts by weight, highest first.
///
/// The sort is stable, so equal weights keep the order they were generated in (left ordinal
/// ascending, then right ordinal ascending). `total_cmp` keeps the order total even for values
/// the generator would never emit.
pub fn rank<'a, T>(mut candidates: Vec<Wedge<'a, T>>) -> Vec<Wedge<'a, T>> {
    candidates.sort_by(|a, b| b.weight().total_cmp(&a.weight()));
    candidates
}
