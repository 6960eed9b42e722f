//! Candidate edge generation.
//!
//! Every pair of numas is scored once. A pair becomes a candidate when its weight clears
//! [`REJECT_THRESHOLD`](crate::score::REJECT_THRESHOLD) and its edge does not cross the base
//! graph. Candidates are not checked against each other here; that is the inserter's job.

use crate::graph::Graph;
use crate::numa::Numa;
use crate::score::{Scorer, is_acceptable};
use crate::wedge::Wedge;
use std::ops::AddAssign;

/// Counters reported by [`generate`] through `tracing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CandidateStats {
    pub scored: usize,
    pub below_threshold: usize,
    pub crossing_base: usize,
}

impl AddAssign for CandidateStats {
    fn add_assign(&mut self, rhs: Self) {
        self.scored += rhs.scored;
        self.below_threshold += rhs.below_threshold;
        self.crossing_base += rhs.crossing_base;
    }
}

/// Scores all pairs and returns the acceptable, non-crossing ones in enumeration order
/// (left ordinal ascending, then right ordinal ascending).
pub fn generate<'a, T, S>(
    numas: &[Numa<'a, T>],
    base: &Graph<'a, T>,
    scorer: &S,
) -> Vec<Wedge<'a, T>>
where
    S: Scorer<T> + ?Sized,
{
    generate_with_stats(numas, base, scorer).0
}

pub fn generate_with_stats<'a, T, S>(
    numas: &[Numa<'a, T>],
    base: &Graph<'a, T>,
    scorer: &S,
) -> (Vec<Wedge<'a, T>>, CandidateStats)
where
    S: Scorer<T> + ?Sized,
{
    let mut out: Vec<Wedge<'a, T>> = Vec::new();
    let mut stats = CandidateStats::default();
    for i in 0..numas.len() {
        stats += score_row(numas, i, base, scorer, &mut out);
    }
    log_stats(numas.len(), out.len(), stats);
    (out, stats)
}

/// Same output as [`generate`], with weights evaluated on the rayon pool.
#[cfg(feature = "parallel")]
pub fn generate_parallel<'a, T, S>(
    numas: &[Numa<'a, T>],
    base: &Graph<'a, T>,
    scorer: &S,
) -> Vec<Wedge<'a, T>>
where
    T: Sync,
    S: Scorer<T> + Sync + ?Sized,
{
    use rayon::prelude::*;

    let rows: Vec<(Vec<Wedge<'a, T>>, CandidateStats)> = (0..numas.len())
        .into_par_iter()
        .map(|i| {
            let mut row = Vec::new();
            let stats = score_row(numas, i, base, scorer, &mut row);
            (row, stats)
        })
        .collect();

    let mut out: Vec<Wedge<'a, T>> = Vec::new();
    let mut stats = CandidateStats::default();
    for (row, row_stats) in rows {
        out.extend(row);
        stats += row_stats;
    }
    log_stats(numas.len(), out.len(), stats);
    out
}

fn score_row<'a, T, S>(
    numas: &[Numa<'a, T>],
    i: usize,
    base: &Graph<'a, T>,
    scorer: &S,
    out: &mut Vec<Wedge<'a, T>>,
) -> CandidateStats
where
    S: Scorer<T> + ?Sized,
{
    let mut stats = CandidateStats::default();
    let left = numas[i];
    for &right in &numas[i + 1..] {
        let distance = right.ordinal.abs_diff(left.ordinal);
        let weight = scorer.score(left.item, right.item, distance);
        stats.scored += 1;
        if !is_acceptable(weight) {
            stats.below_threshold += 1;
            continue;
        }
        let Some(w) = Wedge::new(left, right, weight) else {
            continue;
        };
        if base.crosses_any(&w) {
            stats.crossing_base += 1;
            continue;
        }
        out.push(w);
    }
    stats
}

fn log_stats(items: usize, candidates: usize, stats: CandidateStats) {
    tracing::debug!(
        items,
        candidates,
        scored = stats.scored,
        below_threshold = stats.below_threshold,
        crossing_base = stats.crossing_base,
        "generated candidate edges"
    );
}
