//! Greedy planar insertion.
//!
//! Walks ranked candidates once, never backtracking: a candidate that crosses anything already
//! accepted (base edges or earlier insertions) is dropped for good.

use crate::graph::Graph;
use crate::wedge::Wedge;

/// How many extra edges the inserter may add.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EdgeBudget {
    Bounded(usize),
    #[default]
    Unbounded,
}

impl EdgeBudget {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Bounded(0))
    }

    /// Consumes one unit. Returns `false` when nothing was left.
    pub fn take_one(&mut self) -> bool {
        match self {
            Self::Bounded(0) => false,
            Self::Bounded(n) => {
                *n -= 1;
                true
            }
            Self::Unbounded => true,
        }
    }
}

impl From<usize> for EdgeBudget {
    fn from(n: usize) -> Self {
        Self::Bounded(n)
    }
}

/// Negative counts mean "as many as possible".
impl From<i64> for EdgeBudget {
    fn from(n: i64) -> Self {
        match usize::try_from(n) {
            Ok(n) => Self::Bounded(n),
            Err(_) if n < 0 => Self::Unbounded,
            Err(_) => Self::Bounded(usize::MAX),
        }
    }
}

impl From<i32> for EdgeBudget {
    fn from(n: i32) -> Self {
        Self::from(i64::from(n))
    }
}

impl From<Option<usize>> for EdgeBudget {
    fn from(n: Option<usize>) -> Self {
        n.map_or(Self::Unbounded, Self::Bounded)
    }
}

/// Extends a copy of `base` with `ranked` candidates, in order, until `budget` runs out or the
/// candidates do.
///
/// Candidates that cross an accepted edge, or duplicate the span of one, are skipped without
/// consuming budget.
pub fn insert<'a, T>(
    mut budget: EdgeBudget,
    ranked: impl IntoIterator<Item = Wedge<'a, T>>,
    base: &Graph<'a, T>,
) -> Graph<'a, T> {
    let mut g = base.clone();
    let mut added: usize = 0;
    let mut crossing: usize = 0;
    let mut duplicate: usize = 0;

    for w in ranked {
        if budget.is_exhausted() {
            break;
        }
        if g.crosses_any(&w) {
            crossing += 1;
            tracing::trace!(edge = ?w.span(), weight = w.weight(), "skipped crossing candidate");
            continue;
        }
        if !g.insert(w) {
            duplicate += 1;
            continue;
        }
        budget.take_one();
        added += 1;
        tracing::trace!(edge = ?w.span(), weight = w.weight(), "inserted edge");
    }

    tracing::debug!(
        base = base.len(),
        added,
        crossing,
        duplicate,
        "greedy insertion finished"
    );
    g
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_budget_never_runs_out() {
        let mut b = EdgeBudget::Unbounded;
        for _ in 0..1000 {
            assert!(b.take_one());
        }
        assert!(!b.is_exhausted());
    }

    #[test]
    fn bounded_budget_counts_down_to_zero() {
        let mut b = EdgeBudget::Bounded(2);
        assert!(b.take_one());
        assert!(b.take_one());
        assert!(b.is_exhausted());
        assert!(!b.take_one());
        assert_eq!(b, EdgeBudget::Bounded(0));
    }

    #[test]
    fn negative_counts_are_unbounded() {
        assert_eq!(EdgeBudget::from(-1i64), EdgeBudget::Unbounded);
        assert_eq!(EdgeBudget::from(-7i32), EdgeBudget::Unbounded);
        assert_eq!(EdgeBudget::from(3i64), EdgeBudget::Bounded(3));
        assert_eq!(EdgeBudget::from(None), EdgeBudget::Unbounded);
    }
}
