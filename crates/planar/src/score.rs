//! Pairwise scoring.
//!
//! The parser never looks inside items; everything it knows about a pair comes from a
//! [`Scorer`]. A score at or below [`REJECT_THRESHOLD`] means "no usable association" and keeps
//! the pair out of every graph.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Scores at or below this value are rejected. Stands in for minus infinity.
pub const REJECT_THRESHOLD: f64 = -1.0e15;

/// Whether `weight` is usable as an edge weight. NaN is not.
pub fn is_acceptable(weight: f64) -> bool {
    weight > REJECT_THRESHOLD
}

/// Scores an ordered pair of items. `distance` is `right.ordinal - left.ordinal` and is always
/// positive.
///
/// Implementations must be callable for every pair in the sequence, however far apart, and must
/// return the same value for the same arguments.
pub trait Scorer<T: ?Sized> {
    fn score(&self, left: &T, right: &T, distance: usize) -> f64;
}

impl<T: ?Sized, S: Scorer<T> + ?Sized> Scorer<T> for &S {
    fn score(&self, left: &T, right: &T, distance: usize) -> f64 {
        (**self).score(left, right, distance)
    }
}

/// Adapts a closure or function pointer. See [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnScorer<F>(F);

/// Wraps `f` as a [`Scorer`].
pub fn from_fn<T: ?Sized, F>(f: F) -> FnScorer<F>
where
    F: Fn(&T, &T, usize) -> f64,
{
    FnScorer(f)
}

impl<T: ?Sized, F> Scorer<T> for FnScorer<F>
where
    F: Fn(&T, &T, usize) -> f64,
{
    fn score(&self, left: &T, right: &T, distance: usize) -> f64 {
        (self.0)(left, right, distance)
    }
}

/// Rejects pairs further apart than `max_distance`; delegates everything else.
#[derive(Debug, Clone, Copy)]
pub struct Windowed<S> {
    inner: S,
    max_distance: usize,
}

impl<S> Windowed<S> {
    pub fn new(inner: S, max_distance: usize) -> Self {
        Self {
            inner,
            max_distance,
        }
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }
}

impl<T: ?Sized, S: Scorer<T>> Scorer<T> for Windowed<S> {
    fn score(&self, left: &T, right: &T, distance: usize) -> f64 {
        if distance > self.max_distance {
            return REJECT_THRESHOLD;
        }
        self.inner.score(left, right, distance)
    }
}

/// One entry of a [`PairTable`] in its serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairScore {
    pub left: String,
    pub right: String,
    pub score: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct PairTableRepr {
    default: Option<f64>,
    pairs: Vec<PairScore>,
}

/// A lookup table of scores for `(left, right)` string pairs, in sequence order.
///
/// Pairs missing from the table score `default` when one is set and are rejected otherwise.
/// Distance is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "PairTableRepr", into = "PairTableRepr")]
pub struct PairTable {
    default: Option<f64>,
    scores: FxHashMap<String, FxHashMap<String, f64>>,
}

impl PairTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(default: f64) -> Self {
        Self {
            default: Some(default),
            scores: FxHashMap::default(),
        }
    }

    pub fn set(
        &mut self,
        left: impl Into<String>,
        right: impl Into<String>,
        score: f64,
    ) -> &mut Self {
        self.scores
            .entry(left.into())
            .or_default()
            .insert(right.into(), score);
        self
    }

    pub fn get(&self, left: &str, right: &str) -> Option<f64> {
        self.scores.get(left)?.get(right).copied()
    }

    pub fn default_score(&self) -> Option<f64> {
        self.default
    }

    pub fn len(&self) -> usize {
        self.scores.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: AsRef<str> + ?Sized> Scorer<T> for PairTable {
    fn score(&self, left: &T, right: &T, _distance: usize) -> f64 {
        self.get(left.as_ref(), right.as_ref())
            .or(self.default)
            .unwrap_or(REJECT_THRESHOLD)
    }
}

impl From<PairTableRepr> for PairTable {
    fn from(repr: PairTableRepr) -> Self {
        let mut table = Self {
            default: repr.default,
            scores: FxHashMap::default(),
        };
        for p in repr.pairs {
            table.set(p.left, p.right, p.score);
        }
        table
    }
}

impl From<PairTable> for PairTableRepr {
    fn from(table: PairTable) -> Self {
        let mut pairs: Vec<PairScore> = table
            .scores
            .into_iter()
            .flat_map(|(left, rights)| {
                rights.into_iter().map(move |(right, score)| PairScore {
                    left: left.clone(),
                    right,
                    score,
                })
            })
            .collect();
        pairs.sort_by(|a, b| a.left.cmp(&b.left).then_with(|| a.right.cmp(&b.right)));
        Self {
            default: table.default,
            pairs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_and_nan_are_rejected() {
        assert!(!is_acceptable(REJECT_THRESHOLD));
        assert!(!is_acceptable(REJECT_THRESHOLD * 2.0));
        assert!(!is_acceptable(f64::NAN));
        assert!(!is_acceptable(f64::NEG_INFINITY));
        assert!(is_acceptable(-1.0e14));
        assert!(is_acceptable(0.0));
    }

    #[test]
    fn windowed_rejects_long_pairs() {
        let s = Windowed::new(from_fn(|_: &str, _: &str, d: usize| d as f64), 2);
        assert_eq!(s.score("a", "b", 2), 2.0);
        assert_eq!(s.score("a", "b", 3), REJECT_THRESHOLD);
    }

    #[test]
    fn pair_table_falls_back_to_default() {
        let mut t = PairTable::new();
        t.set("a", "b", 3.5);
        assert_eq!(t.score("a", "b", 1), 3.5);
        assert_eq!(t.score("b", "a", 1), REJECT_THRESHOLD);

        let mut t = PairTable::with_default(0.25);
        t.set("a", "b", 3.5);
        assert_eq!(t.score("b", "a", 1), 0.25);
        assert_eq!(t.len(), 1);
    }
}
