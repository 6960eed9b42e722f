//! Weighted edges and the crossing oracle.
//!
//! A [`Wedge`] always stores its endpoints left-to-right by ordinal. Whether two edges cross
//! depends only on their ordinal spans: drawing every edge as an arc above the sequence, two arcs
//! intersect iff exactly one endpoint of one lies strictly inside the other.

use crate::numa::Numa;
use std::fmt;

/// A weighted edge between two numas, canonicalized so that `left.ordinal < right.ordinal`.
pub struct Wedge<'a, T> {
    left: Numa<'a, T>,
    right: Numa<'a, T>,
    weight: f64,
}

impl<'a, T> Wedge<'a, T> {
    /// Builds an edge between `a` and `b` in either order.
    ///
    /// Returns `None` when both endpoints share an ordinal.
    pub fn new(a: Numa<'a, T>, b: Numa<'a, T>, weight: f64) -> Option<Self> {
        match a.ordinal.cmp(&b.ordinal) {
            std::cmp::Ordering::Less => Some(Self {
                left: a,
                right: b,
                weight,
            }),
            std::cmp::Ordering::Greater => Some(Self {
                left: b,
                right: a,
                weight,
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn left(&self) -> Numa<'a, T> {
        self.left
    }

    pub fn right(&self) -> Numa<'a, T> {
        self.right
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// `(left.ordinal, right.ordinal)`.
    pub fn span(&self) -> (usize, usize) {
        (self.left.ordinal, self.right.ordinal)
    }

    /// The distance handed to the scoring function; always positive.
    pub fn distance(&self) -> usize {
        self.right.ordinal - self.left.ordinal
    }

    pub fn crosses(&self, other: &Wedge<'_, T>) -> bool {
        spans_cross(self.span(), other.span())
    }
}

impl<T> Clone for Wedge<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Wedge<'_, T> {}

impl<T> PartialEq for Wedge<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.left == other.left && self.right == other.right && self.weight == other.weight
    }
}

impl<T: fmt::Debug> fmt::Debug for Wedge<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?} - {:?}: {})", self.left, self.right, self.weight)
    }
}

/// Span-level crossing test. Both spans must already be canonical (`a < b`).
///
/// Shared endpoints, nesting and disjoint spans do not cross.
pub fn spans_cross(a: (usize, usize), b: (usize, usize)) -> bool {
    let (a1, b1) = a;
    let (a2, b2) = b;
    (a1 < a2 && a2 < b1 && b1 < b2) || (a2 < a1 && a1 < b2 && b2 < b1)
}

pub fn crosses<T>(a: &Wedge<'_, T>, b: &Wedge<'_, T>) -> bool {
    a.crosses(b)
}

/// True iff `edge` crosses at least one member of `edges`.
pub fn crosses_any<'a, T>(edge: &Wedge<'a, T>, edges: &[Wedge<'a, T>]) -> bool {
    edges.iter().any(|e| e.crosses(edge))
}
