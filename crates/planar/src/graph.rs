//! The edge set produced and consumed by the parser.
//!
//! A [`Graph`] is a set of [`Wedge`]s keyed by their ordinal span. Insertion order is kept so
//! that output is reproducible (base edges first, then extra edges in the order they were added),
//! but equality ignores it.

use crate::error::{Error, Result};
use crate::numa::Numa;
use crate::wedge::{Wedge, spans_cross};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Serialized form of an edge: ordinals plus weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WedgeRecord {
    pub left: usize,
    pub right: usize,
    pub weight: f64,
}

pub struct Graph<'a, T> {
    edges: IndexMap<(usize, usize), Wedge<'a, T>, FxBuildHasher>,
}

impl<'a, T> Graph<'a, T> {
    pub fn new() -> Self {
        Self {
            edges: IndexMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: IndexMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Collects edges in order, dropping later duplicates of an already seen span.
    pub fn from_wedges(wedges: impl IntoIterator<Item = Wedge<'a, T>>) -> Self {
        let mut g = Self::new();
        for w in wedges {
            g.insert(w);
        }
        g
    }

    /// Rebuilds a graph from serialized edges over `numas`.
    ///
    /// Records are looked up by ordinal, so `numas` is expected to be the output of
    /// [`crate::index`] over the same sequence.
    pub fn from_records(numas: &[Numa<'a, T>], records: &[WedgeRecord]) -> Result<Self> {
        let mut g = Self::with_capacity(records.len());
        for r in records {
            let lookup = |ordinal: usize| {
                numas
                    .get(ordinal)
                    .filter(|n| n.ordinal == ordinal)
                    .copied()
                    .ok_or(Error::OrdinalOutOfRange {
                        ordinal,
                        len: numas.len(),
                    })
            };
            let left = lookup(r.left)?;
            let right = lookup(r.right)?;
            let Some(w) = Wedge::new(left, right, r.weight) else {
                return Err(Error::DegenerateEdge { ordinal: r.left });
            };
            if !g.insert(w) {
                let (left, right) = w.span();
                return Err(Error::DuplicateEdge { left, right });
            }
        }
        Ok(g)
    }

    /// Adds `wedge` unless an edge with the same span is already present.
    ///
    /// Does not check for crossings; callers that need planarity test
    /// [`Graph::crosses_any`] first.
    pub fn insert(&mut self, wedge: Wedge<'a, T>) -> bool {
        let span = wedge.span();
        if self.edges.contains_key(&span) {
            return false;
        }
        self.edges.insert(span, wedge);
        true
    }

    pub fn contains_span(&self, a: usize, b: usize) -> bool {
        self.edges.contains_key(&(a.min(b), a.max(b)))
    }

    pub fn get(&self, a: usize, b: usize) -> Option<&Wedge<'a, T>> {
        self.edges.get(&(a.min(b), a.max(b)))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wedge<'a, T>> + '_ {
        self.edges.values()
    }

    pub fn spans(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.keys().copied()
    }

    pub fn wedges(&self) -> Vec<Wedge<'a, T>> {
        self.edges.values().copied().collect()
    }

    pub fn total_weight(&self) -> f64 {
        self.edges.values().map(|w| w.weight()).sum()
    }

    pub fn crosses_any(&self, wedge: &Wedge<'_, T>) -> bool {
        let span = wedge.span();
        self.edges.keys().any(|&s| spans_cross(s, span))
    }

    /// The first pair of crossing edges in insertion order, if any.
    pub fn crossing_pair(&self) -> Option<((usize, usize), (usize, usize))> {
        let spans: Vec<(usize, usize)> = self.spans().collect();
        for (i, &a) in spans.iter().enumerate() {
            for &b in &spans[i + 1..] {
                if spans_cross(a, b) {
                    return Some((a, b));
                }
            }
        }
        None
    }

    pub fn is_planar(&self) -> bool {
        self.crossing_pair().is_none()
    }

    /// Checks that no two edges cross. Spans are unique by construction.
    pub fn validate(&self) -> Result<()> {
        match self.crossing_pair() {
            Some((first, second)) => Err(Error::CrossingEdges { first, second }),
            None => Ok(()),
        }
    }

    pub fn records(&self) -> Vec<WedgeRecord> {
        self.edges
            .values()
            .map(|w| WedgeRecord {
                left: w.left().ordinal,
                right: w.right().ordinal,
                weight: w.weight(),
            })
            .collect()
    }
}

impl<T> Default for Graph<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Graph<'_, T> {
    fn clone(&self) -> Self {
        Self {
            edges: self.edges.clone(),
        }
    }
}

impl<T> PartialEq for Graph<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .edges
                .iter()
                .all(|(span, w)| other.edges.get(span) == Some(w))
    }
}

impl<T: fmt::Debug> fmt::Debug for Graph<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.edges.values()).finish()
    }
}

impl<'g, 'a, T> IntoIterator for &'g Graph<'a, T> {
    type Item = &'g Wedge<'a, T>;
    type IntoIter = indexmap::map::Values<'g, (usize, usize), Wedge<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.values()
    }
}

impl<'a, T> FromIterator<Wedge<'a, T>> for Graph<'a, T> {
    fn from_iter<I: IntoIterator<Item = Wedge<'a, T>>>(iter: I) -> Self {
        Self::from_wedges(iter)
    }
}
