//! Spanning-tree providers for the full-sequence parse.
//!
//! [`crate::parse_sequence`] starts from a non-crossing tree and extends it. The tree comes from
//! an [`MstProvider`]; [`GreedyProjectiveMst`] is the default.

use crate::candidates::generate;
use crate::graph::Graph;
use crate::numa::Numa;
use crate::rank::rank;
use crate::score::Scorer;
use crate::wedge::Wedge;
use rustc_hash::FxHashSet;

/// Produces the starting graph for a sequence. The result must not contain crossing edges.
pub trait MstProvider {
    fn mst_parse<'a, T, S>(&self, numas: &[Numa<'a, T>], scorer: &S) -> Graph<'a, T>
    where
        S: Scorer<T> + ?Sized;
}

impl<M: MstProvider> MstProvider for &M {
    fn mst_parse<'a, T, S>(&self, numas: &[Numa<'a, T>], scorer: &S) -> Graph<'a, T>
    where
        S: Scorer<T> + ?Sized,
    {
        (**self).mst_parse(numas, scorer)
    }
}

/// Starts from nothing: turns the parse into a pure maximal planar graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyMst;

impl MstProvider for EmptyMst {
    fn mst_parse<'a, T, S>(&self, _numas: &[Numa<'a, T>], _scorer: &S) -> Graph<'a, T>
    where
        S: Scorer<T> + ?Sized,
    {
        Graph::new()
    }
}

/// Prim-style maximum spanning tree restricted to non-crossing edges.
///
/// Seeds the tree with the best acceptable pair, then repeatedly attaches the best pair that has
/// exactly one endpoint in the tree and crosses no tree edge. Ties go to the pair generated
/// first. Items that cannot be reached that way are left unattached, so for sparse scores the
/// result spans only part of the sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyProjectiveMst;

impl MstProvider for GreedyProjectiveMst {
    fn mst_parse<'a, T, S>(&self, numas: &[Numa<'a, T>], scorer: &S) -> Graph<'a, T>
    where
        S: Scorer<T> + ?Sized,
    {
        let mut pending = rank(generate(numas, &Graph::new(), scorer));
        let mut tree: Graph<'a, T> = Graph::with_capacity(numas.len().saturating_sub(1));
        if pending.is_empty() {
            return tree;
        }

        let mut in_tree: FxHashSet<usize> = FxHashSet::default();
        let mut next: Wedge<'a, T> = pending.remove(0);
        loop {
            let (l, r) = next.span();
            in_tree.insert(l);
            in_tree.insert(r);
            tree.insert(next);

            // Tree edges are never removed, so anything now internal or crossing is dead.
            pending.retain(|w| {
                let (wl, wr) = w.span();
                !(in_tree.contains(&wl) && in_tree.contains(&wr)) && !w.crosses(&next)
            });

            let Some(ix) = pending.iter().position(|w| {
                let (wl, wr) = w.span();
                in_tree.contains(&wl) != in_tree.contains(&wr)
            }) else {
                break;
            };
            next = pending.remove(ix);
        }

        tracing::debug!(
            items = numas.len(),
            edges = tree.len(),
            "projective spanning tree built"
        );
        tree
    }
}
