//! Entry points.
//!
//! [`add_edges`] is the composable primitive: it extends any non-crossing graph over `items`.
//! [`parse_sequence`] composes it with a spanning-tree provider. [`Parser`] wraps both behind
//! [`ParseOptions`].

use crate::candidates::generate;
use crate::error::Result;
use crate::graph::Graph;
use crate::insert::{EdgeBudget, insert};
use crate::mst::{GreedyProjectiveMst, MstProvider};
use crate::numa::{Numa, index};
use crate::options::ParseOptions;
use crate::rank::rank;
use crate::score::{Scorer, Windowed};

/// Adds up to `num_extra_edges` non-crossing edges to `base`, best first.
///
/// `base` must be a non-crossing graph over `items`. It is not modified; the result contains
/// all of its edges.
pub fn add_edges<'a, T, S>(
    base: &Graph<'a, T>,
    items: &'a [T],
    scorer: &S,
    num_extra_edges: impl Into<EdgeBudget>,
) -> Graph<'a, T>
where
    S: Scorer<T> + ?Sized,
{
    let numas = index(items);
    extend_numas(base, &numas, scorer, num_extra_edges.into())
}

/// Spanning tree from [`GreedyProjectiveMst`], extended by up to `num_loops` extra edges.
pub fn parse_sequence<'a, T, S>(
    items: &'a [T],
    scorer: &S,
    num_loops: impl Into<EdgeBudget>,
) -> Graph<'a, T>
where
    S: Scorer<T> + ?Sized,
{
    parse_sequence_with(&GreedyProjectiveMst, items, scorer, num_loops)
}

pub fn parse_sequence_with<'a, T, S, M>(
    provider: &M,
    items: &'a [T],
    scorer: &S,
    num_loops: impl Into<EdgeBudget>,
) -> Graph<'a, T>
where
    S: Scorer<T> + ?Sized,
    M: MstProvider,
{
    let numas = index(items);
    let base = provider.mst_parse(&numas, scorer);
    extend_numas(&base, &numas, scorer, num_loops.into())
}

fn extend_numas<'a, T, S>(
    base: &Graph<'a, T>,
    numas: &[Numa<'a, T>],
    scorer: &S,
    budget: EdgeBudget,
) -> Graph<'a, T>
where
    S: Scorer<T> + ?Sized,
{
    let _span = tracing::debug_span!(
        "add_edges",
        items = numas.len(),
        base = base.len(),
        ?budget
    )
    .entered();
    debug_assert!(base.is_planar(), "base graph has crossing edges");

    if numas.len() < 2 || budget.is_exhausted() {
        return base.clone();
    }
    let ranked = rank(generate(numas, base, scorer));
    insert(budget, ranked, base)
}

/// Option-driven front end over [`add_edges`] and [`parse_sequence_with`].
#[derive(Debug, Clone, Default)]
pub struct Parser<M = GreedyProjectiveMst> {
    options: ParseOptions,
    mst: M,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            mst: GreedyProjectiveMst,
        }
    }
}

impl<M: MstProvider> Parser<M> {
    pub fn with_mst<N: MstProvider>(self, mst: N) -> Parser<N> {
        Parser {
            options: self.options,
            mst,
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Full pipeline: spanning tree, then extra edges.
    pub fn parse<'a, T, S>(&self, items: &'a [T], scorer: &S) -> Graph<'a, T>
    where
        S: Scorer<T> + ?Sized,
    {
        match self.options.max_distance {
            Some(d) => self.parse_scored(items, &Windowed::new(scorer, d)),
            None => self.parse_scored(items, scorer),
        }
    }

    /// Extends a caller-supplied base graph.
    ///
    /// Fails only when `validate_base` is set and `base` has crossing edges.
    pub fn extend<'a, T, S>(
        &self,
        base: &Graph<'a, T>,
        items: &'a [T],
        scorer: &S,
    ) -> Result<Graph<'a, T>>
    where
        S: Scorer<T> + ?Sized,
    {
        if self.options.validate_base {
            base.validate()?;
        }
        let budget = self.options.budget();
        Ok(match self.options.max_distance {
            Some(d) => add_edges(base, items, &Windowed::new(scorer, d), budget),
            None => add_edges(base, items, scorer, budget),
        })
    }

    fn parse_scored<'a, T, S>(&self, items: &'a [T], scorer: &S) -> Graph<'a, T>
    where
        S: Scorer<T> + ?Sized,
    {
        parse_sequence_with(&self.mst, items, scorer, self.options.budget())
    }
}
