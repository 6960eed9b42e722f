use crate::insert::EdgeBudget;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Extra edges to add on top of the base graph. Negative means unbounded.
    pub num_extra_edges: i64,
    /// Pairs further apart than this are never scored as edges.
    pub max_distance: Option<usize>,
    /// Reject crossing base graphs in [`crate::Parser::extend`] instead of trusting the caller.
    pub validate_base: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            num_extra_edges: -1,
            max_distance: None,
            validate_base: false,
        }
    }
}

impl ParseOptions {
    pub fn budget(&self) -> EdgeBudget {
        EdgeBudget::from(self.num_extra_edges)
    }
}
