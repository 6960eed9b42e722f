#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("edges {first:?} and {second:?} cross")]
    CrossingEdges {
        first: (usize, usize),
        second: (usize, usize),
    },

    #[error("duplicate edge between ordinals {left} and {right}")]
    DuplicateEdge { left: usize, right: usize },

    #[error("ordinal {ordinal} is out of range for a sequence of {len} items")]
    OrdinalOutOfRange { ordinal: usize, len: usize },

    #[error("edge from ordinal {ordinal} to itself")]
    DegenerateEdge { ordinal: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
