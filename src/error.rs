use thiserror::Error;

use crate::{
    edge::{Edge, NumEdges},
    node::{Node, NumNodes},
    repr::{Degree, State},
};

/// Errors raised when a payload does not fit its declared [`State`] or cannot be
/// expressed in the requested one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("adjacency matrix is not square: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("incidence matrix is not rectangular: row {row} has {len} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("incidence column {edge} is not an edge: {reason}")]
    InvalidIncidenceColumn { edge: NumEdges, reason: &'static str },
    #[error("neighbor {neighbor} of node {node} is out of range for {n} nodes")]
    NeighborOutOfRange { node: Node, neighbor: i64, n: NumNodes },
    #[error("entry {value} at ({row}, {col}) is not valid in an {state}")]
    InvalidEntry {
        state: State,
        row: usize,
        col: usize,
        value: i64,
    },
    #[error("arc {edge} has multiplicity {multiplicity}, which an incidence matrix cannot hold")]
    MultiEdge { edge: Edge, multiplicity: Degree },
    #[error("unknown representation state: '{0}'")]
    UnknownState(String),
}

impl GraphError {
    /// Shorthand for an invalid incidence column
    pub(crate) fn column(edge: usize, reason: &'static str) -> Self {
        GraphError::InvalidIncidenceColumn {
            edge: edge as NumEdges,
            reason,
        }
    }
}

impl From<GraphError> for std::io::Error {
    fn from(value: GraphError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, value)
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
