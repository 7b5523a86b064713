use std::fmt;

use thiserror::Error;

use super::id::VertexId;

#[derive(Debug, Error, PartialEq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError {
    pub endpoints: [VertexId; 2],
    pub kind: AddEdgeErrorKind,
}

impl AddEdgeError {
    pub fn new(endpoints: [VertexId; 2], kind: AddEdgeErrorKind) -> Self {
        Self { endpoints, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GenerateError {
    #[error("invalid number of vertices")]
    InvalidVertexCount,
    #[error("the graph has exhausted its capacity")]
    CapacityOverflow,
    #[error("{0}")]
    AddEdge(#[from] AddEdgeError),
}
