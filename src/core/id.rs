//! Integer identifiers of vertices and edges.
//!
//! Vertices have no separate entity in the graphs produced by this crate.
//! They are identified solely by their index, which is always in the range
//! `[0, vertex_count)`. Edge identifiers index into the edge sequence in the
//! order in which the edges were emitted.

use std::{fmt::Debug, hash::Hash};

/// A unique identification of a vertex or edge in a graph, convertible from
/// and to `usize`.
pub trait IdType: Copy + Ord + Hash + Debug {
    fn from_usize(id: usize) -> Self;
    fn to_usize(self) -> usize;
}

/// Identifier of a vertex, its index in `[0, vertex_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

/// Identifier of an edge, its position in the graph's edge sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

macro_rules! impl_id_type {
    ($name:ident) => {
        impl IdType for $name {
            fn from_usize(id: usize) -> Self {
                Self(id)
            }

            fn to_usize(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            fn from(id: usize) -> Self {
                Self(id)
            }
        }

        impl From<$name> for usize {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

impl_id_type!(VertexId);
impl_id_type!(EdgeId);
