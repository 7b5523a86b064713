//! Deterministic graph generators.
//!
//! Each generator computes the exact edge count for its parameters, reserves
//! the edge buffer in a single allocation, enumerates the endpoint pairs in a
//! fixed order and hands the finalized sequence over to
//! [`Graph::from_endpoints`](crate::graph::Graph::from_endpoints). The
//! emission order is part of the contract: identical arguments always produce
//! identical edge sequences.

mod citation;
mod full;

pub use citation::full_citation;
pub use full::full;

use crate::core::marker::EdgeType;

/// Calls `connect` for every vertex pair of the full graph, in emission
/// order: row-major by the first index, with the inner bounds determined by
/// directionality and `loops`.
pub(crate) fn connect_pairs<Ty: EdgeType>(
    vertex_count: usize,
    loops: bool,
    mut connect: impl FnMut(usize, usize),
) {
    for i in 0..vertex_count {
        if Ty::is_directed() {
            if loops {
                for j in 0..vertex_count {
                    connect(i, j);
                }
            } else {
                // All j < i first, then all j > i.
                for j in (0..i).chain(i + 1..vertex_count) {
                    connect(i, j);
                }
            }
        } else {
            let begin = if loops { i } else { i + 1 };

            for j in begin..vertex_count {
                connect(i, j);
            }
        }
    }
}
