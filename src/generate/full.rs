use crate::{
    core::{
        facts::full_graph_edge_count,
        id::{IdType, VertexId},
        marker::EdgeType,
        GenerateError,
    },
    graph::Graph,
};

use super::connect_pairs;

/// Creates a full graph, directed or undirected, with or without self-loops.
///
/// In a full graph every edge allowed by the directionality and `loops`
/// settings is present. The undirected full graph without loops on n vertices
/// is the complete graph K_n; the other three variants are K_n with edge
/// orientations, self-loops or both added.
///
/// A negative vertex count yields [`GenerateError::InvalidVertexCount`].
/// Zero is valid and produces the empty graph.
///
/// # Examples
///
/// ```
/// use klika::{core::marker::Undirected, generate::full};
///
/// let graph = full::<Undirected>(4, false)?;
///
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.edge_count(), 6);
/// # Ok::<(), klika::core::GenerateError>(())
/// ```
pub fn full<Ty: EdgeType>(vertex_count: i64, loops: bool) -> Result<Graph<Ty>, GenerateError> {
    let n = usize::try_from(vertex_count).map_err(|_| GenerateError::InvalidVertexCount)?;
    let edge_count =
        full_graph_edge_count::<Ty>(n, loops).ok_or(GenerateError::CapacityOverflow)?;

    let mut endpoints = Vec::new();
    endpoints
        .try_reserve_exact(edge_count)
        .map_err(|_| GenerateError::CapacityOverflow)?;

    connect_pairs::<Ty>(n, loops, |i, j| {
        endpoints.push([VertexId::from_usize(i), VertexId::from_usize(j)]);
    });

    debug_assert_eq!(endpoints.len(), edge_count);

    Ok(Graph::from_endpoints(n, endpoints)?)
}
