//! Collection of simple utilities for various properties and calculations.

use super::marker::EdgeType;

/// Returns the number of edges in a [full graph] given the vertex count,
/// directionality and whether self-loops are present.
///
/// Returns `None` when the count does not fit into `usize`.
///
/// [full graph]: https://en.wikipedia.org/wiki/Complete_graph
///
/// # Examples
///
/// ```
/// use klika::core::{
///     facts::full_graph_edge_count,
///     marker::{Directed, Undirected},
/// };
///
/// assert_eq!(full_graph_edge_count::<Undirected>(5, false), Some(10));
/// assert_eq!(full_graph_edge_count::<Undirected>(5, true), Some(15));
/// assert_eq!(full_graph_edge_count::<Directed>(5, false), Some(20));
/// assert_eq!(full_graph_edge_count::<Directed>(5, true), Some(25));
/// ```
pub fn full_graph_edge_count<Ty: EdgeType>(vertex_count: usize, loops: bool) -> Option<usize> {
    let n = vertex_count;

    match (Ty::is_directed(), loops) {
        (true, true) => n.checked_mul(n),
        (true, false) => n.checked_mul(n.saturating_sub(1)),
        (false, true) => n.checked_mul(n.checked_add(1)?).map(|count| count / 2),
        (false, false) => n.checked_mul(n.saturating_sub(1)).map(|count| count / 2),
    }
}

/// Returns the number of edges in a full citation graph given the vertex
/// count, that is, the number of (i, j) pairs with j < i.
///
/// Returns `None` when the count does not fit into `usize`.
///
/// # Examples
///
/// ```
/// use klika::core::facts::citation_graph_edge_count;
///
/// assert_eq!(citation_graph_edge_count(4), Some(6));
/// ```
pub fn citation_graph_edge_count(vertex_count: usize) -> Option<usize> {
    vertex_count
        .checked_mul(vertex_count.saturating_sub(1))
        .map(|count| count / 2)
}
