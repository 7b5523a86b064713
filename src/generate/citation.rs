use crate::{
    core::{
        facts::citation_graph_edge_count,
        id::{IdType, VertexId},
        marker::EdgeType,
        GenerateError,
    },
    graph::Graph,
};

/// Creates a full citation graph.
///
/// The edge (i, j) is present if and only if j < i, so every vertex connects
/// to all vertices with a strictly smaller index. With [`Directed`] the
/// result is acyclic and models strict precedence. With [`Undirected`] the
/// same pairs are reinterpreted as undirected edges, which yields the full
/// graph without loops.
///
/// [`Directed`]: crate::core::marker::Directed
/// [`Undirected`]: crate::core::marker::Undirected
///
/// # Examples
///
/// ```
/// use klika::{core::marker::Directed, generate::full_citation};
///
/// let graph = full_citation::<Directed>(4)?;
///
/// assert_eq!(graph.edge_count(), 6);
/// # Ok::<(), klika::core::GenerateError>(())
/// ```
pub fn full_citation<Ty: EdgeType>(vertex_count: i64) -> Result<Graph<Ty>, GenerateError> {
    let n = usize::try_from(vertex_count).map_err(|_| GenerateError::InvalidVertexCount)?;
    let edge_count = citation_graph_edge_count(n).ok_or(GenerateError::CapacityOverflow)?;

    let mut endpoints = Vec::new();
    endpoints
        .try_reserve_exact(edge_count)
        .map_err(|_| GenerateError::CapacityOverflow)?;

    for i in 1..n {
        for j in 0..i {
            endpoints.push([VertexId::from_usize(i), VertexId::from_usize(j)]);
        }
    }

    debug_assert_eq!(endpoints.len(), edge_count);

    Ok(Graph::from_endpoints(n, endpoints)?)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;
    use crate::core::marker::{Directed, Undirected};

    fn pairs<Ty: EdgeType>(graph: &Graph<Ty>) -> Vec<(usize, usize)> {
        graph
            .edges()
            .map(|(_, u, v)| (u.to_usize(), v.to_usize()))
            .collect()
    }

    #[test]
    fn emission_order() {
        let graph = full_citation::<Directed>(4).unwrap();

        assert_eq!(
            pairs(&graph),
            vec![(1, 0), (2, 0), (2, 1), (3, 0), (3, 1), (3, 2)]
        );
    }

    #[test]
    fn edge_count() {
        for n in [0usize, 1, 2, 5] {
            let graph = full_citation::<Directed>(n as i64).unwrap();

            assert_eq!(graph.vertex_count(), n);
            assert_eq!(graph.edge_count(), n * n.saturating_sub(1) / 2);
        }
    }

    #[test]
    fn undirected_is_full_graph_without_loops() {
        let graph = full_citation::<Undirected>(3).unwrap();

        assert!(!graph.is_directed());
        assert_eq!(pairs(&graph), vec![(1, 0), (2, 0), (2, 1)]);

        for i in 0..3 {
            for j in 0..3 {
                let connected =
                    graph.contains_edge(VertexId::from_usize(i), VertexId::from_usize(j));
                assert_eq!(connected, i != j);
            }
        }
    }

    #[test]
    fn negative_vertex_count() {
        assert_matches!(
            full_citation::<Directed>(-1),
            Err(GenerateError::InvalidVertexCount)
        );
    }

    #[test]
    fn zero_vertices() {
        let graph = full_citation::<Directed>(0).unwrap();

        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn deterministic() {
        assert_eq!(
            full_citation::<Directed>(6).unwrap(),
            full_citation::<Directed>(6).unwrap()
        );
    }

    proptest! {
        #[test]
        fn source_index_is_always_larger(n in 0i64..64) {
            let graph = full_citation::<Directed>(n).unwrap();

            prop_assert_eq!(
                Some(graph.edge_count()),
                citation_graph_edge_count(n as usize)
            );

            for (i, j) in pairs(&graph) {
                prop_assert!(j < i);
                prop_assert!(i < n as usize);
            }
        }
    }
}
