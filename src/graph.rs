use std::{iter::Enumerate, marker::PhantomData, ops::Range, slice};

use crate::core::{
    id::{EdgeId, IdType, VertexId},
    marker::EdgeType,
    AddEdgeError, AddEdgeErrorKind,
};

/// A graph with implicit vertices and an ordered edge sequence.
///
/// The graph is immutable once constructed. Vertices are identified by their
/// index in `[0, vertex_count)` and carry no attributes. Edges are stored as
/// endpoint pairs in the order in which they were given to
/// [`from_endpoints`](Graph::from_endpoints).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<Ty> {
    vertex_count: usize,
    endpoints: Vec<[VertexId; 2]>,
    ty: PhantomData<Ty>,
}

impl<Ty: EdgeType> Graph<Ty> {
    /// Builds a graph over `vertex_count` vertices from a finalized edge
    /// sequence, taking ownership of the buffer.
    ///
    /// Fails if any endpoint is not in `[0, vertex_count)`. The buffer is
    /// dropped on failure.
    pub fn from_endpoints(
        vertex_count: usize,
        endpoints: Vec<[VertexId; 2]>,
    ) -> Result<Self, AddEdgeError> {
        for &pair in &endpoints {
            if pair[0].to_usize() >= vertex_count {
                return Err(AddEdgeError::new(pair, AddEdgeErrorKind::SourceAbsent));
            }

            if pair[1].to_usize() >= vertex_count {
                return Err(AddEdgeError::new(pair, AddEdgeErrorKind::DestinationAbsent));
            }
        }

        Ok(Self {
            vertex_count,
            endpoints,
            ty: PhantomData,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    pub fn vertex_ids(&self) -> RangeIds<VertexId> {
        (0..self.vertex_count).into()
    }

    pub fn edge_ids(&self) -> RangeIds<EdgeId> {
        (0..self.endpoints.len()).into()
    }

    pub fn endpoints(&self, id: EdgeId) -> Option<(VertexId, VertexId)> {
        self.endpoints
            .get(id.to_usize())
            .map(|endpoints| (endpoints[0], endpoints[1]))
    }

    /// Iterates over the edges in their emission order.
    pub fn edges(&self) -> EdgesIter<'_> {
        EdgesIter {
            inner: self.endpoints.iter().enumerate(),
        }
    }

    /// Returns `true` if there is an edge connecting `from` and `to`. In
    /// undirected graphs the orientation of the stored pair is ignored.
    pub fn contains_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.endpoints.iter().any(|endpoints| {
            let from_to = endpoints[0] == from && endpoints[1] == to;
            let to_from = !Ty::is_directed() && endpoints[0] == to && endpoints[1] == from;
            from_to || to_from
        })
    }

    /// Returns the number of edge ends incident to the vertex. A self-loop
    /// contributes two.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn degree(&self, id: VertexId) -> usize {
        assert!(id.to_usize() < self.vertex_count, "vertex does not exist");

        self.endpoints
            .iter()
            .filter(|[u, v]| *u == id || *v == id)
            .map(|&[u, v]| 1 + (u == v) as usize)
            .sum()
    }
}

#[derive(Debug)]
pub struct RangeIds<I: IdType> {
    range: Range<usize>,
    ty: PhantomData<I>,
}

impl<I: IdType> Iterator for RangeIds<I> {
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(I::from_usize)
    }
}

impl<I: IdType> From<Range<usize>> for RangeIds<I> {
    fn from(range: Range<usize>) -> Self {
        Self {
            range,
            ty: PhantomData,
        }
    }
}

pub struct EdgesIter<'a> {
    inner: Enumerate<slice::Iter<'a, [VertexId; 2]>>,
}

impl<'a> Iterator for EdgesIter<'a> {
    type Item = (EdgeId, VertexId, VertexId);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(index, endpoints)| {
            (EdgeId::from_usize(index), endpoints[0], endpoints[1])
        })
    }
}
