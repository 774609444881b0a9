use crate::graph::traits::{check_edge_weight, Graph, MutableGraph, VertexId, Weight};
use crate::{Error, Result};
use std::collections::HashMap;

/// Adjacency record of a single vertex
#[derive(Debug, Clone)]
struct Adjacency<W> {
    /// Id of the vertex owning this record
    id: VertexId,

    /// Outgoing edges: [(target_vertex, weight)]
    edges: Vec<(VertexId, W)>,
}

/// A directed graph implementation using adjacency lists
///
/// Vertex ids may be sparse. Each id maps to a slot in `adjacency`, so
/// adjacency lookup stays O(1) regardless of how the ids are spread.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// vertex_id -> slot in `adjacency`
    slots: HashMap<VertexId, usize>,

    /// Adjacency records in registration order
    adjacency: Vec<Adjacency<W>>,

    /// Total number of edges
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            slots: HashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty directed graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            slots: HashMap::with_capacity(vertices),
            adjacency: Vec::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Builds a graph from a list of edges, registering endpoints as they appear
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (VertexId, VertexId, W)>,
    {
        let mut graph = DirectedGraph::new();
        for (from, to, weight) in edges {
            graph.add_vertex(from);
            graph.add_vertex(to);
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    fn record(&self, vertex: VertexId) -> Result<&Adjacency<W>> {
        self.slots
            .get(&vertex)
            .map(|&slot| &self.adjacency[slot])
            .ok_or(Error::UnknownVertex(vertex))
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertex_ids(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.adjacency.iter().map(|record| record.id))
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        self.slots.contains_key(&vertex)
    }

    fn outgoing_edges(
        &self,
        vertex: VertexId,
    ) -> Result<Box<dyn Iterator<Item = (VertexId, W)> + '_>> {
        let record = self.record(vertex)?;
        Ok(Box::new(record.edges.iter().copied()))
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self, vertex: VertexId) -> bool {
        if self.slots.contains_key(&vertex) {
            return false;
        }

        self.slots.insert(vertex, self.adjacency.len());
        self.adjacency.push(Adjacency {
            id: vertex,
            edges: Vec::new(),
        });
        true
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<()> {
        if !self.has_vertex(to) {
            return Err(Error::UnknownVertex(to));
        }
        check_edge_weight(from, to, weight)?;

        let slot = *self.slots.get(&from).ok_or(Error::UnknownVertex(from))?;
        self.adjacency[slot].edges.push((to, weight));
        self.edge_count += 1;
        Ok(())
    }
}
