use serde::{Deserialize, Serialize};

use crate::data_structures::{Distance, VertexRecord, VertexState};
use crate::graph::{Graph, VertexId, Weight};
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
///
/// Owns the finished [`VertexState`] of the run. Distances of settled
/// vertices are final; when [`RunResult::is_complete`] is false the run
/// stopped early and the remaining distances are upper bounds.
#[derive(Debug, Clone)]
pub struct RunResult<W>
where
    W: Weight,
{
    state: VertexState<W>,
    source: VertexId,
    settled: usize,
    complete: bool,
}

impl<W> RunResult<W>
where
    W: Weight,
{
    pub(crate) fn new(state: VertexState<W>, source: VertexId, settled: usize, complete: bool) -> Self {
        RunResult {
            state,
            source,
            settled,
            complete,
        }
    }

    /// Source vertex ID
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Number of vertices covered by the result
    pub fn vertex_count(&self) -> usize {
        self.state.len()
    }

    /// Number of vertices extracted with a finite distance
    pub fn settled_count(&self) -> usize {
        self.settled
    }

    /// True unless the run was stopped before every reachable vertex was settled
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn state(&self) -> &VertexState<W> {
        &self.state
    }

    pub fn into_state(self) -> VertexState<W> {
        self.state
    }

    pub fn record(&self, vertex: VertexId) -> Result<VertexRecord<W>> {
        self.state.get(vertex)
    }

    /// Shortest distance to `vertex`, `None` if it was not reached
    pub fn distance(&self, vertex: VertexId) -> Result<Option<W>> {
        self.state.distance(vertex).map(Distance::finite)
    }

    /// Previous vertex on the shortest path, `None` for the source and unreached vertices
    pub fn predecessor(&self, vertex: VertexId) -> Result<Option<VertexId>> {
        self.state.predecessor(vertex)
    }

    /// A vertex is reachable when its distance is not infinite
    pub fn is_reachable(&self, vertex: VertexId) -> Result<bool> {
        self.state.distance(vertex).map(Distance::is_finite)
    }

    /// The source is the only vertex with no predecessor and distance zero
    pub fn is_source(&self, vertex: VertexId) -> Result<bool> {
        let record = self.state.get(vertex)?;
        Ok(record.predecessor.is_none() && record.distance == Distance::Finite(W::zero()))
    }

    /// Reconstructs the path from the source to `target`
    ///
    /// Returns `Ok(None)` for an unreachable target. The walk takes at most
    /// `V - 1` predecessor steps; a longer chain, or one ending anywhere but
    /// the source, fails with [`Error::CorruptPredecessors`].
    pub fn path_to(&self, target: VertexId) -> Result<Option<Vec<VertexId>>> {
        if !self.is_reachable(target)? {
            return Ok(None);
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = self.state.predecessor(current)? {
            if path.len() >= self.vertex_count() {
                return Err(Error::CorruptPredecessors(target));
            }
            path.push(previous);
            current = previous;
        }

        if current != self.source {
            return Err(Error::CorruptPredecessors(target));
        }

        path.reverse();
        Ok(Some(path))
    }

    /// Iterates over reachable vertices and their distances
    pub fn reachable(&self) -> impl Iterator<Item = (VertexId, W)> + '_ {
        self.state
            .iter()
            .filter_map(|(id, record)| record.distance.finite().map(|distance| (id, distance)))
    }

    /// Exports the result as a serializable summary
    pub fn summary(&self) -> RunSummary<W> {
        RunSummary {
            source: self.source,
            complete: self.complete,
            vertices: self
                .state
                .iter()
                .map(|(id, record)| VertexSummary {
                    id,
                    distance: record.distance.finite(),
                    predecessor: record.predecessor,
                })
                .collect(),
        }
    }
}

/// Per-vertex entry of a [`RunSummary`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexSummary<W> {
    pub id: VertexId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<W>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessor: Option<VertexId>,
}

/// Detached, serializable view of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary<W> {
    pub source: VertexId,
    pub complete: bool,
    pub vertices: Vec<VertexSummary<W>>,
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<RunResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &RunResult<W>, target: VertexId) -> Option<Vec<VertexId>> {
        result.path_to(target).ok().flatten()
    }
}
