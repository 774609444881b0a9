use std::ops::ControlFlow;
use std::sync::Arc;

use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::algorithm::config::RunnerConfig;
use crate::algorithm::{RunResult, ShortestPathAlgorithm};
use crate::data_structures::{Distance, PriorityMap, VertexIndex, VertexState};
use crate::graph::traits::check_edge_weight;
use crate::graph::{Graph, VertexId, Weight};
use crate::{Error, Result};

/// Snapshot handed to a [`ShortestPathRunner::run_with`] visitor after each
/// settled vertex
#[derive(Debug)]
pub struct RunStep<'a, W>
where
    W: Weight,
{
    /// Vertex just extracted from the queue
    pub vertex: VertexId,

    /// Its final distance
    pub distance: W,

    /// Vertices settled so far, this one included
    pub settled: usize,

    /// Working state after relaxing the vertex's outgoing edges
    pub state: &'a VertexState<W>,
}

/// Dijkstra's algorithm over an indexed priority map
///
/// Every run builds its own [`VertexIndex`], [`VertexState`] and
/// [`PriorityMap`]; the graph is only read. One runner can therefore serve
/// any number of concurrent runs on the same graph.
#[derive(Debug, Default, Clone)]
pub struct ShortestPathRunner {
    config: RunnerConfig,
}

impl ShortestPathRunner {
    /// Creates a new runner with the default configuration
    pub fn new() -> Self {
        ShortestPathRunner::default()
    }

    /// Creates a runner from an explicit configuration
    pub fn with_config(config: RunnerConfig) -> Self {
        ShortestPathRunner { config }
    }

    /// Stop once `target` is settled
    pub fn with_target(mut self, target: VertexId) -> Self {
        self.config.target = Some(target);
        self
    }

    /// Enable or disable the weight scan before each run
    pub fn with_weight_validation(mut self, enabled: bool) -> Self {
        self.config.validate_weights = enabled;
        self
    }

    /// Stop after `limit` vertices are settled
    ///
    /// The check runs after each extraction, so a limit of zero still
    /// settles the source.
    pub fn with_max_settled(mut self, limit: usize) -> Self {
        self.config.max_settled = Some(limit);
        self
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Computes shortest paths from `source` to every vertex of `graph`
    pub fn run<W, G>(&self, graph: &G, source: VertexId) -> Result<RunResult<W>>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
    {
        self.run_with(graph, source, |_| ControlFlow::Continue(()))
    }

    /// Like [`run`](Self::run), calling `visitor` between main-loop iterations
    ///
    /// Returning `ControlFlow::Break` stops the run; the result is then
    /// marked incomplete unless nothing reachable was left in the queue.
    pub fn run_with<W, G, F>(&self, graph: &G, source: VertexId, mut visitor: F) -> Result<RunResult<W>>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
        F: FnMut(&RunStep<'_, W>) -> ControlFlow<()>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::UnknownVertex(source));
        }
        if self.config.validate_weights {
            validate_weights(graph)?;
        }

        debug!(
            "dijkstra: source {} over {} vertices, {} edges",
            source,
            graph.vertex_count(),
            graph.edge_count()
        );

        let index = Arc::new(VertexIndex::build(graph.vertex_ids())?);
        let mut state = VertexState::with_index(Arc::clone(&index), source)?;
        let mut queue = PriorityMap::with_index(index);

        queue.insert(Distance::Finite(W::zero()), source)?;
        for vertex in graph.vertex_ids() {
            if vertex != source {
                queue.insert(Distance::Infinite, vertex)?;
            }
        }

        // Edges whose sum overflowed W; only fatal if the target stays unreached
        let mut overflowed: Vec<(VertexId, VertexId)> = Vec::new();
        let mut settled = 0;

        while !queue.is_empty() {
            let entry = queue.extract_min()?;
            let u = entry.payload;
            let dist_u = match entry.key {
                Distance::Finite(distance) => distance,
                Distance::Infinite => {
                    debug!("dijkstra: {} vertices unreachable", queue.len() + 1);
                    break;
                }
            };
            settled += 1;

            for (v, weight) in graph.outgoing_edges(u)? {
                let alt = match dist_u.checked_add(weight) {
                    Some(alt) => Distance::Finite(alt),
                    None => {
                        overflowed.push((u, v));
                        continue;
                    }
                };

                if alt < state.get(v)?.distance {
                    trace!("relax {} -> {}: {:?}", u, v, alt);
                    state.set(v, alt, Some(u))?;
                    if let Some(position) = queue.find_by_payload(v) {
                        queue.decrease_key(position, alt)?;
                    }
                }
            }

            let step = RunStep {
                vertex: u,
                distance: dist_u,
                settled,
                state: &state,
            };
            let stop = visitor(&step).is_break();
            if stop {
                warn!("dijkstra: run from {} stopped by visitor after {} vertices", source, settled);
            }

            let target_reached = self.config.target == Some(u);
            let limit_reached = self.config.max_settled.is_some_and(|limit| settled >= limit);
            if stop || target_reached || limit_reached {
                break;
            }
        }

        // Nothing reachable is left once the queue is empty or holds only infinite keys
        let complete = queue
            .peek()
            .map_or(true, |entry| entry.key == Distance::Infinite);

        if complete {
            for &(from, to) in &overflowed {
                if !state.distance(to)?.is_finite() {
                    return Err(Error::DistanceOverflow { from, to });
                }
            }
        }

        debug!(
            "dijkstra: settled {} of {} vertices from {} (complete: {})",
            settled,
            state.len(),
            source,
            complete
        );

        Ok(RunResult::new(state, source, settled, complete))
    }

    /// Runs independent searches from every source in parallel
    ///
    /// Each run owns its priority map and vertex state; the graph is shared
    /// read-only. Results come back in the order of `sources`.
    pub fn run_many<W, G>(&self, graph: &G, sources: &[VertexId]) -> Result<Vec<RunResult<W>>>
    where
        W: Weight,
        G: Graph<W> + Sync + ?Sized,
    {
        if self.config.validate_weights {
            validate_weights(graph)?;
        }
        let runner = self.clone().with_weight_validation(false);

        sources
            .par_iter()
            .map(|&source| runner.run(graph, source))
            .collect()
    }

    /// Shortest distance and path from `source` to `target`
    ///
    /// Stops as soon as `target` is settled. Returns `Ok(None)` when the
    /// target is unreachable.
    pub fn shortest_path<W, G>(
        &self,
        graph: &G,
        source: VertexId,
        target: VertexId,
    ) -> Result<Option<(W, Vec<VertexId>)>>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
    {
        if !graph.has_vertex(target) {
            return Err(Error::UnknownVertex(target));
        }

        let mut config = self.config.clone();
        config.target = Some(target);
        config.max_settled = None;
        let result = ShortestPathRunner::with_config(config).run(graph, source)?;

        match result.distance(target)? {
            None => Ok(None),
            Some(distance) => {
                let path = result
                    .path_to(target)?
                    .ok_or(Error::CorruptPredecessors(target))?;
                Ok(Some((distance, path)))
            }
        }
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for ShortestPathRunner
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<RunResult<W>> {
        self.run(graph, source)
    }
}

/// Rejects graphs with negative or non-finite edge weights
fn validate_weights<W, G>(graph: &G) -> Result<()>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    for from in graph.vertex_ids() {
        for (to, weight) in graph.outgoing_edges(from)? {
            check_edge_weight(from, to, weight)?;
        }
    }
    Ok(())
}
