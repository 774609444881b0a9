use crate::graph::{DirectedGraph, MutableGraph, VertexId};
use crate::Result;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashSet;

/// Generates a 4-connected grid graph with `width * height` vertices
///
/// The vertex at `(x, y)` gets id `(y * width + x) * stride`, so a stride above
/// one produces sparse ids. Every cell links to its horizontal and vertical
/// neighbours in both directions; the weight is `1 + (x + y) % 3` so paths are
/// not all ties.
pub fn grid_graph(width: usize, height: usize, stride: usize) -> Result<DirectedGraph<u64>> {
    let stride = stride.max(1);
    let mut graph = DirectedGraph::with_capacity(width * height);

    let id_of = |x: usize, y: usize| -> VertexId { (y * width + x) * stride };

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex(id_of(x, y));
        }
    }

    for y in 0..height {
        for x in 0..width {
            let current = id_of(x, y);
            let weight = 1 + ((x + y) % 3) as u64;

            if x + 1 < width {
                graph.add_edge(current, id_of(x + 1, y), weight)?;
                graph.add_edge(id_of(x + 1, y), current, weight)?;
            }
            if y + 1 < height {
                graph.add_edge(current, id_of(x, y + 1), weight)?;
                graph.add_edge(id_of(x, y + 1), current, weight)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a random directed graph with scattered vertex ids
///
/// Roughly `edge_factor * vertices` edges are drawn with weights in
/// `0..=max_weight`. Ids are drawn from the whole `u32` range, which forces
/// the per-run vertex index onto its hashed layout. The same seed always
/// yields the same graph.
pub fn random_graph(
    vertices: usize,
    edge_factor: f64,
    max_weight: u64,
    seed: u64,
) -> Result<(DirectedGraph<u64>, Vec<VertexId>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = DirectedGraph::with_capacity(vertices);

    let mut seen = HashSet::with_capacity(vertices);
    let mut ids = Vec::with_capacity(vertices);
    while ids.len() < vertices {
        let id = rng.gen_range(0..u32::MAX as usize);
        if seen.insert(id) {
            graph.add_vertex(id);
            ids.push(id);
        }
    }

    if vertices == 0 {
        return Ok((graph, ids));
    }

    let num_edges = (edge_factor * vertices as f64) as usize;
    for _ in 0..num_edges {
        let u = ids[rng.gen_range(0..vertices)];
        let v = ids[rng.gen_range(0..vertices)];
        let weight = rng.gen_range(0..=max_weight);
        graph.add_edge(u, v, weight)?;
    }

    Ok((graph, ids))
}
