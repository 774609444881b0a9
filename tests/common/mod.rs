#![allow(dead_code)]

use std::collections::HashMap;

/// Brute-force reference: Bellman-Ford over an edge list.
/// Unreachable vertices map to `None`.
pub fn bellman_ford(
    vertices: &[usize],
    edges: &[(usize, usize, u64)],
    source: usize,
) -> HashMap<usize, Option<u64>> {
    let mut dist: HashMap<usize, Option<u64>> = vertices.iter().map(|&v| (v, None)).collect();
    dist.insert(source, Some(0));

    for _ in 1..vertices.len().max(1) {
        let mut changed = false;
        for &(from, to, weight) in edges {
            if let Some(d) = dist[&from] {
                let alt = d + weight;
                if dist[&to].map_or(true, |current| alt < current) {
                    dist.insert(to, Some(alt));
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    dist
}

/// Ids used for the lettered scenarios: sparse on purpose
pub const A: usize = 10;
pub const B: usize = 20;
pub const C: usize = 30;
pub const D: usize = 40;
