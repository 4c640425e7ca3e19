/*
Dijkstra over a decrease-key frontier backed by orx_priority_queue.

Each vertex sits in the frontier at most once: a relaxation lowers the key of
the existing entry instead of pushing a second one, so nothing stale is ever
popped.
*/

use log::debug;
use orx_priority_queue::*;

use crate::error::Result;
use crate::graph::Graph;
use crate::shortest_paths::ShortestPaths;
use crate::{Cost, VertexIndex};

pub fn dijkstra_pq_all(graph: &Graph, source: VertexIndex) -> Result<ShortestPaths> {
    graph.check(source)?;

    let n = graph.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<VertexIndex>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut pq: BinaryHeapWithMap<VertexIndex, Cost> = BinaryHeapWithMap::new();

    dist[source] = 0.0;
    pq.push(source, 0.0);

    let mut settled = 0usize;
    while let Some((vertex, cost)) = pq.pop() {
        debug_assert!(!visited[vertex]);
        visited[vertex] = true;
        settled += 1;

        for &(next, w) in graph.neighbors_unchecked(vertex) {
            let next_cost = cost + w;
            if !visited[next] && next_cost < dist[next] {
                dist[next] = next_cost;
                pred[next] = Some(vertex);
                pq.decrease_key_or_push(&next, next_cost);
            }
        }
    }

    debug!("Decrease-key Dijkstra from {}: {} settled", source, settled);
    Ok(ShortestPaths::new(source, dist, pred))
}
