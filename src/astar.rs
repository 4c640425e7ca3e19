//! Point-to-point A* search guided by the straight-line distance to the goal.
//!
//! Edge weights are euclidean lengths, so the straight-line distance never
//! overestimates the remaining cost and the first time the goal is popped its
//! distance is final.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;
use ordered_float::OrderedFloat;

use crate::error::Result;
use crate::geo::{self, Point};
use crate::graph::Graph;
use crate::shortest_paths::{Path, ShortestPaths};
use crate::{Cost, VertexIndex};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Candidate {
    estimate: OrderedFloat<Cost>,
    vertex: VertexIndex,
}

impl Candidate {
    fn new(vertex: VertexIndex, estimate: Cost) -> Self {
        Self {
            estimate: OrderedFloat(estimate),
            vertex,
        }
    }
}

// Min-heap by g + h, lower index first on ties
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest path from `source` to `target`. Fails with `OutOfRange` on an
/// invalid endpoint and `Unreachable` when no path exists.
pub fn astar_path(graph: &Graph, source: VertexIndex, target: VertexIndex) -> Result<Path> {
    graph.check(source)?;
    let goal: Point = graph.vertex(target)?.point;
    let h = |v: VertexIndex| geo::euclidean(graph.vertices()[v].point, goal);

    let n = graph.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<VertexIndex>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[source] = 0.0;
    heap.push(Candidate::new(source, h(source)));

    let mut settled = 0usize;
    while let Some(Candidate { vertex, .. }) = heap.pop() {
        if visited[vertex] {
            continue;
        }
        visited[vertex] = true;
        settled += 1;

        if vertex == target {
            break;
        }

        let cost = dist[vertex];
        for &(next, w) in graph.neighbors_unchecked(vertex) {
            let next_cost = cost + w;
            // Rounding can leave the heuristic a hair off consistent; settled
            // vertices stay fixed regardless.
            if !visited[next] && next_cost < dist[next] {
                dist[next] = next_cost;
                pred[next] = Some(vertex);
                heap.push(Candidate::new(next, next_cost + h(next)));
            }
        }
    }

    debug!(
        "A* from {} to {}: {} settled, {} left in frontier",
        source,
        target,
        settled,
        heap.len()
    );
    ShortestPaths::new(source, dist, pred).path_to(target)
}
