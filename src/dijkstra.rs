use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;
use ordered_float::OrderedFloat;

use crate::error::Result;
use crate::graph::Graph;
use crate::shortest_paths::{Path, ShortestPaths};
use crate::{Cost, VertexIndex};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct State {
    cost: OrderedFloat<Cost>,
    vertex: VertexIndex,
}

impl State {
    fn new(vertex: VertexIndex, cost: Cost) -> Self {
        Self {
            cost: OrderedFloat(cost),
            vertex,
        }
    }
}

// Min-heap by cost, lower index first on ties
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Progress reported by [`dijkstra_observed`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SearchEvent {
    /// `vertex` left the frontier for good with its final `distance`.
    Settled { vertex: VertexIndex, distance: Cost },
    /// `vertex` got a strictly shorter tentative `distance` through `from`.
    Relaxed {
        vertex: VertexIndex,
        from: VertexIndex,
        distance: Cost,
    },
}

/// Dijkstra from `source` to all vertices.
pub fn dijkstra_all(graph: &Graph, source: VertexIndex) -> Result<ShortestPaths> {
    dijkstra_observed(graph, source, |_| {})
}

/// Dijkstra from `source` to all vertices, reporting every settle and
/// relaxation to `observer` in the order they happen.
pub fn dijkstra_observed<F>(graph: &Graph, source: VertexIndex, observer: F) -> Result<ShortestPaths>
where
    F: FnMut(SearchEvent),
{
    graph.check(source)?;
    let (dist, pred) = search(graph, source, None, observer);
    Ok(ShortestPaths::new(source, dist, pred))
}

/// Point-to-point query. Stops as soon as `target` is settled.
pub fn shortest_path(graph: &Graph, source: VertexIndex, target: VertexIndex) -> Result<Path> {
    graph.check(source)?;
    graph.check(target)?;
    let (dist, pred) = search(graph, source, Some(target), |_| {});
    ShortestPaths::new(source, dist, pred).path_to(target)
}

fn search<F>(
    graph: &Graph,
    source: VertexIndex,
    stop_at: Option<VertexIndex>,
    mut observer: F,
) -> (Vec<Cost>, Vec<Option<VertexIndex>>)
where
    F: FnMut(SearchEvent),
{
    let n = graph.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<VertexIndex>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[source] = 0.0;
    heap.push(State::new(source, 0.0));

    let mut settled = 0usize;
    let mut stale = 0usize;
    while let Some(State { cost, vertex }) = heap.pop() {
        if visited[vertex] {
            stale += 1;
            continue;
        }
        visited[vertex] = true;
        settled += 1;
        let cost = cost.into_inner();
        observer(SearchEvent::Settled {
            vertex,
            distance: cost,
        });

        if stop_at == Some(vertex) {
            break;
        }

        for &(next, w) in graph.neighbors_unchecked(vertex) {
            let next_cost = cost + w;
            if next_cost < dist[next] {
                dist[next] = next_cost;
                pred[next] = Some(vertex);
                observer(SearchEvent::Relaxed {
                    vertex: next,
                    from: vertex,
                    distance: next_cost,
                });
                heap.push(State::new(next, next_cost));
            }
        }
    }

    debug!(
        "Dijkstra from {}: {} settled, {} stale pops, {} left in frontier",
        source,
        settled,
        stale,
        heap.len()
    );
    (dist, pred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::graph::Vertex;
    use crate::test_graphs::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn rectangle_scenario() {
        let g = rectangle();
        let sp = dijkstra_all(&g, 0).unwrap();
        assert_eq!(sp.distance(2), Some(7.0));

        let path = sp.path_to(2).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.source(), Some(0));
        assert_eq!(path.target(), Some(2));
        assert_eq!(path.vertices.iter().filter(|&&v| v == 0).count(), 1);
        assert!(path.vertices[1] == 1 || path.vertices[1] == 3);
    }

    #[test]
    fn source_has_zero_distance_and_no_predecessor() {
        let g = rectangle();
        for source in 0..g.len() {
            let sp = dijkstra_all(&g, source).unwrap();
            assert_eq!(sp.distance(source), Some(0.0));
            assert_eq!(sp.predecessor(source), None);
            assert_eq!(sp.path_to(source).unwrap().vertices, vec![source]);
        }
    }

    #[test]
    fn line_graph() {
        //  0 --1-- 1 --2-- 2 --4-- 3
        //   \_____________7_______/
        let vertices = vec![
            Vertex::new(0, 0.0, 0.0),
            Vertex::new(1, 1.0, 0.0),
            Vertex::new(2, 3.0, 0.0),
            Vertex::new(3, 7.0, 0.0),
        ];
        let g = Graph::load(vertices, &[(0, 1), (1, 2), (2, 3), (0, 3)]).unwrap();
        let sp = dijkstra_all(&g, 0).unwrap();
        assert_eq!(sp.distances(), &[0.0, 1.0, 3.0, 7.0]);
        // the direct edge and the chain tie at 7, the direct edge settles it first
        assert_eq!(sp.predecessor(3), Some(0));
        assert_eq!(sp.predecessor(2), Some(1));
    }

    #[test]
    fn disconnected_target_is_unreachable() {
        let g = two_components();
        let sp = dijkstra_all(&g, 0).unwrap();
        assert_eq!(sp.distance(3), None);
        assert_eq!(sp.distances()[3], f64::INFINITY);
        assert_eq!(sp.predecessor(3), None);
        assert!(matches!(sp.path_to(3), Err(Error::Unreachable { target: 3 })));
        assert_eq!(sp.reachable_count(), 3);
    }

    #[test]
    fn invalid_source_fails() {
        let g = rectangle();
        assert!(matches!(
            dijkstra_all(&g, 4),
            Err(Error::OutOfRange { index: 4, len: 4 })
        ));
    }

    #[test]
    fn point_to_point_matches_full_solve() {
        let g = grid(5, 4);
        let full = dijkstra_all(&g, 0).unwrap();
        for target in 0..g.len() {
            let path = shortest_path(&g, 0, target).unwrap();
            assert_eq!(Some(path.distance), full.distance(target));
            assert_eq!(path.source(), Some(0));
            assert_eq!(path.target(), Some(target));
        }
        assert!(matches!(shortest_path(&g, 0, 99), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn point_to_point_unreachable() {
        let g = two_components();
        assert!(matches!(
            shortest_path(&g, 0, 4),
            Err(Error::Unreachable { target: 4 })
        ));
    }

    #[test]
    fn parallel_solves_share_the_graph() {
        let g = grid(6, 6);
        let expected: Vec<_> = (0..4).map(|s| dijkstra_all(&g, s).unwrap()).collect();
        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|s| {
                    let g = &g;
                    scope.spawn(move || dijkstra_all(g, s).unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(results, expected);
    }

    proptest! {
        #[test]
        fn distances_match_brute_force((g, source) in arb_graph_with_source()) {
            let sp = dijkstra_all(&g, source).unwrap();
            let expected = bellman_ford(&g, source);
            for v in 0..g.len() {
                match sp.distance(v) {
                    Some(d) => assert_abs_diff_eq!(d, expected[v], epsilon = 1e-9),
                    None => prop_assert!(expected[v].is_infinite()),
                }
            }
        }

        #[test]
        fn paths_sum_to_distances((g, source) in arb_graph_with_source()) {
            let sp = dijkstra_all(&g, source).unwrap();
            for v in (0..g.len()).filter(|&v| sp.is_reachable(v)) {
                let path = sp.path_to(v).unwrap();
                prop_assert_eq!(path.source(), Some(source));
                prop_assert_eq!(path.target(), Some(v));
                assert_abs_diff_eq!(path_length(&g, &path.vertices), path.distance, epsilon = 1e-9);
                let mut seen = path.vertices.clone();
                seen.sort_unstable();
                seen.dedup();
                prop_assert_eq!(seen.len(), path.len());
            }
        }

        #[test]
        fn distances_never_increase_and_settle_once((g, source) in arb_graph_with_source()) {
            let mut last = vec![f64::INFINITY; g.len()];
            last[source] = 0.0;
            let mut settled = vec![false; g.len()];
            let sp = dijkstra_observed(&g, source, |event| match event {
                SearchEvent::Relaxed { vertex, from, distance } => {
                    assert!(!settled[vertex]);
                    assert!(settled[from]);
                    assert!(distance < last[vertex]);
                    last[vertex] = distance;
                }
                SearchEvent::Settled { vertex, distance } => {
                    assert!(!settled[vertex]);
                    assert_eq!(distance, last[vertex]);
                    settled[vertex] = true;
                }
            }).unwrap();
            prop_assert_eq!(sp.distances(), &last[..]);
        }

        #[test]
        fn solving_twice_is_identical((g, source) in arb_graph_with_source()) {
            prop_assert_eq!(dijkstra_all(&g, source).unwrap(), dijkstra_all(&g, source).unwrap());
        }

        #[test]
        fn undirected_distances_are_symmetric((g, u) in arb_graph_with_source(), seed in any::<usize>()) {
            let v = seed % g.len();
            let from_u = dijkstra_all(&g, u).unwrap();
            let from_v = dijkstra_all(&g, v).unwrap();
            match (from_u.distance(v), from_v.distance(u)) {
                (Some(a), Some(b)) => assert_abs_diff_eq!(a, b, epsilon = 1e-9),
                (a, b) => prop_assert_eq!(a, b),
            }
        }
    }
}
