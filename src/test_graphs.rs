use proptest::prelude::*;

use crate::geo;
use crate::graph::{Graph, Vertex};
use crate::{Cost, VertexIndex};

/// (0,0) (3,0) (3,4) (0,4) joined around the border.
pub fn rectangle() -> Graph {
    let vertices = vec![
        Vertex::new(1, 0.0, 0.0),
        Vertex::new(2, 3.0, 0.0),
        Vertex::new(3, 3.0, 4.0),
        Vertex::new(4, 0.0, 4.0),
    ];
    Graph::load(vertices, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap()
}

/// Triangle 0-1-2 and a separate edge 3-4.
pub fn two_components() -> Graph {
    let vertices = vec![
        Vertex::new(0, 0.0, 0.0),
        Vertex::new(1, 1.0, 0.0),
        Vertex::new(2, 0.0, 1.0),
        Vertex::new(3, 10.0, 10.0),
        Vertex::new(4, 11.0, 10.0),
    ];
    Graph::load(vertices, &[(0, 1), (1, 2), (2, 0), (3, 4)]).unwrap()
}

/// `w` x `h` lattice with unit spacing, 4-neighborhood plus one diagonal per cell.
pub fn grid(w: usize, h: usize) -> Graph {
    let idx = |x: usize, y: usize| y * w + x;
    let mut vertices = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            vertices.push(Vertex::new(idx(x, y) as i64, x as f64, y as f64));
        }
    }
    let mut edges = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if x + 1 < w {
                edges.push((idx(x, y), idx(x + 1, y)));
            }
            if y + 1 < h {
                edges.push((idx(x, y), idx(x, y + 1)));
            }
            if x + 1 < w && y + 1 < h {
                edges.push((idx(x, y), idx(x + 1, y + 1)));
            }
        }
    }
    Graph::load(vertices, &edges).unwrap()
}

/// Small random graphs on integer coordinates, with a valid source.
pub fn arb_graph_with_source() -> impl Strategy<Value = (Graph, VertexIndex)> {
    (1usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec((-20i32..20, -20i32..20), n),
            prop::collection::vec((0..n, 0..n), 0..3 * n),
            0..n,
        )
            .prop_map(|(coords, edges, source)| {
                let vertices = coords
                    .iter()
                    .enumerate()
                    .map(|(i, &(x, y))| Vertex::new(i as i64, x as f64, y as f64))
                    .collect();
                (Graph::load(vertices, &edges).unwrap(), source)
            })
    })
}

/// Reference distances by repeated relaxation of every edge.
pub fn bellman_ford(graph: &Graph, source: VertexIndex) -> Vec<Cost> {
    let mut dist = vec![f64::INFINITY; graph.len()];
    dist[source] = 0.0;
    for _ in 0..graph.len() {
        for v in 0..graph.len() {
            for &(next, w) in graph.neighbors(v).unwrap() {
                if dist[v] + w < dist[next] {
                    dist[next] = dist[v] + w;
                }
            }
        }
    }
    dist
}

/// Sum of euclidean lengths along consecutive path vertices, asserting each
/// hop is an edge of the graph.
pub fn path_length(graph: &Graph, vertices: &[VertexIndex]) -> Cost {
    vertices
        .windows(2)
        .map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            assert!(
                graph.neighbors(a).unwrap().iter().any(|&(n, _)| n == b),
                "{} -> {} is not an edge",
                a,
                b
            );
            geo::euclidean(graph.vertex(a).unwrap().point, graph.vertex(b).unwrap().point)
        })
        .sum()
}
