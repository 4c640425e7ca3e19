use fnv::FnvHashMap;
use log::debug;

use crate::error::{Error, Result};
use crate::geo::{self, Point};
use crate::{Cost, VertexIndex};

/// A loaded vertex. `id` is the identifier from the input file and is kept
/// for output only; everything inside the crate addresses vertices by index.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub id: i64,
    pub point: Point,
}

impl Vertex {
    pub fn new(id: i64, x: f64, y: f64) -> Self {
        Self {
            id,
            point: Point::new(x, y),
        }
    }
}

/// Static undirected graph in compressed adjacency form.
///
/// The neighbors of vertex `v` live in `adjacency[offsets[v]..offsets[v + 1]]`,
/// in the order their edges appeared in the input.
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    offsets: Vec<usize>,
    adjacency: Vec<(VertexIndex, Cost)>,
    id_to_idx: FnvHashMap<i64, VertexIndex>,
}

impl Graph {
    /// Builds the graph from vertex records and undirected index pairs.
    /// Each pair is weighted by the euclidean distance between its endpoints
    /// and stored in both directions.
    pub fn load(vertices: Vec<Vertex>, edges: &[(VertexIndex, VertexIndex)]) -> Result<Self> {
        let n = vertices.len();
        for &(u, v) in edges {
            check_index(u, n)?;
            check_index(v, n)?;
        }

        let mut degree = vec![0usize; n];
        for &(u, v) in edges {
            degree[u] += 1;
            degree[v] += 1;
        }

        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);
        for d in &degree {
            let last = offsets[offsets.len() - 1];
            offsets.push(last + d);
        }

        // Fill cursors walk forward from each vertex's start offset.
        let mut cursor = offsets[..n].to_vec();
        let mut adjacency = vec![(0, 0.0); 2 * edges.len()];
        for &(u, v) in edges {
            let weight = geo::euclidean(vertices[u].point, vertices[v].point);
            adjacency[cursor[u]] = (v, weight);
            cursor[u] += 1;
            adjacency[cursor[v]] = (u, weight);
            cursor[v] += 1;
        }

        debug!(
            "Graph: {} vertices, {} undirected edges, {} adjacency entries",
            n,
            edges.len(),
            adjacency.len()
        );

        // Duplicate ids keep their first occurrence.
        let mut id_to_idx = FnvHashMap::default();
        for (idx, vertex) in vertices.iter().enumerate() {
            id_to_idx.entry(vertex.id).or_insert(idx);
        }

        Ok(Self {
            vertices,
            offsets,
            adjacency,
            id_to_idx,
        })
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of undirected input edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.len() / 2
    }

    pub fn vertex(&self, v: VertexIndex) -> Result<&Vertex> {
        self.vertices.get(v).ok_or(Error::OutOfRange {
            index: v,
            len: self.len(),
        })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// `(neighbor, weight)` entries of `v`, in insertion order.
    pub fn neighbors(&self, v: VertexIndex) -> Result<&[(VertexIndex, Cost)]> {
        self.check(v)?;
        Ok(self.neighbors_unchecked(v))
    }

    /// Callers must have validated `v` against `len()`.
    pub(crate) fn neighbors_unchecked(&self, v: VertexIndex) -> &[(VertexIndex, Cost)] {
        &self.adjacency[self.offsets[v]..self.offsets[v + 1]]
    }

    pub fn check(&self, v: VertexIndex) -> Result<()> {
        check_index(v, self.len())
    }

    /// Finds the index of the first vertex carrying the external `id`.
    pub fn index_of(&self, id: i64) -> Option<VertexIndex> {
        self.id_to_idx.get(&id).copied()
    }
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::OutOfRange { index, len })
    }
}
