use crate::error::{Error, Result};
use crate::{Cost, VertexIndex};

/// Ordered vertices from the source to a target, and the total length.
#[derive(Debug, PartialEq, Clone)]
pub struct Path {
    pub vertices: Vec<VertexIndex>,
    pub distance: Cost,
}

impl Path {
    pub fn new(vertices: Vec<VertexIndex>, distance: Cost) -> Self {
        Path { vertices, distance }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn source(&self) -> Option<VertexIndex> {
        self.vertices.first().copied()
    }

    pub fn target(&self) -> Option<VertexIndex> {
        self.vertices.last().copied()
    }
}

/// Distance and predecessor tables of a single-source search.
///
/// Unreached vertices hold `f64::INFINITY` and no predecessor. The source
/// holds distance 0 and no predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: VertexIndex,
    dist: Vec<Cost>,
    pred: Vec<Option<VertexIndex>>,
}

impl ShortestPaths {
    pub(crate) fn new(source: VertexIndex, dist: Vec<Cost>, pred: Vec<Option<VertexIndex>>) -> Self {
        debug_assert_eq!(dist.len(), pred.len());
        Self { source, dist, pred }
    }

    pub fn source(&self) -> VertexIndex {
        self.source
    }

    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Raw distance table, `f64::INFINITY` when unreachable.
    pub fn distances(&self) -> &[Cost] {
        &self.dist
    }

    pub fn predecessors(&self) -> &[Option<VertexIndex>] {
        &self.pred
    }

    /// Shortest distance to `v`, `None` when `v` is unreachable or out of range.
    pub fn distance(&self, v: VertexIndex) -> Option<Cost> {
        self.dist.get(v).copied().filter(|d| d.is_finite())
    }

    pub fn predecessor(&self, v: VertexIndex) -> Option<VertexIndex> {
        self.pred.get(v).copied().flatten()
    }

    pub fn is_reachable(&self, v: VertexIndex) -> bool {
        self.distance(v).is_some()
    }

    pub fn reachable_count(&self) -> usize {
        self.dist.iter().filter(|d| d.is_finite()).count()
    }

    pub fn max_distance(&self) -> Option<Cost> {
        self.dist
            .iter()
            .copied()
            .filter(|d| d.is_finite())
            .fold(None, |acc, d| Some(acc.map_or(d, |m: Cost| m.max(d))))
    }

    /// Walks predecessor links back from `target` and returns the path from
    /// the source. Fails with `Unreachable` before walking if `target` has no
    /// finite distance.
    pub fn path_to(&self, target: VertexIndex) -> Result<Path> {
        let distance = match self.dist.get(target) {
            None => {
                return Err(Error::OutOfRange {
                    index: target,
                    len: self.len(),
                })
            }
            Some(d) if !d.is_finite() => return Err(Error::Unreachable { target }),
            Some(&d) => d,
        };

        let mut vertices = vec![target];
        let mut cur = target;
        while let Some(prev) = self.pred[cur] {
            // The predecessor tree can't be deeper than the vertex count.
            debug_assert!(vertices.len() <= self.len(), "cycle in predecessor links");
            vertices.push(prev);
            cur = prev;
        }
        debug_assert_eq!(cur, self.source);
        vertices.reverse();
        Ok(Path::new(vertices, distance))
    }
}
