use serde::Serialize;

use crate::data_structures::FringeRecord;
use crate::graph::{Graph, Weight};
use crate::trace::{NullSink, TraceSink};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathResult<W> {
    /// Distances from source to each vertex, [`Weight::infinity`] if unreachable
    pub distances: Vec<W>,

    /// Parent of each vertex in the shortest path tree; unreachable vertices and
    /// the source are their own parent
    pub parents: Vec<usize>,

    /// Vertices in the order they were settled
    pub settle_order: Vec<usize>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Builds a result from settled records. Vertices without a record are
    /// reported as unreached.
    pub fn from_settled(source: usize, vertex_count: usize, settled: &[FringeRecord<W>]) -> Self {
        let mut distances = vec![W::infinity(); vertex_count];
        let mut parents: Vec<usize> = (0..vertex_count).collect();

        for record in settled {
            distances[record.vertex] = record.distance;
            parents[record.vertex] = record.parent;
        }

        ShortestPathResult {
            distances,
            parents,
            settle_order: settled.iter().map(|record| record.vertex).collect(),
            source,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Distance to `vertex`, or None if it is out of range or unreachable
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|distance| *distance != W::infinity())
    }

    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents.get(vertex).copied()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Vertices left at infinity
    pub fn unreachable(&self) -> Vec<usize> {
        (0..self.vertex_count())
            .filter(|&vertex| !self.is_reachable(vertex))
            .collect()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    /// Compute shortest paths from a source vertex to all other vertices,
    /// reporting every round to `sink`
    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: usize,
        sink: &mut dyn TraceSink<W>,
    ) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths without tracing
    fn shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.compute_shortest_paths(graph, source, &mut NullSink)
    }

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        if !result.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;

        while current != result.source {
            let parent = result.parent(current)?;
            if parent == current || path.len() > result.vertex_count() {
                log::warn!(
                    "Broken parent chain at vertex {} while tracing path to {}",
                    current,
                    target
                );
                return None;
            }
            path.push(parent);
            current = parent;
        }

        path.reverse();
        Some(path)
    }
}
