use serde::Serialize;

use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Tentative (or, once extracted, final) state of one vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FringeRecord<W> {
    /// Vertex this record describes
    pub vertex: usize,

    /// Best known distance from the source, [`Weight::infinity`] if none yet
    pub distance: W,

    /// Predecessor on the best known path; the vertex itself when there is none
    pub parent: usize,
}

impl<W> FringeRecord<W>
where
    W: Weight,
{
    /// Creates the initial record of a vertex: infinitely far, its own parent
    pub fn unreached(vertex: usize) -> Self {
        FringeRecord {
            vertex,
            distance: W::infinity(),
            parent: vertex,
        }
    }

    /// True if some path from the source has been found
    pub fn is_reachable(&self) -> bool {
        self.distance != W::infinity()
    }
}

/// The set of vertices that have not been settled yet.
///
/// Records live in an arena indexed by vertex id; extraction leaves a hole so ids
/// never shift. Minimum selection is a linear scan over the arena, which keeps the
/// whole computation at O(V²) like the dense matrix it runs against.
#[derive(Debug, Clone)]
pub struct FringeSet<W>
where
    W: Weight,
{
    /// records[v] is Some while v is unsettled
    records: Vec<Option<FringeRecord<W>>>,

    /// Number of Some entries in `records`
    remaining: usize,
}

impl<W> FringeSet<W>
where
    W: Weight,
{
    /// Creates a fringe holding every vertex in 0..vertex_count, all unreached
    pub fn with_vertices(vertex_count: usize) -> Self {
        FringeSet {
            records: (0..vertex_count)
                .map(|vertex| Some(FringeRecord::unreached(vertex)))
                .collect(),
            remaining: vertex_count,
        }
    }

    /// Number of vertices the fringe was created for
    pub fn capacity(&self) -> usize {
        self.records.len()
    }

    /// Number of unsettled vertices
    pub fn len(&self) -> usize {
        self.remaining
    }

    /// Returns true once every vertex has been extracted
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Returns true if the vertex is still unsettled
    pub fn contains(&self, vertex: usize) -> bool {
        self.get(vertex).is_some()
    }

    /// Returns the record of an unsettled vertex
    pub fn get(&self, vertex: usize) -> Option<&FringeRecord<W>> {
        self.records.get(vertex).and_then(Option::as_ref)
    }

    /// Marks `vertex` as the source: distance zero, its own parent
    pub fn set_source(&mut self, vertex: usize) -> Result<()> {
        let record = self
            .records
            .get_mut(vertex)
            .and_then(Option::as_mut)
            .ok_or(Error::NotFound(vertex))?;

        record.distance = W::zero();
        record.parent = vertex;
        Ok(())
    }

    /// Removes and returns the record with the smallest distance.
    ///
    /// Ties go to the lowest vertex id.
    pub fn extract_min(&mut self) -> Result<FringeRecord<W>> {
        let vertex = self
            .iter()
            .min_by_key(|record| (record.distance, record.vertex))
            .map(|record| record.vertex)
            .ok_or(Error::EmptySet)?;

        let record = self.records[vertex].take().ok_or(Error::EmptySet)?;
        self.remaining -= 1;
        log::trace!(
            "extracted vertex {} at distance {} ({} left)",
            record.vertex,
            record.distance,
            self.remaining
        );
        Ok(record)
    }

    /// Lowers every remaining record reachable through an edge from `settled`.
    ///
    /// Returns the ids whose distance changed, in ascending order. An unreachable
    /// `settled` record relaxes nothing since infinity plus a weight overflows.
    pub fn relax_all_against<G>(&mut self, settled: &FringeRecord<W>, graph: &G) -> Result<Vec<usize>>
    where
        G: Graph<W> + ?Sized,
    {
        let mut relaxed = Vec::new();

        for record in self.records.iter_mut().flatten() {
            let weight = graph.get_weight(settled.vertex, record.vertex)?;
            if !graph.is_edge(weight) {
                continue;
            }

            let candidate = match settled.distance.checked_add(&weight) {
                Some(candidate) => candidate,
                None => continue,
            };

            if candidate < record.distance {
                log::trace!(
                    "relaxed vertex {}: {} -> {} via {}",
                    record.vertex,
                    record.distance,
                    candidate,
                    settled.vertex
                );
                record.distance = candidate;
                record.parent = settled.vertex;
                relaxed.push(record.vertex);
            }
        }

        Ok(relaxed)
    }

    /// Returns (vertex, distance) for each unsettled vertex, ordered by vertex id
    pub fn snapshot(&self) -> Vec<(usize, W)> {
        self.iter()
            .map(|record| (record.vertex, record.distance))
            .collect()
    }

    /// Iterates over the unsettled records in vertex order
    pub fn iter(&self) -> impl Iterator<Item = &FringeRecord<W>> + '_ {
        self.records.iter().flatten()
    }
}
