use std::fmt::{Debug, Display};
use num_traits::{PrimInt, Unsigned};

use crate::Result;

/// Unsigned integer weight domain used by the matrix, the fringe and the engine.
///
/// The extremes of the type are reserved: the maximum doubles as "no edge" in the
/// matrix and as "infinity" in the fringe, the minimum marks the diagonal.
pub trait Weight: PrimInt + Unsigned + Debug + Display {
    /// Tentative distance of a vertex nothing has reached yet
    fn infinity() -> Self {
        Self::max_value()
    }

    /// Matrix entry for a pair of distinct vertices without an edge
    fn no_edge() -> Self {
        Self::max_value()
    }

    /// Matrix entry on the diagonal
    fn self_weight() -> Self {
        Self::min_value()
    }
}

impl<T> Weight for T where T: PrimInt + Unsigned + Debug + Display {}

/// Trait representing a weighted graph addressed by dense vertex indices
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of stored edges (each direction counted once)
    fn edge_count(&self) -> usize;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns the stored entry for (from, to), sentinels included
    fn get_weight(&self, from: usize, to: usize) -> Result<W>;

    /// True iff the stored value denotes a real edge
    fn is_edge(&self, weight: W) -> bool {
        weight != W::no_edge() && weight != W::self_weight()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_weight(from, to)
            .map(|weight| self.is_edge(weight))
            .unwrap_or(false)
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Stores `weight` at (from, to)
    fn set_weight(&mut self, from: usize, to: usize, weight: W) -> Result<()>;

    /// Stores `weight` at both (from, to) and (to, from)
    fn set_undirected_weight(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}
