use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// A weighted graph stored as a dense row-major V×V matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightMatrix<W = u64>
where
    W: Weight,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Row-major entries: weights[from * vertex_count + to]
    weights: Vec<W>,
}

impl<W> WeightMatrix<W>
where
    W: Weight,
{
    /// Creates a matrix for `vertex_count` vertices with no edges.
    ///
    /// The diagonal holds [`Weight::self_weight`] and every other entry holds
    /// [`Weight::no_edge`].
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(Error::InvalidArgument(
                "vertex count must be positive".to_string(),
            ));
        }

        let entries = vertex_count.checked_mul(vertex_count).ok_or_else(|| {
            Error::InvalidArgument(format!("vertex count {} is too large", vertex_count))
        })?;

        let weights = (0..entries)
            .map(|idx| {
                if idx / vertex_count == idx % vertex_count {
                    W::self_weight()
                } else {
                    W::no_edge()
                }
            })
            .collect();

        Ok(WeightMatrix {
            vertex_count,
            weights,
        })
    }

    /// Iterates over every real edge as (from, to, weight), row by row
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        let n = self.vertex_count;
        self.weights
            .iter()
            .enumerate()
            .filter(move |(_, weight)| self.is_edge(**weight))
            .map(move |(idx, weight)| (idx / n, idx % n, *weight))
    }

    /// Returns true when every (i, j) equals (j, i)
    pub fn is_symmetric(&self) -> bool {
        let n = self.vertex_count;
        (0..n).all(|i| (i + 1..n).all(|j| self.weights[i * n + j] == self.weights[j * n + i]))
    }

    fn index(&self, from: usize, to: usize) -> Result<usize> {
        for vertex in [from, to] {
            if !self.has_vertex(vertex) {
                return Err(Error::InvalidArgument(format!(
                    "vertex {} out of range for {} vertices",
                    vertex, self.vertex_count
                )));
            }
        }
        Ok(from * self.vertex_count + to)
    }
}

impl<W> Graph<W> for WeightMatrix<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    fn get_weight(&self, from: usize, to: usize) -> Result<W> {
        let idx = self.index(from, to)?;
        Ok(self.weights[idx])
    }
}

impl<W> MutableGraph<W> for WeightMatrix<W>
where
    W: Weight,
{
    fn set_weight(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        let idx = self.index(from, to)?;
        self.weights[idx] = weight;
        Ok(())
    }

    fn set_undirected_weight(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        // Both indices are checked before either entry is written
        let forward = self.index(from, to)?;
        let backward = self.index(to, from)?;
        self.weights[forward] = weight;
        self.weights[backward] = weight;
        Ok(())
    }
}
