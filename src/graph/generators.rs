use crate::graph::{MutableGraph, WeightMatrix};
use crate::{Error, Result};
use rand::Rng;

/// Undirected edges of the six-vertex reference graph as (from, to, weight)
pub const REFERENCE_EDGES: [(usize, usize, u64); 9] = [
    (0, 1, 1),
    (0, 2, 4),
    (1, 3, 7),
    (1, 4, 5),
    (1, 2, 2),
    (2, 4, 1),
    (3, 4, 3),
    (3, 5, 2),
    (4, 5, 6),
];

/// Number of vertices in the reference graph
pub const REFERENCE_VERTICES: usize = 6;

/// Builds the six-vertex, nine-edge reference graph
pub fn reference_graph() -> Result<WeightMatrix<u64>> {
    from_undirected_edges(REFERENCE_VERTICES, &REFERENCE_EDGES)
}

/// Builds a matrix from a list of undirected edges
pub fn from_undirected_edges(
    vertex_count: usize,
    edges: &[(usize, usize, u64)],
) -> Result<WeightMatrix<u64>> {
    let mut graph = WeightMatrix::new(vertex_count)?;
    for &(from, to, weight) in edges {
        graph.set_undirected_weight(from, to, weight)?;
    }
    Ok(graph)
}

/// Generates a connected undirected graph with n vertices.
///
/// A random spanning tree guarantees connectivity, then `extra_edges` random
/// undirected edges are added on top (repeats overwrite). Weights are drawn from
/// 1..=max_weight so they never collide with the matrix sentinels.
pub fn random_connected_graph<R: Rng + ?Sized>(
    n: usize,
    extra_edges: usize,
    max_weight: u64,
    rng: &mut R,
) -> Result<WeightMatrix<u64>> {
    check_max_weight(max_weight)?;
    let mut graph = WeightMatrix::new(n)?;

    for v in 1..n {
        let u = rng.gen_range(0..v);
        graph.set_undirected_weight(u, v, rng.gen_range(1..=max_weight))?;
    }

    add_random_edges(&mut graph, n, extra_edges, max_weight, rng)?;
    Ok(graph)
}

/// Generates an undirected graph with n vertices and up to `edge_count` random
/// edges. The result may be disconnected.
pub fn random_graph<R: Rng + ?Sized>(
    n: usize,
    edge_count: usize,
    max_weight: u64,
    rng: &mut R,
) -> Result<WeightMatrix<u64>> {
    check_max_weight(max_weight)?;
    let mut graph = WeightMatrix::new(n)?;
    add_random_edges(&mut graph, n, edge_count, max_weight, rng)?;
    Ok(graph)
}

fn add_random_edges<R: Rng + ?Sized>(
    graph: &mut WeightMatrix<u64>,
    n: usize,
    count: usize,
    max_weight: u64,
    rng: &mut R,
) -> Result<()> {
    // A single vertex has no pair to connect
    if n < 2 {
        return Ok(());
    }
    for _ in 0..count {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.set_undirected_weight(u, v, rng.gen_range(1..=max_weight))?;
        }
    }
    Ok(())
}

fn check_max_weight(max_weight: u64) -> Result<()> {
    if max_weight == 0 || max_weight == u64::MAX {
        return Err(Error::InvalidArgument(format!(
            "max weight {} collides with a matrix sentinel",
            max_weight
        )));
    }
    Ok(())
}
