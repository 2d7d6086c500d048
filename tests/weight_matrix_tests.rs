use dijkstra_trace::graph::generators::{reference_graph, REFERENCE_EDGES};
use dijkstra_trace::graph::{Graph, MutableGraph, Weight, WeightMatrix};
use dijkstra_trace::Error;

#[test]
fn test_new_matrix_holds_sentinels() {
    let graph: WeightMatrix<u64> = WeightMatrix::new(4).unwrap();

    for i in 0..4 {
        for j in 0..4 {
            let weight = graph.get_weight(i, j).unwrap();
            if i == j {
                assert_eq!(weight, u64::self_weight());
            } else {
                assert_eq!(weight, u64::no_edge());
            }
            assert!(!graph.is_edge(weight), "({}, {}) should not be an edge", i, j);
        }
    }
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_zero_vertices_is_rejected() {
    let result = WeightMatrix::<u64>::new(0);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn test_oversized_vertex_count_is_rejected() {
    let result = WeightMatrix::<u8>::new(usize::MAX);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn test_out_of_range_indices_are_rejected() {
    let mut graph: WeightMatrix<u32> = WeightMatrix::new(3).unwrap();

    assert!(matches!(graph.set_weight(3, 0, 1), Err(Error::InvalidArgument(_))));
    assert!(matches!(graph.set_weight(0, 7, 1), Err(Error::InvalidArgument(_))));
    assert!(matches!(graph.get_weight(5, 5), Err(Error::InvalidArgument(_))));

    // A failed undirected insert must not leave half an edge behind
    assert!(graph.set_undirected_weight(1, 3, 4).is_err());
    assert_eq!(graph.get_weight(1, 1).unwrap(), u32::self_weight());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_undirected_weight_is_symmetric() {
    let mut graph: WeightMatrix<u64> = WeightMatrix::new(5).unwrap();
    graph.set_undirected_weight(1, 4, 9).unwrap();

    assert_eq!(graph.get_weight(1, 4).unwrap(), 9);
    assert_eq!(graph.get_weight(4, 1).unwrap(), 9);
    assert!(graph.has_edge(1, 4));
    assert!(graph.has_edge(4, 1));
    assert!(graph.is_symmetric());
}

#[test]
fn test_directed_weight_only_sets_one_direction() {
    let mut graph: WeightMatrix<u8> = WeightMatrix::new(2).unwrap();
    graph.set_weight(0, 1, 3).unwrap();

    assert!(graph.has_edge(0, 1));
    assert!(!graph.has_edge(1, 0));
    assert!(!graph.is_symmetric());
    assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1, 3)]);
}

#[test]
fn test_sentinel_valued_weights_are_not_edges() {
    let mut graph: WeightMatrix<u64> = WeightMatrix::new(3).unwrap();
    graph.set_undirected_weight(0, 1, 0).unwrap();
    graph.set_undirected_weight(1, 2, u64::MAX).unwrap();

    assert!(!graph.has_edge(0, 1));
    assert!(!graph.has_edge(1, 2));
    assert!(!graph.is_edge(0));
    assert!(!graph.is_edge(u64::MAX));
    assert!(graph.is_edge(1));
}

#[test]
fn test_reference_graph_layout() {
    let graph = reference_graph().unwrap();

    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 2 * REFERENCE_EDGES.len());
    assert!(graph.is_symmetric());
    for &(from, to, weight) in &REFERENCE_EDGES {
        assert_eq!(graph.get_weight(from, to).unwrap(), weight);
        assert_eq!(graph.get_weight(to, from).unwrap(), weight);
    }
    assert!(!graph.has_edge(0, 5));
}
