use gridgraph::{Graph, GraphError};

fn build_graph(values: &[i32], edges: &[(usize, usize, i32)]) -> Graph {
    let mut graph = Graph::new();
    for &value in values {
        graph.add_vertex(value);
    }
    for &(origin, destination, weight) in edges {
        graph.add_edge(origin, destination, weight).unwrap();
    }
    graph
}

#[test]
fn test_add_vertex_returns_dense_indices() {
    let mut graph = Graph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.add_vertex(10), 0);
    assert_eq!(graph.add_vertex(20), 1);
    assert_eq!(graph.add_vertex(30), 2);
    assert_eq!(graph.vertex_count(), 3);
}

#[test]
fn test_indices_stay_dense_after_removals() {
    let mut graph = build_graph(&[10, 20, 30, 40], &[]);
    graph.remove_vertex(20).unwrap();
    graph.remove_vertex(40).unwrap();
    assert_eq!(graph.vertex_count(), 2);
    for index in 0..graph.vertex_count() {
        graph.value(index).unwrap();
    }
    assert!(graph.value(graph.vertex_count()).is_err());
    assert_eq!(graph.value(0).unwrap(), 10);
    assert_eq!(graph.value(1).unwrap(), 30);
}

#[test]
fn test_remove_vertex_shifts_later_indices() {
    let mut graph = build_graph(&[10, 20, 30], &[]);
    let index = graph.remove_vertex(10).unwrap();
    assert_eq!(index, 0);
    assert_eq!(graph.value(0).unwrap(), 20);
    assert_eq!(graph.value(1).unwrap(), 30);
}

#[test]
fn test_remove_vertex_first_match_wins_on_duplicates() {
    let mut graph = build_graph(&[7, 7, 9], &[]);
    assert_eq!(graph.remove_vertex(7).unwrap(), 0);
    assert_eq!(graph.value(0).unwrap(), 7);
    assert_eq!(graph.value(1).unwrap(), 9);
}

#[test]
fn test_remove_vertex_missing_value() {
    let mut graph = build_graph(&[1, 2], &[]);
    assert!(matches!(
        graph.remove_vertex(99),
        Err(GraphError::NotFound(_))
    ));
}

#[test]
fn test_add_edge_is_directed() {
    let graph = build_graph(&[10, 20], &[(0, 1, 5)]);
    assert_eq!(graph.edges(0).unwrap().len(), 1);
    assert!(graph.edges(1).unwrap().is_empty());
}

#[test]
fn test_add_edge_allows_duplicates() {
    let graph = build_graph(&[10, 20], &[(0, 1, 5), (0, 1, 5), (0, 1, 9)]);
    assert_eq!(graph.edges(0).unwrap().len(), 3);
}

#[test]
fn test_add_edge_bounds_checked() {
    let mut graph = build_graph(&[10, 20], &[]);
    assert!(matches!(
        graph.add_edge(0, 2, 1),
        Err(GraphError::OutOfRange(_))
    ));
    assert!(matches!(
        graph.add_edge(2, 0, 1),
        Err(GraphError::OutOfRange(_))
    ));
}

#[test]
fn test_remove_edge_unlinks_first_match() {
    let mut graph = build_graph(&[10, 20, 30], &[(0, 1, 5), (0, 2, 6), (0, 1, 7)]);
    graph.remove_edge(0, 1).unwrap();
    let remaining: Vec<(usize, i32)> = graph
        .edges(0)
        .unwrap()
        .iter()
        .map(|edge| (edge.destination, edge.weight))
        .collect();
    assert_eq!(remaining, vec![(2, 6), (1, 7)]);
}

#[test]
fn test_remove_edge_missing() {
    let mut graph = build_graph(&[10, 20], &[(0, 1, 5)]);
    assert!(matches!(
        graph.remove_edge(1, 0),
        Err(GraphError::NotFound(_))
    ));
    assert!(matches!(
        graph.remove_edge(5, 0),
        Err(GraphError::OutOfRange(_))
    ));
}

#[test]
fn test_dump_renders_values_and_edges() {
    let graph = build_graph(&[10, 20], &[(0, 1, 5)]);
    let expected = "Vertex 0: 10\n   Edge: 10 + 20 = 5\nVertex 1: 20\n";
    assert_eq!(graph.dump(), expected);
    assert_eq!(graph.to_string(), expected);
}

#[test]
fn test_dump_empty_graph() {
    let graph = Graph::new();
    assert_eq!(graph.dump(), "");
}

#[test]
fn test_dump_skips_stale_edges() {
    let mut graph = build_graph(&[10, 20, 30], &[(0, 2, 5)]);
    graph.remove_vertex(30).unwrap();
    // edge 0 -> 2 now points past the end of the store
    assert_eq!(graph.dump(), "Vertex 0: 10\nVertex 1: 20\n");
}
