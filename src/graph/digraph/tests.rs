use super::*;

fn edges_of(graph: &DiGraph<u32, i32>, src: u32) -> Vec<(u32, i32)> {
    graph.sorted_edges(&src).unwrap()
}

fn listing(graph: &DiGraph<u32, i32>, src: u32) -> String {
    let mut out = Vec::new();
    graph.write_edges(&src, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_add_node_rejects_duplicates() {
    let mut graph: DiGraph<u32, i32> = DiGraph::new();
    assert!(graph.add_node(1));
    assert!(!graph.add_node(1));
    assert_eq!(graph.node_count(), 1);
    assert!(graph.is_node(&1));
    assert!(!graph.is_node(&2));
}

#[test]
fn test_add_edge_rejects_duplicates() {
    let mut graph: DiGraph<u32, i32> = [1, 2].into_iter().collect();
    assert!(graph.add_edge(&1, &2, 5).unwrap());
    assert!(!graph.add_edge(&1, &2, 5).unwrap());
    assert!(graph.add_edge(&1, &2, 6).unwrap());
    assert!(graph.add_edge(&2, &2, 5).unwrap());
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_add_edge_missing_endpoint() {
    let mut graph: DiGraph<u32, i32> = [1].into_iter().collect();
    assert!(matches!(graph.add_edge(&9, &1, 0), Err(GraphError::NodeNotFound)));
    assert!(matches!(graph.add_edge(&1, &9, 0), Err(GraphError::NodeNotFound)));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_replace_keeps_edges_in_both_directions() {
    let mut graph: DiGraph<u32, i32> = [1, 2, 3].into_iter().collect();
    graph.add_edge(&1, &2, 4).unwrap();
    graph.add_edge(&2, &3, 8).unwrap();

    assert!(graph.replace(&2, 20).unwrap());
    assert!(!graph.is_node(&2));
    assert_eq!(edges_of(&graph, 1), vec![(20, 4)]);
    assert_eq!(edges_of(&graph, 20), vec![(3, 8)]);
    assert!(graph.is_connected(&1, &20).unwrap());
}

#[test]
fn test_replace_onto_existing_value_is_rejected() {
    let mut graph: DiGraph<u32, i32> = [1, 2].into_iter().collect();
    assert!(!graph.replace(&1, 2).unwrap());
    assert!(!graph.replace(&1, 1).unwrap());
    assert!(graph.is_node(&1));
    assert!(graph.replace(&7, 8).unwrap_err().is_node_not_found());
}

#[test]
fn test_delete_node_sweeps_incoming_edges() {
    let mut graph: DiGraph<u32, i32> = [1, 2, 3].into_iter().collect();
    graph.add_edge(&1, &2, 5).unwrap();
    graph.add_edge(&2, &3, 7).unwrap();
    graph.add_edge(&1, &3, 7).unwrap();

    graph.delete_node(&2);

    assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(edges_of(&graph, 1), vec![(3, 7)]);
    assert!(edges_of(&graph, 3).is_empty());
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_delete_node_absent_is_noop() {
    let mut graph: DiGraph<u32, i32> = [1].into_iter().collect();
    graph.delete_node(&5);
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_deleted_value_can_be_re_added_without_old_edges() {
    let mut graph: DiGraph<u32, i32> = [1, 2].into_iter().collect();
    graph.add_edge(&1, &2, 1).unwrap();
    graph.delete_node(&2);
    assert!(graph.add_node(2));
    assert!(!graph.is_connected(&1, &2).unwrap());
}

#[test]
fn test_merge_replace_redirects_edges() {
    let mut graph: DiGraph<u32, i32> = [1, 2, 3].into_iter().collect();
    graph.add_edge(&1, &2, 5).unwrap();
    graph.add_edge(&3, &2, 9).unwrap();
    graph.add_edge(&2, &3, 1).unwrap();

    graph.merge_replace(&2, &1).unwrap();

    assert!(!graph.is_node(&2));
    assert_eq!(graph.node_count(), 2);
    assert_eq!(edges_of(&graph, 1), vec![(3, 1), (1, 5)]);
    assert_eq!(edges_of(&graph, 3), vec![(1, 9)]);
}

#[test]
fn test_merge_replace_collapses_duplicates() {
    let mut graph: DiGraph<u32, i32> = [1, 2, 3, 4].into_iter().collect();
    graph.add_edge(&1, &4, 2).unwrap();
    graph.add_edge(&2, &4, 2).unwrap();
    graph.add_edge(&2, &4, 3).unwrap();
    graph.add_edge(&3, &1, 6).unwrap();
    graph.add_edge(&3, &2, 6).unwrap();

    graph.merge_replace(&2, &1).unwrap();

    assert_eq!(edges_of(&graph, 1), vec![(4, 2), (4, 3)]);
    assert_eq!(edges_of(&graph, 3), vec![(1, 6)]);
}

#[test]
fn test_merge_replace_moves_self_loop() {
    let mut graph: DiGraph<u32, i32> = [1, 2].into_iter().collect();
    graph.add_edge(&2, &2, 4).unwrap();

    graph.merge_replace(&2, &1).unwrap();

    assert_eq!(edges_of(&graph, 1), vec![(1, 4)]);
}

#[test]
fn test_merge_replace_requires_both_nodes() {
    let mut graph: DiGraph<u32, i32> = [1].into_iter().collect();
    assert!(graph.merge_replace(&1, &2).unwrap_err().is_node_not_found());
    assert!(graph.merge_replace(&2, &1).unwrap_err().is_node_not_found());
    assert!(graph.is_node(&1));
}

#[test]
fn test_merge_into_self_is_noop() {
    let mut graph: DiGraph<u32, i32> = [1, 2].into_iter().collect();
    graph.add_edge(&1, &2, 3).unwrap();
    graph.merge_replace(&1, &1).unwrap();
    assert!(graph.is_node(&1));
    assert_eq!(edges_of(&graph, 1), vec![(2, 3)]);
}

#[test]
fn test_delete_edge() {
    let mut graph: DiGraph<u32, i32> = [1, 2].into_iter().collect();
    graph.add_edge(&1, &2, 1).unwrap();
    graph.add_edge(&1, &2, 2).unwrap();

    graph.delete_edge(&1, &2, &1);
    graph.delete_edge(&1, &2, &1);
    graph.delete_edge(&1, &9, &2);
    graph.delete_edge(&9, &2, &2);

    assert_eq!(edges_of(&graph, 1), vec![(2, 2)]);
}

#[test]
fn test_is_connected_ignores_weight() {
    let mut graph: DiGraph<u32, i32> = [1, 2].into_iter().collect();
    graph.add_edge(&1, &2, 42).unwrap();
    assert!(graph.is_connected(&1, &2).unwrap());
    assert!(!graph.is_connected(&2, &1).unwrap());
    assert!(graph.is_connected(&1, &3).is_err());
}

#[test]
fn test_listings() {
    let mut graph: DiGraph<u32, i32> = [3, 1, 2].into_iter().collect();
    graph.add_edge(&3, &1, 2).unwrap();
    graph.add_edge(&3, &2, 1).unwrap();
    graph.add_edge(&2, &1, 1).unwrap();

    assert_eq!(graph.sorted_nodes(), vec![1, 2, 3]);
    assert_eq!(listing(&graph, 3), "2 1\n1 2\n");
    assert_eq!(listing(&graph, 1), "(null)\n");

    let mut out = Vec::new();
    graph.write_nodes(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n3\n");
}

#[test]
fn test_clear_and_take() {
    let mut graph: DiGraph<u32, i32> = [1, 2].into_iter().collect();
    graph.add_edge(&1, &2, 1).unwrap();

    let moved = graph.take();
    assert!(graph.is_empty());
    assert_eq!(moved.edge_count(), 1);

    let mut moved = moved;
    moved.clear();
    assert!(moved.is_empty());
    assert!(moved.add_node(1));
}

#[test]
fn test_equality_ignores_insertion_order() {
    let mut a: DiGraph<u32, i32> = [1, 2].into_iter().collect();
    a.add_edge(&1, &2, 1).unwrap();
    a.add_edge(&1, &2, 2).unwrap();

    let mut b: DiGraph<u32, i32> = [2, 1].into_iter().collect();
    b.add_edge(&1, &2, 2).unwrap();
    b.add_edge(&1, &2, 1).unwrap();

    assert_eq!(a, b);
    b.delete_edge(&1, &2, &2);
    assert_ne!(a, b);
}

#[test]
fn test_debug_output() {
    let mut graph: DiGraph<&str, u8> = ["a", "b"].into_iter().collect();
    graph.add_edge(&"a", &"b", 1).unwrap();
    assert_eq!(format!("{graph:?}"), r#"{"a": [("b", 1)], "b": []}"#);
}
