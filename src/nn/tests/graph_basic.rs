/*
 * @Author       : 老董
 * @Description  : GraphInner 基础功能测试（节点编号、命名、父子关系、拓扑序）
 */

use super::{axes, axis};
use crate::assert_err;
use crate::nn::{GraphError, GraphInner, NodeId};

#[test]
fn test_new_graph() {
    let graph = GraphInner::new();
    assert_eq!(graph.name(), "default_graph");
    assert_eq!(graph.nodes_count(), 0);

    let graph = GraphInner::with_name("costs");
    assert_eq!(graph.name(), "costs");
}

#[test]
fn test_node_id_starts_from_one() {
    let mut graph = GraphInner::new();
    let y = graph.new_placeholder_node_with_axis(&axis("N", 4), Some("y")).unwrap();
    let t = graph.new_placeholder_node_with_axis(&axis("N", 4), Some("t")).unwrap();
    assert_eq!(y, NodeId(1));
    assert_eq!(t, NodeId(2));
    assert_eq!(graph.nodes(), vec![NodeId(1), NodeId(2)]);
}

#[test]
fn test_auto_node_name() {
    let mut graph = GraphInner::new();
    let n = axis("N", 4);
    let y = graph.new_placeholder_node_with_axis(&n, None).unwrap();
    let t = graph.new_placeholder_node_with_axis(&n, None).unwrap();
    let diff = graph.new_subtract_node(y, t, None).unwrap();
    let one = graph.new_constant_node(1.0, None).unwrap();

    assert_eq!(graph.get_node_name(y).unwrap(), "placeholder_1");
    assert_eq!(graph.get_node_name(t).unwrap(), "placeholder_2");
    assert_eq!(graph.get_node_name(diff).unwrap(), "subtract_1");
    assert_eq!(graph.get_node_name(one).unwrap(), "constant_1");
}

#[test]
fn test_duplicate_node_name() {
    let mut graph = GraphInner::new();
    let n = axis("N", 4);
    graph.new_placeholder_node_with_axis(&n, Some("y")).unwrap();
    let result = graph.new_placeholder_node_with_axis(&n, Some("y"));
    assert_err!(result, GraphError::DuplicateNodeName("y"));
    // 失败的创建不会留下节点
    assert_eq!(graph.nodes_count(), 1);
}

#[test]
fn test_node_not_found() {
    let mut graph = GraphInner::new();
    let y = graph.new_placeholder_node_with_axis(&axis("N", 4), None).unwrap();

    assert_err!(graph.get_node_name(NodeId(99)), GraphError::NodeNotFound(NodeId(99)));
    assert_err!(
        graph.new_add_node(y, NodeId(42), None),
        GraphError::NodeNotFound(id) if *id == NodeId(42)
    );
}

#[test]
fn test_parents_and_children() {
    let mut graph = GraphInner::new();
    let n = axis("N", 4);
    let y = graph.new_placeholder_node_with_axis(&n, Some("y")).unwrap();
    let t = graph.new_placeholder_node_with_axis(&n, Some("t")).unwrap();
    let diff = graph.new_subtract_node(y, t, Some("diff")).unwrap();
    let sq = graph.new_square_node(diff, Some("sq")).unwrap();
    let total = graph.new_sum_node(diff, None, Some("total")).unwrap();

    assert_eq!(graph.get_node_parents(diff).unwrap(), vec![y, t]);
    assert_eq!(graph.get_node_parents(y).unwrap(), vec![]);
    assert_eq!(graph.get_node_children(y).unwrap(), vec![diff]);
    assert_eq!(graph.get_node_children(diff).unwrap(), vec![sq, total]);
    assert_eq!(graph.get_node_children(sq).unwrap(), vec![]);
}

#[test]
fn test_node_axes_and_placeholder_flag() {
    let mut graph = GraphInner::new();
    let cn = axes(&[("C", 3), ("N", 4)]);
    let x = graph.new_placeholder_node(&cn, Some("x")).unwrap();
    let one = graph.new_constant_node(1.0, None).unwrap();

    assert_eq!(graph.get_node_axes(x).unwrap(), &cn);
    assert!(graph.get_node_axes(one).unwrap().is_empty());
    assert!(graph.is_placeholder(x).unwrap());
    assert!(!graph.is_placeholder(one).unwrap());
}

#[test]
fn test_topological_order() {
    let mut graph = GraphInner::new();
    let n = axis("N", 4);
    let y = graph.new_placeholder_node_with_axis(&n, Some("y")).unwrap();
    let t = graph.new_placeholder_node_with_axis(&n, Some("t")).unwrap();
    let unused = graph.new_placeholder_node_with_axis(&n, Some("unused")).unwrap();
    let diff = graph.new_subtract_node(y, t, None).unwrap();
    let dot = graph.new_dot_node(diff, diff, None).unwrap();
    let two = graph.new_constant_node(2.0, None).unwrap();
    let half = graph.new_divide_node(dot, two, None).unwrap();

    let order = graph.topological_order(&[half]).unwrap();
    assert_eq!(order, vec![y, t, diff, dot, two, half]);
    assert!(!order.contains(&unused));

    // 每个节点都排在其所有父节点之后
    for (i, &id) in order.iter().enumerate() {
        for parent in graph.get_node_parents(id).unwrap() {
            let j = order.iter().position(|&o| o == parent).unwrap();
            assert!(j < i);
        }
    }
}

#[test]
fn test_topological_order_shared_nodes() {
    let mut graph = GraphInner::new();
    let n = axis("N", 4);
    let y = graph.new_placeholder_node_with_axis(&n, None).unwrap();
    let sq = graph.new_square_node(y, None).unwrap();
    let sum = graph.new_sum_node(sq, None, None).unwrap();
    let mean = graph.new_mean_node(sq, None, None).unwrap();

    // 多个输出共享的节点只出现一次
    let order = graph.topological_order(&[sum, mean]).unwrap();
    assert_eq!(order, vec![y, sq, sum, mean]);
    assert_err!(graph.topological_order(&[NodeId(100)]), GraphError::NodeNotFound(_));
}

#[test]
fn test_summary() {
    let mut graph = GraphInner::with_name("costs");
    let n = axis("N", 4);
    let y = graph.new_placeholder_node_with_axis(&n, Some("y")).unwrap();
    let t = graph.new_placeholder_node_with_axis(&n, Some("t")).unwrap();
    graph.new_subtract_node(y, t, Some("diff")).unwrap();

    let summary = graph.summary();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "图 `costs`（3 个节点）");
    assert!(lines[1].starts_with("y"));
    assert!(lines[1].contains("placeholder"));
    assert!(lines[1].contains("(N:4)"));
    assert!(lines[3].contains("subtract"));
    assert!(lines[3].ends_with("y, t"));
}
