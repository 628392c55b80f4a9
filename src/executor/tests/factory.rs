/*
 * @Author       : 老董
 * @Description  : ExecutorFactory 编译期校验测试
 */

use crate::assert_err;
use crate::executor::{ExecutorConfig, ExecutorFactory};
use crate::nn::{Axis, Graph, GraphError, VarLossOps, VarMathOps};

fn n() -> Axis {
    Axis::new("N", 4).unwrap()
}

#[test]
fn test_executor_requires_outputs() {
    let graph = Graph::new();
    let y = graph.placeholder_with_axis(&n(), Some("y")).unwrap();

    let mut factory = ExecutorFactory::new();
    assert_err!(
        factory.executor(&[], &[&y]),
        GraphError::InvalidOperation(msg) if msg.contains("至少需要一个输出")
    );
    assert_eq!(factory.executors_created(), 0);
}

#[test]
fn test_executor_param_must_be_placeholder() {
    let graph = Graph::new();
    let y = graph.placeholder_with_axis(&n(), Some("y")).unwrap();
    let sq = y.square();

    let mut factory = ExecutorFactory::new();
    assert_err!(
        factory.executor(&[&sq], &[&y, &sq]),
        GraphError::NotAPlaceholder(name) if name == "square_1"
    );
}

#[test]
fn test_executor_duplicate_param() {
    let graph = Graph::new();
    let y = graph.placeholder_with_axis(&n(), Some("y")).unwrap();

    let mut factory = ExecutorFactory::new();
    assert_err!(
        factory.executor(&[&y.square()], &[&y, &y]),
        GraphError::InvalidOperation(msg) if msg.contains("重复")
    );
}

#[test]
fn test_executor_unbound_placeholder() {
    let graph = Graph::new();
    let y = graph.placeholder_with_axis(&n(), Some("y")).unwrap();
    let t = graph.placeholder_with_axis(&n(), Some("t")).unwrap();
    let cost = y.sum_squared(&t).unwrap();

    let mut factory = ExecutorFactory::new();
    assert_err!(factory.executor(&[&cost], &[&y]), GraphError::UnboundPlaceholder("t"));
}

#[test]
fn test_executor_vars_from_different_graphs() {
    let graph = Graph::new();
    let y = graph.placeholder_with_axis(&n(), Some("y")).unwrap();
    let foreign = Graph::new().placeholder_with_axis(&n(), Some("y")).unwrap();

    let mut factory = ExecutorFactory::new();
    assert_err!(
        factory.executor(&[&y.square()], &[&foreign]),
        GraphError::InvalidOperation(_)
    );
    assert_err!(
        factory.executor(&[&y, &foreign], &[&y, &foreign]),
        GraphError::InvalidOperation(_)
    );
}

#[test]
fn test_executor_unused_param_is_allowed() {
    let graph = Graph::new();
    let y = graph.placeholder_with_axis(&n(), Some("y")).unwrap();
    let t = graph.placeholder_with_axis(&n(), Some("t")).unwrap();

    let mut factory = ExecutorFactory::new();
    let executor = factory.executor(&[&y.square()], &[&y, &t]).unwrap();
    // y、square
    assert_eq!(executor.node_count(), 2);
}

#[test]
fn test_executor_naming() {
    let graph = Graph::new();
    let y = graph.placeholder_with_axis(&n(), Some("y")).unwrap();
    let config = ExecutorConfig {
        name: "costs".to_string(),
        ..Default::default()
    };

    let mut factory = ExecutorFactory::with_config(config);
    let first = factory.executor(&[&y], &[&y]).unwrap();
    let second = factory.executor(&[&y], &[&y]).unwrap();
    assert_eq!(first.name(), "costs_1");
    assert_eq!(second.name(), "costs_2");
    assert_eq!(factory.executors_created(), 2);
    assert_eq!(factory.config().name, "costs");

    let mut default_factory = ExecutorFactory::new();
    assert_eq!(default_factory.executor(&[&y], &[&y]).unwrap().name(), "executor_1");
}
