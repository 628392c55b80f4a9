/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 在同一个图上同时构建四种代价函数，一次编译、一次求值
 */

use approx::assert_relative_eq;
use only_graph::executor::ExecutorFactory;
use only_graph::nn::{Axis, Graph, NodeTypeDescriptor, VarLossOps};
use only_graph::tensor::Tensor;

#[test]
fn test_all_costs_in_one_executor() {
    let graph = Graph::with_name("costs");
    let n = Axis::new("N", 4).unwrap();
    let y = graph.placeholder_with_axis(&n, Some("y")).unwrap();
    let t = graph.placeholder_with_axis(&n, Some("t")).unwrap();

    let binary = y.cross_entropy_binary(&t).unwrap();
    let multi = y.cross_entropy_multi(&t).unwrap();
    let sse = y.sum_squared(&t).unwrap();
    let mse = y.mean_squared(&t).unwrap();

    let mut factory = ExecutorFactory::new();
    let mut executor = factory
        .executor(&[&binary, &multi, &sse, &mse], &[&y, &t])
        .unwrap();
    let y_val = Tensor::new_random(0.01, 0.99, &[4]);
    let t_val = Tensor::new_random(0.0, 1.0, &[4]);
    let results = executor.call(&[y_val.clone(), t_val.clone()]).unwrap();
    assert_eq!(results.len(), 4);

    let diff = &y_val - &t_val;
    let expected_sse = diff.square().sum_all().number().unwrap() / 2.0;
    assert_relative_eq!(results[2].number().unwrap(), expected_sse, max_relative = 1e-12);
    assert_relative_eq!(
        results[3].number().unwrap(),
        expected_sse / 4.0,
        max_relative = 1e-12
    );

    // 二分类交叉熵 = 多分类交叉熵 + Σ -(1-t)·log(1-y)
    let complement = (1.0 - &t_val) * (1.0 - &y_val).ln();
    let extra = -complement.sum_all().number().unwrap();
    assert_relative_eq!(
        results[0].number().unwrap(),
        results[1].number().unwrap() + extra,
        max_relative = 1e-12
    );

    // 所有结果都是标量且有限
    assert!(results.iter().all(|r| r.shape().is_empty() && r.is_finite()));
    assert_eq!(executor.calls(), 1);
    assert_eq!(factory.executors_created(), 1);
}

#[test]
fn test_cost_graph_describe() {
    let graph = Graph::with_name("costs");
    let n = Axis::new("N", 4).unwrap();
    let y = graph.placeholder_with_axis(&n, Some("y")).unwrap();
    let t = graph.placeholder_with_axis(&n, Some("t")).unwrap();
    y.cross_entropy_multi(&t).unwrap();
    y.sum_squared(&t).unwrap();

    let descriptor = graph.describe();
    let kinds: Vec<&NodeTypeDescriptor> = descriptor.nodes.iter().map(|n| &n.node_type).collect();
    // y, t, ce, (y - t), 2, dot, 除法
    assert_eq!(kinds.len(), 7);
    assert!(matches!(kinds[2], NodeTypeDescriptor::CrossEntropyMulti { .. }));
    assert!(matches!(kinds[3], NodeTypeDescriptor::Subtract));
    assert!(matches!(kinds[4], NodeTypeDescriptor::Constant { value } if *value == 2.0));
    assert!(matches!(kinds[5], NodeTypeDescriptor::Dot));
    assert!(matches!(kinds[6], NodeTypeDescriptor::Divide));

    let summary = graph.summary();
    assert!(summary.starts_with("图 `costs`（7 个节点）"));
    assert!(summary.contains("cross_entropy_multi"));
}
