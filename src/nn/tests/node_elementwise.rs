/*
 * @Author       : 老董
 * @Description  : 元素级节点测试：二元运算的按名广播、一元运算、安全对数
 */

use super::{axes, axis, evaluate};
use crate::assert_err;
use crate::nn::{Graph, GraphError, GraphInner, VarMathOps};
use crate::tensor::Tensor;
use approx::assert_abs_diff_eq;

#[test]
fn test_binary_axes_are_union() {
    let mut graph = GraphInner::new();
    let x = graph
        .new_placeholder_node(&axes(&[("C", 2), ("N", 3)]), None)
        .unwrap();
    let b = graph
        .new_placeholder_node(&axes(&[("N", 3), ("H", 4)]), None)
        .unwrap();
    let add = graph.new_add_node(x, b, Some("add")).unwrap();

    assert_eq!(
        graph.get_node_axes(add).unwrap(),
        &axes(&[("C", 2), ("N", 3), ("H", 4)])
    );
}

#[test]
fn test_binary_length_mismatch() {
    let mut graph = GraphInner::new();
    let x = graph.new_placeholder_node_with_axis(&axis("N", 3), None).unwrap();
    let y = graph.new_placeholder_node_with_axis(&axis("N", 4), None).unwrap();

    assert_err!(
        graph.new_multiply_node(x, y, None),
        GraphError::AxesMismatch { message, .. } if message.contains("`N`")
    );
    assert_eq!(graph.nodes_count(), 2);
}

#[test]
fn test_add_broadcast_by_axis_name() {
    let graph = Graph::new();
    let x = graph.placeholder(&axes(&[("C", 2), ("N", 3)]), Some("x")).unwrap();
    let b = graph.placeholder_with_axis(&axis("C", 2), Some("b")).unwrap();

    let value = evaluate(
        &(&x + &b),
        &[&x, &b],
        &[
            Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]),
            Tensor::from_vec(vec![10., 20.]),
        ],
    );
    assert_eq!(value, Tensor::new(&[11., 12., 13., 24., 25., 26.], &[2, 3]));
}

#[test]
fn test_subtract_transposed_operands() {
    let graph = Graph::new();
    let x = graph.placeholder(&axes(&[("C", 2), ("N", 3)]), Some("x")).unwrap();
    let y = graph.placeholder(&axes(&[("N", 3), ("C", 2)]), Some("y")).unwrap();

    // 输出按左操作数的轴顺序排列
    let diff = &x - &y;
    assert_eq!(diff.axes(), axes(&[("C", 2), ("N", 3)]));
    let value = evaluate(
        &diff,
        &[&x, &y],
        &[
            Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]),
            Tensor::new(&[1., 4., 2., 5., 3., 6.], &[3, 2]),
        ],
    );
    assert_eq!(value, Tensor::zeros(&[2, 3]));
}

#[test]
fn test_outer_broadcast() {
    let graph = Graph::new();
    let c = graph.placeholder_with_axis(&axis("C", 2), None).unwrap();
    let n = graph.placeholder_with_axis(&axis("N", 3), None).unwrap();

    let product = &c * &n;
    assert_eq!(product.axes(), axes(&[("C", 2), ("N", 3)]));
    let value = evaluate(
        &product,
        &[&c, &n],
        &[Tensor::from_vec(vec![1., 2.]), Tensor::from_vec(vec![1., 10., 100.])],
    );
    assert_eq!(value, Tensor::new(&[1., 10., 100., 2., 20., 200.], &[2, 3]));
}

#[test]
fn test_divide_by_zero_follows_ieee() {
    let graph = Graph::new();
    let x = graph.placeholder_with_axis(&axis("N", 2), None).unwrap();
    let zero = graph.constant(0.0).unwrap();

    let value = evaluate(&(&x / &zero), &[&x], &[Tensor::from_vec(vec![1., -1.])]);
    assert_eq!(value.to_vec(), vec![f64::INFINITY, f64::NEG_INFINITY]);
}

#[test]
fn test_unary_ops() {
    let graph = Graph::new();
    let x = graph.placeholder_with_axis(&axis("N", 3), Some("x")).unwrap();
    let input = [Tensor::from_vec(vec![1.0, 2.0, 0.5])];

    assert_eq!(
        evaluate(&x.square(), &[&x], &input),
        Tensor::from_vec(vec![1.0, 4.0, 0.25])
    );
    assert_eq!(
        evaluate(&-&x, &[&x], &input),
        Tensor::from_vec(vec![-1.0, -2.0, -0.5])
    );

    let log = evaluate(&x.log(), &[&x], &input);
    let exp = evaluate(&x.exp(), &[&x], &input);
    for (i, v) in [1.0_f64, 2.0, 0.5].iter().enumerate() {
        assert_abs_diff_eq!(log.to_vec()[i], v.ln(), epsilon = 1e-12);
        assert_abs_diff_eq!(exp.to_vec()[i], v.exp(), epsilon = 1e-12);
    }

    // 一元运算不改变轴
    assert_eq!(x.log().axes(), x.axes());
}

#[test]
fn test_log_of_zero_is_negative_infinity() {
    let graph = Graph::new();
    let x = graph.placeholder_with_axis(&axis("N", 2), None).unwrap();

    let value = evaluate(&x.log(), &[&x], &[Tensor::from_vec(vec![0.0, 1.0])]);
    assert_eq!(value.to_vec(), vec![f64::NEG_INFINITY, 0.0]);
}

#[test]
fn test_safelog_clamps_at_limit() {
    let graph = Graph::new();
    let x = graph.placeholder_with_axis(&axis("N", 4), None).unwrap();
    let input = [Tensor::from_vec(vec![0.0, 1e-20, 0.5, 1.0])];

    let value = evaluate(&x.safelog(-50.0), &[&x], &input).to_vec();
    assert_abs_diff_eq!(value[0], -50.0, epsilon = 1e-12);
    assert_abs_diff_eq!(value[1], 1e-20_f64.ln(), epsilon = 1e-12);
    assert_abs_diff_eq!(value[2], 0.5_f64.ln(), epsilon = 1e-12);
    assert_abs_diff_eq!(value[3], 0.0, epsilon = 1e-12);

    // 更高的下限会截断更多的值
    let value = evaluate(&x.safelog(-10.0), &[&x], &input).to_vec();
    assert_abs_diff_eq!(value[1], -10.0, epsilon = 1e-12);
}
