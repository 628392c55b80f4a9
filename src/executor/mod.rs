/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 执行器：把符号计算图编译为可调用的数值函数
 *
 * ```
 * use only_graph::executor::ExecutorFactory;
 * use only_graph::nn::{Axis, Graph, VarLossOps};
 * use only_graph::tensor::Tensor;
 *
 * let graph = Graph::new();
 * let n = Axis::new("N", 2).unwrap();
 * let y = graph.placeholder_with_axis(&n, Some("y")).unwrap();
 * let t = graph.placeholder_with_axis(&n, Some("t")).unwrap();
 * let cost = y.sum_squared(&t).unwrap();
 *
 * let mut factory = ExecutorFactory::new();
 * let mut executor = factory.executor(&[&cost], &[&y, &t]).unwrap();
 * let result = executor
 *     .call_one(&[Tensor::from_vec(vec![1.0, 2.0]), Tensor::from_vec(vec![0.0, 0.0])])
 *     .unwrap();
 * assert_eq!(result.number(), Some(2.5));
 * ```
 */

mod computation;
mod config;
mod factory;

pub use computation::Executor;
pub use config::ExecutorConfig;
pub use factory::ExecutorFactory;

#[cfg(test)]
mod tests;
