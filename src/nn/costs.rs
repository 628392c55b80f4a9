/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 代价函数的自由函数形式，与`VarLossOps`等价
 *
 * 适合把代价函数当作参数传递的场景，例如：
 * ```ignore
 * fn check(cost: fn(&Var, &Var) -> Result<Var, GraphError>) { ... }
 * check(costs::cross_entropy_binary);
 * ```
 */

use super::{GraphError, Var, VarLossOps};

/// 代价函数签名：(预测输出 y, 目标 t) -> 代价节点
pub type CostFn = fn(&Var, &Var) -> Result<Var, GraphError>;

pub fn cross_entropy_binary(output: &Var, target: &Var) -> Result<Var, GraphError> {
    output.cross_entropy_binary(target)
}

pub fn cross_entropy_multi(output: &Var, target: &Var) -> Result<Var, GraphError> {
    output.cross_entropy_multi(target)
}

pub fn sum_squared(output: &Var, target: &Var) -> Result<Var, GraphError> {
    output.sum_squared(target)
}

pub fn mean_squared(output: &Var, target: &Var) -> Result<Var, GraphError> {
    output.mean_squared(target)
}
