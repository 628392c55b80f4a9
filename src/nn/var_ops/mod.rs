/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : Var 扩展 trait 模块
 *
 * 按功能领域组织 Var 的扩展方法，用户按需 import。
 *
 * # 模块结构
 * - `math`: 元素级数学函数（square, log, exp, safelog）
 * - `reduce`: 归约与缩并（sum, mean, dot）
 * - `loss`: 代价函数（交叉熵、平方误差）
 *
 * # 使用示例
 * ```ignore
 * use only_graph::nn::{VarLossOps, VarMathOps, VarReduceOps};
 *
 * let cost = y.cross_entropy_binary(&t)?;
 * let sse = (&y - &t).dot(&(&y - &t))? / 2.0;
 * let mse = (&y - &t).square().mean(None)? / 2.0;
 * ```
 */

mod loss;
mod math;
mod reduce;

pub use loss::{CrossEntropyOptions, VarLossOps};
pub use math::VarMathOps;
pub use reduce::VarReduceOps;
