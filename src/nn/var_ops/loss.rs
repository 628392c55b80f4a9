/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : Var 代价函数扩展 trait
 */

use super::{VarMathOps, VarReduceOps};
use crate::nn::{Axes, GraphError, Var};
use serde::{Deserialize, Serialize};

/// 交叉熵的可选参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossEntropyOptions {
    /// 结果保留的轴，None 表示全部归约为标量
    pub out_axes: Option<Axes>,
    /// 安全对数的下限指数：`log(max(x, exp(limit)))`
    pub limit: f64,
    /// 为 true 时结果以比特为单位（乘以`log2(e)`）
    pub usebits: bool,
}

impl CrossEntropyOptions {
    pub const DEFAULT_LIMIT: f64 = -50.0;
}

impl Default for CrossEntropyOptions {
    fn default() -> Self {
        Self {
            out_axes: None,
            limit: Self::DEFAULT_LIMIT,
            usebits: false,
        }
    }
}

/// 代价函数扩展 trait
///
/// `self`为预测输出 y，参数为目标 t：
/// - `cross_entropy_binary(t)`: `Σ -t*log(y) - (1-t)*log(1-y)`
/// - `cross_entropy_multi(t)`: `Σ -t*log(y)`
/// - `sum_squared(t)`: `dot(y-t, y-t) / 2`
/// - `mean_squared(t)`: `mean((y-t)^2) / 2`
///
/// 两个交叉熵均用安全对数（默认下限`exp(-50)`），y 取0或1时结果仍然有限。
///
/// # 使用示例
/// ```ignore
/// use only_graph::nn::VarLossOps;
///
/// let cost = y.cross_entropy_binary(&t)?;
/// let cost = y.mean_squared(&t)?;
/// ```
pub trait VarLossOps {
    fn cross_entropy_binary(&self, target: &Var) -> Result<Var, GraphError>;

    fn cross_entropy_binary_with(
        &self,
        target: &Var,
        options: &CrossEntropyOptions,
    ) -> Result<Var, GraphError>;

    fn cross_entropy_multi(&self, target: &Var) -> Result<Var, GraphError>;

    fn cross_entropy_multi_with(
        &self,
        target: &Var,
        options: &CrossEntropyOptions,
    ) -> Result<Var, GraphError>;

    /// 平方误差和的一半
    fn sum_squared(&self, target: &Var) -> Result<Var, GraphError>;

    /// 均方误差的一半
    fn mean_squared(&self, target: &Var) -> Result<Var, GraphError>;
}

impl VarLossOps for Var {
    fn cross_entropy_binary(&self, target: &Var) -> Result<Var, GraphError> {
        self.cross_entropy_binary_with(target, &CrossEntropyOptions::default())
    }

    fn cross_entropy_binary_with(
        &self,
        target: &Var,
        options: &CrossEntropyOptions,
    ) -> Result<Var, GraphError> {
        self.check_same_graph(target, "二分类交叉熵")?;
        let id = self.graph().borrow_mut().new_cross_entropy_binary_node(
            self.node_id(),
            target.node_id(),
            options.out_axes.as_ref(),
            options.limit,
            options.usebits,
            None,
        )?;
        Ok(self.wrap(id))
    }

    fn cross_entropy_multi(&self, target: &Var) -> Result<Var, GraphError> {
        self.cross_entropy_multi_with(target, &CrossEntropyOptions::default())
    }

    fn cross_entropy_multi_with(
        &self,
        target: &Var,
        options: &CrossEntropyOptions,
    ) -> Result<Var, GraphError> {
        self.check_same_graph(target, "多分类交叉熵")?;
        let id = self.graph().borrow_mut().new_cross_entropy_multi_node(
            self.node_id(),
            target.node_id(),
            options.out_axes.as_ref(),
            options.limit,
            options.usebits,
            None,
        )?;
        Ok(self.wrap(id))
    }

    fn sum_squared(&self, target: &Var) -> Result<Var, GraphError> {
        let diff = self.try_sub(target)?;
        let two = self.constant_like(2.0)?;
        diff.dot(&diff)?.try_div(&two)
    }

    fn mean_squared(&self, target: &Var) -> Result<Var, GraphError> {
        let two = self.constant_like(2.0)?;
        self.try_sub(target)?.square().mean(None)?.try_div(&two)
    }
}
