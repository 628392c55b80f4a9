mod add;
mod divide;
mod dot;
mod exp;
mod log;
mod mean;
mod multiply;
mod negative;
mod safe_log;
mod square;
mod subtract;
mod sum;

pub(in crate::nn) use add::Add;
pub(in crate::nn) use divide::Divide;
pub(in crate::nn) use dot::Dot;
pub(in crate::nn) use exp::Exp;
pub(in crate::nn) use log::Log;
pub(in crate::nn) use mean::Mean;
pub(in crate::nn) use multiply::Multiply;
pub(in crate::nn) use negative::Negative;
pub(in crate::nn) use safe_log::SafeLog;
pub(in crate::nn) use square::Square;
pub(in crate::nn) use subtract::Subtract;
pub(in crate::nn) use sum::Sum;

use super::parent_value;
use crate::errors::TensorError;
use crate::nn::{Axes, GraphError};
use crate::tensor::Tensor;

/// 元素级二元运算的两个操作数的轴信息。
///
/// 两个操作数按轴名对齐：输出轴为`lhs ∪ rhs`（先`lhs`的顺序，再追加`rhs`独有的轴），
/// 各自缺失的轴通过广播补齐。
pub(in crate::nn) struct BinaryOperands {
    lhs_axes: Axes,
    rhs_axes: Axes,
    axes: Axes,
}

impl BinaryOperands {
    pub(in crate::nn) fn new(lhs_axes: &Axes, rhs_axes: &Axes) -> Result<Self, GraphError> {
        Ok(Self {
            axes: lhs_axes.union(rhs_axes)?,
            lhs_axes: lhs_axes.clone(),
            rhs_axes: rhs_axes.clone(),
        })
    }

    pub(in crate::nn) const fn axes(&self) -> &Axes {
        &self.axes
    }

    /// 对齐两个操作数后逐元素计算
    pub(in crate::nn) fn apply<F>(
        &self,
        parents: &[&Tensor],
        node_type: &str,
        op: F,
    ) -> Result<Tensor, GraphError>
    where
        F: Fn(&Tensor, &Tensor) -> Result<Tensor, TensorError>,
    {
        let lhs = parent_value(parents, 0, node_type)?;
        let rhs = parent_value(parents, 1, node_type)?;
        let lhs = lhs.align_to(&self.lhs_axes, &self.axes)?;
        let rhs = rhs.align_to(&self.rhs_axes, &self.axes)?;
        Ok(op(&lhs, &rhs)?)
    }
}
