mod cross_entropy_binary;
mod cross_entropy_multi;

pub(in crate::nn) use cross_entropy_binary::CrossEntropyBinary;
pub(in crate::nn) use cross_entropy_multi::CrossEntropyMulti;

use super::{ReductionPlan, parent_value};
use crate::nn::{Axes, GraphError};
use crate::tensor::Tensor;

/// 交叉熵的公共部分：校验输出与目标的轴、对齐目标、归约并按需换算为比特
pub(in crate::nn) struct CrossEntropyCore {
    output_axes: Axes,
    target_axes: Axes,
    plan: ReductionPlan,
    limit: f64,
    usebits: bool,
}

impl CrossEntropyCore {
    pub(in crate::nn) fn new(
        output_axes: &Axes,
        target_axes: &Axes,
        out_axes: Option<&Axes>,
        limit: f64,
        usebits: bool,
    ) -> Result<Self, GraphError> {
        if !output_axes.same_set(target_axes) {
            return Err(GraphError::AxesMismatch {
                left: output_axes.clone(),
                right: target_axes.clone(),
                message: "交叉熵的输出（y）与目标（t）必须具有相同的轴".to_string(),
            });
        }
        output_axes.check_lengths_agree(target_axes)?;
        Ok(Self {
            output_axes: output_axes.clone(),
            target_axes: target_axes.clone(),
            plan: ReductionPlan::new(output_axes, out_axes)?,
            limit,
            usebits,
        })
    }

    pub(in crate::nn) const fn axes(&self) -> &Axes {
        self.plan.out_axes()
    }

    pub(in crate::nn) const fn limit(&self) -> f64 {
        self.limit
    }

    pub(in crate::nn) const fn usebits(&self) -> bool {
        self.usebits
    }

    pub(in crate::nn) fn out_axis_names(&self) -> Vec<String> {
        self.plan.out_axis_names()
    }

    /// 取出`(y, t)`，目标按输出的轴顺序对齐
    pub(in crate::nn) fn operands(
        &self,
        parents: &[&Tensor],
        node_type: &str,
    ) -> Result<(Tensor, Tensor), GraphError> {
        let output = parent_value(parents, 0, node_type)?;
        let target = parent_value(parents, 1, node_type)?;
        let target = target.align_to(&self.target_axes, &self.output_axes)?;
        Ok((output.clone(), target))
    }

    /// 对逐元素的交叉熵项归约，`usebits`时乘以`log2(e)`换算为比特
    pub(in crate::nn) fn reduce(&self, elementwise: &Tensor) -> Result<Tensor, GraphError> {
        let summed = self.plan.sum(elementwise)?;
        Ok(if self.usebits {
            &summed * std::f64::consts::LOG2_E
        } else {
            summed
        })
    }
}
