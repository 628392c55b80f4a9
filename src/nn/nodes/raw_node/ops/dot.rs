use super::parent_value;
use crate::nn::descriptor::NodeTypeDescriptor;
use crate::nn::nodes::raw_node::TraitNode;
use crate::nn::{Axes, GraphError};
use crate::tensor::Tensor;

/// 点积节点：沿两个操作数共有的轴做乘积求和（张量缩并）。
///
/// 输出轴为`lhs`独有的轴接上`rhs`独有的轴；两个向量共享同一个轴时结果为标量，
/// 即`dot(y - t, y - t) = Σ(y - t)^2`。
pub(in crate::nn) struct Dot {
    lhs_axes: Axes,
    rhs_axes: Axes,
    /// 两个操作数对齐后所在的联合轴
    joint_axes: Axes,
    /// 共有轴在联合轴中的下标
    contract_indices: Vec<usize>,
    axes: Axes,
}

impl Dot {
    pub(in crate::nn) fn new(lhs_axes: &Axes, rhs_axes: &Axes) -> Result<Self, GraphError> {
        let joint_axes = lhs_axes.union(rhs_axes)?;
        let shared = lhs_axes.intersection(rhs_axes);
        let contract_indices = Tensor::reduction_indices(&joint_axes, &joint_axes.difference(&shared));
        let axes = lhs_axes.difference(&shared).union(&rhs_axes.difference(&shared))?;
        Ok(Self {
            lhs_axes: lhs_axes.clone(),
            rhs_axes: rhs_axes.clone(),
            joint_axes,
            contract_indices,
            axes,
        })
    }
}

impl TraitNode for Dot {
    fn type_name(&self) -> &'static str {
        "dot"
    }

    fn axes(&self) -> &Axes {
        &self.axes
    }

    fn calc_value_by_parents(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        let lhs = parent_value(parents, 0, self.type_name())?;
        let rhs = parent_value(parents, 1, self.type_name())?;
        let lhs = lhs.align_to(&self.lhs_axes, &self.joint_axes)?;
        let rhs = rhs.align_to(&self.rhs_axes, &self.joint_axes)?;
        Ok(lhs.try_mul(&rhs)?.sum_axes(&self.contract_indices)?)
    }

    fn descriptor(&self) -> NodeTypeDescriptor {
        NodeTypeDescriptor::Dot
    }
}
