mod constant;
mod loss;
mod ops;
mod placeholder;

pub(in crate::nn) use constant::Constant;
pub(in crate::nn) use loss::*;
pub(in crate::nn) use ops::*;
pub(in crate::nn) use placeholder::Placeholder;

use crate::nn::descriptor::NodeTypeDescriptor;
use crate::nn::{Axes, GraphError};
use crate::tensor::Tensor;
use enum_dispatch::enum_dispatch;

#[enum_dispatch]
pub(in crate::nn) enum NodeType {
    Placeholder(Placeholder),
    Constant(Constant),
    Add(Add),
    Subtract(Subtract),
    Multiply(Multiply),
    Divide(Divide),
    Negative(Negative),
    Square(Square),
    Log(Log),
    Exp(Exp),
    SafeLog(SafeLog),
    Sum(Sum),
    Mean(Mean),
    Dot(Dot),
    CrossEntropyBinary(CrossEntropyBinary),
    CrossEntropyMulti(CrossEntropyMulti),
}

#[enum_dispatch(NodeType)]
pub(in crate::nn) trait TraitNode {
    /// 节点类型名，用于自动命名和展示
    fn type_name(&self) -> &'static str;

    /// 本节点输出值的轴（建图时即确定）
    fn axes(&self) -> &Axes;

    /// 根据父节点的值计算本节点的值。
    /// 父节点的值由执行器按拓扑序预先算好并按父节点顺序传入
    fn calc_value_by_parents(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError>;

    fn descriptor(&self) -> NodeTypeDescriptor;
}

/// 归约（求和/求均值）的公共信息：哪些维被归约，剩下的轴按输入顺序排列后如何对齐到输出轴
#[derive(Clone, Debug)]
pub(in crate::nn) struct ReductionPlan {
    input_axes: Axes,
    reduce_indices: Vec<usize>,
    kept_axes: Axes,
    out_axes: Axes,
}

impl ReductionPlan {
    /// `out_axes`为None时归约所有轴（结果为标量）；
    /// 否则只保留`out_axes`，其必须是输入轴的子集
    pub(in crate::nn) fn new(input_axes: &Axes, out_axes: Option<&Axes>) -> Result<Self, GraphError> {
        let out_axes = out_axes.cloned().unwrap_or_else(Axes::scalar);
        if !out_axes.is_subset_of(input_axes) {
            return Err(GraphError::AxesMismatch {
                left: input_axes.clone(),
                right: out_axes,
                message: "保留的轴（out_axes）必须是输入轴的子集".to_string(),
            });
        }
        input_axes.check_lengths_agree(&out_axes)?;
        Ok(Self {
            input_axes: input_axes.clone(),
            reduce_indices: Tensor::reduction_indices(input_axes, &out_axes),
            kept_axes: input_axes.intersection(&out_axes),
            out_axes,
        })
    }

    pub(in crate::nn) const fn out_axes(&self) -> &Axes {
        &self.out_axes
    }

    pub(in crate::nn) fn out_axis_names(&self) -> Vec<String> {
        self.out_axes.names().iter().map(ToString::to_string).collect()
    }

    /// 元素个数与归约后个数之比，即每个输出元素汇总了多少个输入元素
    pub(in crate::nn) fn reduced_count(&self) -> usize {
        self.input_axes.size() / self.out_axes.size()
    }

    pub(in crate::nn) fn sum(&self, value: &Tensor) -> Result<Tensor, GraphError> {
        let summed = value.sum_axes(&self.reduce_indices)?;
        Ok(summed.align_to(&self.kept_axes, &self.out_axes)?)
    }
}

/// 取出第`index`个父节点的值
pub(in crate::nn) fn parent_value<'a>(
    parents: &[&'a Tensor],
    index: usize,
    node_type: &str,
) -> Result<&'a Tensor, GraphError> {
    parents.get(index).copied().ok_or_else(|| {
        GraphError::ComputationError(format!("{node_type}节点缺少第{index}个父节点的值"))
    })
}
