use super::parent_value;
use crate::nn::descriptor::NodeTypeDescriptor;
use crate::nn::nodes::raw_node::{ReductionPlan, TraitNode};
use crate::nn::{Axes, GraphError};
use crate::tensor::Tensor;

/// 求均值归约节点：对不在`out_axes`中的轴求均值
pub(in crate::nn) struct Mean {
    plan: ReductionPlan,
}

impl Mean {
    pub(in crate::nn) fn new(input_axes: &Axes, out_axes: Option<&Axes>) -> Result<Self, GraphError> {
        Ok(Self {
            plan: ReductionPlan::new(input_axes, out_axes)?,
        })
    }
}

impl TraitNode for Mean {
    fn type_name(&self) -> &'static str {
        "mean"
    }

    fn axes(&self) -> &Axes {
        self.plan.out_axes()
    }

    fn calc_value_by_parents(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        let input = parent_value(parents, 0, self.type_name())?;
        let summed = self.plan.sum(input)?;
        Ok(&summed / self.plan.reduced_count() as f64)
    }

    fn descriptor(&self) -> NodeTypeDescriptor {
        NodeTypeDescriptor::Mean {
            out_axes: self.plan.out_axis_names(),
        }
    }
}
