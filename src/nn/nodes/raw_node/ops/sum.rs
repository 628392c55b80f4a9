use super::parent_value;
use crate::nn::descriptor::NodeTypeDescriptor;
use crate::nn::nodes::raw_node::{ReductionPlan, TraitNode};
use crate::nn::{Axes, GraphError};
use crate::tensor::Tensor;

/// 求和归约节点：对不在`out_axes`中的轴求和
pub(in crate::nn) struct Sum {
    plan: ReductionPlan,
}

impl Sum {
    pub(in crate::nn) fn new(input_axes: &Axes, out_axes: Option<&Axes>) -> Result<Self, GraphError> {
        Ok(Self {
            plan: ReductionPlan::new(input_axes, out_axes)?,
        })
    }
}

impl TraitNode for Sum {
    fn type_name(&self) -> &'static str {
        "sum"
    }

    fn axes(&self) -> &Axes {
        self.plan.out_axes()
    }

    fn calc_value_by_parents(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        let input = parent_value(parents, 0, self.type_name())?;
        self.plan.sum(input)
    }

    fn descriptor(&self) -> NodeTypeDescriptor {
        NodeTypeDescriptor::Sum {
            out_axes: self.plan.out_axis_names(),
        }
    }
}
