use super::BinaryOperands;
use crate::nn::descriptor::NodeTypeDescriptor;
use crate::nn::nodes::raw_node::TraitNode;
use crate::nn::{Axes, GraphError};
use crate::tensor::Tensor;

/// 逐元素相减节点：`lhs - rhs`
pub(in crate::nn) struct Subtract {
    operands: BinaryOperands,
}

impl Subtract {
    pub(in crate::nn) fn new(lhs_axes: &Axes, rhs_axes: &Axes) -> Result<Self, GraphError> {
        Ok(Self {
            operands: BinaryOperands::new(lhs_axes, rhs_axes)?,
        })
    }
}

impl TraitNode for Subtract {
    fn type_name(&self) -> &'static str {
        "subtract"
    }

    fn axes(&self) -> &Axes {
        self.operands.axes()
    }

    fn calc_value_by_parents(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        self.operands.apply(parents, self.type_name(), Tensor::try_sub)
    }

    fn descriptor(&self) -> NodeTypeDescriptor {
        NodeTypeDescriptor::Subtract
    }
}
