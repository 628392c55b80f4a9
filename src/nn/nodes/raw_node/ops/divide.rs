use super::BinaryOperands;
use crate::nn::descriptor::NodeTypeDescriptor;
use crate::nn::nodes::raw_node::TraitNode;
use crate::nn::{Axes, GraphError};
use crate::tensor::Tensor;

/// 逐元素相除节点：`lhs / rhs`（除数为0时按IEEE 754得到无穷或NaN）
pub(in crate::nn) struct Divide {
    operands: BinaryOperands,
}

impl Divide {
    pub(in crate::nn) fn new(lhs_axes: &Axes, rhs_axes: &Axes) -> Result<Self, GraphError> {
        Ok(Self {
            operands: BinaryOperands::new(lhs_axes, rhs_axes)?,
        })
    }
}

impl TraitNode for Divide {
    fn type_name(&self) -> &'static str {
        "divide"
    }

    fn axes(&self) -> &Axes {
        self.operands.axes()
    }

    fn calc_value_by_parents(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        self.operands.apply(parents, self.type_name(), Tensor::try_div)
    }

    fn descriptor(&self) -> NodeTypeDescriptor {
        NodeTypeDescriptor::Divide
    }
}
