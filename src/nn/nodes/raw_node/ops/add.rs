use super::BinaryOperands;
use crate::nn::descriptor::NodeTypeDescriptor;
use crate::nn::nodes::raw_node::TraitNode;
use crate::nn::{Axes, GraphError};
use crate::tensor::Tensor;

/// 逐元素相加节点：`lhs + rhs`
pub(in crate::nn) struct Add {
    operands: BinaryOperands,
}

impl Add {
    pub(in crate::nn) fn new(lhs_axes: &Axes, rhs_axes: &Axes) -> Result<Self, GraphError> {
        Ok(Self {
            operands: BinaryOperands::new(lhs_axes, rhs_axes)?,
        })
    }
}

impl TraitNode for Add {
    fn type_name(&self) -> &'static str {
        "add"
    }

    fn axes(&self) -> &Axes {
        self.operands.axes()
    }

    fn calc_value_by_parents(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        self.operands.apply(parents, self.type_name(), Tensor::try_add)
    }

    fn descriptor(&self) -> NodeTypeDescriptor {
        NodeTypeDescriptor::Add
    }
}
