use super::parent_value;
use crate::nn::descriptor::NodeTypeDescriptor;
use crate::nn::nodes::raw_node::TraitNode;
use crate::nn::{Axes, GraphError};
use crate::tensor::Tensor;

/// 逐元素平方节点：`x^2`
pub(in crate::nn) struct Square {
    axes: Axes,
}

impl Square {
    pub(in crate::nn) fn new(input_axes: &Axes) -> Self {
        Self {
            axes: input_axes.clone(),
        }
    }
}

impl TraitNode for Square {
    fn type_name(&self) -> &'static str {
        "square"
    }

    fn axes(&self) -> &Axes {
        &self.axes
    }

    fn calc_value_by_parents(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        let input = parent_value(parents, 0, self.type_name())?;
        Ok(input.square())
    }

    fn descriptor(&self) -> NodeTypeDescriptor {
        NodeTypeDescriptor::Square
    }
}
