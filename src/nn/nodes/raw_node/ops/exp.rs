use super::parent_value;
use crate::nn::descriptor::NodeTypeDescriptor;
use crate::nn::nodes::raw_node::TraitNode;
use crate::nn::{Axes, GraphError};
use crate::tensor::Tensor;

/// 逐元素指数节点：`e^x`
pub(in crate::nn) struct Exp {
    axes: Axes,
}

impl Exp {
    pub(in crate::nn) fn new(input_axes: &Axes) -> Self {
        Self {
            axes: input_axes.clone(),
        }
    }
}

impl TraitNode for Exp {
    fn type_name(&self) -> &'static str {
        "exp"
    }

    fn axes(&self) -> &Axes {
        &self.axes
    }

    fn calc_value_by_parents(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        let input = parent_value(parents, 0, self.type_name())?;
        Ok(input.exp())
    }

    fn descriptor(&self) -> NodeTypeDescriptor {
        NodeTypeDescriptor::Exp
    }
}
