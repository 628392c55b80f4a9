use super::parent_value;
use crate::nn::descriptor::NodeTypeDescriptor;
use crate::nn::nodes::raw_node::TraitNode;
use crate::nn::{Axes, GraphError};
use crate::tensor::Tensor;

/// 取负节点：`-x`
pub(in crate::nn) struct Negative {
    axes: Axes,
}

impl Negative {
    pub(in crate::nn) fn new(input_axes: &Axes) -> Self {
        Self {
            axes: input_axes.clone(),
        }
    }
}

impl TraitNode for Negative {
    fn type_name(&self) -> &'static str {
        "negative"
    }

    fn axes(&self) -> &Axes {
        &self.axes
    }

    fn calc_value_by_parents(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        let input = parent_value(parents, 0, self.type_name())?;
        Ok(-input)
    }

    fn descriptor(&self) -> NodeTypeDescriptor {
        NodeTypeDescriptor::Negative
    }
}
