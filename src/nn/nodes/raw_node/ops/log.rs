use super::parent_value;
use crate::nn::descriptor::NodeTypeDescriptor;
use crate::nn::nodes::raw_node::TraitNode;
use crate::nn::{Axes, GraphError};
use crate::tensor::Tensor;

/// 逐元素自然对数节点。非正输入会得到`-inf`或NaN，需要截断时请用`SafeLog`
pub(in crate::nn) struct Log {
    axes: Axes,
}

impl Log {
    pub(in crate::nn) fn new(input_axes: &Axes) -> Self {
        Self {
            axes: input_axes.clone(),
        }
    }
}

impl TraitNode for Log {
    fn type_name(&self) -> &'static str {
        "log"
    }

    fn axes(&self) -> &Axes {
        &self.axes
    }

    fn calc_value_by_parents(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        let input = parent_value(parents, 0, self.type_name())?;
        Ok(input.ln())
    }

    fn descriptor(&self) -> NodeTypeDescriptor {
        NodeTypeDescriptor::Log
    }
}
