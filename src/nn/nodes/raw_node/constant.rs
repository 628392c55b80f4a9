use super::TraitNode;
use crate::nn::descriptor::NodeTypeDescriptor;
use crate::nn::{Axes, GraphError};
use crate::tensor::Tensor;

/// 标量常数节点（如`1 - y`中的`1`）
pub(in crate::nn) struct Constant {
    value: f64,
    axes: Axes,
}

impl Constant {
    pub(in crate::nn) const fn new(value: f64) -> Self {
        Self {
            value,
            axes: Axes::scalar(),
        }
    }
}

impl TraitNode for Constant {
    fn type_name(&self) -> &'static str {
        "constant"
    }

    fn axes(&self) -> &Axes {
        &self.axes
    }

    fn calc_value_by_parents(&self, _parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        Ok(Tensor::scalar(self.value))
    }

    fn descriptor(&self) -> NodeTypeDescriptor {
        NodeTypeDescriptor::Constant { value: self.value }
    }
}
