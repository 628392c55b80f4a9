use super::TraitNode;
use crate::nn::descriptor::NodeTypeDescriptor;
use crate::nn::{Axes, GraphError};
use crate::tensor::Tensor;

/// 占位符节点：图中的符号输入，在执行时由执行器绑定具体数据
pub(in crate::nn) struct Placeholder {
    axes: Axes,
}

impl Placeholder {
    pub(in crate::nn) const fn new(axes: Axes) -> Self {
        Self { axes }
    }
}

impl TraitNode for Placeholder {
    fn type_name(&self) -> &'static str {
        "placeholder"
    }

    fn axes(&self) -> &Axes {
        &self.axes
    }

    fn calc_value_by_parents(&self, _parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        Err(GraphError::InvalidOperation(
            "占位符节点的值只能由执行器绑定，不能由父节点计算".to_string(),
        ))
    }

    fn descriptor(&self) -> NodeTypeDescriptor {
        NodeTypeDescriptor::Placeholder
    }
}
