use super::parent_value;
use crate::nn::descriptor::NodeTypeDescriptor;
use crate::nn::nodes::raw_node::TraitNode;
use crate::nn::{Axes, GraphError};
use crate::tensor::Tensor;

/// 安全对数节点：`log(max(x, exp(limit)))`
///
/// 先把输入截断到不小于`exp(limit)`再取对数，因此对0或负数输入也能得到有限值`limit`。
/// 交叉熵中`limit`默认取-50。
pub(in crate::nn) struct SafeLog {
    axes: Axes,
    limit: f64,
}

impl SafeLog {
    pub(in crate::nn) fn new(input_axes: &Axes, limit: f64) -> Self {
        Self {
            axes: input_axes.clone(),
            limit,
        }
    }
}

impl TraitNode for SafeLog {
    fn type_name(&self) -> &'static str {
        "safelog"
    }

    fn axes(&self) -> &Axes {
        &self.axes
    }

    fn calc_value_by_parents(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        let input = parent_value(parents, 0, self.type_name())?;
        Ok(input.safe_ln(self.limit))
    }

    fn descriptor(&self) -> NodeTypeDescriptor {
        NodeTypeDescriptor::SafeLog { limit: self.limit }
    }
}
