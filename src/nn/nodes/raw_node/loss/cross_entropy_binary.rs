use super::CrossEntropyCore;
use crate::nn::descriptor::NodeTypeDescriptor;
use crate::nn::nodes::raw_node::TraitNode;
use crate::nn::{Axes, GraphError};
use crate::tensor::Tensor;

/// 二分类交叉熵节点
///
/// ## 公式
/// `L = Σ [ -t * safelog(y) - (1 - t) * safelog(1 - y) ]`，
/// 其中`safelog(x) = log(max(x, exp(limit)))`，`limit`默认为-50，
/// 因此`y`取0或1时结果依然有限。
///
/// ## 输入
/// - 父节点 0: y（预测值，通常在[0, 1]内）
/// - 父节点 1: t（目标值，与y轴相同）
///
/// ## 输出
/// - 对不在`out_axes`中的轴求和（默认全部求和，得到标量）
pub(in crate::nn) struct CrossEntropyBinary {
    core: CrossEntropyCore,
}

impl CrossEntropyBinary {
    pub(in crate::nn) fn new(
        output_axes: &Axes,
        target_axes: &Axes,
        out_axes: Option<&Axes>,
        limit: f64,
        usebits: bool,
    ) -> Result<Self, GraphError> {
        Ok(Self {
            core: CrossEntropyCore::new(output_axes, target_axes, out_axes, limit, usebits)?,
        })
    }
}

impl TraitNode for CrossEntropyBinary {
    fn type_name(&self) -> &'static str {
        "cross_entropy_binary"
    }

    fn axes(&self) -> &Axes {
        self.core.axes()
    }

    fn calc_value_by_parents(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        let (y, t) = self.core.operands(parents, self.type_name())?;
        let limit = self.core.limit();
        let log_y = y.safe_ln(limit);
        let log_one_minus_y = (1.0 - &y).safe_ln(limit);
        let elementwise = -(&t * &log_y) - &(1.0 - &t) * &log_one_minus_y;
        self.core.reduce(&elementwise)
    }

    fn descriptor(&self) -> NodeTypeDescriptor {
        NodeTypeDescriptor::CrossEntropyBinary {
            out_axes: self.core.out_axis_names(),
            limit: self.core.limit(),
            usebits: self.core.usebits(),
        }
    }
}
