use super::CrossEntropyCore;
use crate::nn::descriptor::NodeTypeDescriptor;
use crate::nn::nodes::raw_node::TraitNode;
use crate::nn::{Axes, GraphError};
use crate::tensor::Tensor;

/// 多分类交叉熵节点
///
/// ## 公式
/// `L = -Σ t * safelog(y)`，`safelog(x) = log(max(x, exp(limit)))`。
///
/// 与`SoftmaxCrossEntropy`不同，这里的`y`应已是概率（不在节点内做softmax）。
///
/// ## 输入
/// - 父节点 0: y（预测概率）
/// - 父节点 1: t（目标分布，通常为one-hot）
pub(in crate::nn) struct CrossEntropyMulti {
    core: CrossEntropyCore,
}

impl CrossEntropyMulti {
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

impl TraitNode for CrossEntropyMulti {
    fn type_name(&self) -> &'static str {
        "cross_entropy_multi"
    }

    fn axes(&self) -> &Axes {
        self.core.axes()
    }

    fn calc_value_by_parents(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        let (y, t) = self.core.operands(parents, self.type_name())?;
        let elementwise = -(&t * &y.safe_ln(self.core.limit()));
        self.core.reduce(&elementwise)
    }

    fn descriptor(&self) -> NodeTypeDescriptor {
        NodeTypeDescriptor::CrossEntropyMulti {
            out_axes: self.core.out_axis_names(),
            limit: self.core.limit(),
            usebits: self.core.usebits(),
        }
    }
}
