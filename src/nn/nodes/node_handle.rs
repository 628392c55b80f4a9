use super::raw_node::{NodeType, TraitNode};
use crate::nn::descriptor::NodeTypeDescriptor;
use crate::nn::{Axes, GraphError};
use crate::tensor::Tensor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 节点在图内的唯一编号（从1开始递增）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 图中的节点：编号、名字、父节点列表 + 具体的节点类型
pub(in crate::nn) struct NodeHandle {
    id: NodeId,
    name: String,
    parents: Vec<NodeId>,
    raw_node: NodeType,
}

impl NodeHandle {
    pub(in crate::nn) fn new<T: Into<NodeType>>(
        id: NodeId,
        name: &str,
        parents: &[NodeId],
        raw_node: T,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            parents: parents.to_vec(),
            raw_node: raw_node.into(),
        }
    }

    pub(in crate::nn) const fn id(&self) -> NodeId {
        self.id
    }

    pub(in crate::nn) fn name(&self) -> &str {
        &self.name
    }

    pub(in crate::nn) fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    pub(in crate::nn) fn axes(&self) -> &Axes {
        self.raw_node.axes()
    }

    pub(in crate::nn) fn is_placeholder(&self) -> bool {
        matches!(self.raw_node, NodeType::Placeholder(_))
    }

    pub(in crate::nn) fn type_name(&self) -> &'static str {
        self.raw_node.type_name()
    }

    pub(in crate::nn) fn descriptor(&self) -> NodeTypeDescriptor {
        self.raw_node.descriptor()
    }

    /// 由父节点的值计算本节点的值，`parents`须与`self.parents()`一一对应
    pub(in crate::nn) fn compute(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        if parents.len() != self.parents.len() {
            return Err(GraphError::ComputationError(format!(
                "{self}需要{}个父节点的值，实际得到{}个",
                self.parents.len(),
                parents.len()
            )));
        }
        self.raw_node.calc_value_by_parents(parents)
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "节点[id={}, name={}, type={}]", self.id.0, self.name, self.type_name())
    }
}
