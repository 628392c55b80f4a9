/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : GraphInner 核心操作 + 拓扑排序
 */

use super::super::error::GraphError;
use super::GraphInner;
use crate::nn::nodes::NodeHandle;
use crate::nn::{Axes, NodeId};
use crate::tensor::Tensor;
use std::collections::{HashMap, HashSet};

impl GraphInner {
    // ========== 创建 ==========

    pub fn new() -> Self {
        Self::with_name("default_graph")
    }

    pub fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            nodes: HashMap::new(),
            forward_edges: HashMap::new(),
            next_id: 0,
        }
    }

    // ========== 基础访问器 ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    pub(in crate::nn) fn get_node(&self, id: NodeId) -> Result<&NodeHandle, GraphError> {
        self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))
    }

    pub fn get_node_parents(&self, id: NodeId) -> Result<Vec<NodeId>, GraphError> {
        Ok(self.get_node(id)?.parents().to_vec())
    }

    pub fn get_node_children(&self, id: NodeId) -> Result<Vec<NodeId>, GraphError> {
        // 先检查节点是否存在
        let _ = self.get_node(id)?;
        Ok(self.forward_edges.get(&id).cloned().unwrap_or_default())
    }

    pub fn get_node_name(&self, id: NodeId) -> Result<&str, GraphError> {
        Ok(self.get_node(id)?.name())
    }

    pub fn get_node_axes(&self, id: NodeId) -> Result<&Axes, GraphError> {
        Ok(self.get_node(id)?.axes())
    }

    pub fn is_placeholder(&self, id: NodeId) -> Result<bool, GraphError> {
        Ok(self.get_node(id)?.is_placeholder())
    }

    /// 由父节点的值计算指定节点的值，`parents`须按该节点父节点的顺序给出
    pub(crate) fn compute_node(&self, id: NodeId, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        self.get_node(id)?.compute(parents)
    }

    // ========== 拓扑排序 ==========

    /// 求计算`outputs`所需的全部节点，按拓扑序（父节点在前）排列。
    ///
    /// 节点只能引用创建时已存在的节点，图中不会有环；
    /// 这里仍用显式栈做后序遍历，不依赖ID的大小关系。
    pub fn topological_order(&self, outputs: &[NodeId]) -> Result<Vec<NodeId>, GraphError> {
        let mut order = Vec::new();
        let mut visited = HashSet::new();
        for &output in outputs {
            if visited.contains(&output) {
                continue;
            }
            // (节点, 父节点是否已入栈)
            let mut stack = vec![(output, false)];
            while let Some((id, expanded)) = stack.pop() {
                if expanded {
                    order.push(id);
                    continue;
                }
                if !visited.insert(id) {
                    continue;
                }
                stack.push((id, true));
                for &parent in self.get_node(id)?.parents().iter().rev() {
                    if !visited.contains(&parent) {
                        stack.push((parent, false));
                    }
                }
            }
        }
        Ok(order)
    }

    // ========== 命名 ==========

    pub(in crate::nn::graph) fn generate_valid_node_id(&mut self) -> NodeId {
        // 生成唯一的节点ID（先递增再返回，所以第一个节点 ID 是 1）
        self.next_id += 1;
        NodeId(self.next_id)
    }

    pub(in crate::nn::graph) fn check_duplicate_node_name(&self, name: &str) -> Result<(), GraphError> {
        if self.nodes.values().any(|node| node.name() == name) {
            return Err(GraphError::DuplicateNodeName(name.to_string()));
        }
        Ok(())
    }

    pub(in crate::nn::graph) fn generate_valid_new_node_name(
        &self,
        base_name: &str,
        node_type: &str,
    ) -> Result<String, GraphError> {
        if !base_name.is_empty() {
            self.check_duplicate_node_name(base_name)?;
            return Ok(base_name.to_string());
        }

        let mut counter = 1;
        loop {
            let name = format!("{node_type}_{counter}");
            if self.check_duplicate_node_name(&name).is_ok() {
                return Ok(name);
            }
            counter += 1;
        }
    }
}
