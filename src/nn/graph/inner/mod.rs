/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : GraphInner 计算图的底层实现
 *
 * 各 impl 块分散在子模块中：
 * - core.rs: 基础访问 + 拓扑排序
 * - node_builders.rs: new_*_node
 * - describe.rs: describe/summary
 */

mod core;
mod describe;
mod node_builders;

use crate::nn::NodeId;
use crate::nn::nodes::NodeHandle;
use std::collections::HashMap;

/// 图的完整定义（核心实现）
///
/// 只保存节点的结构（轴、父子关系、节点类型），不保存节点的值；
/// 值只在执行器的一次调用中存在。
pub struct GraphInner {
    pub(in crate::nn::graph) name: String,
    pub(in crate::nn::graph) nodes: HashMap<NodeId, NodeHandle>,
    /// 正向边：parent_id -> child_ids（父节点指向子节点）
    pub(in crate::nn::graph) forward_edges: HashMap<NodeId, Vec<NodeId>>,
    pub(in crate::nn::graph) next_id: u64,
}

impl Default for GraphInner {
    fn default() -> Self {
        Self::new()
    }
}
