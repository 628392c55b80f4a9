/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : GraphInner describe/summary 相关方法
 */

use super::GraphInner;
use crate::nn::descriptor::{GraphDescriptor, NodeDescriptor};

impl GraphInner {
    /// 导出图的描述符（用于序列化、调试）
    ///
    /// # 示例
    /// ```ignore
    /// let descriptor = graph.describe();
    /// println!("{}", descriptor.to_json().unwrap());
    /// ```
    pub fn describe(&self) -> GraphDescriptor {
        let mut descriptor = GraphDescriptor::new(&self.name);

        // 按 ID 排序节点，确保输出顺序一致
        for node_id in self.nodes() {
            let Some(node) = self.nodes.get(&node_id) else {
                continue;
            };
            descriptor.add_node(NodeDescriptor {
                id: node.id().0,
                name: node.name().to_string(),
                node_type: node.descriptor(),
                axes: node.axes().clone(),
                parents: node.parents().iter().map(|id| id.0).collect(),
            });
        }

        descriptor
    }

    /// 生成模型摘要文本：每个节点一行，列出名称、类型、轴和父节点
    pub fn summary(&self) -> String {
        let mut lines = vec![format!("图 `{}`（{} 个节点）", self.name, self.nodes_count())];
        for node_id in self.nodes() {
            let Some(node) = self.nodes.get(&node_id) else {
                continue;
            };
            let parents: Vec<String> = node
                .parents()
                .iter()
                .filter_map(|id| self.nodes.get(id).map(|p| p.name().to_string()))
                .collect();
            let parents = if parents.is_empty() {
                "-".to_string()
            } else {
                parents.join(", ")
            };
            lines.push(format!(
                "{:<24} {:<22} {:<20} {}",
                node.name(),
                node.type_name(),
                node.axes().to_string(),
                parents
            ));
        }
        lines.join("\n")
    }
}
