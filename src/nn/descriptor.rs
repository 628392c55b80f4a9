/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 图描述符（Graph Descriptor）
 *                 计算图的可序列化描述，用于调试输出和导出 JSON
 */

use super::Axes;
use serde::{Deserialize, Serialize};

/// 图的可序列化描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDescriptor {
    /// 格式版本（用于向后兼容）
    pub version: String,
    /// 图名称
    pub name: String,
    /// 所有节点描述（按 ID 升序）
    pub nodes: Vec<NodeDescriptor>,
}

/// 节点描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    /// 节点 ID
    pub id: u64,
    /// 节点名称
    pub name: String,
    /// 节点类型
    pub node_type: NodeTypeDescriptor,
    /// 输出的轴
    pub axes: Axes,
    /// 父节点 ID 列表（定义拓扑）
    pub parents: Vec<u64>,
}

/// 节点类型描述（包含类型特定参数）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeTypeDescriptor {
    Placeholder,
    Constant {
        value: f64,
    },
    Add,
    Subtract,
    Multiply,
    Divide,
    Negative,
    Square,
    Log,
    Exp,
    SafeLog {
        limit: f64,
    },
    Sum {
        out_axes: Vec<String>,
    },
    Mean {
        out_axes: Vec<String>,
    },
    Dot,
    CrossEntropyBinary {
        out_axes: Vec<String>,
        limit: f64,
        usebits: bool,
    },
    CrossEntropyMulti {
        out_axes: Vec<String>,
        limit: f64,
        usebits: bool,
    },
}

impl GraphDescriptor {
    /// 创建新的图描述符
    pub fn new(name: &str) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            name: name.to_string(),
            nodes: Vec::new(),
        }
    }

    /// 添加节点描述
    pub fn add_node(&mut self, node: NodeDescriptor) {
        self.nodes.push(node);
    }

    /// 统计占位符数量
    pub fn placeholder_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n.node_type, NodeTypeDescriptor::Placeholder))
            .count()
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
