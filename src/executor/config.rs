use crate::nn::GraphError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 执行器配置，可从 JSON 加载；缺省字段取默认值
///
/// ```json
/// { "name": "costs", "check_finite": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// 执行器名称前缀（用于日志）
    pub name: String,
    /// 为 true 时，输出含 NaN 或无穷即报错
    pub check_finite: bool,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            name: "executor".to_string(),
            check_finite: false,
        }
    }
}

impl ExecutorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, GraphError> {
        serde_json::from_str(json).map_err(|e| GraphError::Config(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GraphError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| GraphError::Config(format!("无法读取{}：{e}", path.display())))?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> Result<String, GraphError> {
        serde_json::to_string_pretty(self).map_err(|e| GraphError::Config(e.to_string()))
    }
}
