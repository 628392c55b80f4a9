use super::{Executor, ExecutorConfig};
use crate::nn::{GraphError, NodeId, Var};
use std::collections::HashSet;

/// 执行器工厂：校验输出与参数，生成可调用的`Executor`
#[derive(Debug, Default)]
pub struct ExecutorFactory {
    config: ExecutorConfig,
    executors_created: usize,
}

impl ExecutorFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_config(config: ExecutorConfig) -> Self {
        Self {
            config,
            executors_created: 0,
        }
    }

    pub const fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// 已生成的执行器数量
    pub const fn executors_created(&self) -> usize {
        self.executors_created
    }

    /// 为`outputs`生成执行器，`params`为调用时按顺序绑定数据的占位符。
    ///
    /// 检查：
    /// - 至少一个输出，且所有输出与参数来自同一个图；
    /// - 参数必须是占位符且不重复；
    /// - 输出依赖的每个占位符都必须出现在参数中。
    pub fn executor(&mut self, outputs: &[&Var], params: &[&Var]) -> Result<Executor, GraphError> {
        let Some(first) = outputs.first() else {
            return Err(GraphError::InvalidOperation(
                "执行器至少需要一个输出".to_string(),
            ));
        };
        for var in outputs.iter().chain(params) {
            first.check_same_graph(var, "编译")?;
        }

        let graph = first.get_graph();
        let inner = graph.inner();

        let mut seen = HashSet::new();
        for param in params {
            let id = param.node_id();
            if !inner.is_placeholder(id)? {
                return Err(GraphError::NotAPlaceholder(inner.get_node_name(id)?.to_string()));
            }
            if !seen.insert(id) {
                return Err(GraphError::InvalidOperation(format!(
                    "占位符`{}`在参数列表中重复",
                    inner.get_node_name(id)?
                )));
            }
        }

        let output_ids: Vec<NodeId> = outputs.iter().map(|v| v.node_id()).collect();
        let order = inner.topological_order(&output_ids)?;
        for &id in &order {
            if inner.is_placeholder(id)? && !seen.contains(&id) {
                return Err(GraphError::UnboundPlaceholder(inner.get_node_name(id)?.to_string()));
            }
        }

        self.executors_created += 1;
        let name = format!("{}_{}", self.config.name, self.executors_created);
        tracing::debug!(
            executor = %name,
            graph = %inner.name(),
            nodes = order.len(),
            outputs = output_ids.len(),
            params = params.len(),
            "编译执行器"
        );
        drop(inner);

        let param_ids = params.iter().map(|v| v.node_id()).collect();
        Ok(Executor::new(
            name,
            graph,
            order,
            output_ids,
            param_ids,
            self.config.check_finite,
        ))
    }
}
