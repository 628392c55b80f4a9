use crate::nn::{Graph, GraphError, NodeId};
use crate::tensor::Tensor;
use std::collections::HashMap;

/// 已编译的计算：按拓扑序求值，输入按参数顺序绑定到占位符
pub struct Executor {
    name: String,
    graph: Graph,
    order: Vec<NodeId>,
    outputs: Vec<NodeId>,
    params: Vec<NodeId>,
    check_finite: bool,
    calls: u64,
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("name", &self.name)
            .field("nodes", &self.order.len())
            .field("outputs", &self.outputs)
            .field("params", &self.params)
            .finish()
    }
}

impl Executor {
    pub(super) const fn new(
        name: String,
        graph: Graph,
        order: Vec<NodeId>,
        outputs: Vec<NodeId>,
        params: Vec<NodeId>,
        check_finite: bool,
    ) -> Self {
        Self {
            name,
            graph,
            order,
            outputs,
            params,
            check_finite,
            calls: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 本次计算涉及的节点数（含占位符和常数）
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// 已被调用的次数
    pub const fn calls(&self) -> u64 {
        self.calls
    }

    /// 绑定输入并计算所有输出，输出顺序与编译时一致
    pub fn call(&mut self, inputs: &[Tensor]) -> Result<Vec<Tensor>, GraphError> {
        let _span = tracing::debug_span!("executor_call", executor = %self.name).entered();
        if inputs.len() != self.params.len() {
            return Err(GraphError::InputCountMismatch {
                expected: self.params.len(),
                got: inputs.len(),
            });
        }

        let inner = self.graph.inner();
        let mut values: HashMap<NodeId, Tensor> = HashMap::with_capacity(self.order.len());

        for (&param, input) in self.params.iter().zip(inputs) {
            let expected = inner.get_node_axes(param)?.lengths();
            if input.shape() != expected.as_slice() {
                return Err(GraphError::ShapeMismatch {
                    expected,
                    got: input.shape().to_vec(),
                    message: format!("占位符`{}`的输入形状不符", inner.get_node_name(param)?),
                });
            }
            values.insert(param, input.clone());
        }

        for &id in &self.order {
            if values.contains_key(&id) {
                continue;
            }
            let value = {
                let parent_ids = inner.get_node_parents(id)?;
                let parents = parent_ids
                    .iter()
                    .map(|parent| {
                        values.get(parent).ok_or_else(|| {
                            GraphError::ComputationError(format!(
                                "父节点{parent}的值尚未计算"
                            ))
                        })
                    })
                    .collect::<Result<Vec<&Tensor>, GraphError>>()?;
                inner.compute_node(id, &parents)?
            };
            tracing::trace!(node = %inner.get_node_name(id)?, shape = ?value.shape(), "节点求值");
            values.insert(id, value);
        }

        let mut results = Vec::with_capacity(self.outputs.len());
        for &output in &self.outputs {
            let value = values.get(&output).cloned().ok_or_else(|| {
                GraphError::ComputationError(format!("输出节点{output}没有值"))
            })?;
            if self.check_finite && !value.is_finite() {
                return Err(GraphError::NonFinite(inner.get_node_name(output)?.to_string()));
            }
            results.push(value);
        }
        drop(inner);

        self.calls += 1;
        Ok(results)
    }

    /// 只取第一个输出
    pub fn call_one(&mut self, inputs: &[Tensor]) -> Result<Tensor, GraphError> {
        self.call(inputs)?
            .into_iter()
            .next()
            .ok_or_else(|| GraphError::ComputationError("执行器没有输出".to_string()))
    }
}
