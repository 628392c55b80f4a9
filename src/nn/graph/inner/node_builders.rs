/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : GraphInner 节点构建方法（new_*_node）
 *
 * 所有轴的合法性都在建图时检查，执行时不再重复推导形状。
 */

use super::super::error::GraphError;
use super::GraphInner;
use crate::nn::NodeId;
use crate::nn::nodes::NodeHandle;
use crate::nn::nodes::raw_node::{
    Add, Constant, CrossEntropyBinary, CrossEntropyMulti, Divide, Dot, Exp, Log, Mean, Multiply,
    Negative, NodeType, Placeholder, SafeLog, Square, Subtract, Sum, TraitNode,
};
use crate::nn::{Axes, Axis};

impl GraphInner {
    /// 添加节点到列表
    pub(in crate::nn::graph) fn add_node_to_list<T: Into<NodeType>>(
        &mut self,
        raw_node: T,
        name: Option<&str>,
        parents: &[NodeId],
    ) -> Result<NodeId, GraphError> {
        for &parent_id in parents {
            let _ = self.get_node(parent_id)?;
        }
        let raw_node: NodeType = raw_node.into();
        let node_name = self.generate_valid_new_node_name(name.unwrap_or(""), raw_node.type_name())?;
        let node_id = self.generate_valid_node_id();

        for &parent_id in parents {
            self.forward_edges.entry(parent_id).or_default().push(node_id);
        }

        tracing::trace!(
            graph = %self.name,
            node = %node_name,
            axes = %raw_node.axes(),
            "添加节点"
        );
        self.nodes
            .insert(node_id, NodeHandle::new(node_id, &node_name, parents, raw_node));
        Ok(node_id)
    }

    fn node_axes(&self, id: NodeId) -> Result<Axes, GraphError> {
        Ok(self.get_node(id)?.axes().clone())
    }

    /// 节点参数会写进图描述符（JSON），JSON 无法表示 NaN 与无穷
    fn check_finite_param(value: f64, what: &str) -> Result<(), GraphError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(GraphError::InvalidOperation(format!(
                "{what}必须是有限值，实际为{value}"
            )))
        }
    }

    // ========== 叶子节点 ==========

    /// 创建占位符节点
    pub fn new_placeholder_node(
        &mut self,
        axes: &Axes,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        self.add_node_to_list(Placeholder::new(axes.clone()), name, &[])
    }

    /// 创建单轴占位符节点（最常见的用法：一个命名且定长的轴）
    pub fn new_placeholder_node_with_axis(
        &mut self,
        axis: &Axis,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        self.new_placeholder_node(&Axes::from(axis.clone()), name)
    }

    /// 创建标量常数节点
    pub fn new_constant_node(&mut self, value: f64, name: Option<&str>) -> Result<NodeId, GraphError> {
        Self::check_finite_param(value, "常数")?;
        self.add_node_to_list(Constant::new(value), name, &[])
    }

    // ========== 元素级二元运算 ==========

    pub fn new_add_node(
        &mut self,
        lhs: NodeId,
        rhs: NodeId,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        let node = Add::new(&self.node_axes(lhs)?, &self.node_axes(rhs)?)?;
        self.add_node_to_list(node, name, &[lhs, rhs])
    }

    pub fn new_subtract_node(
        &mut self,
        lhs: NodeId,
        rhs: NodeId,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        let node = Subtract::new(&self.node_axes(lhs)?, &self.node_axes(rhs)?)?;
        self.add_node_to_list(node, name, &[lhs, rhs])
    }

    pub fn new_multiply_node(
        &mut self,
        lhs: NodeId,
        rhs: NodeId,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        let node = Multiply::new(&self.node_axes(lhs)?, &self.node_axes(rhs)?)?;
        self.add_node_to_list(node, name, &[lhs, rhs])
    }

    pub fn new_divide_node(
        &mut self,
        lhs: NodeId,
        rhs: NodeId,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        let node = Divide::new(&self.node_axes(lhs)?, &self.node_axes(rhs)?)?;
        self.add_node_to_list(node, name, &[lhs, rhs])
    }

    // ========== 元素级一元运算 ==========

    pub fn new_negative_node(&mut self, input: NodeId, name: Option<&str>) -> Result<NodeId, GraphError> {
        let node = Negative::new(&self.node_axes(input)?);
        self.add_node_to_list(node, name, &[input])
    }

    pub fn new_square_node(&mut self, input: NodeId, name: Option<&str>) -> Result<NodeId, GraphError> {
        let node = Square::new(&self.node_axes(input)?);
        self.add_node_to_list(node, name, &[input])
    }

    pub fn new_log_node(&mut self, input: NodeId, name: Option<&str>) -> Result<NodeId, GraphError> {
        let node = Log::new(&self.node_axes(input)?);
        self.add_node_to_list(node, name, &[input])
    }

    pub fn new_exp_node(&mut self, input: NodeId, name: Option<&str>) -> Result<NodeId, GraphError> {
        let node = Exp::new(&self.node_axes(input)?);
        self.add_node_to_list(node, name, &[input])
    }

    /// `log(max(x, exp(limit)))`
    pub fn new_safe_log_node(
        &mut self,
        input: NodeId,
        limit: f64,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        Self::check_finite_param(limit, "安全对数的下限")?;
        let node = SafeLog::new(&self.node_axes(input)?, limit);
        self.add_node_to_list(node, name, &[input])
    }

    // ========== 归约 ==========

    /// 求和；`out_axes`为None时对所有轴求和
    pub fn new_sum_node(
        &mut self,
        input: NodeId,
        out_axes: Option<&Axes>,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        let node = Sum::new(&self.node_axes(input)?, out_axes)?;
        self.add_node_to_list(node, name, &[input])
    }

    /// 求均值；`out_axes`为None时对所有轴求均值
    pub fn new_mean_node(
        &mut self,
        input: NodeId,
        out_axes: Option<&Axes>,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        let node = Mean::new(&self.node_axes(input)?, out_axes)?;
        self.add_node_to_list(node, name, &[input])
    }

    /// 沿共有轴的点积
    pub fn new_dot_node(
        &mut self,
        lhs: NodeId,
        rhs: NodeId,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        let node = Dot::new(&self.node_axes(lhs)?, &self.node_axes(rhs)?)?;
        self.add_node_to_list(node, name, &[lhs, rhs])
    }

    // ========== 代价函数 ==========

    pub fn new_cross_entropy_binary_node(
        &mut self,
        output: NodeId,
        target: NodeId,
        out_axes: Option<&Axes>,
        limit: f64,
        usebits: bool,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        Self::check_finite_param(limit, "交叉熵的下限")?;
        let node = CrossEntropyBinary::new(
            &self.node_axes(output)?,
            &self.node_axes(target)?,
            out_axes,
            limit,
            usebits,
        )?;
        self.add_node_to_list(node, name, &[output, target])
    }

    pub fn new_cross_entropy_multi_node(
        &mut self,
        output: NodeId,
        target: NodeId,
        out_axes: Option<&Axes>,
        limit: f64,
        usebits: bool,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        Self::check_finite_param(limit, "交叉熵的下限")?;
        let node = CrossEntropyMulti::new(
            &self.node_axes(output)?,
            &self.node_axes(target)?,
            out_axes,
            limit,
            usebits,
        )?;
        self.add_node_to_list(node, name, &[output, target])
    }
}
