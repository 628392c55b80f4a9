use crate::nn::{Axes, GraphError, Var};

/// 归约与缩并扩展 trait
///
/// `out_axes`指定结果保留的轴：
/// - `None`：对所有轴归约，结果为标量
/// - `Some(axes)`：只保留`axes`（须为输入轴的子集），其余轴被归约
pub trait VarReduceOps {
    /// 求和
    fn sum(&self, out_axes: Option<&Axes>) -> Result<Var, GraphError>;

    /// 求均值
    fn mean(&self, out_axes: Option<&Axes>) -> Result<Var, GraphError>;

    /// 沿两个操作数共有的轴做点积
    fn dot(&self, other: &Var) -> Result<Var, GraphError>;
}

impl VarReduceOps for Var {
    fn sum(&self, out_axes: Option<&Axes>) -> Result<Var, GraphError> {
        let id = self
            .graph()
            .borrow_mut()
            .new_sum_node(self.node_id(), out_axes, None)?;
        Ok(self.wrap(id))
    }

    fn mean(&self, out_axes: Option<&Axes>) -> Result<Var, GraphError> {
        let id = self
            .graph()
            .borrow_mut()
            .new_mean_node(self.node_id(), out_axes, None)?;
        Ok(self.wrap(id))
    }

    fn dot(&self, other: &Var) -> Result<Var, GraphError> {
        self.check_same_graph(other, "点积")?;
        let id = self
            .graph()
            .borrow_mut()
            .new_dot_node(self.node_id(), other.node_id(), None)?;
        Ok(self.wrap(id))
    }
}
