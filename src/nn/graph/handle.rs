/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : Graph 句柄（用户级 API）
 */

use super::error::GraphError;
use super::inner::GraphInner;
use crate::nn::descriptor::GraphDescriptor;
use crate::nn::var::Var;
use crate::nn::{Axes, Axis, NodeId};
use std::cell::RefCell;
use std::rc::Rc;

/// Graph - 计算图句柄
///
/// # 设计原则
/// - 是 `Rc<RefCell<GraphInner>>` 的薄封装
/// - Clone 语义：多个 Graph 引用同一个 GraphInner
/// - 创建的 Var 自动持有图引用
#[derive(Clone)]
pub struct Graph {
    inner: Rc<RefCell<GraphInner>>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    // ==================== 创建 ====================

    pub fn new() -> Self {
        Self::from_inner(GraphInner::new())
    }

    pub fn with_name(name: &str) -> Self {
        Self::from_inner(GraphInner::with_name(name))
    }

    pub fn from_inner(inner: GraphInner) -> Self {
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub(crate) const fn from_rc(inner: Rc<RefCell<GraphInner>>) -> Self {
        Self { inner }
    }

    /// 获取内部 GraphInner 的不可变引用
    pub fn inner(&self) -> std::cell::Ref<'_, GraphInner> {
        self.inner.borrow()
    }

    /// 两个句柄是否指向同一个图
    pub fn same_graph(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// 将 NodeId 包装成 Var
    pub fn wrap_node_id(&self, node_id: NodeId) -> Result<Var, GraphError> {
        let _ = self.inner.borrow().get_node_name(node_id)?;
        Ok(Var::new(node_id, Rc::clone(&self.inner)))
    }

    pub fn name(&self) -> String {
        self.inner.borrow().name().to_string()
    }

    // ==================== 创建变量 ====================

    /// 创建占位符
    pub fn placeholder(&self, axes: &Axes, name: Option<&str>) -> Result<Var, GraphError> {
        let node_id = self.inner.borrow_mut().new_placeholder_node(axes, name)?;
        Ok(Var::new(node_id, Rc::clone(&self.inner)))
    }

    /// 创建只有一个轴的占位符
    pub fn placeholder_with_axis(&self, axis: &Axis, name: Option<&str>) -> Result<Var, GraphError> {
        let node_id = self
            .inner
            .borrow_mut()
            .new_placeholder_node_with_axis(axis, name)?;
        Ok(Var::new(node_id, Rc::clone(&self.inner)))
    }

    /// 创建标量常数；`value`须为有限值
    pub fn constant(&self, value: f64) -> Result<Var, GraphError> {
        let node_id = self.inner.borrow_mut().new_constant_node(value, None)?;
        Ok(Var::new(node_id, Rc::clone(&self.inner)))
    }

    // ==================== 描述 ====================

    pub fn describe(&self) -> GraphDescriptor {
        self.inner.borrow().describe()
    }

    pub fn summary(&self) -> String {
        self.inner.borrow().summary()
    }
}
