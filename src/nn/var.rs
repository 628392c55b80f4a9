/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : Var - 符号张量句柄，支持算子重载和链式调用
 */

use super::graph::{Graph, GraphInner};
use super::{Axes, GraphError, NodeId};
use std::cell::RefCell;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::rc::Rc;

/// 符号张量句柄 - 携带图引用，支持算子重载和链式调用
///
/// # 使用示例
/// ```
/// use only_graph::nn::{Axis, Graph};
///
/// let graph = Graph::new();
/// let n = Axis::new("N", 4).unwrap();
/// let y = graph.placeholder_with_axis(&n, Some("y")).unwrap();
/// let t = graph.placeholder_with_axis(&n, Some("t")).unwrap();
/// let diff = &y - &t;
/// let half = &diff / 2.0;
/// assert_eq!(half.axes(), y.axes());
/// ```
#[derive(Clone)]
pub struct Var {
    id: NodeId,
    graph: Rc<RefCell<GraphInner>>,
}

impl std::fmt::Debug for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Var").field("id", &self.id).finish()
    }
}

impl Var {
    pub(crate) const fn new(id: NodeId, graph: Rc<RefCell<GraphInner>>) -> Self {
        Self { id, graph }
    }

    pub const fn node_id(&self) -> NodeId {
        self.id
    }

    pub(crate) const fn graph(&self) -> &Rc<RefCell<GraphInner>> {
        &self.graph
    }

    /// 获取 Var 所属的 Graph handle
    pub fn get_graph(&self) -> Graph {
        Graph::from_rc(Rc::clone(&self.graph))
    }

    /// 检查两个 Var 是否来自同一个 Graph
    pub fn same_graph(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.graph, &other.graph)
    }

    /// 节点输出的轴（建图时已确定）
    pub fn axes(&self) -> Axes {
        self.graph
            .borrow()
            .get_node_axes(self.id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn name(&self) -> String {
        self.graph
            .borrow()
            .get_node_name(self.id)
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    pub fn is_placeholder(&self) -> bool {
        self.graph.borrow().is_placeholder(self.id).unwrap_or(false)
    }

    pub(crate) fn check_same_graph(&self, other: &Self, op_name: &str) -> Result<(), GraphError> {
        if self.same_graph(other) {
            Ok(())
        } else {
            Err(GraphError::InvalidOperation(format!(
                "不能对来自不同 Graph 的 Var 进行{op_name}"
            )))
        }
    }

    pub(crate) fn wrap(&self, id: NodeId) -> Self {
        Self::new(id, Rc::clone(&self.graph))
    }

    /// 在同一个图中创建标量常数
    pub fn constant_like(&self, value: f64) -> Result<Self, GraphError> {
        let id = self.graph.borrow_mut().new_constant_node(value, None)?;
        Ok(self.wrap(id))
    }

    // ==================== 安全版本（返回 Result）====================

    /// 安全的加法（返回 Result）
    pub fn try_add(&self, other: &Self) -> Result<Self, GraphError> {
        self.check_same_graph(other, "加法")?;
        let id = self.graph.borrow_mut().new_add_node(self.id, other.id, None)?;
        Ok(self.wrap(id))
    }

    /// 安全的减法（返回 Result）
    pub fn try_sub(&self, other: &Self) -> Result<Self, GraphError> {
        self.check_same_graph(other, "减法")?;
        let id = self
            .graph
            .borrow_mut()
            .new_subtract_node(self.id, other.id, None)?;
        Ok(self.wrap(id))
    }

    /// 安全的元素级乘法（返回 Result）
    pub fn try_mul(&self, other: &Self) -> Result<Self, GraphError> {
        self.check_same_graph(other, "乘法")?;
        let id = self
            .graph
            .borrow_mut()
            .new_multiply_node(self.id, other.id, None)?;
        Ok(self.wrap(id))
    }

    /// 安全的除法（返回 Result）
    pub fn try_div(&self, other: &Self) -> Result<Self, GraphError> {
        self.check_same_graph(other, "除法")?;
        let id = self
            .graph
            .borrow_mut()
            .new_divide_node(self.id, other.id, None)?;
        Ok(self.wrap(id))
    }

    /// 取负
    pub fn try_neg(&self) -> Result<Self, GraphError> {
        let id = self.graph.borrow_mut().new_negative_node(self.id, None)?;
        Ok(self.wrap(id))
    }
}

// ==================== 算子重载 ====================
// 运算符无法返回 Result，出错时直接 panic；需要错误处理时请用 try_* 系列

macro_rules! impl_var_op {
    ($trait:ident, $method:ident, $try_method:ident, $op:tt, $msg:literal) => {
        impl $trait for &Var {
            type Output = Var;

            fn $method(self, other: &Var) -> Var {
                self.$try_method(other).unwrap_or_else(|e| panic!("{}：{e}", $msg))
            }
        }

        impl $trait for Var {
            type Output = Self;

            fn $method(self, other: Self) -> Self {
                &self $op &other
            }
        }

        impl $trait<Var> for &Var {
            type Output = Var;

            fn $method(self, other: Var) -> Var {
                self $op &other
            }
        }

        impl $trait<&Self> for Var {
            type Output = Self;

            fn $method(self, other: &Self) -> Self {
                &self $op other
            }
        }

        // Var 与纯数运算：纯数作为标量常数节点加入图中
        impl $trait<f64> for &Var {
            type Output = Var;

            fn $method(self, scalar: f64) -> Var {
                let constant = self
                    .constant_like(scalar)
                    .unwrap_or_else(|e| panic!("创建常数节点失败：{e}"));
                self $op &constant
            }
        }

        impl $trait<f64> for Var {
            type Output = Self;

            fn $method(self, scalar: f64) -> Self {
                &self $op scalar
            }
        }

        impl $trait<&Var> for f64 {
            type Output = Var;

            fn $method(self, var: &Var) -> Var {
                let constant = var
                    .constant_like(self)
                    .unwrap_or_else(|e| panic!("创建常数节点失败：{e}"));
                &constant $op var
            }
        }

        impl $trait<Var> for f64 {
            type Output = Var;

            fn $method(self, var: Var) -> Var {
                self $op &var
            }
        }
    };
}

impl_var_op!(Add, add, try_add, +, "Var 加法失败");
impl_var_op!(Sub, sub, try_sub, -, "Var 减法失败");
impl_var_op!(Mul, mul, try_mul, *, "Var 乘法失败");
impl_var_op!(Div, div, try_div, /, "Var 除法失败");

impl Neg for &Var {
    type Output = Var;

    fn neg(self) -> Var {
        self.try_neg()
            .unwrap_or_else(|e| panic!("创建取反节点失败：{e}"))
    }
}

impl Neg for Var {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}
