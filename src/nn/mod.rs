/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 负责符号计算图（symbolic graph）的构建
 */

mod axes;
pub mod costs;
mod descriptor;
mod graph;
mod nodes;
mod var;
mod var_ops;

pub use axes::{Axes, Axis};
pub use descriptor::{GraphDescriptor, NodeDescriptor, NodeTypeDescriptor};
pub use graph::{Graph, GraphError, GraphInner};
pub use nodes::NodeId;
pub use var::Var;
pub use var_ops::{CrossEntropyOptions, VarLossOps, VarMathOps, VarReduceOps};

#[cfg(test)]
mod tests;
