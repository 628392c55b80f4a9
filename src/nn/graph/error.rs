/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : Graph 模块（含执行器）的错误类型
 */

use crate::errors::TensorError;
use crate::nn::{Axes, NodeId};
use thiserror::Error;

/// Graph 构建与执行错误类型
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("非法的轴：{0}")]
    InvalidAxis(String),
    #[error("轴名`{0}`重复")]
    DuplicateAxis(String),
    #[error("轴不匹配：左侧{left}，右侧{right}。{message}")]
    AxesMismatch {
        left: Axes,
        right: Axes,
        message: String,
    },
    #[error("节点{0:?}不存在")]
    NodeNotFound(NodeId),
    #[error("节点名`{0}`重复")]
    DuplicateNodeName(String),
    #[error("非法操作：{0}")]
    InvalidOperation(String),
    #[error("节点`{0}`不是占位符，不能作为执行器的参数")]
    NotAPlaceholder(String),
    #[error("占位符`{0}`未绑定：它被输出依赖，但没有出现在执行器的参数列表中")]
    UnboundPlaceholder(String),
    #[error("输入数量不匹配：需要{expected}个，实际得到{got}个")]
    InputCountMismatch { expected: usize, got: usize },
    #[error("形状不匹配：预期{expected:?}，实际得到{got:?}。{message}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
        message: String,
    },
    #[error("节点`{0}`的计算结果含有非有限值（NaN或无穷）")]
    NonFinite(String),
    #[error("计算错误：{0}")]
    ComputationError(String),
    #[error("配置错误：{0}")]
    Config(String),
    #[error(transparent)]
    Tensor(#[from] TensorError),
}
