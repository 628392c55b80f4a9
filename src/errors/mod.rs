/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 张量层的错误类型
 */

use std::fmt::{self, Display};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorError {
    // 张量二元运算
    #[error(
        "形状不一致，故无法{operator}：第一个张量的形状为{tensor1_shape:?}，第二个张量的形状为{tensor2_shape:?}"
    )]
    OperatorError {
        operator: Operator,
        tensor1_shape: Vec<usize>,
        tensor2_shape: Vec<usize>,
    },
    #[error("数据长度{data_len}与形状{shape:?}不匹配")]
    DataShapeMismatch { data_len: usize, shape: Vec<usize> },
    #[error("张量阶数为{dimension}，不存在第{axis}维")]
    AxisOutOfRange { axis: usize, dimension: usize },
    #[error("无法按轴对齐：{0}")]
    AlignError(String),
    #[error("npy文件读写失败：{0}")]
    NpyError(String),
}

/// 张量的二元运算符
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    AllClose,
}
impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operation_name = match self {
            Self::Add => "相加",
            Self::Sub => "相减",
            Self::Mul => "相乘",
            Self::Div => "相除",
            Self::AllClose => "近似比较",
        };
        write!(f, "{operation_name}")
    }
}
