mod graph_basic;
mod node_elementwise;

use crate::executor::ExecutorFactory;
use crate::nn::{Axes, Axis, Var};
use crate::tensor::Tensor;

pub(super) fn axis(name: &str, length: usize) -> Axis {
    Axis::new(name, length).unwrap()
}

pub(super) fn axes(list: &[(&str, usize)]) -> Axes {
    Axes::new(list.iter().map(|&(name, length)| axis(name, length)).collect()).unwrap()
}

/// 编译单个输出并用给定输入求值
pub(super) fn evaluate(output: &Var, params: &[&Var], inputs: &[Tensor]) -> Tensor {
    ExecutorFactory::new()
        .executor(&[output], params)
        .unwrap()
        .call_one(inputs)
        .unwrap()
}
