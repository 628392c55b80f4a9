use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;
use ndarray::{Axis, Zip};

impl Tensor {
    /// 对张量中的所有元素求和并返回一个形状为`[]`的标量
    pub fn sum_all(&self) -> Self {
        Self::scalar(self.data.sum())
    }

    /// 沿给定的若干维求和，这些维会被移除（不保留长度为1的维）
    pub fn sum_axes(&self, axes: &[usize]) -> Result<Self, TensorError> {
        let mut axes = axes.to_vec();
        axes.sort_unstable();
        axes.dedup();
        if let Some(&axis) = axes.iter().find(|&&a| a >= self.dimension()) {
            return Err(TensorError::AxisOutOfRange {
                axis,
                dimension: self.dimension(),
            });
        }
        // 从高维往低维归约，保证剩余维的下标不变
        let mut data = self.data.clone();
        for &axis in axes.iter().rev() {
            data = data.sum_axis(Axis(axis));
        }
        Ok(Self { data })
    }

    /// 沿给定的若干维求均值
    pub fn mean_axes(&self, axes: &[usize]) -> Result<Self, TensorError> {
        let summed = self.sum_axes(axes)?;
        let count = (self.size() / summed.size().max(1)).max(1);
        Ok(&summed / count as f64)
    }

    /// 参照`numpy.testing.assert_allclose`：逐元素检查`|a - b| <= atol + rtol * |b|`，
    /// 其中`b`取自`expected`。形状须一致，或其中一方只含一个元素（例如`keepdims=True`
    /// 得到的`[1]`与标量`[]`比较）
    pub fn allclose(&self, expected: &Self, rtol: f64, atol: f64) -> Result<bool, TensorError> {
        let close = |a: f64, b: f64| {
            if a == b {
                // 同号无穷
                return true;
            }
            (a - b).abs() <= atol + rtol * b.abs()
        };
        if self.is_same_shape(expected) {
            let mut all = true;
            Zip::from(&self.data)
                .and(&expected.data)
                .for_each(|&a, &b| all &= close(a, b));
            Ok(all)
        } else if let Some(b) = expected.number() {
            Ok(self.data.iter().all(|&a| close(a, b)))
        } else if let Some(a) = self.number() {
            Ok(expected.data.iter().all(|&b| close(a, b)))
        } else {
            Err(TensorError::OperatorError {
                operator: Operator::AllClose,
                tensor1_shape: self.shape().to_vec(),
                tensor2_shape: expected.shape().to_vec(),
            })
        }
    }
}
