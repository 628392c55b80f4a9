use crate::errors::TensorError;
use crate::nn::Axes;
use crate::tensor::Tensor;
use ndarray::{Array, IxDyn};

impl Tensor {
    /// 把按`from`轴排布的数据，重排并广播为按`to`轴排布。
    ///
    /// - `from`中的每个轴都必须出现在`to`中，且长度一致；
    /// - `to`中多出来的轴通过广播（复制）补齐。
    ///
    /// 这是按轴名（而非按位置）做元素级运算的基础。
    pub fn align_to(&self, from: &Axes, to: &Axes) -> Result<Self, TensorError> {
        if self.shape() != from.lengths().as_slice() {
            return Err(TensorError::AlignError(format!(
                "张量形状{:?}与轴{from}不符",
                self.shape()
            )));
        }
        if from == to {
            return Ok(self.clone());
        }

        let mut positions = Vec::with_capacity(from.len());
        for axis in from {
            match to.get(axis.name()) {
                Some(target) if target.length() == axis.length() => {
                    positions.push(to.position(axis.name()).unwrap_or_default());
                }
                Some(target) => {
                    return Err(TensorError::AlignError(format!(
                        "轴`{}`长度不一致：{} vs {}",
                        axis.name(),
                        axis.length(),
                        target.length()
                    )));
                }
                None => {
                    return Err(TensorError::AlignError(format!(
                        "轴`{}`不在目标轴{to}中",
                        axis.name()
                    )));
                }
            }
        }

        // 1. 按目标顺序重排已有的轴
        let mut order: Vec<usize> = (0..from.len()).collect();
        order.sort_by_key(|&i| positions[i]);
        let permuted = self.data.view().permuted_axes(IxDyn(&order));

        // 2. 为缺失的轴插入长度为1的维
        let expanded_shape: Vec<usize> = to
            .iter()
            .map(|axis| if from.contains(axis) { axis.length() } else { 1 })
            .collect();
        let expanded = Array::from_shape_vec(
            IxDyn(&expanded_shape),
            permuted.iter().copied().collect(),
        )
        .map_err(|e| TensorError::AlignError(e.to_string()))?;

        // 3. 广播到目标形状
        let target_shape = to.lengths();
        let broadcast = expanded.broadcast(IxDyn(&target_shape)).ok_or_else(|| {
            TensorError::AlignError(format!(
                "无法将形状{expanded_shape:?}广播为{target_shape:?}"
            ))
        })?;
        Ok(Self::from_array(broadcast.to_owned()))
    }

    /// 求`keep`轴在`axes`中的补集对应的维下标，用于归约
    pub(crate) fn reduction_indices(axes: &Axes, keep: &Axes) -> Vec<usize> {
        axes.iter()
            .enumerate()
            .filter(|(_, axis)| !keep.contains(axis))
            .map(|(i, _)| i)
            .collect()
    }
}
