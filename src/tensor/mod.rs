use ndarray::{Array, ArrayD, IxDyn};
use rand::distributions::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use crate::errors::TensorError;

mod ops {
    pub mod align;
    pub mod arith;
    pub mod elementwise;
    pub mod reduce;
}

mod property;
mod save_load;


/// 定义张量的结构体。其可以是标量、向量、矩阵或更高维度的数组。
/// 注：形状为`[]`的张量是标量；
/// 张量本身不携带轴名，轴名信息由计算图中的节点（见`nn::Axes`）维护。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tensor {
    data: ArrayD<f64>,
}

impl Tensor {
    /// 创建一个张量，若为标量，`shape`为`[]`；
    /// 若为向量，`shape`可以是[n]；
    /// 若为矩阵，`shape`可以是[n,m]；
    /// 若为更高维度的数组，`shape`可以是[c,n,m,...]；
    /// 注：`data`的长度必须和`shape`中所有元素的乘积相等，否则会panic。
    /// 需要错误处理时请用`try_new`。
    pub fn new(data: &[f64], shape: &[usize]) -> Self {
        Self::try_new(data, shape).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(data: &[f64], shape: &[usize]) -> Result<Self, TensorError> {
        Array::from_shape_vec(IxDyn(shape), data.to_vec())
            .map(|data| Self { data })
            .map_err(|_| TensorError::DataShapeMismatch {
                data_len: data.len(),
                shape: shape.to_vec(),
            })
    }

    /// 创建形状为`[n]`的向量
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self {
            data: Array::from_vec(data).into_dyn(),
        }
    }

    /// 创建形状为`[]`的标量张量
    pub fn scalar(value: f64) -> Self {
        Self {
            data: Array::from_elem(IxDyn(&[]), value),
        }
    }

    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: Array::zeros(IxDyn(shape)),
        }
    }

    pub fn ones(shape: &[usize]) -> Self {
        Self {
            data: Array::ones(IxDyn(shape)),
        }
    }

    /// 创建一个随机张量，其值在[min, max]的闭区间
    pub fn new_random(min: f64, max: f64, shape: &[usize]) -> Self {
        let mut rng = rand::thread_rng();
        let uniform = Uniform::from(min..=max);
        Self {
            data: Array::from_shape_simple_fn(IxDyn(shape), || uniform.sample(&mut rng)),
        }
    }

    pub(crate) const fn from_array(data: ArrayD<f64>) -> Self {
        Self { data }
    }
}

impl From<f64> for Tensor {
    /// 将`f64`转换为形状为`[]`的标量张量
    fn from(scalar: f64) -> Self {
        Self::scalar(scalar)
    }
}

impl From<ArrayD<f64>> for Tensor {
    fn from(data: ArrayD<f64>) -> Self {
        Self::from_array(data)
    }
}
