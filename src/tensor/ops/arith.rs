use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;
use ndarray::Zip;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Tensor {
    /// 逐元素二元运算：要求两个张量形状严格一致，或其中一个是标量（只含一个元素）
    pub(crate) fn binary_op<F>(&self, other: &Self, operator: Operator, f: F) -> Result<Self, TensorError>
    where
        F: Fn(f64, f64) -> f64,
    {
        let data = if self.is_same_shape(other) {
            Zip::from(&self.data)
                .and(&other.data)
                .map_collect(|&a, &b| f(a, b))
        } else if let (Some(b), false) = (other.number(), self.is_scalar()) {
            self.data.mapv(|a| f(a, b))
        } else if let Some(a) = self.number() {
            other.data.mapv(|b| f(a, b))
        } else {
            return Err(TensorError::OperatorError {
                operator,
                tensor1_shape: self.shape().to_vec(),
                tensor2_shape: other.shape().to_vec(),
            });
        };
        Ok(Self { data })
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, TensorError> {
        self.binary_op(other, Operator::Add, |a, b| a + b)
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, TensorError> {
        self.binary_op(other, Operator::Sub, |a, b| a - b)
    }

    pub fn try_mul(&self, other: &Self) -> Result<Self, TensorError> {
        self.binary_op(other, Operator::Mul, |a, b| a * b)
    }

    /// 逐元素相除，除数为0时按IEEE 754得到无穷或NaN
    pub fn try_div(&self, other: &Self) -> Result<Self, TensorError> {
        self.binary_op(other, Operator::Div, |a, b| a / b)
    }
}

// 张量间的运算符在形状不兼容时直接panic，需要错误处理时请用`try_*`系列方法
macro_rules! impl_tensor_op {
    ($trait:ident, $method:ident, $try_method:ident, $op:tt) => {
        impl $trait<&Tensor> for &Tensor {
            type Output = Tensor;

            fn $method(self, other: &Tensor) -> Tensor {
                self.$try_method(other).unwrap_or_else(|e| panic!("{e}"))
            }
        }

        impl $trait for Tensor {
            type Output = Tensor;

            fn $method(self, other: Tensor) -> Tensor {
                &self $op &other
            }
        }

        impl $trait<&Tensor> for Tensor {
            type Output = Tensor;

            fn $method(self, other: &Tensor) -> Tensor {
                &self $op other
            }
        }

        impl $trait<Tensor> for &Tensor {
            type Output = Tensor;

            fn $method(self, other: Tensor) -> Tensor {
                self $op &other
            }
        }

        impl $trait<f64> for &Tensor {
            type Output = Tensor;

            fn $method(self, scalar: f64) -> Tensor {
                Tensor {
                    data: self.data.mapv(|a| a $op scalar),
                }
            }
        }

        impl $trait<f64> for Tensor {
            type Output = Tensor;

            fn $method(self, scalar: f64) -> Tensor {
                &self $op scalar
            }
        }

        impl $trait<&Tensor> for f64 {
            type Output = Tensor;

            fn $method(self, tensor: &Tensor) -> Tensor {
                Tensor {
                    data: tensor.data.mapv(|b| self $op b),
                }
            }
        }

        impl $trait<Tensor> for f64 {
            type Output = Tensor;

            fn $method(self, tensor: Tensor) -> Tensor {
                self $op &tensor
            }
        }
    };
}

impl_tensor_op!(Add, add, try_add, +);
impl_tensor_op!(Sub, sub, try_sub, -);
impl_tensor_op!(Mul, mul, try_mul, *);
impl_tensor_op!(Div, div, try_div, /);

impl Neg for &Tensor {
    type Output = Tensor;

    fn neg(self) -> Tensor {
        Tensor {
            data: self.data.mapv(|a| -a),
        }
    }
}

impl Neg for Tensor {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}
