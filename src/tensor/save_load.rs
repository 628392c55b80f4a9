use std::path::Path;

use ndarray::ArrayD;
use ndarray_npy::{read_npy, write_npy};

use super::Tensor;
use crate::errors::TensorError;

// 以numpy的.npy格式保存和加载张量，便于与外部参考数据互通
impl Tensor {
    /// 将张量写入.npy文件
    pub fn save_npy<P: AsRef<Path>>(&self, path: P) -> Result<(), TensorError> {
        write_npy(path, &self.data).map_err(|e| TensorError::NpyError(e.to_string()))
    }

    /// 从.npy文件加载张量（元素类型须为f64）
    pub fn load_npy<P: AsRef<Path>>(path: P) -> Result<Self, TensorError> {
        let data: ArrayD<f64> =
            read_npy(path).map_err(|e| TensorError::NpyError(e.to_string()))?;
        Ok(Self { data })
    }
}
