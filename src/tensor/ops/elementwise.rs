use crate::tensor::Tensor;

impl Tensor {
    /// 对每个元素应用`f`，返回新张量
    pub fn mapv<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        Self {
            data: self.data.mapv(f),
        }
    }

    pub fn square(&self) -> Self {
        self.mapv(|x| x * x)
    }

    /// 自然对数。非正元素按IEEE 754得到`-inf`或NaN
    pub fn ln(&self) -> Self {
        self.mapv(f64::ln)
    }

    pub fn exp(&self) -> Self {
        self.mapv(f64::exp)
    }

    /// 逐元素取`max(x, floor)`。与`numpy.maximum`一致，NaN 原样保留
    pub fn maximum(&self, floor: f64) -> Self {
        self.mapv(|x| nan_max(x, floor))
    }

    /// 安全对数：`ln(max(x, exp(limit)))`，避免对0取对数；NaN 输入仍得到 NaN
    pub fn safe_ln(&self, limit: f64) -> Self {
        let floor = limit.exp();
        self.mapv(|x| nan_max(x, floor).ln())
    }
}

// `f64::max`会丢弃 NaN 操作数，这里让 NaN 继续传播
fn nan_max(x: f64, floor: f64) -> f64 {
    if x.is_nan() { x } else { x.max(floor) }
}
