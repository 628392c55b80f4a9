use crate::nn::Var;

/// 元素级数学函数扩展 trait
pub trait VarMathOps {
    /// 逐元素平方：x^2
    fn square(&self) -> Var;

    /// 逐元素自然对数
    fn log(&self) -> Var;

    /// 逐元素指数：e^x
    fn exp(&self) -> Var;

    /// 安全对数：log(max(x, exp(limit)))，`limit`须为有限值
    fn safelog(&self, limit: f64) -> Var;
}

impl VarMathOps for Var {
    fn square(&self) -> Var {
        let id = self
            .graph()
            .borrow_mut()
            .new_square_node(self.node_id(), None)
            .expect("创建 Square 节点失败");
        self.wrap(id)
    }

    fn log(&self) -> Var {
        let id = self
            .graph()
            .borrow_mut()
            .new_log_node(self.node_id(), None)
            .expect("创建 Log 节点失败");
        self.wrap(id)
    }

    fn exp(&self) -> Var {
        let id = self
            .graph()
            .borrow_mut()
            .new_exp_node(self.node_id(), None)
            .expect("创建 Exp 节点失败");
        self.wrap(id)
    }

    fn safelog(&self, limit: f64) -> Var {
        let id = self
            .graph()
            .borrow_mut()
            .new_safe_log_node(self.node_id(), limit, None)
            .expect("创建 SafeLog 节点失败");
        self.wrap(id)
    }
}
