//! # Only Graph
//!
//! `only_graph`用纯rust实现了一个基于**命名轴**的小型符号计算图：
//! 先以占位符搭建表达式，再经执行器工厂编译为可调用的数值函数。
//! 内置常用代价函数：二分类/多分类交叉熵（安全对数）、平方误差和与均方误差。
//!

pub mod errors;
pub mod executor;
pub mod nn;
pub mod tensor;
pub mod utils;

#[doc(hidden)]
pub use paste;
