/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : Graph 模块：符号计算图
 *
 * 公开 API：
 * - `Graph`: 用户级句柄
 * - `GraphInner`: 底层实现（节点仓库）
 * - `GraphError`: 错误类型
 */

mod error;
mod handle;
mod inner;

pub use error::GraphError;
pub use handle::Graph;
pub use inner::GraphInner;
