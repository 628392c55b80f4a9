/// 错误断言宏 - 灵活粒度验证 Result 错误
///
/// # 用法
/// - `assert_err!(expr)`：只验证是 Err
/// - `assert_err!(expr, Variant(literal))`：验证错误类型 + 精确消息（String 变体）
/// - `assert_err!(expr, Pattern { .. })`：验证错误类型
/// - `assert_err!(expr, Pattern(binding) if condition)`：验证类型 + 条件
///
/// # 示例
/// ```ignore
/// assert_err!(result);
/// assert_err!(result, GraphError::UnboundPlaceholder("t"));
/// assert_err!(result, GraphError::AxesMismatch { .. });
/// assert_err!(result, GraphError::InvalidOperation(msg) if msg.contains("不同 Graph"));
/// ```
#[macro_export]
macro_rules! assert_err {
    // 只验证是 Err
    ($expr:expr) => {
        assert!($expr.is_err(), "预期 Err，实际得到 {:?}", $expr);
    };
    // 简洁语法：Variant(字符串字面量) - 精确匹配 String 内容
    ($expr:expr, $err_type:ident :: $variant:ident ( $expected:literal )) => {
        match &$expr {
            Err($err_type::$variant(actual)) => assert_eq!(
                actual, $expected,
                "错误消息不匹配：预期 `{}`，实际得到 `{}`",
                $expected, actual
            ),
            Err(e) => panic!(
                "错误类型不匹配：预期 `{}::{}`，实际得到 `{:?}`",
                stringify!($err_type), stringify!($variant), e
            ),
            Ok(v) => panic!(
                "预期 Err({}::{})，实际得到 Ok({:?})",
                stringify!($err_type), stringify!($variant), v
            ),
        }
    };
    // 通用模式匹配（可带 if 条件）
    ($expr:expr, $pattern:pat $(if $cond:expr)?) => {
        match &$expr {
            Err($pattern) $(if $cond)? => {}
            Err(e) => panic!(
                "错误不符合模式 `{}`，实际得到 `{:?}`",
                stringify!($pattern), e
            ),
            Ok(v) => panic!(
                "预期 Err({})，实际得到 Ok({:?})",
                stringify!($pattern), v
            ),
        }
    };
}

#[macro_export]
macro_rules! assert_panic {
    ($expr:expr) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $expr)) {
            Ok(_) => panic!("表达式没有触发panic"),
            Err(_) => (),
        }
    };
}

/// 参照`numpy.testing.assert_allclose`断言两个张量近似相等
///
/// `assert_allclose!(actual, expected, rtol)`或`assert_allclose!(actual, expected, rtol, atol)`，
/// 比较规则为`|actual - expected| <= atol + rtol * |expected|`
#[macro_export]
macro_rules! assert_allclose {
    ($actual:expr, $expected:expr, $rtol:expr) => {
        $crate::assert_allclose!($actual, $expected, $rtol, 0.0)
    };
    ($actual:expr, $expected:expr, $rtol:expr, $atol:expr) => {{
        let actual: &$crate::tensor::Tensor = &$actual;
        let expected: &$crate::tensor::Tensor = &$expected;
        match actual.allclose(expected, $rtol, $atol) {
            Ok(true) => {}
            Ok(false) => panic!(
                "张量不满足近似相等（rtol={}, atol={}）：\n实际：{:?}\n预期：{:?}",
                $rtol,
                $atol,
                actual.to_vec(),
                expected.to_vec()
            ),
            Err(e) => panic!("无法比较：{e}"),
        }
    }};
}

/// 为同一个代价函数生成“常规输入”与“边界输入”两个测试。
///
/// ```ignore
/// cost_tests!(sum_squared, check_sum_squared, normal = normal(1e-6), limits = limits(1e-7));
/// ```
/// 会生成`test_sum_squared`和`test_sum_squared_limits`，
/// 分别以`normal`/`limits`的值调用`check_sum_squared`。
#[macro_export]
macro_rules! cost_tests {
    ($name:ident, $check:path, normal = $normal:expr, limits = $limits:expr) => {
        $crate::paste::paste! {
            #[test]
            fn [<test_ $name>]() {
                $check($normal);
            }

            #[test]
            fn [<test_ $name _limits>]() {
                $check($limits);
            }
        }
    };
}
