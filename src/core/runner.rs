//! # Test Runner Module / 测试运行器模块
//!
//! This module executes a single runnable test against a run context,
//! producing exactly one result. A panic escaping the test body is captured
//! and converted to an `Aborted` result instead of crashing the runner or
//! terminating the remaining tests.
//!
//! 此模块针对运行上下文执行单个可运行测试，恰好产生一个结果。
//! 从测试体逃逸的 panic 会被捕获并转换为 `Aborted` 结果，
//! 而不会使运行器崩溃或终止剩余的测试。

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::core::models::{RunContext, TestResult};
use crate::core::suite::Test;

/// Runs one test to completion.
///
/// Never propagates a panic out of this call: an unexpected fault during
/// execution becomes `Aborted` with a best-effort message, while assertion
/// failures the body recorded itself come back as `Failed`. No retries are
/// performed here; retry policy belongs to whoever builds the suite tree.
///
/// 将一个测试运行至完成。
///
/// 永远不会从此调用传播 panic：执行期间的意外故障会变为带有尽力
/// 描述消息的 `Aborted`，而测试体自己记录的断言失败则以 `Failed`
/// 返回。此处不执行重试；重试策略属于构建套件树的一方。
pub fn run_test(test: &Test, context: &RunContext) -> TestResult {
    match panic::catch_unwind(AssertUnwindSafe(|| test.invoke(context))) {
        Ok(result) => result,
        Err(payload) => TestResult::Aborted {
            notes: Vec::new(),
            message: panic_message(payload),
        },
    }
}

/// Extracts a human-readable message from a panic payload.
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "test aborted with a non-string panic payload".to_string()
    }
}

/// Wraps a test in a conditional skip.
///
/// The predicate is evaluated at run time, not at tree-construction time.
/// When it returns `true` the wrapped test's work is never invoked and the
/// outcome is `Skipped`; otherwise the wrapped test runs and its own result
/// is returned unchanged.
///
/// 将测试包装为条件跳过。
///
/// 谓词在运行时求值，而不是在构建树时。当它返回 `true` 时，
/// 被包装测试的工作永远不会被调用，结果为 `Skipped`；
/// 否则被包装的测试运行，并原样返回其自身的结果。
pub fn skip_if<P>(predicate: P, test: Test) -> Test
where
    P: Fn() -> bool + Send + Sync + 'static,
{
    Test::new(move |context| {
        if predicate() {
            TestResult::Skipped
        } else {
            test.invoke(context)
        }
    })
}
