//! # Assertion Context Module / 断言上下文模块
//!
//! This module provides the failure-accumulating context a test body threads
//! through a sequence of assertions. Non-fatal assertions record a mismatch
//! and continue; fatal assertions additionally signal the body to stop.
//! Consuming the context yields the test's final result.
//!
//! 此模块提供测试体在一系列断言中传递的失败累积上下文。
//! 非致命断言记录不匹配并继续；致命断言还会通知测试体停止。
//! 消费上下文会产生测试的最终结果。

use std::fmt;

use crate::core::models::{Failure, Location, Note, TestResult};

/// Signal returned by a fatal assertion: keep going, or stop this test now.
/// 致命断言返回的信号：继续，或立即停止此测试。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckFlow {
    Continue,
    Stop,
}

impl CheckFlow {
    pub fn is_stop(self) -> bool {
        self == CheckFlow::Stop
    }
}

/// A mutable accumulator collecting notes and assertion failures over the
/// course of one test body.
///
/// 在一个测试体的执行过程中收集注记和断言失败的可变累积器。
#[derive(Debug, Default)]
pub struct Checks {
    notes: Vec<Note>,
    failures: Vec<Failure>,
}

impl Checks {
    pub fn new() -> Self {
        Checks::default()
    }

    /// Records a diagnostic note. Notes keep their recording order and keys
    /// may repeat.
    pub fn note(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.notes.push(Note::new(key, value));
    }

    /// Non-fatal assertion: records a failure when `ok` is false and lets
    /// the body continue either way. Returns `ok` for convenience.
    ///
    /// 非致命断言：当 `ok` 为假时记录失败，无论如何都让测试体继续。
    /// 为方便起见返回 `ok`。
    pub fn expect(
        &mut self,
        ok: bool,
        message: impl Into<String>,
        location: Option<Location>,
    ) -> bool {
        if !ok {
            self.failures.push(Failure {
                location,
                message: message.into(),
            });
        }
        ok
    }

    /// Fatal assertion: like [`Checks::expect`], but returns a short-circuit
    /// signal the body should honor by returning early.
    ///
    /// 致命断言：类似 [`Checks::expect`]，但返回一个短路信号，
    /// 测试体应通过提前返回来遵守它。
    pub fn require(
        &mut self,
        ok: bool,
        message: impl Into<String>,
        location: Option<Location>,
    ) -> CheckFlow {
        if self.expect(ok, message, location) {
            CheckFlow::Continue
        } else {
            CheckFlow::Stop
        }
    }

    /// Asserts that two values compare equal.
    pub fn expect_eq<T>(&mut self, actual: &T, expected: &T, location: Option<Location>) -> bool
    where
        T: PartialEq + fmt::Debug,
    {
        if actual == expected {
            true
        } else {
            self.expect(
                false,
                format!("expected {:?}, got {:?}", expected, actual),
                location,
            )
        }
    }

    /// Asserts that two values compare unequal.
    pub fn expect_ne<T>(&mut self, actual: &T, unexpected: &T, location: Option<Location>) -> bool
    where
        T: PartialEq + fmt::Debug,
    {
        if actual != unexpected {
            true
        } else {
            self.expect(
                false,
                format!("expected a value other than {:?}", unexpected),
                location,
            )
        }
    }

    /// Asserts `actual > bound`.
    pub fn expect_gt<T>(&mut self, actual: &T, bound: &T, location: Option<Location>) -> bool
    where
        T: PartialOrd + fmt::Debug,
    {
        if actual > bound {
            true
        } else {
            self.expect(
                false,
                format!("expected a value greater than {:?}, got {:?}", bound, actual),
                location,
            )
        }
    }

    /// Asserts `actual >= bound`. Equality satisfies the assertion.
    /// 断言 `actual >= bound`。相等时断言成立。
    pub fn expect_ge<T>(&mut self, actual: &T, bound: &T, location: Option<Location>) -> bool
    where
        T: PartialOrd + fmt::Debug,
    {
        if actual >= bound {
            true
        } else {
            self.expect(
                false,
                format!(
                    "expected a value of at least {:?}, got {:?}",
                    bound, actual
                ),
                location,
            )
        }
    }

    /// Asserts `actual < bound`.
    pub fn expect_lt<T>(&mut self, actual: &T, bound: &T, location: Option<Location>) -> bool
    where
        T: PartialOrd + fmt::Debug,
    {
        if actual < bound {
            true
        } else {
            self.expect(
                false,
                format!("expected a value less than {:?}, got {:?}", bound, actual),
                location,
            )
        }
    }

    /// Asserts `actual <= bound`. Equality satisfies the assertion.
    pub fn expect_le<T>(&mut self, actual: &T, bound: &T, location: Option<Location>) -> bool
    where
        T: PartialOrd + fmt::Debug,
    {
        if actual <= bound {
            true
        } else {
            self.expect(
                false,
                format!("expected a value of at most {:?}, got {:?}", bound, actual),
                location,
            )
        }
    }

    /// Consumes the context, producing the test's final result: `Passed`
    /// when no failure was recorded, `Failed` otherwise.
    ///
    /// 消费上下文，产生测试的最终结果：未记录失败时为 `Passed`，
    /// 否则为 `Failed`。
    pub fn finish(self) -> TestResult {
        if self.failures.is_empty() {
            TestResult::Passed { notes: self.notes }
        } else {
            TestResult::Failed {
                notes: self.notes,
                failures: self.failures,
            }
        }
    }
}

/// Captures the call site as a [`Location`] using `module_path!`, `file!`,
/// and `line!`.
///
/// 使用 `module_path!`、`file!` 和 `line!` 将调用点捕获为 [`Location`]。
#[macro_export]
macro_rules! here {
    () => {
        $crate::core::models::Location {
            module: module_path!().to_string(),
            file: file!().to_string(),
            line: Some(line!()),
        }
    };
}
