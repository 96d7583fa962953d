//! # Result Models Module / 结果模型模块
//!
//! This module defines the core data structures used throughout the suite
//! runner. It includes the polymorphic test outcome, the failure and
//! location substructures attached to it, diagnostic notes, and the
//! immutable per-run context threaded into every test.
//!
//! 此模块定义了整个套件运行器中使用的核心数据结构。
//! 它包括多态的测试结果、附加在结果上的失败和位置子结构、
//! 诊断注记以及传入每个测试的不可变运行上下文。

use std::time::Duration;

/// A source location attached to a single assertion failure, used only for
/// diagnostic display. The line number is optional independently of the
/// location itself; reporters omit whatever is absent.
///
/// 附加到单个断言失败的源位置，仅用于诊断显示。
/// 行号独立于位置本身是可选的；报告器会省略缺失的部分。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// The module or namespace the assertion was made in / 断言所在的模块或命名空间
    pub module: String,
    /// The source file path / 源文件路径
    pub file: String,
    /// The line number, when the caller could capture it / 调用者能捕获时的行号
    pub line: Option<u32>,
}

/// One recorded assertion mismatch. A failed test carries an ordered
/// sequence of these; multiple assertions may fail before a test concludes.
///
/// 一次记录的断言不匹配。失败的测试携带这些失败的有序序列；
/// 在测试结束之前可能有多个断言失败。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Where the assertion was made, if known / 已知时断言发生的位置
    pub location: Option<Location>,
    /// The human-readable mismatch description / 人类可读的不匹配描述
    pub message: String,
}

/// A free-form key/value diagnostic attached to a result. Notes are ordered
/// and keys may repeat; there is no uniqueness invariant.
///
/// 附加到结果的自由格式键/值诊断。注记是有序的，键可以重复；
/// 没有唯一性约束。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub key: String,
    pub value: String,
}

impl Note {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Note {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Represents the final result of a single test execution.
/// This enum captures all possible outcomes of running a test:
/// success, a skip, accumulated assertion failures, or an abort caused
/// by an unexpected fault.
///
/// 表示单个测试执行的最终结果。
/// 此枚举捕获运行测试的所有可能结果：
/// 成功、跳过、累积的断言失败，或由意外故障引起的中止。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    /// The test completed without any recorded failure.
    /// 测试完成且没有记录任何失败。
    Passed {
        /// Diagnostic notes recorded while the test ran / 测试运行时记录的诊断注记
        notes: Vec<Note>,
    },
    /// The test's work was never executed.
    /// 测试的工作从未被执行。
    Skipped,
    /// At least one assertion failed before the test concluded.
    /// 在测试结束之前至少有一个断言失败。
    Failed {
        /// Diagnostic notes recorded while the test ran / 测试运行时记录的诊断注记
        notes: Vec<Note>,
        /// The ordered assertion failures; non-empty by contract, but
        /// reporters tolerate an empty list without panicking.
        /// 有序的断言失败；按约定非空，但报告器容忍空列表而不会恐慌。
        failures: Vec<Failure>,
    },
    /// An unexpected fault interrupted the test.
    /// 意外故障中断了测试。
    Aborted {
        /// Diagnostic notes recorded before the fault / 故障前记录的诊断注记
        notes: Vec<Note>,
        /// A best-effort description of the fault / 对故障的尽力描述
        message: String,
    },
}

impl TestResult {
    /// A `Passed` result with no notes.
    pub fn passed() -> Self {
        TestResult::Passed { notes: Vec::new() }
    }

    /// Checks if the result counts against the run's exit status.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            TestResult::Failed { .. } | TestResult::Aborted { .. }
        )
    }

    /// The uppercase status keyword used by the text and console reporters.
    /// 文本和控制台报告器使用的大写状态关键字。
    pub fn status_str(&self) -> &'static str {
        match self {
            TestResult::Passed { .. } => "PASSED",
            TestResult::Skipped => "SKIPPED",
            TestResult::Failed { .. } => "FAILED",
            TestResult::Aborted { .. } => "ABORTED",
        }
    }

    /// The lowercase result kind used by the JSON and XML reporters.
    /// JSON 和 XML 报告器使用的小写结果类型。
    pub fn kind_str(&self) -> &'static str {
        match self {
            TestResult::Passed { .. } => "passed",
            TestResult::Skipped => "skipped",
            TestResult::Failed { .. } => "failed",
            TestResult::Aborted { .. } => "aborted",
        }
    }

    /// Gets the notes attached to the result. Returns an empty slice for
    /// `Skipped`, which carries none.
    pub fn notes(&self) -> &[Note] {
        match self {
            TestResult::Passed { notes }
            | TestResult::Failed { notes, .. }
            | TestResult::Aborted { notes, .. } => notes,
            TestResult::Skipped => &[],
        }
    }
}

/// Immutable per-run configuration threaded into every test invocation.
///
/// 传入每个测试调用的不可变运行配置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunContext {
    /// The numeric seed for this run, chosen once by the driver.
    /// 本次运行的数字种子，由驱动层选择一次。
    pub seed: u64,
    /// An optional soft time bound a test body may consult.
    /// 测试体可以参考的可选软时间界限。
    pub timeout: Option<Duration>,
}

impl RunContext {
    pub fn new(seed: u64, timeout: Option<Duration>) -> Self {
        RunContext { seed, timeout }
    }
}

/// One completed test run: the qualified name paired with its final result.
/// This is the row type every reporter consumes.
///
/// 一次完成的测试运行：限定名称与其最终结果的配对。
/// 这是每个报告器消费的行类型。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRun {
    pub name: String,
    pub result: TestResult,
}

impl TestRun {
    pub fn new(name: impl Into<String>, result: TestResult) -> Self {
        TestRun {
            name: name.into(),
            result,
        }
    }
}
