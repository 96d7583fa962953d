//! # Statistics Summary Module / 统计摘要模块
//!
//! This module reduces a result list to per-outcome counts and renders the
//! standard summary sentence shared by the text reporter, the console
//! stream, and the process-level exit decision.
//!
//! 此模块将结果列表归约为按结果分类的计数，并渲染由文本报告器、
//! 控制台流和进程级退出决定共享的标准摘要语句。

use crate::core::models::{TestResult, TestRun};

/// Per-outcome counts for one run.
/// 一次运行的按结果分类计数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub passed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub aborted: usize,
}

impl Counts {
    pub fn total(&self) -> usize {
        self.passed + self.skipped + self.failed + self.aborted
    }

    /// The exit-status predicate: no failures and no aborts.
    /// 退出状态判定：没有失败也没有中止。
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.aborted == 0
    }
}

/// Counts the outcomes in one pass. Commutative in result order.
/// 一次遍历统计结果。与结果顺序无关。
pub fn aggregate(runs: &[TestRun]) -> Counts {
    let mut counts = Counts::default();
    for run in runs {
        match run.result {
            TestResult::Passed { .. } => counts.passed += 1,
            TestResult::Skipped => counts.skipped += 1,
            TestResult::Failed { .. } => counts.failed += 1,
            TestResult::Aborted { .. } => counts.aborted += 1,
        }
    }
    counts
}

/// Renders the standard summary sentence.
///
/// The prefix is `"PASS: "` when nothing failed or aborted, `"FAIL: "`
/// otherwise, followed by the run total and comma-separated clauses: passed
/// is always shown, skipped/failed/aborted only when nonzero. The same
/// string appears verbatim at the end of the text report and as the final
/// console line.
///
/// 渲染标准摘要语句。
///
/// 当没有失败或中止时前缀为 `"PASS: "`，否则为 `"FAIL: "`，
/// 后跟运行总数和逗号分隔的子句：通过数总是显示，
/// 跳过/失败/中止仅在非零时显示。同一字符串逐字出现在
/// 文本报告的末尾和最终的控制台行中。
pub fn format_summary(counts: &Counts) -> String {
    let mut line = String::new();
    line.push_str(if counts.all_passed() { "PASS: " } else { "FAIL: " });
    line.push_str(&format!("{} run", plural(counts.total())));
    line.push_str(&format!(", {} passed", plural(counts.passed)));
    if counts.skipped > 0 {
        line.push_str(&format!(", {} skipped", plural(counts.skipped)));
    }
    if counts.failed > 0 {
        line.push_str(&format!(", {} failed", plural(counts.failed)));
    }
    if counts.aborted > 0 {
        line.push_str(&format!(", {} aborted", plural(counts.aborted)));
    }
    line
}

/// `"1 test"` / `"<n> tests"`.
fn plural(count: usize) -> String {
    if count == 1 {
        "1 test".to_string()
    } else {
        format!("{} tests", count)
    }
}
