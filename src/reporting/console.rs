//! # Console Reporting Module / 控制台报告模块
//!
//! This module writes test results to the console stream using the
//! text-format block layout with color coding. Passed and skipped blocks
//! are suppressed unless verbose output was requested; they still count
//! toward the summary.
//!
//! 此模块使用带颜色编码的文本格式块布局将测试结果写入控制台流。
//! 除非请求了详细输出，否则通过和跳过的块会被隐藏；
//! 它们仍然计入摘要。

use colored::*;
use std::io::{self, Write};

use crate::core::models::{Note, TestResult, TestRun};
use crate::reporting::summary::{format_summary, Counts};
use crate::reporting::text;

/// Writes per-result blocks to the given stream at the requested verbosity.
///
/// Failed and aborted results are always shown in full; passed and skipped
/// results appear only when `verbose` is set.
///
/// 以请求的详细程度将每个结果的块写入给定的流。
///
/// 失败和中止的结果总是完整显示；通过和跳过的结果仅在设置了
/// `verbose` 时出现。
pub fn print_report(out: &mut impl Write, runs: &[TestRun], verbose: bool) -> io::Result<()> {
    for run in runs {
        match &run.result {
            TestResult::Passed { .. } | TestResult::Skipped if !verbose => continue,
            _ => print_run(out, run)?,
        }
    }
    Ok(())
}

fn print_run(out: &mut impl Write, run: &TestRun) -> io::Result<()> {
    let status = run.result.status_str();
    let status_colored = match &run.result {
        TestResult::Passed { .. } => status.green(),
        TestResult::Skipped => status.dimmed(),
        TestResult::Failed { .. } => status.red(),
        TestResult::Aborted { .. } => status.red().bold(),
    };

    writeln!(out, "{}", "=".repeat(text::BLOCK_DIVIDER_LEN))?;
    writeln!(out, "{}: {}", status_colored, run.name.cyan())?;
    print_notes(out, run.result.notes())?;

    match &run.result {
        TestResult::Failed { failures, .. } => {
            writeln!(out, "{}", "-".repeat(text::BLOCK_DIVIDER_LEN))?;
            for failure in failures {
                if let Some(location) = &failure.location {
                    match location.line {
                        Some(line) => writeln!(out, "{}:{}", location.file, line)?,
                        None => writeln!(out, "{}", location.file)?,
                    }
                }
                writeln!(out, "{}\n", failure.message)?;
            }
        }
        TestResult::Aborted { message, .. } => {
            writeln!(out, "{}", "-".repeat(text::BLOCK_DIVIDER_LEN))?;
            writeln!(out, "{}\n", message)?;
        }
        TestResult::Passed { .. } | TestResult::Skipped => writeln!(out)?,
    }
    Ok(())
}

fn print_notes(out: &mut impl Write, notes: &[Note]) -> io::Result<()> {
    for note in notes {
        writeln!(out, "{}={}", note.key, note.value)?;
    }
    Ok(())
}

/// Writes the final summary sentence, green on success and red otherwise.
/// 写入最终摘要语句，成功时为绿色，否则为红色。
pub fn print_summary_line(out: &mut impl Write, counts: &Counts) -> io::Result<()> {
    let line = format_summary(counts);
    if counts.all_passed() {
        writeln!(out, "{}", line.green().bold())
    } else {
        writeln!(out, "{}", line.red().bold())
    }
}
