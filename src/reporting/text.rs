//! # Text Reporting Module / 文本报告模块
//!
//! This module renders the plain-text report: one divider-framed block per
//! result, failure detail for failed and aborted tests, and the statistics
//! summary sentence as the document's final, newline-free line.
//!
//! 此模块渲染纯文本报告：每个结果一个由分隔线框起的块，
//! 失败和中止测试的失败详情，以及作为文档最后一行（无换行符）的
//! 统计摘要语句。

use crate::core::models::{Failure, Note, TestResult, TestRun};
use crate::reporting::summary::{aggregate, format_summary};

pub(crate) const BLOCK_DIVIDER_LEN: usize = 70;

/// Renders the complete text document for an ordered result list.
///
/// Byte-identical output for identical input; every result is rendered
/// regardless of kind.
///
/// 为有序结果列表渲染完整的文本文档。
///
/// 相同输入产生字节相同的输出；无论类型如何，每个结果都会被渲染。
pub fn render(runs: &[TestRun]) -> String {
    let mut doc = String::new();
    for run in runs {
        render_run(&mut doc, run);
    }
    doc.push_str(&format_summary(&aggregate(runs)));
    doc
}

fn render_run(doc: &mut String, run: &TestRun) {
    doc.push_str(&"=".repeat(BLOCK_DIVIDER_LEN));
    doc.push('\n');
    doc.push_str(run.result.status_str());
    doc.push_str(": ");
    doc.push_str(&run.name);
    doc.push('\n');
    render_notes(doc, run.result.notes());

    match &run.result {
        TestResult::Failed { failures, .. } => {
            doc.push_str(&"-".repeat(BLOCK_DIVIDER_LEN));
            doc.push('\n');
            for failure in failures {
                render_failure(doc, failure);
            }
            // An empty failure list is invalid input, but render nothing
            // rather than panic; the block still needs its separator.
            if failures.is_empty() {
                doc.push('\n');
            }
        }
        TestResult::Aborted { message, .. } => {
            doc.push_str(&"-".repeat(BLOCK_DIVIDER_LEN));
            doc.push('\n');
            doc.push_str(message);
            doc.push_str("\n\n");
        }
        TestResult::Passed { .. } | TestResult::Skipped => doc.push('\n'),
    }
}

fn render_notes(doc: &mut String, notes: &[Note]) {
    for note in notes {
        doc.push_str(&note.key);
        doc.push('=');
        doc.push_str(&note.value);
        doc.push('\n');
    }
}

/// One failure block: optional `file:line` line, the message, a blank line.
fn render_failure(doc: &mut String, failure: &Failure) {
    if let Some(location) = &failure.location {
        doc.push_str(&location.file);
        if let Some(line) = location.line {
            doc.push_str(&format!(":{}", line));
        }
        doc.push('\n');
    }
    doc.push_str(&failure.message);
    doc.push_str("\n\n");
}
