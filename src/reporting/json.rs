//! # JSON Reporting Module / JSON 报告模块
//!
//! This module renders the JSON report: a single `{"test-runs": [...]}`
//! object with one element per result. The string escaping is deliberately
//! the compatibility subset of the original wire format (backslash, double
//! quote, and control characters only), not a generic JSON encoder, so the
//! writer is hand-rolled rather than delegated to a serialization crate.
//!
//! 此模块渲染 JSON 报告：单个 `{"test-runs": [...]}` 对象，
//! 每个结果一个元素。字符串转义刻意采用原始传输格式的兼容子集
//! （仅反斜杠、双引号和控制字符），而不是通用 JSON 编码器，
//! 因此写入器是手工实现的，而不是委托给序列化库。

use crate::core::models::{Failure, Note, TestResult, TestRun};

/// Renders the complete JSON document for an ordered result list.
/// 为有序结果列表渲染完整的 JSON 文档。
pub fn render(runs: &[TestRun]) -> String {
    let mut doc = String::from("{\"test-runs\": [");
    let mut first = true;
    for run in runs {
        if !first {
            doc.push_str(", ");
        }
        first = false;
        render_run(&mut doc, run);
    }
    doc.push_str("]}");
    doc
}

fn render_run(doc: &mut String, run: &TestRun) {
    doc.push_str("{\"test\": ");
    push_string(doc, &run.name);
    doc.push_str(", \"result\": \"");
    doc.push_str(run.result.kind_str());
    doc.push('"');

    match &run.result {
        TestResult::Passed { notes } => {
            render_notes(doc, notes);
        }
        TestResult::Skipped => {}
        TestResult::Failed { notes, failures } => {
            doc.push_str(", \"failures\": [");
            let mut first = true;
            for failure in failures {
                if !first {
                    doc.push_str(", ");
                }
                first = false;
                render_failure(doc, failure);
            }
            doc.push(']');
            render_notes(doc, notes);
        }
        TestResult::Aborted { message, .. } => {
            doc.push_str(", \"abortion\": {\"message\": ");
            push_string(doc, message);
            doc.push('}');
        }
    }
    doc.push('}');
}

fn render_failure(doc: &mut String, failure: &Failure) {
    doc.push_str("{\"message\": ");
    push_string(doc, &failure.message);
    if let Some(location) = &failure.location {
        doc.push_str(", \"location\": {\"module\": ");
        push_string(doc, &location.module);
        doc.push_str(", \"file\": ");
        push_string(doc, &location.file);
        // The line member is optional independently of the location itself.
        if let Some(line) = location.line {
            doc.push_str(&format!(", \"line\": {}", line));
        }
        doc.push('}');
    }
    doc.push('}');
}

fn render_notes(doc: &mut String, notes: &[Note]) {
    doc.push_str(", \"notes\": [");
    let mut first = true;
    for note in notes {
        if !first {
            doc.push_str(", ");
        }
        first = false;
        doc.push_str("{\"key\": ");
        push_string(doc, &note.key);
        doc.push_str(", \"value\": ");
        push_string(doc, &note.value);
        doc.push('}');
    }
    doc.push(']');
}

/// Appends a quoted JSON string using the compatibility escaping subset:
/// `\` and `"` are backslash-escaped, code points at or below 0x1F become
/// `\u%04X` with uppercase hex digits, everything else passes through.
///
/// 使用兼容转义子集附加带引号的 JSON 字符串：
/// `\` 和 `"` 用反斜杠转义，小于等于 0x1F 的码点变为大写十六进制的
/// `\u%04X`，其余字符原样通过。
fn push_string(doc: &mut String, value: &str) {
    doc.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => doc.push_str("\\\\"),
            '"' => doc.push_str("\\\""),
            _ if (ch as u32) <= 0x1F => {
                doc.push_str(&format!("\\u{:04X}", ch as u32));
            }
            _ => doc.push(ch),
        }
    }
    doc.push('"');
}
