//! # XML Reporting Module / XML 报告模块
//!
//! This module renders the XML report: an XML declaration, a namespaced
//! `<report>` root, and one `<test-run>` element per result with nested
//! failure, abortion, and note elements. Exactly the five reserved
//! characters are entity-escaped; attributes are single-quoted.
//!
//! 此模块渲染 XML 报告：XML 声明、带命名空间的 `<report>` 根元素，
//! 以及每个结果一个 `<test-run>` 元素，内嵌失败、中止和注记元素。
//! 恰好五个保留字符被转义为实体；属性使用单引号。

use crate::core::models::{Failure, Note, TestResult, TestRun};

const REPORT_NAMESPACE: &str = "urn:john-millikin:chell:report:1";

/// Renders the complete XML document for an ordered result list.
/// 为有序结果列表渲染完整的 XML 文档。
pub fn render(runs: &[TestRun]) -> String {
    let mut doc = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    doc.push_str(&format!("<report xmlns='{}'>\n", REPORT_NAMESPACE));
    for run in runs {
        render_run(&mut doc, run);
    }
    doc.push_str("</report>");
    doc
}

fn render_run(doc: &mut String, run: &TestRun) {
    doc.push_str("\t<test-run test='");
    push_escaped(doc, &run.name);
    doc.push_str("' result='");
    doc.push_str(run.result.kind_str());

    match &run.result {
        TestResult::Skipped => doc.push_str("'/>\n"),
        TestResult::Passed { notes } => {
            doc.push_str("'>\n");
            render_notes(doc, notes);
            doc.push_str("\t</test-run>\n");
        }
        TestResult::Failed { notes, failures } => {
            doc.push_str("'>\n");
            for failure in failures {
                render_failure(doc, failure);
            }
            render_notes(doc, notes);
            doc.push_str("\t</test-run>\n");
        }
        TestResult::Aborted { notes, message } => {
            doc.push_str("'>\n");
            doc.push_str("\t\t<abortion message='");
            push_escaped(doc, message);
            doc.push_str("'/>\n");
            render_notes(doc, notes);
            doc.push_str("\t</test-run>\n");
        }
    }
}

fn render_failure(doc: &mut String, failure: &Failure) {
    doc.push_str("\t\t<failure message='");
    push_escaped(doc, &failure.message);
    match &failure.location {
        None => doc.push_str("'/>\n"),
        Some(location) => {
            doc.push_str("'>\n\t\t\t<location module='");
            push_escaped(doc, &location.module);
            doc.push_str("' file='");
            push_escaped(doc, &location.file);
            doc.push('\'');
            if let Some(line) = location.line {
                doc.push_str(&format!(" line='{}'", line));
            }
            doc.push_str("/>\n\t\t</failure>\n");
        }
    }
}

fn render_notes(doc: &mut String, notes: &[Note]) {
    for note in notes {
        doc.push_str("\t\t<note key='");
        push_escaped(doc, &note.key);
        doc.push_str("' value='");
        push_escaped(doc, &note.value);
        doc.push_str("'/>\n");
    }
}

/// Appends text with the five XML reserved characters replaced by their
/// standard entities. Nothing else is escaped.
///
/// 附加文本，将五个 XML 保留字符替换为标准实体。不转义其他字符。
fn push_escaped(doc: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => doc.push_str("&amp;"),
            '<' => doc.push_str("&lt;"),
            '>' => doc.push_str("&gt;"),
            '"' => doc.push_str("&quot;"),
            '\'' => doc.push_str("&apos;"),
            _ => doc.push(ch),
        }
    }
}
