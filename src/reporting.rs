//! # Reporting Module / 报告模块
//!
//! This module handles the rendering of test results in multiple formats.
//! Each reporter is a pure function from the ordered result list to a
//! complete, self-contained document; the three formats share only the
//! statistics aggregator.
//!
//! 此模块处理以多种格式渲染测试结果。
//! 每个报告器都是从有序结果列表到完整独立文档的纯函数；
//! 三种格式仅共享统计聚合器。

pub mod console;
pub mod json;
pub mod summary;
pub mod text;
pub mod xml;

// Re-export common reporting functions
pub use console::{print_report, print_summary_line};
pub use summary::{aggregate, format_summary, Counts};
