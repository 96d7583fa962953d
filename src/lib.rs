//! # Suite Runner Library / Suite Runner 库
//!
//! This library provides the core functionality of the Suite Runner framework,
//! a lightweight test-suite runner that organizes named tests into hierarchical
//! suites, runs them sequentially, and reports the aggregate results in plain
//! text, JSON, or XML.
//!
//! 此库提供 Suite Runner 框架的核心功能，
//! 这是一个轻量级的测试套件运行器，将命名测试组织成层级套件，
//! 按顺序运行它们，并以纯文本、JSON 或 XML 格式报告汇总结果。
//!
//! ## Modules / 模块
//!
//! - `core` - Result model, suite tree, test runner, and selection logic
//! - `reporting` - Multi-format report rendering and the statistics summary
//! - `cli` - Command-line configuration and the top-level run driver
//!
//! - `core` - 结果模型、套件树、测试运行器和选择逻辑
//! - `reporting` - 多格式报告渲染和统计摘要
//! - `cli` - 命令行配置和顶层运行驱动

pub mod cli;
pub mod core;
pub mod reporting;

// Re-export commonly used items
pub use crate::cli::{run_main, run_with_config, Report, ReportFormat, RunConfig};
pub use crate::core::check::{CheckFlow, Checks};
pub use crate::core::models::{Failure, Location, Note, RunContext, TestResult, TestRun};
pub use crate::core::runner::{run_test, skip_if};
pub use crate::core::suite::{flatten, Suite, Test};
pub use crate::reporting::summary::{aggregate, format_summary, Counts};
