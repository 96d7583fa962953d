//! # Command-Line Interface Module / 命令行接口模块
//!
//! This module defines the run configuration, the clap command that parses
//! it, and the top-level driver that runs the selected tests, writes the
//! configured report files, and prints the console report and summary.
//!
//! 此模块定义运行配置、解析它的 clap 命令，以及运行所选测试、
//! 写入配置的报告文件并打印控制台报告和摘要的顶层驱动。

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use crate::core::models::{RunContext, TestRun};
use crate::core::planner;
use crate::core::runner::run_test;
use crate::core::suite::{flatten, Suite};
use crate::reporting::console;
use crate::reporting::summary::{aggregate, Counts};
use crate::reporting::{json, text, xml};

/// The output format of one configured report destination.
/// 一个已配置报告目标的输出格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Xml,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Xml => write!(f, "xml"),
        }
    }
}

/// One report destination: a format and the file path it is written to.
/// 一个报告目标：格式及其写入的文件路径。
#[derive(Debug, Clone)]
pub struct Report {
    pub format: ReportFormat,
    pub path: PathBuf,
}

/// The semantic run configuration the core honors, independent of how the
/// flags were spelled on the command line.
///
/// 核心遵循的语义运行配置，与命令行上标志的拼写方式无关。
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Show passed and skipped blocks on the console / 在控制台显示通过和跳过的块
    pub verbose: bool,
    /// File-based report destinations, in flag order / 按标志顺序的文件报告目标
    pub reports: Vec<Report>,
    /// The run seed; random when absent / 运行种子；缺失时随机
    pub seed: Option<u64>,
    /// Timeout in milliseconds passed down to every test / 传递给每个测试的毫秒超时
    pub timeout_ms: Option<u64>,
    /// Name filters; empty selects everything / 名称过滤器；为空时选择全部
    pub filters: Vec<String>,
}

fn build_cli() -> Command {
    Command::new("suite-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Runs a tree of test suites and reports the results.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Show passed and skipped tests in the console report.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("text")
                .long("text")
                .help("Write a plain-text report to PATH.")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Write a JSON report to PATH.")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("xml")
                .long("xml")
                .help("Write an XML report to PATH.")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for the run context; random when omitted.")
                .value_name("SEED")
                .value_parser(clap::value_parser!(u64))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .help("Timeout in milliseconds passed down to every test.")
                .value_name("MILLISECONDS")
                .value_parser(clap::value_parser!(u64))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("filter")
                .help("Run only tests whose qualified name equals FILTER or starts with FILTER followed by a dot.")
                .value_name("FILTER")
                .num_args(1..),
        )
}

fn config_from_matches(matches: &ArgMatches) -> RunConfig {
    let mut reports = Vec::new();
    for (format, id) in [
        (ReportFormat::Text, "text"),
        (ReportFormat::Json, "json"),
        (ReportFormat::Xml, "xml"),
    ] {
        if let Some(paths) = matches.get_many::<PathBuf>(id) {
            for path in paths {
                reports.push(Report {
                    format,
                    path: path.clone(),
                });
            }
        }
    }

    RunConfig {
        verbose: matches.get_flag("verbose"),
        reports,
        seed: matches.get_one::<u64>("seed").copied(),
        timeout_ms: matches.get_one::<u64>("timeout").copied(),
        filters: matches
            .get_many::<String>("filter")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
    }
}

/// Parses the process arguments and drives a full run of the given suites.
///
/// Malformed options terminate the process with usage text before any test
/// runs. The returned exit code is success iff nothing failed or aborted.
///
/// 解析进程参数并驱动给定套件的完整运行。
///
/// 格式错误的选项会在任何测试运行之前以用法文本终止进程。
/// 当且仅当没有失败或中止时，返回的退出码为成功。
pub fn run_main(suites: Vec<Suite>) -> ExitCode {
    let matches = build_cli().get_matches();
    let config = config_from_matches(&matches);

    match run_with_config(&suites, &config, &mut io::stdout()) {
        Ok(counts) => {
            if counts.all_passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// The testable core of the driver: selects, runs, writes every configured
/// report, writes the console report and summary to `out`, and returns the
/// counts.
///
/// A report destination that cannot be opened or written is a fatal error;
/// it suppresses the console output that would have followed.
///
/// 驱动的可测试核心：选择、运行、写入每个已配置的报告，
/// 将控制台报告和摘要写入 `out`，并返回计数。
///
/// 无法打开或写入的报告目标是致命错误；
/// 它会抑制随后的控制台输出。
pub fn run_with_config(
    suites: &[Suite],
    config: &RunConfig,
    out: &mut impl Write,
) -> Result<Counts> {
    let context = RunContext {
        seed: config.seed.unwrap_or_else(rand::random),
        timeout: resolve_timeout(config.timeout_ms),
    };

    let selected = planner::select(flatten(suites), &config.filters);

    let mut runs = Vec::with_capacity(selected.len());
    for (name, test) in selected {
        let result = run_test(test, &context);
        runs.push(TestRun { name, result });
    }

    for report in &config.reports {
        write_report(report, &runs).with_context(|| {
            format!(
                "Failed to write {} report to {}",
                report.format,
                report.path.display()
            )
        })?;
    }

    console::print_report(out, &runs, config.verbose)
        .context("Failed to write the console report")?;
    let counts = aggregate(&runs);
    console::print_summary_line(out, &counts)
        .context("Failed to write the console summary")?;
    Ok(counts)
}

/// Converts the configured timeout to a duration. A value whose nanosecond
/// expansion would not fit the duration representation disables the timeout
/// with a warning instead of failing the run.
///
/// 将配置的超时转换为持续时间。纳秒展开无法放入持续时间表示的值
/// 会在发出警告后禁用超时，而不是使运行失败。
fn resolve_timeout(timeout_ms: Option<u64>) -> Option<Duration> {
    match timeout_ms {
        None => None,
        Some(ms) if ms > u64::MAX / 1_000_000 => {
            eprintln!(
                "Warning: --timeout {} ms overflows the duration representation; running without a timeout.",
                ms
            );
            None
        }
        Some(ms) => Some(Duration::from_millis(ms)),
    }
}

/// Renders one report and writes it to its destination file, truncating any
/// existing content. The file is written once and closed on return.
fn write_report(report: &Report, runs: &[TestRun]) -> Result<()> {
    let document = match report.format {
        ReportFormat::Text => text::render(runs),
        ReportFormat::Json => json::render(runs),
        ReportFormat::Xml => xml::render(runs),
    };
    let mut file = File::create(&report.path)
        .with_context(|| format!("Failed to open {}", report.path.display()))?;
    file.write_all(document.as_bytes())
        .with_context(|| format!("Failed to write {}", report.path.display()))?;
    Ok(())
}
