//! # Driver Integration Tests / 驱动集成测试
//!
//! This module exercises the run driver end to end: configuration handling,
//! sequential execution, console verbosity, report-file lifecycle, and
//! exit-status counts.
//!
//! 此模块端到端地测试运行驱动：配置处理、顺序执行、控制台详细程度、
//! 报告文件生命周期和退出状态计数。

use std::fs;
use std::io;

use suite_runner::{
    run_with_config, Checks, Report, ReportFormat, RunConfig, Suite, Test, TestResult,
};

/// Helper function to build a small mixed suite / 构建一个小型混合套件的辅助函数
fn sample_suites() -> Vec<Suite> {
    vec![Suite::group(
        "math",
        vec![
            Suite::test("add", Test::new(|_context| TestResult::passed())),
            Suite::test(
                "sub",
                Test::new(|_context| {
                    let mut checks = Checks::new();
                    checks.expect_eq(&2, &1, None);
                    checks.finish()
                }),
            ),
            Suite::test("skip", Test::new(|_context| TestResult::Skipped)),
        ],
    )]
}

#[cfg(test)]
mod run_with_config_tests {
    use super::*;

    #[test]
    fn test_counts_reflect_the_run() {
        let config = RunConfig {
            seed: Some(1),
            ..RunConfig::default()
        };

        let counts = run_with_config(&sample_suites(), &config, &mut io::sink()).unwrap();
        assert_eq!(counts.passed, 1);
        assert_eq!(counts.failed, 1);
        assert_eq!(counts.skipped, 1);
        assert_eq!(counts.aborted, 0);
        assert!(!counts.all_passed());
    }

    #[test]
    fn test_filters_narrow_the_run() {
        let config = RunConfig {
            seed: Some(1),
            filters: vec!["math.add".to_string()],
            ..RunConfig::default()
        };

        let counts = run_with_config(&sample_suites(), &config, &mut io::sink()).unwrap();
        assert_eq!(counts.total(), 1);
        assert_eq!(counts.passed, 1);
        assert!(counts.all_passed());
    }

    #[test]
    fn test_no_selection_is_a_passing_run() {
        let config = RunConfig {
            seed: Some(1),
            filters: vec!["no.such.test".to_string()],
            ..RunConfig::default()
        };

        let counts = run_with_config(&sample_suites(), &config, &mut io::sink()).unwrap();
        assert_eq!(counts.total(), 0);
        assert!(counts.all_passed());
    }

    #[test]
    fn test_seed_reaches_every_test_body() {
        let suites = vec![Suite::test(
            "seeded",
            Test::new(|context| {
                let mut checks = Checks::new();
                checks.expect_eq(&context.seed, &99, None);
                checks.finish()
            }),
        )];

        let config = RunConfig {
            seed: Some(99),
            ..RunConfig::default()
        };
        let counts = run_with_config(&suites, &config, &mut io::sink()).unwrap();
        assert!(counts.all_passed());
    }

    #[test]
    fn test_overflowing_timeout_is_disabled_with_a_warning() {
        let suites = vec![Suite::test(
            "no_timeout",
            Test::new(|context| {
                let mut checks = Checks::new();
                checks.expect(context.timeout.is_none(), "timeout should be disabled", None);
                checks.finish()
            }),
        )];

        let config = RunConfig {
            seed: Some(1),
            timeout_ms: Some(u64::MAX),
            ..RunConfig::default()
        };
        let counts = run_with_config(&suites, &config, &mut io::sink()).unwrap();
        assert!(counts.all_passed());
    }

    #[test]
    fn test_reasonable_timeout_is_passed_down() {
        let suites = vec![Suite::test(
            "timed",
            Test::new(|context| {
                let mut checks = Checks::new();
                let millis = context.timeout.map(|t| t.as_millis());
                checks.expect_eq(&millis, &Some(250), None);
                checks.finish()
            }),
        )];

        let config = RunConfig {
            seed: Some(1),
            timeout_ms: Some(250),
            ..RunConfig::default()
        };
        let counts = run_with_config(&suites, &config, &mut io::sink()).unwrap();
        assert!(counts.all_passed());
    }
}

#[cfg(test)]
mod console_output_tests {
    use super::*;

    /// Runs the sample suites and returns the captured console stream.
    /// 运行示例套件并返回捕获的控制台流。
    fn console_output(verbose: bool) -> (String, suite_runner::Counts) {
        let config = RunConfig {
            seed: Some(1),
            verbose,
            ..RunConfig::default()
        };

        let mut out = Vec::new();
        let counts = run_with_config(&sample_suites(), &config, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), counts)
    }

    #[test]
    fn test_non_verbose_suppresses_passed_and_skipped_blocks() {
        let (console, counts) = console_output(false);

        assert!(!console.contains("PASSED"));
        assert!(!console.contains("SKIPPED"));
        assert!(!console.contains("math.add"));
        assert!(!console.contains("math.skip"));
        assert!(console.contains("FAILED"));
        assert!(console.contains("math.sub"));

        // Suppressed blocks still count toward the summary.
        assert_eq!(counts.passed, 1);
        assert_eq!(counts.skipped, 1);
        assert!(console.contains("3 tests run"));
        assert!(console.contains("1 test passed"));
        assert!(console.contains("1 test skipped"));
    }

    #[test]
    fn test_verbose_shows_every_block() {
        let (console, counts) = console_output(true);

        assert!(console.contains("PASSED"));
        assert!(console.contains("math.add"));
        assert!(console.contains("SKIPPED"));
        assert!(console.contains("math.skip"));
        assert!(console.contains("FAILED"));
        assert!(console.contains("math.sub"));
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_verbosity_does_not_change_the_counts() {
        let (_, quiet_counts) = console_output(false);
        let (_, verbose_counts) = console_output(true);
        assert_eq!(quiet_counts, verbose_counts);
    }

    #[test]
    fn test_summary_line_is_always_written() {
        let (console, _) = console_output(false);
        assert!(console.contains("FAIL: 3 tests run"));
    }
}

#[cfg(test)]
mod report_file_tests {
    use super::*;

    #[test]
    fn test_all_three_formats_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let text_path = dir.path().join("report.txt");
        let json_path = dir.path().join("report.json");
        let xml_path = dir.path().join("report.xml");

        let config = RunConfig {
            seed: Some(1),
            reports: vec![
                Report {
                    format: ReportFormat::Text,
                    path: text_path.clone(),
                },
                Report {
                    format: ReportFormat::Json,
                    path: json_path.clone(),
                },
                Report {
                    format: ReportFormat::Xml,
                    path: xml_path.clone(),
                },
            ],
            ..RunConfig::default()
        };

        run_with_config(&sample_suites(), &config, &mut io::sink()).unwrap();

        let text_doc = fs::read_to_string(&text_path).unwrap();
        assert!(text_doc.contains("FAILED: math.sub"));
        assert!(text_doc.ends_with("1 test failed"));

        let json_doc = fs::read_to_string(&json_path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json_doc).unwrap();
        assert_eq!(parsed["test-runs"].as_array().unwrap().len(), 3);

        let xml_doc = fs::read_to_string(&xml_path).unwrap();
        assert!(xml_doc.starts_with("<?xml"));
        assert!(xml_doc.contains("result='failed'"));
    }

    #[test]
    fn test_existing_destination_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        fs::write(&path, "stale content that must disappear").unwrap();

        let config = RunConfig {
            seed: Some(1),
            reports: vec![Report {
                format: ReportFormat::Json,
                path: path.clone(),
            }],
            ..RunConfig::default()
        };
        run_with_config(&sample_suites(), &config, &mut io::sink()).unwrap();

        let doc = fs::read_to_string(&path).unwrap();
        assert!(doc.starts_with("{\"test-runs\": ["));
        assert!(!doc.contains("stale content"));
    }

    #[test]
    fn test_unwritable_destination_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.json");

        let config = RunConfig {
            seed: Some(1),
            reports: vec![Report {
                format: ReportFormat::Json,
                path,
            }],
            ..RunConfig::default()
        };

        let error = run_with_config(&sample_suites(), &config, &mut io::sink()).unwrap_err();
        assert!(error.to_string().contains("json report"));
    }
}
