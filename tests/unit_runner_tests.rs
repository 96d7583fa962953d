//! # Runner Module Unit Tests / Runner 模块单元测试
//!
//! This module contains unit tests for the sequential test runner: result
//! passthrough, panic capture, and the conditional-skip combinator.
//!
//! 此模块包含顺序测试运行器的单元测试：结果透传、panic 捕获
//! 和条件跳过组合子。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use suite_runner::core::runner::{run_test, skip_if};
use suite_runner::core::suite::Test;
use suite_runner::{RunContext, TestResult};

fn context() -> RunContext {
    RunContext::new(42, None)
}

#[cfg(test)]
mod run_test_tests {
    use super::*;

    #[test]
    fn test_result_passes_through_unchanged() {
        let test = Test::new(|_context| TestResult::passed());
        assert_eq!(run_test(&test, &context()), TestResult::passed());
    }

    #[test]
    fn test_context_is_threaded_into_the_body() {
        let test = Test::new(|context: &RunContext| {
            if context.seed == 42 && context.timeout == Some(Duration::from_millis(100)) {
                TestResult::passed()
            } else {
                TestResult::Failed {
                    notes: vec![],
                    failures: vec![],
                }
            }
        });

        let context = RunContext::new(42, Some(Duration::from_millis(100)));
        assert_eq!(run_test(&test, &context), TestResult::passed());
    }

    #[test]
    fn test_str_panic_becomes_aborted() {
        let test = Test::new(|_context| panic!("something broke"));
        match run_test(&test, &context()) {
            TestResult::Aborted { message, .. } => assert_eq!(message, "something broke"),
            other => panic!("Expected Aborted, got {:?}", other),
        }
    }

    #[test]
    fn test_formatted_panic_becomes_aborted() {
        // A formatted panic carries a String payload rather than a &str.
        let test = Test::new(|_context| panic!("broke at step {}", 3));
        match run_test(&test, &context()) {
            TestResult::Aborted { message, .. } => assert_eq!(message, "broke at step 3"),
            other => panic!("Expected Aborted, got {:?}", other),
        }
    }

    #[test]
    fn test_panic_does_not_stop_subsequent_runs() {
        let aborting = Test::new(|_context| panic!("boom"));
        let passing = Test::new(|_context| TestResult::passed());

        let first = run_test(&aborting, &context());
        let second = run_test(&passing, &context());

        assert!(matches!(first, TestResult::Aborted { .. }));
        assert_eq!(second, TestResult::passed());
    }
}

#[cfg(test)]
mod skip_if_tests {
    use super::*;

    #[test]
    fn test_true_predicate_never_invokes_the_body() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&invocations);
        let inner = Test::new(move |_context| {
            counter.fetch_add(1, Ordering::SeqCst);
            TestResult::passed()
        });

        let wrapped = skip_if(|| true, inner);
        assert_eq!(run_test(&wrapped, &context()), TestResult::Skipped);
        assert_eq!(invocations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_false_predicate_yields_the_inner_result() {
        let inner = Test::new(|_context| TestResult::Aborted {
            notes: vec![],
            message: "inner".to_string(),
        });

        let wrapped = skip_if(|| false, inner);
        match run_test(&wrapped, &context()) {
            TestResult::Aborted { message, .. } => assert_eq!(message, "inner"),
            other => panic!("Expected the inner result, got {:?}", other),
        }
    }

    #[test]
    fn test_predicate_is_evaluated_per_run() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let wrapped = skip_if(
            move || counter.fetch_add(1, Ordering::SeqCst) == 0,
            Test::new(|_context| TestResult::passed()),
        );

        // First run skips, second runs the body.
        assert_eq!(run_test(&wrapped, &context()), TestResult::Skipped);
        assert_eq!(run_test(&wrapped, &context()), TestResult::passed());
    }
}
