//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Suite Runner,
//! including the result model, the suite tree, the sequential test
//! runner, and test selection.
//!
//! 此模块包含 Suite Runner 的核心功能，
//! 包括结果模型、套件树、顺序测试运行器和测试选择。

pub mod check;
pub mod models;
pub mod planner;
pub mod runner;
pub mod suite;

// Re-exports
pub use models::TestResult;
pub use runner::run_test;
pub use suite::Suite;
