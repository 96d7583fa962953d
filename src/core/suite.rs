//! # Suite Tree Module / 套件树模块
//!
//! This module defines the hierarchical suite tree and the name-flattening
//! algorithm that turns it into a flat, ordered list of runnable tests with
//! dot-joined qualified names.
//!
//! 此模块定义层级套件树，以及将其转换为带点号连接限定名称的
//! 扁平有序可运行测试列表的名称展开算法。

use std::fmt;

use crate::core::models::{RunContext, TestResult};

type TestBody = Box<dyn Fn(&RunContext) -> TestResult + Send + Sync>;

/// An opaque, stateless, repeatable unit of work: given a run context it
/// produces exactly one [`TestResult`]. Owned by whichever [`Suite`] node
/// references it.
///
/// 一个不透明的、无状态的、可重复的工作单元：给定运行上下文，
/// 它恰好产生一个 [`TestResult`]。由引用它的 [`Suite`] 节点拥有。
pub struct Test {
    body: TestBody,
}

impl Test {
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&RunContext) -> TestResult + Send + Sync + 'static,
    {
        Test {
            body: Box::new(body),
        }
    }

    pub(crate) fn invoke(&self, context: &RunContext) -> TestResult {
        (self.body)(context)
    }
}

impl fmt::Debug for Test {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Test").finish_non_exhaustive()
    }
}

/// A node in the suite tree: either an internal group of child suites or a
/// leaf holding a single [`Test`]. The variant tag, not optional-field
/// inspection, distinguishes the two. Every node has a non-empty name.
/// Constructed once at program start, immutable afterward.
///
/// 套件树中的一个节点：要么是子套件的内部分组，要么是持有单个
/// [`Test`] 的叶节点。由变体标签区分两者，而不是检查可选字段。
/// 每个节点都有非空名称。程序启动时构造一次，此后不可变。
#[derive(Debug)]
pub enum Suite {
    /// An internal node: a name and an ordered list of children.
    /// 内部节点：名称和有序的子节点列表。
    Group { name: String, children: Vec<Suite> },
    /// A leaf node: a name and the test it runs.
    /// 叶节点：名称及其运行的测试。
    Test { name: String, test: Test },
}

impl Suite {
    /// Creates an internal node grouping the given children in order.
    pub fn group(name: impl Into<String>, children: Vec<Suite>) -> Self {
        Suite::Group {
            name: name.into(),
            children,
        }
    }

    /// Creates a leaf node for a single test.
    pub fn test(name: impl Into<String>, test: Test) -> Self {
        Suite::Test {
            name: name.into(),
            test,
        }
    }

    /// Gets the node's own (unqualified) name.
    pub fn name(&self) -> &str {
        match self {
            Suite::Group { name, .. } | Suite::Test { name, .. } => name,
        }
    }
}

/// Flattens one or more suite trees into an ordered list of
/// `(qualified_name, test)` pairs.
///
/// The traversal is depth-first, left-to-right. A root's qualified name is
/// its own name; deeper nodes get `parent_qualified_name + "." + node_name`.
/// Multiple top-level suites are concatenated in caller-supplied order, and
/// duplicate qualified names are legal and independently runnable.
///
/// 将一个或多个套件树展开为有序的 `(限定名称, 测试)` 配对列表。
///
/// 遍历为深度优先、从左到右。根节点的限定名称是其自身名称；
/// 更深的节点得到 `父限定名称 + "." + 节点名称`。
/// 多个顶层套件按调用者提供的顺序连接，重复的限定名称是合法的，
/// 并且可以独立运行。
pub fn flatten(suites: &[Suite]) -> Vec<(String, &Test)> {
    let mut flat = Vec::new();
    for suite in suites {
        flatten_into(suite, None, &mut flat);
    }
    flat
}

fn flatten_into<'a>(suite: &'a Suite, prefix: Option<&str>, out: &mut Vec<(String, &'a Test)>) {
    let qualified = match prefix {
        Some(prefix) => format!("{}.{}", prefix, suite.name()),
        None => suite.name().to_string(),
    };
    match suite {
        Suite::Group { children, .. } => {
            for child in children {
                flatten_into(child, Some(&qualified), out);
            }
        }
        Suite::Test { test, .. } => out.push((qualified, test)),
    }
}
