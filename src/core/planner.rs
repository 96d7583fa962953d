//! # Test Selection Module / 测试选择模块
//!
//! This module decides which flattened tests actually run, based on the
//! name filters supplied on the command line.
//!
//! 此模块根据命令行提供的名称过滤器，决定哪些展开后的测试实际运行。

use crate::core::suite::Test;

/// Selects the subset of flattened tests matching the given filters,
/// preserving order.
///
/// An empty filter list selects everything. Otherwise a test is kept iff its
/// qualified name equals some filter exactly, or some filter followed by `"."`
/// is a literal prefix of the name. The latter selects an entire subtree by
/// its internal-node name. Matching is case-sensitive; there is no globbing
/// and no regex.
///
/// 选择与给定过滤器匹配的展开测试子集，并保持顺序。
///
/// 空过滤器列表选择所有测试。否则，当且仅当测试的限定名称与某个
/// 过滤器完全相等，或某个过滤器加上 `"."` 是名称的字面前缀时，
/// 该测试被保留。后者按内部节点名称选择整个子树。
/// 匹配区分大小写；没有通配符，也没有正则表达式。
pub fn select<'a>(tests: Vec<(String, &'a Test)>, filters: &[String]) -> Vec<(String, &'a Test)> {
    if filters.is_empty() {
        return tests;
    }
    tests
        .into_iter()
        .filter(|(name, _)| matches_any(name, filters))
        .collect()
}

fn matches_any(name: &str, filters: &[String]) -> bool {
    filters
        .iter()
        .any(|filter| name == filter || is_dot_prefix(filter, name))
}

/// Checks whether `filter + "."` is a literal prefix of `name`.
fn is_dot_prefix(filter: &str, name: &str) -> bool {
    name.len() > filter.len()
        && name.starts_with(filter)
        && name.as_bytes()[filter.len()] == b'.'
}
