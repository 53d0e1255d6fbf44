//! Structural version diffs over JSON configuration trees.

mod tree;
mod version;

pub use tree::{DiffLeaf, DiffNode, DiffTree, deep_compare, deep_compare_optional, diff_objects};
pub use version::{ChartVersion, VersionComparison, VersionSnapshot, compare_chart_versions};
