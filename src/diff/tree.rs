use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Both sides of a differing value. An absent side is a missing member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffLeaf {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DiffNode {
    Leaf(DiffLeaf),
    Tree(DiffTree),
}

impl DiffNode {
    #[must_use]
    pub fn as_leaf(&self) -> Option<&DiffLeaf> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Tree(_) => None,
        }
    }

    #[must_use]
    pub fn as_tree(&self) -> Option<&DiffTree> {
        match self {
            Self::Tree(tree) => Some(tree),
            Self::Leaf(_) => None,
        }
    }
}

/// Differing keys of two objects (array indices become `"0"`, `"1"`, ...).
///
/// A key is present iff its values differ structurally; an empty tree means
/// the inputs are deeply equal.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(transparent)]
pub struct DiffTree(IndexMap<String, DiffNode>);

impl DiffTree {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DiffNode> {
        self.0.get(key)
    }

    /// Follows a dotted path such as `config.axisConfigs.xAxisKey`.
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&DiffNode> {
        let mut segments = path.split('.');
        let mut node = self.get(segments.next()?)?;
        for segment in segments {
            node = node.as_tree()?.get(segment)?;
        }
        Some(node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DiffNode)> {
        self.0.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Dotted paths of every differing leaf, depth first in key order.
    #[must_use]
    pub fn changed_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_paths("", &mut paths);
        paths
    }

    fn collect_paths(&self, prefix: &str, paths: &mut Vec<String>) {
        for (key, node) in &self.0 {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            match node {
                DiffNode::Leaf(_) => paths.push(path),
                DiffNode::Tree(tree) => tree.collect_paths(&path, paths),
            }
        }
    }

    fn insert_if_differs(&mut self, key: String, node: Option<DiffNode>) {
        if let Some(node) = node {
            self.0.insert(key, node);
        }
    }
}

/// Structural diff of two JSON trees.
///
/// Returns `None` when the values are deeply equal: objects compare without
/// regard to key order and numbers compare by value (`1` equals `1.0`).
#[must_use]
pub fn deep_compare(current: &Value, historical: &Value) -> Option<DiffNode> {
    match (current, historical) {
        (Value::Object(current), Value::Object(historical)) => {
            let tree = diff_objects(current, historical);
            (!tree.is_empty()).then_some(DiffNode::Tree(tree))
        }
        (Value::Array(current), Value::Array(historical)) => {
            let mut tree = DiffTree::default();
            for index in 0..current.len().max(historical.len()) {
                tree.insert_if_differs(
                    index.to_string(),
                    deep_compare_optional(current.get(index), historical.get(index)),
                );
            }
            (!tree.is_empty()).then_some(DiffNode::Tree(tree))
        }
        (Value::Number(a), Value::Number(b)) if numbers_equal(a, b) => None,
        _ if current == historical => None,
        _ => Some(leaf(Some(current), Some(historical))),
    }
}

/// [`deep_compare`] for members that may be missing on either side.
#[must_use]
pub fn deep_compare_optional(current: Option<&Value>, historical: Option<&Value>) -> Option<DiffNode> {
    match (current, historical) {
        (None, None) => None,
        (Some(current), Some(historical)) => deep_compare(current, historical),
        (current, historical) => Some(leaf(current, historical)),
    }
}

/// Diffs two objects over the union of their keys, current keys first.
#[must_use]
pub fn diff_objects(current: &Map<String, Value>, historical: &Map<String, Value>) -> DiffTree {
    let mut tree = DiffTree::default();
    let only_historical = historical.keys().filter(|key| !current.contains_key(*key));
    for key in current.keys().chain(only_historical) {
        tree.insert_if_differs(
            key.clone(),
            deep_compare_optional(current.get(key), historical.get(key)),
        );
    }
    tree
}

fn leaf(current: Option<&Value>, historical: Option<&Value>) -> DiffNode {
    DiffNode::Leaf(DiffLeaf {
        current: current.cloned(),
        historical: historical.cloned(),
    })
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
