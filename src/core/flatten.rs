//! Flattening of decoded configuration trees
//!
//! JSON and YAML documents are converted into a `Node` tree and then
//! flattened into dotted-path keys:
//! - map entries contribute `key.`
//! - sequence elements contribute `[i].`, attached to the parent without a dot
//! - scalars terminate the path, with the trailing separator stripped
//!
//! Empty maps and sequences have no leaves and therefore produce no keys.

use std::collections::BTreeMap;

/// Flat mapping from dotted-path key to stringified value.
///
/// A `BTreeMap` keeps iteration sorted by key, which makes downstream
/// matching deterministic.
pub type FlatMap = BTreeMap<String, String>;

/// A decoded configuration tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Mapping(Vec<(String, Node)>),
    Sequence(Vec<Node>),
    Scalar(String),
}

impl Node {
    pub fn scalar(value: impl Into<String>) -> Self {
        Node::Scalar(value.into())
    }
}

/// Flatten a tree into dotted-path keys
pub fn flatten(node: &Node) -> FlatMap {
    let mut flattened = FlatMap::new();
    flatten_into(String::new(), node, &mut flattened);
    flattened
}

fn flatten_into(prefix: String, node: &Node, flattened: &mut FlatMap) {
    match node {
        Node::Mapping(entries) => {
            for (key, child) in entries {
                flatten_into(format!("{}{}.", prefix, key), child, flattened);
            }
        }
        Node::Sequence(items) => {
            let parent = prefix.strip_suffix('.').unwrap_or(&prefix);
            for (i, child) in items.iter().enumerate() {
                flatten_into(format!("{}[{}].", parent, i), child, flattened);
            }
        }
        Node::Scalar(value) => {
            let key = prefix.strip_suffix('.').unwrap_or(&prefix);
            flattened.insert(key.to_string(), value.clone());
        }
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Object(map) => {
                Node::Mapping(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::String(s) => Node::Scalar(s),
            Value::Number(n) => Node::Scalar(n.to_string()),
            Value::Bool(b) => Node::Scalar(b.to_string()),
            Value::Null => Node::scalar("null"),
        }
    }
}

impl From<serde_yaml::Value> for Node {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Mapping(map) => Node::Mapping(
                map.into_iter()
                    .map(|(k, v)| (yaml_key(k), Node::from(v)))
                    .collect(),
            ),
            Value::Sequence(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Tagged(tagged) => Node::from(tagged.value),
            other => Node::Scalar(yaml_scalar(&other)),
        }
    }
}

/// YAML allows any value as a mapping key; every key becomes a path segment
fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value),
        other => yaml_scalar(&other),
    }
}

fn yaml_scalar(value: &serde_yaml::Value) -> String {
    use serde_yaml::Value;

    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        // Composite keys are rare; fall back to their inline YAML form
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
