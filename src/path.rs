//! Dotted option paths
//!
//! A path names a node by joining its ancestor keys with `.`, e.g.
//! `topBar.title.color`. Sequence elements contribute their index
//! (`topBar.rightButtons.0.icon`).

use serde_json::{Map, Value};

/// Separator between path segments
pub const PATH_SEPARATOR: char = '.';

/// Path of `key` below `parent_path`; a missing or empty parent yields the key alone.
///
/// # Examples
///
/// ```
/// use navopts::path::resolve_object_path;
///
/// assert_eq!(resolve_object_path("topBar", None), "topBar");
/// assert_eq!(resolve_object_path("color", Some("topBar.title")), "topBar.title.color");
/// ```
pub fn resolve_object_path(key: &str, parent_path: Option<&str>) -> String {
    match parent_path {
        Some(parent) if !parent.is_empty() => {
            let mut path = String::with_capacity(parent.len() + 1 + key.len());
            path.push_str(parent);
            path.push(PATH_SEPARATOR);
            path.push_str(key);
            path
        }
        _ => key.to_string(),
    }
}

/// Last segment of a path (the key the node is stored under).
pub fn last_segment(path: &str) -> &str {
    path.rsplit(PATH_SEPARATOR).next().unwrap_or(path)
}

/// Every path of an options object in walk order (depth-first, natural key order).
///
/// The value under `pass_through_key` is listed but not descended into.
pub fn list_option_paths(options: &Map<String, Value>, pass_through_key: &str) -> Vec<String> {
    let mut paths = Vec::new();
    collect_map(options, None, pass_through_key, &mut paths);
    paths
}

fn collect_map(
    node: &Map<String, Value>,
    parent_path: Option<&str>,
    pass_through_key: &str,
    paths: &mut Vec<String>,
) {
    for (key, value) in node {
        let path = resolve_object_path(key, parent_path);
        paths.push(path.clone());
        if key != pass_through_key {
            collect_value(value, &path, pass_through_key, paths);
        }
    }
}

fn collect_value(value: &Value, path: &str, pass_through_key: &str, paths: &mut Vec<String>) {
    match value {
        Value::Object(map) => collect_map(map, Some(path), pass_through_key, paths),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let item_path = resolve_object_path(&index.to_string(), Some(path));
                paths.push(item_path.clone());
                collect_value(item, &item_path, pass_through_key, paths);
            }
        }
        _ => {}
    }
}
