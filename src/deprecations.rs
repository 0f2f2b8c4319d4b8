//! Deprecated option auditing
//!
//! The walker reports every visited key to a [`DeprecationNotifier`]. The
//! notifier never changes options; it only diagnoses. [`DeprecationLog`] is
//! the default notifier: it recognizes the legacy option shapes, records a
//! [`DeprecationWarning`] for each and logs it through `tracing`.

use serde_json::{Map, Value};
use std::collections::HashSet;

use crate::config::{DeprecationsConfig, ValidationLevel};

/// Receives every key visited during a walk.
///
/// `parent` is the snapshot of the root options taken before the walk began,
/// except for legacy-shape reports where it is the node holding the legacy value.
pub trait DeprecationNotifier {
    /// Called for keys visited by a regular options walk.
    fn on_process_options(&mut self, key: &str, parent: &Map<String, Value>, command_name: &str);

    /// Called for keys visited by a default-options walk.
    fn on_process_default_options(&mut self, key: &str, parent: &Map<String, Value>);
}

/// Legacy search-bar siblings and the field of `searchBar` replacing each.
const LEGACY_SEARCH_BAR_FIELDS: [(&str, &str); 5] = [
    ("searchBarHiddenWhenScrolling", "hideOnScroll"),
    ("hideNavBarOnFocusSearchBar", "hideTopBarOnFocus"),
    ("searchBarBackgroundColor", "backgroundColor"),
    ("searchBarTintColor", "tintColor"),
    ("searchBarPlaceholder", "placeholder"),
];

/// A deprecated option found while auditing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeprecationWarning {
    pub key: String,
    pub message: String,
}

impl DeprecationWarning {
    pub fn search_bar_boolean() -> Self {
        Self {
            key: "searchBar".to_string(),
            message: "searchBar: true/false is deprecated, use searchBar: { visible: true/false }"
                .to_string(),
        }
    }

    pub fn interpolation_string(value: &str) -> Self {
        Self {
            key: "interpolation".to_string(),
            message: format!(
                "interpolation: '{}' is deprecated, use interpolation: {{ type: '{}' }}",
                value, value
            ),
        }
    }

    pub fn legacy_search_bar_field(key: &str, replacement: &str) -> Self {
        Self {
            key: key.to_string(),
            message: format!("{} is deprecated, use searchBar.{}", key, replacement),
        }
    }
}

/// Find the deprecation, if any, for `key` as it appears in `parent`.
///
/// `searchBar` and `interpolation` are judged by their value in `parent`
/// itself. The legacy search-bar siblings are flagged wherever they occur
/// under `parent`, since ordinary visits only supply the root snapshot.
pub fn audit_option(key: &str, parent: &Map<String, Value>) -> Option<DeprecationWarning> {
    match key {
        "searchBar" => parent
            .get(key)
            .filter(|value| value.is_boolean())
            .map(|_| DeprecationWarning::search_bar_boolean()),
        "interpolation" => parent
            .get(key)
            .and_then(Value::as_str)
            .map(DeprecationWarning::interpolation_string),
        _ => {
            let (legacy, replacement) =
                LEGACY_SEARCH_BAR_FIELDS.iter().find(|(legacy, _)| *legacy == key)?;
            contains_key_deep(parent, key)
                .then(|| DeprecationWarning::legacy_search_bar_field(legacy, replacement))
        }
    }
}

/// Whether `key` is held by `node` or any object nested below it.
fn contains_key_deep(node: &Map<String, Value>, key: &str) -> bool {
    fn search(value: &Value, key: &str) -> bool {
        match value {
            Value::Object(map) => contains_key_deep(map, key),
            Value::Array(items) => items.iter().any(|item| search(item, key)),
            _ => false,
        }
    }

    node.contains_key(key) || node.values().any(|value| search(value, key))
}

/// Default notifier: records and logs deprecated options.
#[derive(Debug, Clone)]
pub struct DeprecationLog {
    level: ValidationLevel,
    once: bool,
    reported: HashSet<DeprecationWarning>,
    warnings: Vec<DeprecationWarning>,
}

impl DeprecationLog {
    pub fn new(level: ValidationLevel) -> Self {
        Self { level, once: true, reported: HashSet::new(), warnings: Vec::new() }
    }

    pub fn from_config(config: &DeprecationsConfig) -> Self {
        Self { once: config.once, ..Self::new(config.level) }
    }

    /// Warnings recorded so far, in the order they were found.
    pub fn warnings(&self) -> &[DeprecationWarning] {
        &self.warnings
    }

    /// Drain recorded warnings. Already-reported messages stay suppressed when `once` is set.
    pub fn take_warnings(&mut self) -> Vec<DeprecationWarning> {
        std::mem::take(&mut self.warnings)
    }

    fn audit(&mut self, key: &str, parent: &Map<String, Value>) {
        if self.level == ValidationLevel::Ignore {
            return;
        }
        let Some(warning) = audit_option(key, parent) else {
            return;
        };
        if self.once && !self.reported.insert(warning.clone()) {
            return;
        }

        match self.level {
            ValidationLevel::Error => tracing::error!(key = %warning.key, "{}", warning.message),
            _ => tracing::warn!(key = %warning.key, "{}", warning.message),
        }
        self.warnings.push(warning);
    }
}

impl Default for DeprecationLog {
    fn default() -> Self {
        Self::new(ValidationLevel::Warn)
    }
}

impl DeprecationNotifier for DeprecationLog {
    fn on_process_options(&mut self, key: &str, parent: &Map<String, Value>, command_name: &str) {
        tracing::trace!(key, command = command_name, "auditing option");
        self.audit(key, parent);
    }

    fn on_process_default_options(&mut self, key: &str, parent: &Map<String, Value>) {
        self.audit(key, parent);
    }
}
