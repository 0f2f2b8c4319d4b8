//! Expansion of legacy shorthands into their canonical objects.

use serde_json::{Map, Value};

use super::LegacyShape;

/// Sibling fields that used to configure the search bar, with their canonical names.
const HIDE_ON_SCROLL: (&str, &str) = ("searchBarHiddenWhenScrolling", "hideOnScroll");
const HIDE_TOP_BAR_ON_FOCUS: (&str, &str) = ("hideNavBarOnFocusSearchBar", "hideTopBarOnFocus");
const BACKGROUND_COLOR: (&str, &str) = ("searchBarBackgroundColor", "backgroundColor");
const TINT_COLOR: (&str, &str) = ("searchBarTintColor", "tintColor");
const PLACEHOLDER: (&str, &str) = ("searchBarPlaceholder", "placeholder");

/// Value of a sibling, treating `null` like an absent field.
fn sibling<'a>(node: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    node.get(name).filter(|v| !v.is_null())
}

/// Canonical search-bar descriptor seeded from the legacy sibling fields of `node`.
pub fn search_bar_defaults(node: &Map<String, Value>) -> Map<String, Value> {
    let mut defaults = Map::new();
    defaults.insert("visible".to_string(), Value::Bool(false));
    for (legacy, canonical) in [HIDE_ON_SCROLL, HIDE_TOP_BAR_ON_FOCUS] {
        let value = sibling(node, legacy).cloned().unwrap_or(Value::Bool(false));
        defaults.insert(canonical.to_string(), value);
    }
    defaults.insert("obscuresBackgroundDuringPresentation".to_string(), Value::Bool(false));
    for (legacy, canonical) in [BACKGROUND_COLOR, TINT_COLOR] {
        if let Some(color) = node.get(legacy) {
            defaults.insert(canonical.to_string(), color.clone());
        }
    }
    let placeholder = sibling(node, PLACEHOLDER.0).cloned().unwrap_or(Value::String(String::new()));
    defaults.insert(PLACEHOLDER.1.to_string(), placeholder);
    defaults
}

/// Replace the search bar under `key` with a canonical descriptor.
///
/// A boolean is the legacy visibility flag and is reported as a legacy shape.
/// An object is laid over the defaults, its own fields winning.
pub fn apply_search_bar(key: &str, node: &mut Map<String, Value>) -> Option<LegacyShape> {
    let value = node.get(key)?;
    let mut descriptor = search_bar_defaults(node);

    let legacy = match value {
        Value::Bool(visible) => {
            descriptor.insert("visible".to_string(), Value::Bool(*visible));
            Some(LegacyShape::capture(key, node))
        }
        Value::Object(fields) => {
            for (field, v) in fields {
                descriptor.insert(field.clone(), v.clone());
            }
            None
        }
        // Other shapes carry no search-bar fields
        _ => None,
    };

    node.insert(key.to_string(), Value::Object(descriptor));
    legacy
}

/// Expand a string interpolation into `{ type: <string> }`.
pub fn apply_interpolation(key: &str, node: &mut Map<String, Value>) -> Option<LegacyShape> {
    if !node.get(key).is_some_and(Value::is_string) {
        return None;
    }
    let legacy = LegacyShape::capture(key, node);
    let slot = node.get_mut(key)?;
    let current = slot.take();
    let mut expanded = Map::new();
    expanded.insert("type".to_string(), current);
    *slot = Value::Object(expanded);
    Some(legacy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_boolean_search_bar_expanded() {
        let mut options = node(json!({ "searchBar": true }));
        let legacy = apply_search_bar("searchBar", &mut options).expect("flagged as legacy");

        assert_eq!(legacy.key, "searchBar");
        assert_eq!(legacy.parent["searchBar"], json!(true));
        assert_eq!(
            options["searchBar"],
            json!({
                "visible": true,
                "hideOnScroll": false,
                "hideTopBarOnFocus": false,
                "obscuresBackgroundDuringPresentation": false,
                "placeholder": ""
            })
        );
    }

    #[test]
    fn test_search_bar_seeded_from_siblings() {
        let mut options = node(json!({
            "searchBarHiddenWhenScrolling": true,
            "hideNavBarOnFocusSearchBar": null,
            "searchBarTintColor": 4278190335u32,
            "searchBarPlaceholder": "Find",
            "searchBar": true
        }));
        apply_search_bar("searchBar", &mut options);

        assert_eq!(
            options["searchBar"],
            json!({
                "visible": true,
                "hideOnScroll": true,
                "hideTopBarOnFocus": false,
                "obscuresBackgroundDuringPresentation": false,
                "tintColor": 4278190335u32,
                "placeholder": "Find"
            })
        );
    }

    #[test]
    fn test_object_search_bar_wins_over_defaults() {
        let mut options = node(json!({
            "searchBarPlaceholder": "Legacy",
            "searchBar": { "visible": true, "placeholder": "Search" }
        }));
        assert_eq!(apply_search_bar("searchBar", &mut options), None);

        assert_eq!(options["searchBar"]["placeholder"], json!("Search"));
        assert_eq!(options["searchBar"]["visible"], json!(true));
        assert_eq!(options["searchBar"]["hideOnScroll"], json!(false));
    }

    #[test]
    fn test_search_bar_idempotent() {
        let mut options = node(json!({ "searchBar": { "visible": true, "tintColor": 1 } }));
        apply_search_bar("searchBar", &mut options);
        let once = options.clone();
        apply_search_bar("searchBar", &mut options);
        assert_eq!(options, once);
    }

    #[test]
    fn test_search_bar_key_keeps_position() {
        let mut options = node(json!({ "title": "x", "searchBar": true, "visible": 1 }));
        apply_search_bar("searchBar", &mut options);
        assert_eq!(options.keys().collect::<Vec<_>>(), vec!["title", "searchBar", "visible"]);
    }

    #[test]
    fn test_string_interpolation_expanded() {
        let mut options = node(json!({ "duration": 300, "interpolation": "easeIn" }));
        let legacy = apply_interpolation("interpolation", &mut options).expect("flagged");

        assert_eq!(legacy.parent["interpolation"], json!("easeIn"));
        assert_eq!(options["interpolation"], json!({ "type": "easeIn" }));
    }

    #[test]
    fn test_object_interpolation_untouched() {
        let mut options = node(json!({ "interpolation": { "type": "spring", "mass": 2 } }));
        assert_eq!(apply_interpolation("interpolation", &mut options), None);
        assert_eq!(options["interpolation"], json!({ "type": "spring", "mass": 2 }));
    }
}
