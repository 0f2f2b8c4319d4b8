//! Built-in field transforms
//!
//! Each transform rewrites one entry of an options node in place. The walker
//! picks the transform from the entry's [`FieldKind`](crate::schema::FieldKind).
//!
//! # Module Structure
//!
//! - [`media`] - Color and image resolution
//! - [`props`] - Component ids and out-of-band `passProps`
//! - [`legacy`] - Search-bar and interpolation shorthand expansion
//! - [`animation`] - Stack animation (`push`, `pop`, `setStackRoot`) wrapping

pub mod animation;
pub mod legacy;
pub mod media;
pub mod props;

use serde_json::{Map, Value};

pub use animation::apply_stack_animation;
pub use legacy::{apply_interpolation, apply_search_bar};
pub use media::{apply_color, apply_image};
pub use props::{apply_buttons_pass_props, apply_component};

/// A legacy option shape a transform has just rewritten.
///
/// `parent` is a copy of the node as it was before the rewrite, so the
/// notifier sees the legacy value.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyShape {
    pub key: String,
    pub parent: Map<String, Value>,
}

impl LegacyShape {
    pub fn capture(key: &str, node: &Map<String, Value>) -> Self {
        Self { key: key.to_string(), parent: node.clone() }
    }
}

/// Falsy option values: `null`, `false`, `0`, and the empty string.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Whether `value` is set to something truthy.
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    value.is_some_and(|v| !is_falsy(v))
}

/// Key under which an id value is stored out of band.
pub(crate) fn id_key(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
