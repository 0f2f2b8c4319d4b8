//! Stack animation wrapping.
//!
//! Canonical stack animations nest their view animations under
//! `content.enter` / `content.exit`. A flat animation (neither present) is a
//! legacy descriptor and gets wrapped.

use serde_json::{Map, Value};

use crate::error::{NormalizeError, Result};
use crate::schema::FieldKind;

/// Whether `animation.content.<field>` is present.
fn has_content_field(animation: &Value, field: &str) -> bool {
    animation.get("content").and_then(|content| content.get(field)).is_some()
}

/// Single-entry object `{ field: value }`.
fn nest(field: &str, value: Value) -> Value {
    let mut object = Map::new();
    object.insert(field.to_string(), value);
    Value::Object(object)
}

/// Wrap the stack animation under `key` into its canonical shape.
///
/// - `push` / `setStackRoot`: the whole value becomes `{ content: { enter: value } }`.
/// - `pop`: the existing `pop.content` becomes `{ exit: content }`. The whole content
///   moves under `exit` since a value tree cannot hold `content.exit` pointing back at
///   `content`. Siblings of `content`, such as `waitForRender`, stay on `pop`. A `pop`
///   without a `content` entry is a [`NormalizeError::MissingField`].
///
/// Kinds other than the stack animations are ignored.
pub fn apply_stack_animation(
    kind: FieldKind,
    key: &str,
    node: &mut Map<String, Value>,
    path: &str,
) -> Result<()> {
    let Some(animation) = node.get_mut(key) else {
        return Ok(());
    };
    if has_content_field(animation, "enter") || has_content_field(animation, "exit") {
        return Ok(());
    }

    match kind {
        FieldKind::Push | FieldKind::SetStackRoot => {
            let legacy = animation.take();
            *animation = nest("content", nest("enter", legacy));
        }
        FieldKind::Pop => {
            let content = animation
                .as_object_mut()
                .and_then(|pop| pop.get_mut("content"))
                .ok_or_else(|| NormalizeError::MissingField {
                    path: path.to_string(),
                    field: "content",
                })?;
            let exit = content.take();
            *content = nest("exit", exit);
        }
        _ => {}
    }
    Ok(())
}
