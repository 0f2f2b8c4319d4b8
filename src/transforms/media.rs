//! Color and image resolution.

use serde_json::{Map, Value};

use crate::assets::{AssetError, AssetResolver};
use crate::color::{ColorError, ColorResolver, NO_COLOR};

/// Resolve the color stored under `key`.
///
/// Runs for falsy values too: `null` becomes the [`NO_COLOR`] sentinel.
pub fn apply_color(
    colors: &dyn ColorResolver,
    key: &str,
    node: &mut Map<String, Value>,
) -> Result<(), ColorError> {
    let Some(value) = node.get(key) else {
        return Ok(());
    };
    let native = match value {
        Value::Null => Value::String(NO_COLOR.to_string()),
        color => colors.to_native_color(color)?,
    };
    node.insert(key.to_string(), native);
    Ok(())
}

/// Resolve the image stored under `key`; textual references are kept as they are.
pub fn apply_image(
    assets: &dyn AssetResolver,
    key: &str,
    node: &mut Map<String, Value>,
) -> Result<(), AssetError> {
    let Some(value) = node.get(key) else {
        return Ok(());
    };
    if value.is_string() {
        return Ok(());
    }
    let resolved = assets.resolve_from_require(value)?;
    node.insert(key.to_string(), resolved);
    Ok(())
}
