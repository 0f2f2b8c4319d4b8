//! Component ids and out-of-band `passProps`.

use serde_json::{Map, Value};

use super::{id_key, is_falsy, is_truthy};
use crate::error::{NormalizeError, Result};
use crate::ids::{IdProvider, COMPONENT_ID_PREFIX};
use crate::registry::ComponentRegistry;
use crate::store::PropsStore;

const PASS_PROPS: &str = "passProps";

/// Assign a `componentId` to the component under `key`, make sure its class
/// exists, and move its `passProps` to the props store.
pub fn apply_component(
    ids: &dyn IdProvider,
    components: &mut dyn ComponentRegistry,
    props: &mut dyn PropsStore,
    key: &str,
    node: &mut Map<String, Value>,
    path: &str,
) -> Result<()> {
    let component = node.get_mut(key).and_then(Value::as_object_mut).ok_or_else(|| {
        NormalizeError::UnexpectedShape { path: path.to_string(), expected: "a component object" }
    })?;

    let component_id = match component.get("id") {
        Some(id) if !is_falsy(id) => id.clone(),
        _ => Value::String(ids.generate(COMPONENT_ID_PREFIX)),
    };
    component.insert("componentId".to_string(), component_id.clone());

    let name = component
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| NormalizeError::MissingField { path: path.to_string(), field: "name" })?;
    components.ensure_class_for_name(name)?;

    if let Some(pass_props) = component.shift_remove(PASS_PROPS) {
        if !is_falsy(&pass_props) {
            props.update_props(&id_key(&component_id), pass_props);
        }
    }
    Ok(())
}

/// Move the `passProps` of every button that has both an `id` and props.
pub fn apply_buttons_pass_props(
    props: &mut dyn PropsStore,
    key: &str,
    node: &mut Map<String, Value>,
) {
    let Some(Value::Array(buttons)) = node.get_mut(key) else {
        return;
    };

    for button in buttons.iter_mut().filter_map(Value::as_object_mut) {
        if !is_truthy(button.get("id")) || !is_truthy(button.get(PASS_PROPS)) {
            continue;
        }
        let id = button.get("id").map(id_key).unwrap_or_default();
        if let Some(pass_props) = button.shift_remove(PASS_PROPS) {
            props.update_props(&id, pass_props);
        }
    }
}
