//! Out-of-band props storage
//!
//! `passProps` bags are moved out of render options and stored here keyed by
//! the component or button id, so the render options only carry plain data.

use serde_json::Value;
use std::collections::HashMap;

/// Receives props bags moved out of options.
pub trait PropsStore {
    /// Store `props` for `id`, replacing anything stored before.
    fn update_props(&mut self, id: &str, props: Value);
}

/// In-memory props store with last-write-wins semantics.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPropsStore {
    props_by_id: HashMap<String, Value>,
}

impl InMemoryPropsStore {
    pub fn new() -> Self {
        Self { props_by_id: HashMap::new() }
    }

    pub fn get_props_for_id(&self, id: &str) -> Option<&Value> {
        self.props_by_id.get(id)
    }

    /// Remove and return the props stored for `id`.
    pub fn clear_props_for_id(&mut self, id: &str) -> Option<Value> {
        self.props_by_id.remove(id)
    }

    pub fn len(&self) -> usize {
        self.props_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props_by_id.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.props_by_id.iter()
    }
}

impl PropsStore for InMemoryPropsStore {
    fn update_props(&mut self, id: &str, props: Value) {
        tracing::trace!(id, "storing props");
        self.props_by_id.insert(id.to_string(), props);
    }
}
