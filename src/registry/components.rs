//! Component class registry.

use std::collections::HashMap;
use thiserror::Error;

use super::traits::Registry;

/// Error when a component class cannot be ensured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ComponentError {
    /// Name was never registered and lazy registration is off
    #[error("Component '{0}' is not registered")]
    NotRegistered(String),
}

/// Makes sure a native class exists for a named component.
pub trait ComponentRegistry {
    /// Idempotent; fails if the name is unknown.
    fn ensure_class_for_name(&mut self, name: &str) -> Result<(), ComponentError>;
}

/// A registered component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEntry {
    pub name: String,
    /// Whether a class has been ensured for this component
    pub class_ensured: bool,
}

/// Registry of component names known to the host.
#[derive(Debug, Clone, Default)]
pub struct ComponentCatalog {
    components: HashMap<String, ComponentEntry>,
    lazy_registration: bool,
}

impl ComponentCatalog {
    pub fn new() -> Self {
        Self { components: HashMap::new(), lazy_registration: false }
    }

    /// Catalog that registers unknown names on first use.
    pub fn lazy() -> Self {
        Self { components: HashMap::new(), lazy_registration: true }
    }

    pub fn set_lazy_registration(&mut self, lazy: bool) {
        self.lazy_registration = lazy;
    }

    /// Register a component name. Registering twice keeps the existing entry.
    pub fn register_component(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.components
            .entry(name.clone())
            .or_insert(ComponentEntry { name, class_ensured: false });
    }

    /// Whether `ensure_class_for_name` has succeeded for `name`.
    pub fn is_class_ensured(&self, name: &str) -> bool {
        self.components.get(name).is_some_and(|c| c.class_ensured)
    }
}

impl ComponentRegistry for ComponentCatalog {
    fn ensure_class_for_name(&mut self, name: &str) -> Result<(), ComponentError> {
        if !self.components.contains_key(name) {
            if !self.lazy_registration {
                return Err(ComponentError::NotRegistered(name.to_string()));
            }
            tracing::debug!(component = name, "registering component lazily");
            self.register_component(name);
        }

        if let Some(entry) = self.components.get_mut(name) {
            entry.class_ensured = true;
        }
        Ok(())
    }
}

impl Registry<ComponentEntry> for ComponentCatalog {
    fn entries(&self) -> &HashMap<String, ComponentEntry> {
        &self.components
    }

    fn entries_mut(&mut self) -> &mut HashMap<String, ComponentEntry> {
        &mut self.components
    }
}
