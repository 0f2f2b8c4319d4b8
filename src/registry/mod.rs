//! Registry traits and implementations for named items.
//!
//! This module provides:
//! - A unified `Registry` trait for consistent registry interfaces
//! - `ProcessorRegistry` for path-keyed option processors
//! - `ComponentCatalog` for component names whose native class must exist

mod components;
mod processors;
mod traits;

// Re-export all public items from submodules
pub use components::{ComponentCatalog, ComponentEntry, ComponentError, ComponentRegistry};
pub use processors::{
    OptionProcessor, ProcessorHandle, ProcessorLookup, ProcessorRegistry, RegisteredProcessor,
};
pub use traits::Registry;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_new_is_empty() {
        let catalog = ComponentCatalog::new();
        assert!(catalog.is_empty());
        assert!(!catalog.contains("anything"));
    }

    #[test]
    fn test_ensure_registered_component() {
        let mut catalog = ComponentCatalog::new();
        catalog.register_component("Home");
        assert!(!catalog.is_class_ensured("Home"));

        assert_eq!(catalog.ensure_class_for_name("Home"), Ok(()));
        assert!(catalog.is_class_ensured("Home"));

        // Idempotent
        assert_eq!(catalog.ensure_class_for_name("Home"), Ok(()));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_ensure_unknown_component_fails() {
        let mut catalog = ComponentCatalog::new();
        assert_eq!(
            catalog.ensure_class_for_name("Ghost"),
            Err(ComponentError::NotRegistered("Ghost".to_string()))
        );
        assert!(!catalog.contains("Ghost"));
    }

    #[test]
    fn test_lazy_catalog_registers_on_first_use() {
        let mut catalog = ComponentCatalog::lazy();
        assert_eq!(catalog.ensure_class_for_name("Settings"), Ok(()));
        assert!(catalog.contains("Settings"));
        assert!(catalog.is_class_ensured("Settings"));
    }

    #[test]
    fn test_register_twice_keeps_entry() {
        let mut catalog = ComponentCatalog::new();
        catalog.register_component("Home");
        catalog.ensure_class_for_name("Home").unwrap();
        catalog.register_component("Home");

        assert_eq!(
            catalog.get("Home"),
            Some(&ComponentEntry { name: "Home".to_string(), class_ensured: true })
        );
    }

    #[test]
    fn test_registry_names_and_clear() {
        let mut catalog = ComponentCatalog::new();
        catalog.register_component("B");
        catalog.register_component("A");
        assert_eq!(catalog.names(), vec!["A", "B"]);

        catalog.clear();
        assert!(catalog.is_empty());
    }

    /// Sorted names paired with whether each can be looked up again
    fn listing<V: 'static>(registry: &dyn Registry<V>) -> Vec<(&str, bool)> {
        registry.names().into_iter().map(|name| (name, registry.get(name).is_some())).collect()
    }

    #[test]
    fn test_registries_listed_through_trait_object() {
        let mut catalog = ComponentCatalog::new();
        catalog.register_component("Settings");
        catalog.register_component("Home");
        assert_eq!(listing::<ComponentEntry>(&catalog), vec![("Home", true), ("Settings", true)]);

        let mut processors = ProcessorRegistry::new();
        processors.add_processor("topBar.title", |value: serde_json::Value, _: &str| value);
        assert_eq!(listing::<Vec<RegisteredProcessor>>(&processors), vec![("topBar.title", true)]);
    }
}
