//! Shared interface of the name-keyed registries.

use std::collections::HashMap;

/// A registry backed by a name-keyed map.
///
/// Implementors only expose their map; lookups and bookkeeping come for free.
///
/// ```
/// use navopts::registry::{ComponentCatalog, Registry};
///
/// let mut catalog = ComponentCatalog::new();
/// catalog.register_component("Settings");
/// catalog.register_component("Home");
///
/// assert!(catalog.contains("Home"));
/// assert_eq!(catalog.names(), vec!["Home", "Settings"]);
/// ```
pub trait Registry<V: 'static> {
    fn entries(&self) -> &HashMap<String, V>;

    fn entries_mut(&mut self) -> &mut HashMap<String, V>;

    fn contains(&self, name: &str) -> bool {
        self.entries().contains_key(name)
    }

    fn get(&self, name: &str) -> Option<&V> {
        self.entries().get(name)
    }

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn clear(&mut self) {
        self.entries_mut().clear();
    }

    /// Registered names, sorted.
    fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries().keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
