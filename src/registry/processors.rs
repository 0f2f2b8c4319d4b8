//! Path-keyed registry of option processors.
//!
//! Hosts register functions against an exact dotted path (`topBar.title.text`);
//! the walker runs them, in registration order, before any built-in transform.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use super::traits::Registry;

/// Rewrites the value found at a path. Receives the current value and the command name.
pub type OptionProcessor = Box<dyn Fn(Value, &str) -> Value>;

/// Identifies one registration so it can be removed later.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProcessorHandle {
    path: String,
    id: u64,
}

impl ProcessorHandle {
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A processor together with its registration id.
pub struct RegisteredProcessor {
    id: u64,
    processor: OptionProcessor,
}

impl RegisteredProcessor {
    pub fn apply(&self, value: Value, command_name: &str) -> Value {
        (self.processor)(value, command_name)
    }
}

impl fmt::Debug for RegisteredProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredProcessor").field("id", &self.id).finish_non_exhaustive()
    }
}

/// Lookup interface the walker consumes; never mutated during a walk.
pub trait ProcessorLookup {
    /// Processors registered for `path`, in registration order.
    fn get_processors(&self, path: &str) -> Option<&[RegisteredProcessor]>;
}

/// Exact-match registry from dotted path to ordered processors.
#[derive(Debug, Default)]
pub struct ProcessorRegistry {
    processors: HashMap<String, Vec<RegisteredProcessor>>,
    next_id: u64,
}

impl ProcessorRegistry {
    pub fn new() -> Self {
        Self { processors: HashMap::new(), next_id: 0 }
    }

    /// Register `processor` for `path`, after any already registered there.
    pub fn add_processor<F>(&mut self, path: impl Into<String>, processor: F) -> ProcessorHandle
    where
        F: Fn(Value, &str) -> Value + 'static,
    {
        let path = path.into();
        self.next_id += 1;
        let id = self.next_id;
        self.processors
            .entry(path.clone())
            .or_default()
            .push(RegisteredProcessor { id, processor: Box::new(processor) });
        ProcessorHandle { path, id }
    }

    /// Remove a single registration. Returns `false` if it was already gone.
    pub fn remove_processor(&mut self, handle: &ProcessorHandle) -> bool {
        let Some(list) = self.processors.get_mut(&handle.path) else {
            return false;
        };
        let before = list.len();
        list.retain(|p| p.id != handle.id);
        let removed = list.len() != before;
        if list.is_empty() {
            self.processors.remove(&handle.path);
        }
        removed
    }
}

impl ProcessorLookup for ProcessorRegistry {
    fn get_processors(&self, path: &str) -> Option<&[RegisteredProcessor]> {
        self.processors.get(path).map(Vec::as_slice)
    }
}

impl Registry<Vec<RegisteredProcessor>> for ProcessorRegistry {
    fn entries(&self) -> &HashMap<String, Vec<RegisteredProcessor>> {
        &self.processors
    }

    fn entries_mut(&mut self) -> &mut HashMap<String, Vec<RegisteredProcessor>> {
        &mut self.processors
    }
}
