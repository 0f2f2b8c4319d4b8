//! Unique identifiers for components created during normalization.

use std::sync::atomic::{AtomicU64, Ordering};

/// Prefix of ids minted for components that carry no explicit `id`.
pub const COMPONENT_ID_PREFIX: &str = "CustomComponent";

/// Shared across every provider so ids never repeat within the process.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Mints identifiers that are unique for the lifetime of the process.
pub trait IdProvider {
    fn generate(&self, prefix: &str) -> String;
}

/// Counter-based provider producing `<prefix><n>`, with `n` starting at 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueIdProvider;

impl UniqueIdProvider {
    pub fn new() -> Self {
        Self
    }
}

impl IdProvider for UniqueIdProvider {
    fn generate(&self, prefix: &str) -> String {
        let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_carry_prefix() {
        let id = UniqueIdProvider::new().generate(COMPONENT_ID_PREFIX);
        let suffix = id.strip_prefix(COMPONENT_ID_PREFIX).expect("prefix kept");
        assert!(suffix.parse::<u64>().is_ok_and(|n| n >= 1));
    }

    #[test]
    fn test_ids_never_repeat_across_providers() {
        let a = UniqueIdProvider::new();
        let b = UniqueIdProvider::new();
        let ids: HashSet<String> =
            (0..50).flat_map(|_| [a.generate("Button"), b.generate("Button")]).collect();
        assert_eq!(ids.len(), 100);
    }
}
