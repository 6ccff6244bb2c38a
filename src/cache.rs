use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

/// Variants kept per path; further variants are served uncached until the
/// path is revalidated.
pub const MAX_VARIANTS_PER_PATH: usize = 64;

struct PathEntry<V> {
    generation: u64,
    variants: HashMap<String, V>,
}

impl<V> Default for PathEntry<V> {
    fn default() -> Self {
        Self {
            generation: 0,
            variants: HashMap::new(),
        }
    }
}

/// In-process cache of list results, keyed by request path and then by the
/// query-string variant of that path.
///
/// Each path carries a generation that `revalidate_path` bumps. A reader
/// takes the generation before loading and hands it back to `put`, so a load
/// that raced a revalidation is dropped instead of cached.
pub struct PathCache<V> {
    entries: RwLock<HashMap<String, PathEntry<V>>>,
    max_variants: usize,
}

impl<V: Clone> PathCache<V> {
    pub fn new() -> Self {
        Self::with_max_variants(MAX_VARIANTS_PER_PATH)
    }

    pub fn with_max_variants(max_variants: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            max_variants,
        }
    }

    pub async fn generation(&self, path: &str) -> u64 {
        let entries = self.entries.read().await;
        entries.get(path).map_or(0, |e| e.generation)
    }

    pub async fn get(&self, path: &str, variant: &str) -> Option<V> {
        let entries = self.entries.read().await;
        entries.get(path).and_then(|e| e.variants.get(variant)).cloned()
    }

    /// Store `value` if `path` is still at `generation` and has room for it.
    /// Returns whether the value was cached.
    pub async fn put(&self, path: &str, variant: &str, generation: u64, value: V) -> bool {
        let mut entries = self.entries.write().await;
        let entry = entries.entry(path.to_string()).or_default();
        if entry.generation != generation {
            debug!(path, variant, "stale load not cached");
            return false;
        }
        if entry.variants.len() >= self.max_variants && !entry.variants.contains_key(variant) {
            debug!(path, variant, "variant limit reached, not cached");
            return false;
        }
        entry.variants.insert(variant.to_string(), value);
        true
    }

    /// Drop every cached variant of `path`.
    pub async fn revalidate_path(&self, path: &str) {
        let mut entries = self.entries.write().await;
        let entry = entries.entry(path.to_string()).or_default();
        entry.generation = entry.generation.wrapping_add(1);
        let variants = entry.variants.len();
        entry.variants.clear();
        debug!(path, variants, "path revalidated");
    }

    #[cfg(test)]
    pub async fn is_cached(&self, path: &str) -> bool {
        self.entries
            .read()
            .await
            .get(path)
            .is_some_and(|e| !e.variants.is_empty())
    }

    #[cfg(test)]
    pub async fn variant_count(&self, path: &str) -> usize {
        self.entries
            .read()
            .await
            .get(path)
            .map_or(0, |e| e.variants.len())
    }
}

impl<V: Clone> Default for PathCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
