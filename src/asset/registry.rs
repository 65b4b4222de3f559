//! Ordered, name-deduplicated snippet registry.

use rustc_hash::FxHashMap;

/// Insertion-ordered mapping from component name to snippet text.
///
/// A name keeps the position of its first registration; registering it
/// again replaces the stored text in place.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    entries: Vec<(String, String)>,
    index: FxHashMap<String, usize>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` under `name`, or overwrite the existing slot.
    pub fn register(&mut self, name: &str, text: &str) {
        match self.index.get(name) {
            Some(&pos) => self.entries[pos].1 = text.to_string(),
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), text.to_string()));
            }
        }
    }

    /// Current values in registry order.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().map(|(_, text)| text.clone()).collect()
    }

    /// Registered names in registry order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Values joined with a single newline, in registry order.
    pub fn join(&self) -> String {
        let values: Vec<&str> = self.entries.iter().map(|(_, text)| text.as_str()).collect();
        values.join("\n")
    }
}
