use crate::cache::Cache;
use crate::engine::GameResult;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory `Cache` double used by tests and the `play` CLI's offline mode
/// so engine- and handler-level tests don't require a live database.
///
/// Insert-if-absent is enforced under a single mutex: the first `put` for a
/// word wins, matching the Postgres backend's `ON CONFLICT DO NOTHING`
/// collapse.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, GameResult>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Cache for MemoryCache {
    async fn get(&self, word: &str) -> anyhow::Result<Option<GameResult>> {
        let entries = self.entries.lock().expect("cache mutex poisoned");
        Ok(entries.get(word).copied())
    }

    async fn put(&self, word: &str, result: GameResult) -> anyhow::Result<()> {
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        entries.entry(word.to_string()).or_insert(result);
        Ok(())
    }
}
