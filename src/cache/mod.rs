pub mod memory;
#[cfg(feature = "database")]
pub mod postgres;

pub use memory::MemoryCache;

use crate::engine::GameResult;

/// Persistent mapping from normalized word to `GameResult`.
///
/// `get` never raises on a missing key. `put` inserts only if the word is
/// absent; a second `put` for the same word is a no-op with respect to the
/// value a subsequent `get` returns. Implementations are free to treat the
/// repeat insert as a silent no-op or a logged-and-ignored error, since the
/// handler tolerates either.
#[async_trait::async_trait]
pub trait Cache: Send + Sync {
    async fn get(&self, word: &str) -> anyhow::Result<Option<GameResult>>;
    async fn put(&self, word: &str, result: GameResult) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
impl<C: Cache + ?Sized> Cache for std::sync::Arc<C> {
    async fn get(&self, word: &str) -> anyhow::Result<Option<GameResult>> {
        self.as_ref().get(word).await
    }

    async fn put(&self, word: &str, result: GameResult) -> anyhow::Result<()> {
        self.as_ref().put(word, result).await
    }
}
