use crate::cache::Cache;
use crate::engine::GameResult;
use crate::engine::Runner;
use crate::errors::GameError;

/// Validates a word, consults the cache, and runs the engine on a miss.
/// Cache misses compute through; cache write failures are logged and
/// swallowed rather than masking a successful computation.
pub async fn handle(cache: &dyn Cache, word: &str) -> Result<GameResult, GameError> {
    validate(word)?;

    match cache.get(word).await {
        Ok(Some(result)) => {
            log::info!("cache hit for {word:?}");
            return Ok(result);
        }
        Ok(None) => {}
        Err(err) => {
            let err = GameError::CacheUnavailable(err.to_string());
            log::warn!("{err} on lookup for {word:?}, computing through");
        }
    }

    let result = run_engine(word)?;

    if let Err(err) = cache.put(word, result).await {
        let err = GameError::CacheUnavailable(err.to_string());
        log::warn!("{err} on store for {word:?}, returning result uncached");
    }

    log::info!(
        "computed {word:?}: {} generations, score {}, {}",
        result.num_generations,
        result.score,
        result.stop_reason
    );
    Ok(result)
}

/// Runs the engine behind a panic barrier so an unexpected failure inside
/// `Runner` surfaces as a structured `EngineInternal` error instead of
/// taking down the caller's task.
fn run_engine(word: &str) -> Result<GameResult, GameError> {
    match std::panic::catch_unwind(|| Runner::with_defaults().run_from_word(word)) {
        Ok(result) => result,
        Err(_) => Err(GameError::EngineInternal(format!(
            "simulation panicked for {word:?}"
        ))),
    }
}

/// Validation order matters: type check, then non-empty, then ASCII.
/// Callers that already hold a `String` (no JSON type ambiguity) start at
/// non-empty; `BadType` is only reachable from a transport layer that
/// accepts non-string JSON for the `word` field.
fn validate(word: &str) -> Result<(), GameError> {
    if word.is_empty() {
        return Err(GameError::EmptyWord);
    }
    if !word.is_ascii() {
        return Err(GameError::NonAscii);
    }
    Ok(())
}
