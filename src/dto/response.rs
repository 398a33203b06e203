use crate::engine::GameResult;
use serde::Deserialize;
use serde::Serialize;

/// On-wire shape of `GameResult`: field names and enum spellings are part of
/// the wire contract, so this mirrors `GameResult` field-for-field rather
/// than reusing its `Serialize` impl directly.
#[derive(Debug, Serialize, Deserialize)]
pub struct GameResponse {
    pub num_generations: usize,
    pub score: usize,
    pub stop_reason: String,
}

impl From<GameResult> for GameResponse {
    fn from(result: GameResult) -> Self {
        Self {
            num_generations: result.num_generations,
            score: result.score,
            stop_reason: result.stop_reason.to_string(),
        }
    }
}

/// Response of `POST /cgol/batch`: a `GameResponse` augmented with the
/// winning word.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResponse {
    pub word: String,
    pub num_generations: usize,
    pub score: usize,
    pub stop_reason: String,
}

impl BatchResponse {
    pub fn new(word: String, result: GameResult) -> Self {
        Self {
            word,
            num_generations: result.num_generations,
            score: result.score,
            stop_reason: result.stop_reason.to_string(),
        }
    }
}

/// Human-readable validation failure body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StopReason;

    #[test]
    fn stop_reason_serializes_with_exact_spelling() {
        let response = GameResponse::from(GameResult {
            num_generations: 1,
            score: 0,
            stop_reason: StopReason::ReachedMaxGeneration,
        });
        assert_eq!(response.stop_reason, "reached_max_generation");
    }
}
