use serde::Deserialize;
use serde::Serialize;

/// Body of `POST /cgol/game`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GameRequest {
    pub word: String,
}

/// Body of `POST /cgol/batch`.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchRequest {
    pub n_words: i64,
}
