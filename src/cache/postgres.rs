use crate::cache::Cache;
use crate::engine::GameResult;
use crate::engine::StopReason;
use tokio_postgres::Client;

const TABLE: &str = "results";

/// DDL for the result cache table. `word` is unique; the three result
/// fields are typed to match `GameResult`. Run once at process start,
/// matching the host project's `db()` bootstrap convention.
pub fn schema_ddl() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {TABLE} (
            word            TEXT PRIMARY KEY,
            num_generations BIGINT NOT NULL,
            score           BIGINT NOT NULL,
            stop_reason     TEXT NOT NULL
        );"
    )
}

impl StopReason {
    fn parse(raw: &str) -> anyhow::Result<Self> {
        match raw {
            "extinction" => Ok(Self::Extinction),
            "persistent_state" => Ok(Self::PersistentState),
            "repeated_pattern" => Ok(Self::RepeatedPattern),
            "reached_max_generation" => Ok(Self::ReachedMaxGeneration),
            other => Err(anyhow::anyhow!("unrecognized stop_reason column: {other}")),
        }
    }
}

#[async_trait::async_trait]
impl Cache for Client {
    async fn get(&self, word: &str) -> anyhow::Result<Option<GameResult>> {
        const SQL: &str = const_format::concatcp!(
            "SELECT num_generations, score, stop_reason ",
            "FROM   ", TABLE, " ",
            "WHERE  word = $1"
        );
        let row = self.query_opt(SQL, &[&word]).await?;
        row.map(|row| {
            Ok(GameResult {
                num_generations: row.get::<_, i64>(0) as usize,
                score: row.get::<_, i64>(1) as usize,
                stop_reason: StopReason::parse(row.get::<_, &str>(2))?,
            })
        })
        .transpose()
    }

    async fn put(&self, word: &str, result: GameResult) -> anyhow::Result<()> {
        const SQL: &str = const_format::concatcp!(
            "INSERT INTO ", TABLE, " (word, num_generations, score, stop_reason) ",
            "VALUES                  ($1,   $2,              $3,    $4) ",
            "ON CONFLICT (word) DO NOTHING"
        );
        self.execute(
            SQL,
            &[
                &word,
                &(result.num_generations as i64),
                &(result.score as i64),
                &result.stop_reason.to_string(),
            ],
        )
        .await?;
        Ok(())
    }
}

// `Arc<Client>` gets its `Cache` impl from the blanket `Arc<C>` impl in
// `cache::mod`; no separate impl is needed here.
