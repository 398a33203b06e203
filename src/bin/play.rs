//! Interactive CLI for running single words or batches without standing up
//! the HTTP server.

use clap::Parser;
use wordlife::batch;
use wordlife::cache::Cache;
use wordlife::cache::MemoryCache;
use wordlife::handler;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Play {
    #[command(about = "Run the simulation for a single word", alias = "word")]
    Word {
        #[arg(required = true)]
        word: String,
    },
    #[command(
        about = "Sample n_words from the bundled lexicon and report the best score",
        alias = "batch"
    )]
    Batch {
        #[arg(required = true)]
        n_words: i64,
    },
}

#[cfg(feature = "database")]
async fn open_cache() -> Box<dyn Cache> {
    match std::env::var("DB_URL") {
        Ok(_) => Box::new(wordlife::db().await),
        Err(_) => {
            log::info!("DB_URL unset, running with an in-memory cache");
            Box::new(MemoryCache::new())
        }
    }
}

#[cfg(not(feature = "database"))]
async fn open_cache() -> Box<dyn Cache> {
    Box::new(MemoryCache::new())
}

#[tokio::main]
async fn main() {
    let cache = open_cache().await;

    match Play::parse() {
        Play::Word { word } => match handler::handle(cache.as_ref(), &word).await {
            Ok(result) => println!(
                "{word}: {} generations, score {}, {}",
                result.num_generations, result.score, result.stop_reason
            ),
            Err(err) => eprintln!("error: {err}"),
        },
        Play::Batch { n_words } => {
            let mut rng = rand::rng();
            match batch::run_batch(cache.as_ref(), &mut rng, n_words).await {
                Ok((word, result)) => println!(
                    "best of {n_words}: {word} ({} generations, score {}, {})",
                    result.num_generations, result.score, result.stop_reason
                ),
                Err(err) => eprintln!("error: {err}"),
            }
        }
    }
}
