//! HTTP Server Binary
//!
//! Runs the `/cgol/game` and `/cgol/batch` endpoints over a Postgres-backed
//! result cache.

use wordlife::*;

#[tokio::main]
async fn main() {
    init();
    hosting::Server::run().await.unwrap();
}
