pub mod batch;
pub mod cache;
pub mod dto;
pub mod engine;
pub mod errors;
pub mod handler;
#[cfg(all(feature = "server", feature = "database"))]
pub mod hosting;
pub mod lexicon;

/// grid parameters
pub const GRID_ROWS: usize = 60;
pub const GRID_COLS: usize = 40;
pub const MAX_GENERATIONS: usize = 1000;
pub const REPEAT_THRESHOLD: usize = 10;

/// initialize logging and exit on ctrl-c
#[cfg(feature = "server")]
pub fn init() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.unwrap();
        println!();
        log::warn!("forcing exit");
        std::process::exit(0);
    });
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// get a database connection, run migrations, and return the client
#[cfg(feature = "database")]
pub async fn db() -> std::sync::Arc<tokio_postgres::Client> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let ref url = std::env::var("DB_URL").expect("DB_URL must be set");
    let (client, connection) = tokio_postgres::connect(url, tls)
        .await
        .expect("database connection failed");
    tokio::spawn(connection);
    client
        .batch_execute(&cache::postgres::schema_ddl())
        .await
        .expect("prepare cache schema");
    std::sync::Arc::new(client)
}
