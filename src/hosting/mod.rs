#![cfg(all(feature = "server", feature = "database"))]

mod server;

pub use server::Server;
