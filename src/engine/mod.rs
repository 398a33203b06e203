pub mod cycle;
pub mod grid;
pub mod run;
pub mod seed;

pub use cycle::CycleDetector;
pub use grid::Grid;
pub use grid::GridHash;
pub use run::GameResult;
pub use run::Runner;
pub use run::StopReason;
