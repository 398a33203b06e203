use crate::engine::cycle::CycleDetector;
use crate::engine::grid::Grid;
use crate::engine::seed;
use crate::errors::GameError;
use serde::Deserialize;
use serde::Serialize;

/// Closed set of termination reasons a run can end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    Extinction,
    PersistentState,
    RepeatedPattern,
    ReachedMaxGeneration,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Extinction => "extinction",
            Self::PersistentState => "persistent_state",
            Self::RepeatedPattern => "repeated_pattern",
            Self::ReachedMaxGeneration => "reached_max_generation",
        };
        write!(f, "{s}")
    }
}

/// Immutable, serializable terminal outcome of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub num_generations: usize,
    pub score: usize,
    pub stop_reason: StopReason,
}

/// Drives generations for one word, one grid, one CycleTable: strictly
/// sequential, never shared across runs.
pub struct Runner {
    rows: usize,
    cols: usize,
    max_generations: usize,
    repeat_threshold: usize,
}

impl Runner {
    pub fn new(rows: usize, cols: usize, max_generations: usize, repeat_threshold: usize) -> Self {
        Self {
            rows,
            cols,
            max_generations,
            repeat_threshold,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            crate::GRID_ROWS,
            crate::GRID_COLS,
            crate::MAX_GENERATIONS,
            crate::REPEAT_THRESHOLD,
        )
    }

    /// Seeds a grid from `word` and evolves it to completion.
    pub fn run_from_word(&self, word: &str) -> Result<GameResult, GameError> {
        let grid = seed::seed(word, self.rows, self.cols)?;
        Ok(self.run(grid))
    }

    /// Runs the step/stop-check loop from an already-seeded grid.
    pub fn run(&self, mut current: Grid) -> GameResult {
        let mut detector = CycleDetector::new();
        let mut score = 0usize;
        detector.observe(current.hash(), 0);

        for g in 0..self.max_generations {
            let pre_step = current.clone();
            let (next, births) = current.step();
            score += births;
            current = next;

            if current.is_extinct() {
                return GameResult {
                    num_generations: g + 1,
                    score,
                    stop_reason: StopReason::Extinction,
                };
            }
            if current == pre_step {
                return GameResult {
                    num_generations: g + 1,
                    score,
                    stop_reason: StopReason::PersistentState,
                };
            }

            let hash = current.hash();
            if let Some(period) = detector.observe(hash, g) {
                if period < self.repeat_threshold {
                    return GameResult {
                        num_generations: g + 1,
                        score,
                        stop_reason: StopReason::RepeatedPattern,
                    };
                }
            }
        }

        GameResult {
            num_generations: self.max_generations,
            score,
            stop_reason: StopReason::ReachedMaxGeneration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> Runner {
        Runner::with_defaults()
    }

    #[test]
    fn letter_a_goes_extinct_in_one_generation() {
        let result = runner().run_from_word("A").unwrap();
        assert_eq!(
            result,
            GameResult {
                num_generations: 1,
                score: 0,
                stop_reason: StopReason::Extinction,
            }
        );
    }

    #[test]
    fn determinism_across_repeated_runs() {
        let a = runner().run_from_word("hello").unwrap();
        let b = runner().run_from_word("hello").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn a_2x2_block_is_persistent_state() {
        let mut grid = Grid::zeroed(crate::GRID_ROWS, crate::GRID_COLS);
        let (top, left) = (30, 20);
        for (i, j) in [(top, left), (top, left + 1), (top + 1, left), (top + 1, left + 1)] {
            grid.set(i, j, 1);
        }
        let result = runner().run(grid);
        assert_eq!(result.stop_reason, StopReason::PersistentState);
        assert_eq!(result.num_generations, 1);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn a_blinker_is_a_repeated_pattern() {
        let mut grid = Grid::zeroed(crate::GRID_ROWS, crate::GRID_COLS);
        for j in [19, 20, 21] {
            grid.set(30, j, 1);
        }
        let result = runner().run(grid);
        assert_eq!(result.stop_reason, StopReason::RepeatedPattern);
        assert!(result.num_generations <= 3);
        assert!(result.score >= 2);
    }

    #[test]
    fn score_only_counts_births_not_survivals() {
        // a blinker's every step is births=2, survivals=1; score after one
        // step must be exactly 2.
        let mut grid = Grid::zeroed(10, 10);
        for j in [3, 4, 5] {
            grid.set(4, j, 1);
        }
        let (_, births) = grid.step();
        assert_eq!(births, 2);
    }

    #[test]
    fn a_bitmask_exceeding_grid_capacity_fills_it_rather_than_erroring() {
        // 8 * 10_000 bits >= 60*40 cells: takes the full-fill regime,
        // not the SeedTooLarge path.
        let giant = "x".repeat(10_000);
        assert!(runner().run_from_word(&giant).is_ok());
    }

    #[test]
    fn num_generations_is_always_in_bounds() {
        let result = runner().run_from_word("galaxy").unwrap();
        assert!(result.num_generations >= 1);
        assert!(result.num_generations <= crate::MAX_GENERATIONS);
    }
}
