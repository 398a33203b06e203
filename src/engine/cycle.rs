use crate::engine::grid::GridHash;
use std::collections::HashMap;

/// Maps a grid hash to the generation index at which it was first seen,
/// scoped to a single Runner invocation.
///
/// `observe` implements last-seen semantics: every re-sighting refreshes the
/// stored generation, which biases future detections toward short
/// recurrences and lets a genuinely long orbit keep re-traversing.
#[derive(Default)]
pub struct CycleDetector {
    seen: HashMap<GridHash, usize>,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `hash` at `generation`. Returns the period since the previous
    /// sighting, if any, then overwrites the stored generation with the
    /// current one regardless of whether this is a fresh or repeat sighting.
    pub fn observe(&mut self, hash: GridHash, generation: usize) -> Option<usize> {
        let period = self
            .seen
            .insert(hash, generation)
            .map(|previous| generation - previous);
        period
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::grid::Grid;

    #[test]
    fn first_sighting_returns_none() {
        let mut detector = CycleDetector::new();
        let grid = Grid::zeroed(3, 3);
        assert_eq!(detector.observe(grid.hash(), 0), None);
    }

    #[test]
    fn repeat_sighting_returns_period() {
        let mut detector = CycleDetector::new();
        let grid = Grid::zeroed(3, 3);
        detector.observe(grid.hash(), 0);
        assert_eq!(detector.observe(grid.hash(), 5), Some(5));
    }

    #[test]
    fn last_seen_semantics_refresh_generation() {
        let mut detector = CycleDetector::new();
        let grid = Grid::zeroed(3, 3);
        detector.observe(grid.hash(), 0);
        detector.observe(grid.hash(), 12);
        // a third sighting measures period against the refreshed generation, not 0.
        assert_eq!(detector.observe(grid.hash(), 20), Some(8));
    }
}
