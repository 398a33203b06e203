use sha2::Digest;
use sha2::Sha256;

/// A fixed-dimension, non-wrapping grid of dead/alive cells.
///
/// Row-major. Cells outside `[0, rows) x [0, cols)` are treated as dead for
/// neighbour counting; there is no wraparound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

/// Stable digest over a grid's contents, independent of allocation identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GridHash([u8; 32]);

impl Grid {
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> u8 {
        self.cells[i * self.cols + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: u8) {
        self.cells[i * self.cols + j] = value;
    }

    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    /// Sum of the 8 Moore-neighbourhood cells; out-of-bounds neighbours
    /// contribute 0.
    pub fn count_neighbours(&self, i: usize, j: usize) -> u8 {
        let mut count = 0u8;
        for di in [-1isize, 0, 1] {
            for dj in [-1isize, 0, 1] {
                if di == 0 && dj == 0 {
                    continue;
                }
                let ni = i as isize + di;
                let nj = j as isize + dj;
                if ni >= 0 && nj >= 0 && (ni as usize) < self.rows && (nj as usize) < self.cols {
                    count += self.get(ni as usize, nj as usize);
                }
            }
        }
        count
    }

    /// B3/S23: a live cell with 2 or 3 neighbours survives; a dead cell with
    /// exactly 3 neighbours is born. Returns the next grid and the number of
    /// 0->1 transitions (births).
    pub fn step(&self) -> (Grid, usize) {
        let mut next = Grid::zeroed(self.rows, self.cols);
        let mut births = 0usize;
        for i in 0..self.rows {
            for j in 0..self.cols {
                let alive = self.get(i, j) == 1;
                let neighbours = self.count_neighbours(i, j);
                let survives = alive && (neighbours == 2 || neighbours == 3);
                let born = !alive && neighbours == 3;
                if survives || born {
                    next.set(i, j, 1);
                    if born {
                        births += 1;
                    }
                }
            }
        }
        (next, births)
    }

    pub fn hash(&self) -> GridHash {
        let mut hasher = Sha256::new();
        hasher.update(&self.cells);
        GridHash(hasher.finalize().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_grid_is_extinct() {
        let grid = Grid::zeroed(5, 5);
        assert!(grid.is_extinct());
    }

    #[test]
    fn isolated_cells_die() {
        let mut grid = Grid::zeroed(5, 5);
        grid.set(2, 2, 1);
        let (next, births) = grid.step();
        assert!(next.is_extinct());
        assert_eq!(births, 0);
    }

    #[test]
    fn block_is_stable() {
        let mut grid = Grid::zeroed(5, 5);
        for (i, j) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            grid.set(i, j, 1);
        }
        let (next, births) = grid.step();
        assert_eq!(next, grid);
        assert_eq!(births, 0);
    }

    #[test]
    fn blinker_oscillates() {
        let mut grid = Grid::zeroed(5, 5);
        for j in [1, 2, 3] {
            grid.set(2, j, 1);
        }
        let (next, births) = grid.step();
        assert_eq!(births, 2);
        let mut expected = Grid::zeroed(5, 5);
        for i in [1, 2, 3] {
            expected.set(i, 2, 1);
        }
        assert_eq!(next, expected);
    }

    #[test]
    fn hash_is_content_stable() {
        let mut a = Grid::zeroed(3, 3);
        a.set(0, 0, 1);
        let mut b = Grid::zeroed(3, 3);
        b.set(0, 0, 1);
        assert_eq!(a.hash(), b.hash());
        b.set(1, 1, 1);
        assert_ne!(a.hash(), b.hash());
    }
}
