// grid.rs - Dense binary pixel grid

/// Dense row-major grid of binary pixel cells.
///
/// Dimensions are fixed at construction and every cell starts unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![false; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Sets the cell at (row, col). Coordinates outside the grid are
    /// ignored, so unclamped pointer positions can be passed straight in.
    pub fn set_cell(&mut self, row: isize, col: isize) {
        if row >= 0 && (row as usize) < self.height && col >= 0 && (col as usize) < self.width {
            self.cells[row as usize * self.width + col as usize] = true;
        }
    }

    /// Current value of the cell at (row, col).
    ///
    /// Panics if (row, col) is out of bounds.
    pub fn get_cell(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.height && col < self.width,
            "cell ({}, {}) out of bounds",
            row,
            col
        );
        self.cells[row * self.width + col]
    }

    /// Resets every cell to unset.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Sets every cell.
    pub fn fill(&mut self) {
        self.cells.fill(true);
    }

    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Snapshot of the grid as rows of 0/1 values, row 0 first, leftmost
    /// column first. The exporter writes exactly this ordering.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|&c| c as u8).collect())
            .collect()
    }
}

#[cfg(test)]
mod grid_tests {
    use super::*;

    #[test]
    fn test_new_grid_is_unset() {
        let grid = Grid::new(4, 3);
        for row in 0..4 {
            for col in 0..3 {
                assert!(!grid.get_cell(row, col));
            }
        }
        assert_eq!(grid.count_set(), 0);
    }

    #[test]
    fn test_set_cell_touches_one_cell() {
        let mut grid = Grid::new(4, 3);
        grid.set_cell(2, 1);

        for row in 0..4 {
            for col in 0..3 {
                assert_eq!(grid.get_cell(row, col), (row, col) == (2, 1));
            }
        }
    }

    #[test]
    fn test_set_cell_out_of_bounds_is_ignored() {
        let mut grid = Grid::new(2, 3);
        grid.set_cell(-1, 0);
        grid.set_cell(0, -1);
        grid.set_cell(2, 0);
        grid.set_cell(0, 3);
        grid.set_cell(isize::MIN, isize::MAX);

        assert_eq!(grid.count_set(), 0);
    }

    #[test]
    fn test_set_cell_is_idempotent() {
        let mut once = Grid::new(2, 2);
        once.set_cell(1, 0);

        let mut twice = Grid::new(2, 2);
        twice.set_cell(1, 0);
        twice.set_cell(1, 0);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_to_rows_is_row_major() {
        let mut grid = Grid::new(2, 3);
        grid.set_cell(0, 1);
        grid.set_cell(1, 2);

        assert_eq!(grid.to_rows(), vec![vec![0, 1, 0], vec![0, 0, 1]]);
    }

    #[test]
    fn test_to_rows_shape() {
        let grid = Grid::new(3, 5);
        let rows = grid.to_rows();

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 5));
    }

    #[test]
    fn test_clear_and_fill() {
        let mut grid = Grid::new(2, 2);
        grid.set_cell(0, 0);

        grid.clear();
        assert_eq!(grid.to_rows(), vec![vec![0, 0], vec![0, 0]]);

        grid.fill();
        assert_eq!(grid.count_set(), 4);
        assert_eq!(grid.to_rows(), vec![vec![1, 1], vec![1, 1]]);
    }
}
