//! Grid module - the settled-cell store
//!
//! A flat, row-major array of optional blocks sized `rows * columns` at
//! construction. Coordinates: (column, row) with column 0 at the left and
//! row 0 at the top; row `rows - 1` is the floor.
//!
//! The grid is deliberately trivial: `get` and `set` are unchecked index
//! math, and all bounds policy lives in the engine, which always validates
//! placements before touching cells. Out-of-range access here is a
//! programming error, not a recoverable condition.

use blockfall_types::Block;

/// The settled-cell store, exclusively owned and mutated by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    columns: i32,
    rows: i32,
    /// Flat array of cells, row-major order (row * columns + column)
    cells: Vec<Option<Block>>,
}

impl Grid {
    /// Create an empty grid of the given dimensions
    pub fn new(columns: i32, rows: i32) -> Self {
        assert!(columns > 0 && rows > 0, "grid dimensions must be positive");
        Self {
            columns,
            rows,
            cells: vec![None; (columns * rows) as usize],
        }
    }

    /// Grid width in columns
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Grid height in rows
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline(always)]
    fn index(&self, column: i32, row: i32) -> usize {
        debug_assert!(
            column >= 0 && column < self.columns && row >= 0 && row < self.rows,
            "grid access out of range: ({}, {})",
            column,
            row
        );
        (row * self.columns + column) as usize
    }

    /// Cell at (column, row); the position must be in range
    #[inline]
    pub fn get(&self, column: i32, row: i32) -> Option<&Block> {
        self.cells[self.index(column, row)].as_ref()
    }

    /// Store or clear the cell at (column, row); the position must be in range
    #[inline]
    pub fn set(&mut self, column: i32, row: i32, cell: Option<Block>) {
        let index = self.index(column, row);
        self.cells[index] = cell;
    }

    /// True when the cell at (column, row) holds a settled block
    #[inline]
    pub fn is_occupied(&self, column: i32, row: i32) -> bool {
        self.cells[self.index(column, row)].is_some()
    }

    /// Number of settled blocks on the grid
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::BlockColor;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(10, 20);
        assert_eq!(grid.columns(), 10);
        assert_eq!(grid.rows(), 20);
        for row in 0..20 {
            for column in 0..10 {
                assert!(grid.get(column, row).is_none());
            }
        }
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn index_is_row_major() {
        let mut grid = Grid::new(10, 20);
        grid.set(5, 10, Some(Block::new(5, 10, BlockColor::Red)));

        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(9, 0), 9);
        assert_eq!(grid.index(0, 1), 10);
        assert_eq!(grid.index(9, 19), 199);
        assert!(grid.cells[105].is_some());
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut grid = Grid::new(10, 20);
        let block = Block::new(3, 17, BlockColor::Teal);

        grid.set(3, 17, Some(block));
        assert_eq!(grid.get(3, 17), Some(&block));
        assert!(grid.is_occupied(3, 17));

        grid.set(3, 17, None);
        assert!(grid.get(3, 17).is_none());
        assert!(!grid.is_occupied(3, 17));
    }

    #[test]
    fn dimensions_come_from_construction() {
        let grid = Grid::new(4, 6);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.rows(), 6);
        assert_eq!(grid.cells.len(), 24);
    }
}
