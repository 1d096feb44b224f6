//! Grid tests - the settled-cell store contract

use blockfall::core::Grid;
use blockfall::types::{Block, BlockColor, NUM_COLUMNS, NUM_ROWS};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(NUM_COLUMNS, NUM_ROWS);
    assert_eq!(grid.columns(), NUM_COLUMNS);
    assert_eq!(grid.rows(), NUM_ROWS);

    for row in 0..NUM_ROWS {
        for column in 0..NUM_COLUMNS {
            assert!(
                grid.get(column, row).is_none(),
                "cell ({}, {}) should start empty",
                column,
                row
            );
        }
    }
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new(NUM_COLUMNS, NUM_ROWS);
    let block = Block::new(5, 10, BlockColor::Orange);

    grid.set(5, 10, Some(block));
    assert_eq!(grid.get(5, 10), Some(&block));
    assert!(grid.is_occupied(5, 10));

    // Neighbours are untouched
    assert!(grid.get(4, 10).is_none());
    assert!(grid.get(5, 9).is_none());
    assert!(grid.get(5, 11).is_none());

    grid.set(5, 10, None);
    assert!(grid.get(5, 10).is_none());
}

#[test]
fn test_grid_cells_are_independent() {
    let mut grid = Grid::new(NUM_COLUMNS, NUM_ROWS);
    let a = Block::new(0, 0, BlockColor::Blue);
    let b = Block::new(9, 19, BlockColor::Yellow);

    grid.set(0, 0, Some(a));
    grid.set(9, 19, Some(b));

    assert_eq!(grid.get(0, 0), Some(&a));
    assert_eq!(grid.get(9, 19), Some(&b));
    assert_eq!(grid.occupied_count(), 2);
}

#[test]
fn test_grid_overwrite_replaces_block() {
    let mut grid = Grid::new(NUM_COLUMNS, NUM_ROWS);
    let first = Block::new(3, 3, BlockColor::Red);
    let second = Block::new(3, 3, BlockColor::Teal);

    grid.set(3, 3, Some(first));
    grid.set(3, 3, Some(second));
    assert_eq!(grid.get(3, 3), Some(&second));
    assert_eq!(grid.occupied_count(), 1);
}

#[test]
fn test_grid_custom_dimensions() {
    let mut grid = Grid::new(4, 6);
    assert_eq!(grid.columns(), 4);
    assert_eq!(grid.rows(), 6);

    // Corners are all addressable
    grid.set(0, 0, Some(Block::new(0, 0, BlockColor::Purple)));
    grid.set(3, 5, Some(Block::new(3, 5, BlockColor::Purple)));
    assert!(grid.is_occupied(0, 0));
    assert!(grid.is_occupied(3, 5));
}
