//! Shape tables - per-kind cell offsets and bottom-block sets
//!
//! Each piece kind is a pure, stateless mapping from orientation to the four
//! `(column_diff, row_diff)` offsets of its cells relative to the pivot, plus
//! the subset of those cells whose downward neighbour participates in touch
//! detection (the "bottom blocks"). Rows grow downward, so a positive
//! `row_diff` is below the pivot.
//!
//! The general contract every kind satisfies: offsets are always relative to
//! a single pivot, and the bottom set lists exactly the cells with no shape
//! cell directly beneath them.

use blockfall_types::{Orientation, PieceKind};

/// Offset of a single cell relative to the piece pivot
pub type CellOffset = (i32, i32);

/// Cell offsets of a piece - 4 cells, in block-index order
pub type ShapeCells = [CellOffset; 4];

/// Get the cell offsets for a piece kind and orientation
pub fn cell_offsets(kind: PieceKind, orientation: Orientation) -> ShapeCells {
    match kind {
        PieceKind::Line => line_cells(orientation),
        PieceKind::Square => square_cells(orientation),
        PieceKind::T => t_cells(orientation),
        PieceKind::S => s_cells(orientation),
        PieceKind::Z => z_cells(orientation),
        PieceKind::J => j_cells(orientation),
        PieceKind::L => l_cells(orientation),
    }
}

/// Get the block indices counted as bottom blocks for touch detection
pub fn bottom_indices(kind: PieceKind, orientation: Orientation) -> &'static [usize] {
    match kind {
        PieceKind::Line => line_bottoms(orientation),
        PieceKind::Square => square_bottoms(orientation),
        PieceKind::T => t_bottoms(orientation),
        PieceKind::S => s_bottoms(orientation),
        PieceKind::Z => z_bottoms(orientation),
        PieceKind::J => j_bottoms(orientation),
        PieceKind::L => l_bottoms(orientation),
    }
}

/// Line piece
///
/// At 0/180 a vertical bar; only the lowest cell (block 3) can touch down.
/// At 90/270 a horizontal bar; every cell can independently touch down.
/// The 1-vs-4 bottom asymmetry governs how eagerly the piece lands and is
/// intentional.
fn line_cells(orientation: Orientation) -> ShapeCells {
    match orientation {
        // 0/180: vertical, pivot at the top cell
        Orientation::Zero | Orientation::OneEighty => [(0, 0), (0, 1), (0, 2), (0, 3)],
        // 90/270: horizontal, pivot one cell in from the left
        Orientation::Ninety | Orientation::TwoSeventy => [(-1, 0), (0, 0), (1, 0), (2, 0)],
    }
}

fn line_bottoms(orientation: Orientation) -> &'static [usize] {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => &[3],
        Orientation::Ninety | Orientation::TwoSeventy => &[0, 1, 2, 3],
    }
}

/// Square piece (same footprint in every orientation)
fn square_cells(_orientation: Orientation) -> ShapeCells {
    [(0, 0), (1, 0), (0, 1), (1, 1)]
}

fn square_bottoms(_orientation: Orientation) -> &'static [usize] {
    &[2, 3]
}

/// T piece: a three-cell bar with a nub that walks around it
fn t_cells(orientation: Orientation) -> ShapeCells {
    match orientation {
        Orientation::Zero => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Orientation::Ninety => [(2, 1), (1, 0), (1, 1), (1, 2)],
        Orientation::OneEighty => [(1, 2), (0, 1), (1, 1), (2, 1)],
        Orientation::TwoSeventy => [(0, 1), (1, 0), (1, 1), (1, 2)],
    }
}

fn t_bottoms(orientation: Orientation) -> &'static [usize] {
    match orientation {
        Orientation::Zero => &[1, 2, 3],
        Orientation::Ninety => &[0, 3],
        Orientation::OneEighty => &[0, 1, 3],
        Orientation::TwoSeventy => &[0, 3],
    }
}

/// S piece (two distinct footprints, repeated at 180/270)
fn s_cells(orientation: Orientation) -> ShapeCells {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => [(0, 0), (0, 1), (1, 1), (1, 2)],
        Orientation::Ninety | Orientation::TwoSeventy => [(2, 0), (1, 0), (1, 1), (0, 1)],
    }
}

fn s_bottoms(orientation: Orientation) -> &'static [usize] {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => &[1, 3],
        Orientation::Ninety | Orientation::TwoSeventy => &[0, 2, 3],
    }
}

/// Z piece (mirror of S; two distinct footprints)
fn z_cells(orientation: Orientation) -> ShapeCells {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => [(1, 0), (1, 1), (0, 1), (0, 2)],
        Orientation::Ninety | Orientation::TwoSeventy => [(2, 1), (1, 1), (1, 0), (0, 0)],
    }
}

fn z_bottoms(orientation: Orientation) -> &'static [usize] {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => &[1, 3],
        Orientation::Ninety | Orientation::TwoSeventy => &[0, 1, 3],
    }
}

/// J piece
fn j_cells(orientation: Orientation) -> ShapeCells {
    match orientation {
        Orientation::Zero => [(1, 0), (1, 1), (1, 2), (0, 2)],
        Orientation::Ninety => [(2, 1), (1, 1), (0, 1), (0, 0)],
        Orientation::OneEighty => [(0, 2), (0, 1), (0, 0), (1, 0)],
        Orientation::TwoSeventy => [(0, 0), (1, 0), (2, 0), (2, 1)],
    }
}

fn j_bottoms(orientation: Orientation) -> &'static [usize] {
    match orientation {
        Orientation::Zero => &[2, 3],
        Orientation::Ninety => &[0, 1, 2],
        Orientation::OneEighty => &[0, 3],
        Orientation::TwoSeventy => &[0, 1, 3],
    }
}

/// L piece
fn l_cells(orientation: Orientation) -> ShapeCells {
    match orientation {
        Orientation::Zero => [(0, 0), (0, 1), (0, 2), (1, 2)],
        Orientation::Ninety => [(1, 1), (0, 1), (-1, 1), (-1, 2)],
        Orientation::OneEighty => [(0, 2), (0, 1), (0, 0), (-1, 0)],
        Orientation::TwoSeventy => [(-1, 1), (0, 1), (1, 1), (1, 0)],
    }
}

fn l_bottoms(orientation: Orientation) -> &'static [usize] {
    match orientation {
        Orientation::Zero => &[2, 3],
        Orientation::Ninety => &[0, 1, 3],
        Orientation::OneEighty => &[0, 3],
        Orientation::TwoSeventy => &[0, 1, 2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every bottom set must list exactly the cells with no shape cell
    /// directly beneath them.
    #[test]
    fn bottom_sets_match_geometry() {
        for kind in PieceKind::all() {
            for orientation in Orientation::all() {
                let cells = cell_offsets(kind, orientation);
                let bottoms = bottom_indices(kind, orientation);
                for (index, &(column, row)) in cells.iter().enumerate() {
                    let covered = cells.contains(&(column, row + 1));
                    let flagged = bottoms.contains(&index);
                    assert_eq!(
                        flagged, !covered,
                        "{:?} {:?} block {} at ({}, {})",
                        kind, orientation, index, column, row
                    );
                }
            }
        }
    }

    #[test]
    fn line_piece_bottom_asymmetry() {
        assert_eq!(bottom_indices(PieceKind::Line, Orientation::Zero), &[3]);
        assert_eq!(bottom_indices(PieceKind::Line, Orientation::OneEighty), &[3]);
        assert_eq!(
            bottom_indices(PieceKind::Line, Orientation::Ninety),
            &[0, 1, 2, 3]
        );
        assert_eq!(
            bottom_indices(PieceKind::Line, Orientation::TwoSeventy),
            &[0, 1, 2, 3]
        );
    }

    #[test]
    fn line_piece_cells() {
        assert_eq!(
            cell_offsets(PieceKind::Line, Orientation::Zero),
            [(0, 0), (0, 1), (0, 2), (0, 3)]
        );
        assert_eq!(
            cell_offsets(PieceKind::Line, Orientation::Ninety),
            [(-1, 0), (0, 0), (1, 0), (2, 0)]
        );
    }

    #[test]
    fn square_ignores_orientation() {
        let zero = cell_offsets(PieceKind::Square, Orientation::Zero);
        for orientation in Orientation::all() {
            assert_eq!(cell_offsets(PieceKind::Square, orientation), zero);
            assert_eq!(bottom_indices(PieceKind::Square, orientation), &[2, 3]);
        }
    }

    #[test]
    fn every_shape_has_four_distinct_cells() {
        for kind in PieceKind::all() {
            for orientation in Orientation::all() {
                let cells = cell_offsets(kind, orientation);
                for i in 0..4 {
                    for j in (i + 1)..4 {
                        assert_ne!(
                            cells[i], cells[j],
                            "{:?} {:?} has duplicate cells",
                            kind, orientation
                        );
                    }
                }
            }
        }
    }
}
