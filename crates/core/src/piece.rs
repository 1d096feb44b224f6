//! Piece module - a live piece instance
//!
//! A piece is a kind plus a pivot position, an orientation, and the four
//! concrete blocks those imply. The block list is always recomputed from the
//! kind's offset table whenever the pivot or orientation changes, so blocks
//! and pivot/orientation can never disagree.
//!
//! All operations here are pure geometric transforms with no failure mode;
//! legality against the grid is enforced one layer up, in the engine.

use arrayvec::ArrayVec;

use blockfall_types::{Block, BlockColor, Orientation, PieceKind};

use crate::shapes::{bottom_indices, cell_offsets};

/// A live piece: kind, color, pivot, orientation, and derived blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: BlockColor,
    column: i32,
    row: i32,
    orientation: Orientation,
    blocks: [Block; 4],
}

impl Piece {
    /// Create a piece at the given pivot, in the spawn orientation
    pub fn new(kind: PieceKind, color: BlockColor, column: i32, row: i32) -> Self {
        let mut piece = Self {
            kind,
            color,
            column,
            row,
            orientation: Orientation::Zero,
            blocks: [Block::new(0, 0, color); 4],
        };
        piece.rebuild_blocks();
        piece
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> BlockColor {
        self.color
    }

    /// Pivot column
    pub fn column(&self) -> i32 {
        self.column
    }

    /// Pivot row
    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The four blocks the piece currently occupies, in block-index order
    pub fn blocks(&self) -> &[Block; 4] {
        &self.blocks
    }

    /// Recompute the concrete blocks from the offset table.
    /// Sole writer of `blocks`; every transform below funnels through here.
    fn rebuild_blocks(&mut self) {
        let offsets = cell_offsets(self.kind, self.orientation);
        for (block, (column_diff, row_diff)) in self.blocks.iter_mut().zip(offsets) {
            block.column = self.column + column_diff;
            block.row = self.row + row_diff;
            block.color = self.color;
        }
    }

    /// Relocate the pivot to an absolute position
    pub fn move_to(&mut self, column: i32, row: i32) {
        self.column = column;
        self.row = row;
        self.rebuild_blocks();
    }

    pub fn shift_left_by_one_column(&mut self) {
        self.column -= 1;
        self.rebuild_blocks();
    }

    pub fn shift_right_by_one_column(&mut self) {
        self.column += 1;
        self.rebuild_blocks();
    }

    pub fn lower_by_one_row(&mut self) {
        self.row += 1;
        self.rebuild_blocks();
    }

    pub fn raise_by_one_row(&mut self) {
        self.row -= 1;
        self.rebuild_blocks();
    }

    /// Advance the orientation one step clockwise, pivot unchanged
    pub fn rotate_clockwise(&mut self) {
        self.orientation = self.orientation.rotated_cw();
        self.rebuild_blocks();
    }

    /// Retreat the orientation one step counter-clockwise, pivot unchanged
    pub fn rotate_counter_clockwise(&mut self) {
        self.orientation = self.orientation.rotated_ccw();
        self.rebuild_blocks();
    }

    /// The blocks whose downward neighbour decides touch-down
    pub fn bottom_blocks(&self) -> ArrayVec<Block, 4> {
        bottom_indices(self.kind, self.orientation)
            .iter()
            .map(|&index| self.blocks[index])
            .collect()
    }
}
