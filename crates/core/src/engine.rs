//! Engine module - the game rules state machine
//!
//! Orchestrates grid and pieces: spawning, gravity ticks, the move / rotate /
//! drop / hold commands, collision checks, line clearing with compaction,
//! scoring and leveling, and game-over detection.
//!
//! Every movement command follows the same optimistic-then-rollback
//! discipline: apply the transform, test [`GameEngine::illegal_placement`],
//! and apply the exact inverse transform if the result collides. There is no
//! separate dry-run path. Rejected commands are silent no-ops (observable
//! only through the absence of a notification), and commands issued with no
//! falling piece, or after game over, are safe no-ops as well.
//!
//! Notifications are enqueued on an outbound FIFO in the order the effects
//! happen; the settle cascade (land, line evaluation, spawn) completes before
//! the triggering command returns, and the host drains the queue afterwards.

use std::collections::VecDeque;

use blockfall_types::{Block, EngineEvent, GameConfig};

use crate::grid::Grid;
use crate::pacing::fall_interval_ms;
use crate::piece::Piece;
use crate::rng::ShapeDealer;

/// Result of a line-clear evaluation, shaped for the host's animations
///
/// `removed_lines` holds one group per cleared row (bottom-to-top scan
/// order) with the blocks' positions at removal time. `fallen_blocks` holds
/// one group per column that had survivors move down, each group ordered
/// bottom-up, with the blocks' positions after compaction. Columns where
/// nothing fell are omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineClearSweep {
    pub removed_lines: Vec<Vec<Block>>,
    pub fallen_blocks: Vec<Vec<Block>>,
}

impl LineClearSweep {
    pub fn is_empty(&self) -> bool {
        self.removed_lines.is_empty()
    }
}

/// The rules engine: exclusive owner of the grid, piece slots, and score
///
/// Constructed once per play session; `begin_game` / `end_game` reset state
/// in place so a host can restart without rebuilding the engine.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    falling_shape: Option<Piece>,
    next_shape: Option<Piece>,
    held_shape: Option<Piece>,
    hold_allowed: bool,
    score: u32,
    level: u32,
    game_over: bool,
    dealer: ShapeDealer,
    events: VecDeque<EngineEvent>,
    last_sweep: Option<LineClearSweep>,
}

impl GameEngine {
    /// Create an engine for the given board geometry and piece-deal seed
    pub fn new(config: GameConfig, seed: u32) -> Self {
        Self {
            grid: Grid::new(config.columns, config.rows),
            config,
            falling_shape: None,
            next_shape: None,
            held_shape: None,
            hold_allowed: true,
            score: 0,
            level: 1,
            game_over: false,
            dealer: ShapeDealer::new(seed),
            events: VecDeque::new(),
            last_sweep: None,
        }
    }

    // ---------------- query surface ----------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn hold_allowed(&self) -> bool {
        self.hold_allowed
    }

    pub fn falling_shape(&self) -> Option<Piece> {
        self.falling_shape
    }

    pub fn next_shape(&self) -> Option<Piece> {
        self.next_shape
    }

    pub fn held_shape(&self) -> Option<Piece> {
        self.held_shape
    }

    /// Settled cells, for rendering; mutation stays inside the engine
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Gravity cadence the host's timer should currently run at
    pub fn fall_interval_ms(&self) -> u64 {
        fall_interval_ms(self.level)
    }

    // ---------------- notification surface ----------------

    fn notify(&mut self, event: EngineEvent) {
        self.events.push_back(event);
    }

    /// Pop the oldest undelivered notification
    pub fn poll_event(&mut self) -> Option<EngineEvent> {
        self.events.pop_front()
    }

    /// Drain all undelivered notifications in delivery order
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        self.events.drain(..).collect()
    }

    /// Take the animation data of the most recent settle cascade's line clear
    pub fn take_line_clear_sweep(&mut self) -> Option<LineClearSweep> {
        self.last_sweep.take()
    }

    // ---------------- collision predicate ----------------

    /// True when any of the piece's cells is outside the playfield or
    /// coincides with a settled cell. Single predicate behind every command.
    pub fn illegal_placement(&self, piece: &Piece) -> bool {
        piece.blocks().iter().any(|block| {
            block.column < 0
                || block.column >= self.config.columns
                || block.row < 0
                || block.row >= self.config.rows
                || self.grid.is_occupied(block.column, block.row)
        })
    }

    /// True when any bottom block rests on the floor or on a settled cell
    pub fn detect_touch(&self) -> bool {
        let Some(shape) = &self.falling_shape else {
            return false;
        };
        shape.bottom_blocks().iter().any(|block| {
            block.row == self.config.rows - 1
                || self.grid.is_occupied(block.column, block.row + 1)
        })
    }

    // ---------------- lifecycle ----------------

    /// Start (or restart) a round: ensures a preview piece exists
    pub fn begin_game(&mut self) {
        self.game_over = false;
        if self.next_shape.is_none() {
            self.next_shape = Some(
                self.dealer
                    .deal(self.config.preview_column, self.config.preview_row),
            );
        }
        self.notify(EngineEvent::GameDidBegin);
    }

    /// Promote the preview piece into play and deal a fresh preview
    ///
    /// Returns the new (falling, next) pair, or `None` on the loss path: when
    /// the spawn cells are already occupied the attempted piece is discarded,
    /// the freshly dealt piece stays in the preview slot, and the game ends.
    pub fn new_shape(&mut self) -> Option<(Piece, Piece)> {
        if self.game_over {
            return None;
        }
        let Some(mut falling) = self.next_shape.take() else {
            return None;
        };
        let next = self
            .dealer
            .deal(self.config.preview_column, self.config.preview_row);
        self.next_shape = Some(next);

        falling.move_to(self.config.spawn_column, self.config.spawn_row);
        if self.illegal_placement(&falling) {
            self.falling_shape = None;
            self.end_game();
            return None;
        }

        self.falling_shape = Some(falling);
        self.hold_allowed = true;
        Some((falling, next))
    }

    /// End the round: the final score/level travel in the event payload,
    /// captured before the reset, so the host can persist them from the
    /// notification. The grid is left intact for a `remove_all_blocks`
    /// teardown pass.
    pub fn end_game(&mut self) {
        let finale = EngineEvent::GameDidEnd {
            final_score: self.score,
            final_level: self.level,
        };
        self.game_over = true;
        self.score = 0;
        self.level = 1;
        self.notify(finale);
    }

    // ---------------- commands ----------------

    /// One gravity tick: lower the falling piece by one row
    ///
    /// A piece settles either because the lowered position collides (roll
    /// back one row first) or because touch detection fires right after a
    /// legal move; the dual check lets pieces settle flush against the floor
    /// or stack without a wasted tick. If even the rolled-back position
    /// collides, the stack overtook the resting piece and the game ends.
    pub fn let_shape_fall(&mut self) {
        if self.game_over {
            return;
        }
        let Some(mut shape) = self.falling_shape else {
            return;
        };

        shape.lower_by_one_row();
        if self.illegal_placement(&shape) {
            shape.raise_by_one_row();
            if self.illegal_placement(&shape) {
                self.falling_shape = None;
                self.end_game();
                return;
            }
            self.falling_shape = Some(shape);
            self.settle_and_cascade();
        } else {
            self.falling_shape = Some(shape);
            self.notify(EngineEvent::ShapeDidMove);
            if self.detect_touch() {
                self.settle_and_cascade();
            }
        }
    }

    /// Rotate the falling piece clockwise; collides silently back
    pub fn rotate_shape(&mut self) {
        if self.game_over {
            return;
        }
        let Some(mut shape) = self.falling_shape else {
            return;
        };

        shape.rotate_clockwise();
        if self.illegal_placement(&shape) {
            shape.rotate_counter_clockwise();
            self.falling_shape = Some(shape);
            return;
        }
        self.falling_shape = Some(shape);
        self.notify(EngineEvent::ShapeDidMove);
    }

    /// Shift the falling piece one column left; collides silently back
    pub fn move_shape_left(&mut self) {
        if self.game_over {
            return;
        }
        let Some(mut shape) = self.falling_shape else {
            return;
        };

        shape.shift_left_by_one_column();
        if self.illegal_placement(&shape) {
            shape.shift_right_by_one_column();
            self.falling_shape = Some(shape);
            return;
        }
        self.falling_shape = Some(shape);
        self.notify(EngineEvent::ShapeDidMove);
    }

    /// Shift the falling piece one column right; collides silently back
    pub fn move_shape_right(&mut self) {
        if self.game_over {
            return;
        }
        let Some(mut shape) = self.falling_shape else {
            return;
        };

        shape.shift_right_by_one_column();
        if self.illegal_placement(&shape) {
            shape.shift_left_by_one_column();
            self.falling_shape = Some(shape);
            return;
        }
        self.falling_shape = Some(shape);
        self.notify(EngineEvent::ShapeDidMove);
    }

    /// Hard drop: lower while legal, then one corrective raise
    ///
    /// The piece is left resting but not settled; the next gravity tick's
    /// touch detection settles it. A second drop without an intervening tick
    /// therefore finds the piece already resting and leaves it in place.
    pub fn drop_shape(&mut self) {
        if self.game_over {
            return;
        }
        let Some(mut shape) = self.falling_shape else {
            return;
        };

        while !self.illegal_placement(&shape) {
            shape.lower_by_one_row();
        }
        shape.raise_by_one_row();
        self.falling_shape = Some(shape);
        self.notify(EngineEvent::ShapeDidDrop);
    }

    /// Park the falling piece in the hold slot, once per spawn
    ///
    /// With an empty hold slot the preview piece is promoted through the
    /// normal spawn path; with an occupied slot the previously held piece
    /// re-enters play at the spawn position. Either way the incoming piece
    /// must pass the collision check, with the same loss condition as a
    /// blocked spawn.
    pub fn hold_falling_shape(&mut self) {
        if self.game_over || !self.hold_allowed {
            return;
        }
        let Some(falling) = self.falling_shape else {
            return;
        };

        let mut parked = falling;
        parked.move_to(self.config.hold_column, self.config.hold_row);

        match self.held_shape {
            Some(mut held) => {
                self.held_shape = Some(parked);
                held.move_to(self.config.spawn_column, self.config.spawn_row);
                if self.illegal_placement(&held) {
                    self.falling_shape = None;
                    self.end_game();
                    return;
                }
                self.falling_shape = Some(held);
            }
            None => {
                self.held_shape = Some(parked);
                self.falling_shape = None;
                if self.new_shape().is_none() {
                    return;
                }
            }
        }

        self.hold_allowed = false;
        self.notify(EngineEvent::ShapeWasHeld);
    }

    // ---------------- settling and line clearing ----------------

    /// Commit the falling piece's cells into the grid
    pub fn settle_shape(&mut self) {
        let Some(shape) = self.falling_shape.take() else {
            return;
        };
        for block in shape.blocks() {
            self.grid.set(block.column, block.row, Some(*block));
        }
        self.notify(EngineEvent::ShapeDidLand);
    }

    /// Full landing transition: settle, evaluate lines, spawn the next piece.
    /// Runs to completion before the triggering command returns.
    fn settle_and_cascade(&mut self) {
        self.settle_shape();
        let sweep = self.remove_completed_lines();
        self.last_sweep = Some(sweep);
        self.new_shape();
    }

    /// Clear every complete row and compact the survivors
    ///
    /// Rows are scanned bottom-to-top; row 0 is spawn headroom and never
    /// clears. When rows cleared, the score grows by
    /// `lines * points_per_line * level`, the level advances (at most once)
    /// when the score crosses `level * level_threshold`, and each column is
    /// compacted in a single bottom-up pass that moves every surviving block
    /// down by exactly the number of cleared rows beneath it - a multi-line
    /// clear moves blocks above the band by the full band height in one step.
    pub fn remove_completed_lines(&mut self) -> LineClearSweep {
        let mut removed_lines: Vec<Vec<Block>> = Vec::new();
        let mut cleared_rows: Vec<i32> = Vec::new();

        for row in (1..self.config.rows).rev() {
            let complete =
                (0..self.config.columns).all(|column| self.grid.is_occupied(column, row));
            if !complete {
                continue;
            }
            let mut row_blocks = Vec::with_capacity(self.config.columns as usize);
            for column in 0..self.config.columns {
                if let Some(block) = self.grid.get(column, row).copied() {
                    row_blocks.push(block);
                }
                self.grid.set(column, row, None);
            }
            cleared_rows.push(row);
            removed_lines.push(row_blocks);
        }

        if removed_lines.is_empty() {
            return LineClearSweep::default();
        }

        self.award_points(removed_lines.len() as u32);

        let mut fallen_blocks: Vec<Vec<Block>> = Vec::new();
        for column in 0..self.config.columns {
            let mut fallen_column: Vec<Block> = Vec::new();
            let mut cleared_below = 0;
            for row in (1..self.config.rows).rev() {
                if cleared_rows.contains(&row) {
                    cleared_below += 1;
                    continue;
                }
                if cleared_below == 0 {
                    continue;
                }
                let Some(mut block) = self.grid.get(column, row).copied() else {
                    continue;
                };
                self.grid.set(column, row, None);
                block.row = row + cleared_below;
                self.grid.set(column, block.row, Some(block));
                fallen_column.push(block);
            }
            if !fallen_column.is_empty() {
                fallen_blocks.push(fallen_column);
            }
        }

        LineClearSweep {
            removed_lines,
            fallen_blocks,
        }
    }

    fn award_points(&mut self, lines: u32) {
        self.score += lines * self.config.points_per_line * self.level;
        if self.score >= self.level * self.config.level_threshold {
            self.level += 1;
            self.notify(EngineEvent::DidLevelUp { level: self.level });
        }
    }

    /// Drain every settled cell, grouped by row top-to-bottom; feeds the
    /// host's teardown animation and leaves score/level untouched
    pub fn remove_all_blocks(&mut self) -> Vec<Vec<Block>> {
        let mut all_blocks = Vec::new();
        for row in 0..self.config.rows {
            let mut row_blocks = Vec::new();
            for column in 0..self.config.columns {
                if let Some(block) = self.grid.get(column, row).copied() {
                    row_blocks.push(block);
                    self.grid.set(column, row, None);
                }
            }
            all_blocks.push(row_blocks);
        }
        all_blocks
    }
}
