//! Shared types module - data structures and tuning constants
//!
//! This crate defines the fundamental types used across the engine and its
//! hosts. Everything here is pure data with no external dependencies, so it
//! can be consumed from any context (simulation, rendering hosts, tests).
//!
//! # Board geometry
//!
//! Default playfield dimensions (overridable through [`GameConfig`]):
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom; row 0 is spawn headroom)
//! - **Spawn position**: pivot at (column 4, row 0)
//! - **Preview slot**: pivot at (column 12, row 1), outside the playfield
//!
//! # Scoring and pacing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POINTS_PER_LINE` | 10 | Base points per cleared line, scaled by level |
//! | `LEVEL_THRESHOLD` | 500 | Score per level; level N ends at `N * 500` |
//! | `BASE_FALL_INTERVAL_MS` | 1000 | Gravity tick cadence at level 1 |
//! | `FALL_INTERVAL_DECREMENT_MS` | 100 | Cadence reduction per level-up |
//! | `FALL_INTERVAL_FLOOR_MS` | 50 | Cadence never drops below this |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Orientation, PieceKind, NUM_COLUMNS, NUM_ROWS};
//!
//! let kind = PieceKind::from_str("line").unwrap();
//! assert_eq!(kind, PieceKind::Line);
//!
//! let orientation = Orientation::Zero;
//! assert_eq!(orientation.rotated_cw(), Orientation::Ninety);
//!
//! assert_eq!(NUM_COLUMNS, 10);
//! assert_eq!(NUM_ROWS, 20);
//! ```

/// Playfield width in cells (10 columns)
pub const NUM_COLUMNS: i32 = 10;

/// Playfield height in cells (20 rows)
pub const NUM_ROWS: i32 = 20;

/// Column the falling piece's pivot spawns at
pub const STARTING_COLUMN: i32 = 4;

/// Row the falling piece's pivot spawns at
pub const STARTING_ROW: i32 = 0;

/// Column of the preview slot pivot (to the right of the playfield)
pub const PREVIEW_COLUMN: i32 = 12;

/// Row of the preview slot pivot
pub const PREVIEW_ROW: i32 = 1;

/// Base points awarded per cleared line, multiplied by the current level
pub const POINTS_PER_LINE: u32 = 10;

/// Score threshold per level; crossing `level * LEVEL_THRESHOLD` levels up
pub const LEVEL_THRESHOLD: u32 = 500;

/// Gravity tick cadence at level 1 (milliseconds per row)
pub const BASE_FALL_INTERVAL_MS: u64 = 1000;

/// How much the gravity cadence shortens on each level-up
pub const FALL_INTERVAL_DECREMENT_MS: u64 = 100;

/// Minimum gravity cadence; the curve flattens here
pub const FALL_INTERVAL_FLOOR_MS: u64 = 50;

/// Number of colors in the block palette
pub const COLOR_COUNT: u32 = 6;

/// Number of piece kinds in the closed kind set
pub const KIND_COUNT: u32 = 7;

/// Tetromino piece kinds
///
/// A closed set; orientation handling relies on exhaustive matches over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Line,
    Square,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in dealing order
    pub fn all() -> [PieceKind; 7] {
        [
            PieceKind::Line,
            PieceKind::Square,
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::J,
            PieceKind::L,
        ]
    }

    /// Kind for a dealing index in `0..KIND_COUNT`
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(PieceKind::Line),
            1 => Some(PieceKind::Square),
            2 => Some(PieceKind::T),
            3 => Some(PieceKind::S),
            4 => Some(PieceKind::Z),
            5 => Some(PieceKind::J),
            6 => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "line" | "i" => Some(PieceKind::Line),
            "square" | "o" => Some(PieceKind::Square),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Line => "line",
            PieceKind::Square => "square",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Discrete piece orientations (Zero = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Zero,
    Ninety,
    OneEighty,
    TwoSeventy,
}

impl Orientation {
    /// All orientations, in clockwise order
    pub fn all() -> [Orientation; 4] {
        [
            Orientation::Zero,
            Orientation::Ninety,
            Orientation::OneEighty,
            Orientation::TwoSeventy,
        ]
    }

    /// Next orientation clockwise
    pub fn rotated_cw(&self) -> Self {
        match self {
            Orientation::Zero => Orientation::Ninety,
            Orientation::Ninety => Orientation::OneEighty,
            Orientation::OneEighty => Orientation::TwoSeventy,
            Orientation::TwoSeventy => Orientation::Zero,
        }
    }

    /// Next orientation counter-clockwise
    pub fn rotated_ccw(&self) -> Self {
        match self {
            Orientation::Zero => Orientation::TwoSeventy,
            Orientation::TwoSeventy => Orientation::OneEighty,
            Orientation::OneEighty => Orientation::Ninety,
            Orientation::Ninety => Orientation::Zero,
        }
    }

    /// Convert to degree string
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Zero => "0",
            Orientation::Ninety => "90",
            Orientation::OneEighty => "180",
            Orientation::TwoSeventy => "270",
        }
    }
}

/// Block colors, a fixed palette of six
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Blue,
    Orange,
    Purple,
    Red,
    Teal,
    Yellow,
}

impl BlockColor {
    /// Color for a palette index in `0..COLOR_COUNT`
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(BlockColor::Blue),
            1 => Some(BlockColor::Orange),
            2 => Some(BlockColor::Purple),
            3 => Some(BlockColor::Red),
            4 => Some(BlockColor::Teal),
            5 => Some(BlockColor::Yellow),
            _ => None,
        }
    }

    /// Asset name hosts use to pick a sprite or glyph for this color
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Blue => "blue",
            BlockColor::Orange => "orange",
            BlockColor::Purple => "purple",
            BlockColor::Red => "red",
            BlockColor::Teal => "teal",
            BlockColor::Yellow => "yellow",
        }
    }
}

/// A single colored cell, either part of a falling piece or settled in the grid
///
/// Two blocks are equal iff column, row, and color all match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub column: i32,
    pub row: i32,
    pub color: BlockColor,
}

impl Block {
    pub fn new(column: i32, row: i32, color: BlockColor) -> Self {
        Self { column, row, color }
    }
}

/// Board geometry and tuning, fixed at engine construction
///
/// Passed by value to the engine so differently-sized boards (e.g. in tests)
/// can coexist in one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub columns: i32,
    pub rows: i32,
    pub spawn_column: i32,
    pub spawn_row: i32,
    pub preview_column: i32,
    pub preview_row: i32,
    pub hold_column: i32,
    pub hold_row: i32,
    pub points_per_line: u32,
    pub level_threshold: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: NUM_COLUMNS,
            rows: NUM_ROWS,
            spawn_column: STARTING_COLUMN,
            spawn_row: STARTING_ROW,
            preview_column: PREVIEW_COLUMN,
            preview_row: PREVIEW_ROW,
            hold_column: PREVIEW_COLUMN,
            hold_row: PREVIEW_ROW,
            points_per_line: POINTS_PER_LINE,
            level_threshold: LEVEL_THRESHOLD,
        }
    }
}

/// Notifications the engine emits toward its host
///
/// Delivered through an outbound FIFO the host drains after each command;
/// ordering within one command matches the internal cascade (land, then line
/// evaluation, then spawn).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// A new round has begun and a preview piece exists
    GameDidBegin,
    /// The round ended; payload carries the score/level before the reset
    GameDidEnd { final_score: u32, final_level: u32 },
    /// The falling piece changed position or orientation
    ShapeDidMove,
    /// The falling piece was hard-dropped to its resting position
    ShapeDidDrop,
    /// The falling piece settled into the grid
    ShapeDidLand,
    /// The score crossed the level threshold
    DidLevelUp { level: u32 },
    /// The falling piece was parked in (or swapped with) the hold slot
    ShapeWasHeld,
}
