//! Core simulation - pure, deterministic falling-block rules
//!
//! This crate is the rules engine of the game: it owns the playing-field
//! grid, the falling / preview / held piece slots, collision detection,
//! rotation legality, gravity ticking, line clearing with compaction, and
//! scoring / leveling. It has **zero dependencies** on UI, networking, or
//! I/O, making it:
//!
//! - **Deterministic**: the same seed deals the same piece sequence
//! - **Testable**: every rule has unit coverage next to its module
//! - **Portable**: hosts range from a headless driver to a full renderer
//!
//! # Module structure
//!
//! - [`grid`]: the settled-cell store, a trivial flat array
//! - [`shapes`]: per-kind offset tables and bottom-block sets
//! - [`piece`]: a live piece - pivot, orientation, derived blocks
//! - [`engine`]: the command/tick state machine tying it all together
//! - [`rng`]: seeded uniform piece dealing
//! - [`pacing`]: the gravity speed curve
//!
//! # Driving the engine
//!
//! The host issues synchronous commands and drains notifications afterwards;
//! the engine never blocks and never runs its own clock:
//!
//! ```
//! use blockfall_core::GameEngine;
//! use blockfall_types::GameConfig;
//!
//! let mut engine = GameEngine::new(GameConfig::default(), 12345);
//! engine.begin_game();
//! engine.new_shape();
//!
//! engine.move_shape_left();
//! engine.rotate_shape();
//! engine.drop_shape();
//! engine.let_shape_fall(); // settles the dropped piece, spawns the next
//!
//! for event in engine.take_events() {
//!     println!("{:?}", event);
//! }
//! assert!(engine.falling_shape().is_some());
//! ```
//!
//! An external periodic timer drives [`GameEngine::let_shape_fall`]; its
//! cadence comes from [`GameEngine::fall_interval_ms`] and shortens as the
//! level rises. The host suspends the timer while it animates a landing and
//! resumes it once a new piece is falling.

pub mod engine;
pub mod grid;
pub mod pacing;
pub mod piece;
pub mod rng;
pub mod shapes;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use engine::{GameEngine, LineClearSweep};
pub use grid::Grid;
pub use pacing::fall_interval_ms;
pub use piece::Piece;
pub use rng::{ShapeDealer, SimpleRng};
pub use shapes::{bottom_indices, cell_offsets};
