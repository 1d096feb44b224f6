//! Pacing module - the gravity speed curve
//!
//! The engine owns no timer (all commands are synchronous); the host runs an
//! external clock and re-reads the cadence from here after each level-up.

use blockfall_types::{BASE_FALL_INTERVAL_MS, FALL_INTERVAL_DECREMENT_MS, FALL_INTERVAL_FLOOR_MS};

/// Gravity tick cadence for a level (milliseconds per row)
///
/// Starts at the base cadence for level 1 and shortens by a fixed decrement
/// per level-up, never dropping below the floor.
pub fn fall_interval_ms(level: u32) -> u64 {
    let steps = u64::from(level.saturating_sub(1));
    BASE_FALL_INTERVAL_MS
        .saturating_sub(steps.saturating_mul(FALL_INTERVAL_DECREMENT_MS))
        .max(FALL_INTERVAL_FLOOR_MS)
}
