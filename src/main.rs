//! Headless demo driver.
//!
//! Plays a scripted random game against the rules engine: issues commands,
//! drives gravity ticks, drains notifications, and prints a summary plus the
//! final board. Useful as a smoke test of the full command surface and as a
//! reference for how a host consumes the engine.

use std::env;

use anyhow::{anyhow, Result};

use blockfall_core::{GameEngine, SimpleRng};
use blockfall_types::{EngineEvent, GameConfig};

#[derive(Debug, Clone, Copy)]
struct DemoOptions {
    seed: u32,
    max_ticks: u32,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            seed: 12345,
            max_ticks: 2000,
        }
    }
}

fn parse_args(args: &[String]) -> Result<DemoOptions> {
    let mut options = DemoOptions::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                options.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--ticks" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --ticks"))?;
                options.max_ticks = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --ticks value: {}", v))?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(options)
}

fn print_board(engine: &GameEngine) {
    let grid = engine.grid();
    for row in 0..grid.rows() {
        let mut line = String::with_capacity(grid.columns() as usize);
        for column in 0..grid.columns() {
            line.push(if grid.get(column, row).is_some() {
                '#'
            } else {
                '.'
            });
        }
        println!("|{}|", line);
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    let mut engine = GameEngine::new(GameConfig::default(), options.seed);
    // Command stream RNG is independent of the piece-deal RNG.
    let mut script = SimpleRng::new(options.seed.wrapping_add(999));

    engine.begin_game();
    engine.new_shape();
    engine.take_events();

    let mut ticks = 0u32;
    let mut pieces_landed = 0u32;
    let mut lines_cleared = 0u32;
    let mut peak_score = 0u32;
    let mut peak_level = 1u32;

    while !engine.game_over() && ticks < options.max_ticks {
        match script.next_range(8) {
            0 => engine.move_shape_left(),
            1 => engine.move_shape_right(),
            2 => engine.rotate_shape(),
            3 => engine.drop_shape(),
            4 => engine.hold_falling_shape(),
            _ => {}
        }
        engine.let_shape_fall();
        ticks += 1;

        for event in engine.take_events() {
            match event {
                EngineEvent::ShapeDidLand => pieces_landed += 1,
                EngineEvent::DidLevelUp { level } => {
                    println!(
                        "tick {:>5}: level {} (fall interval now {}ms)",
                        ticks,
                        level,
                        engine.fall_interval_ms()
                    );
                }
                EngineEvent::GameDidEnd {
                    final_score,
                    final_level,
                } => {
                    peak_score = final_score;
                    peak_level = final_level;
                    println!("tick {:>5}: game over", ticks);
                }
                _ => {}
            }
        }
        if let Some(sweep) = engine.take_line_clear_sweep() {
            lines_cleared += sweep.removed_lines.len() as u32;
        }
        peak_score = peak_score.max(engine.score());
        peak_level = peak_level.max(engine.level());
    }

    println!();
    print_board(&engine);
    println!(
        "DONE: seed={} ticks={} pieces_landed={} lines_cleared={} score={} level={} game_over={}",
        options.seed,
        ticks,
        pieces_landed,
        lines_cleared,
        peak_score,
        peak_level,
        engine.game_over()
    );
    Ok(())
}
