//! Air Cursor - adaptive pointer smoothing driver
//!
//! This is the CLI entry point for the air-cursor tool. It feeds
//! timestamped normalized samples through the smoothing pipeline and
//! prints the mapped screen coordinates.
//! Run with: cargo run --bin air-cursor

use air_cursor::{CursorPipeline, CursorSettings, FilterConfig, ScreenMapper};
use std::env;
use std::fs;
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignore errors if file doesn't exist)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    // Saved settings are the baseline; environment variables override them
    let settings = CursorSettings::load();
    let min_cutoff: f64 = env::var("CURSOR_MIN_CUTOFF")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(settings.min_cutoff);
    let beta: f64 = env::var("CURSOR_BETA")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(settings.beta);
    let d_cutoff: f64 = env::var("CURSOR_D_CUTOFF")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(settings.d_cutoff);
    let edge_margin: u32 = env::var("CURSOR_EDGE_MARGIN")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(settings.edge_margin);
    let source_width: u32 = env::var("CURSOR_SOURCE_WIDTH")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(settings.source_width);
    let source_height: u32 = env::var("CURSOR_SOURCE_HEIGHT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(settings.source_height);
    let screen_width: u32 = env::var("CURSOR_SCREEN_WIDTH")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(settings.screen_width);
    let screen_height: u32 = env::var("CURSOR_SCREEN_HEIGHT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(settings.screen_height);

    let synthetic = args.iter().any(|arg| arg == "--synthetic");
    let save_settings = args.iter().any(|arg| arg == "--save-settings");
    let replay_path = args
        .iter()
        .skip(1)
        .find(|arg| !arg.starts_with("--"))
        .cloned();

    println!("🖱️ Air Cursor - Adaptive Pointer Smoothing");
    println!("================================================");
    println!(
        "Filter: min_cutoff={:.2} Hz, beta={:.2}, d_cutoff={:.2} Hz",
        min_cutoff, beta, d_cutoff
    );
    println!(
        "Source: {}x{} (margin {}px)",
        source_width, source_height, edge_margin
    );
    println!("Screen: {}x{}", screen_width, screen_height);
    println!("================================================\n");

    let config = FilterConfig::default()
        .with_min_cutoff(min_cutoff)
        .with_beta(beta)
        .with_d_cutoff(d_cutoff);
    config.validate()?;

    let mapper = ScreenMapper::new(
        source_width,
        source_height,
        screen_width,
        screen_height,
        edge_margin,
    )?;

    if save_settings {
        let resolved = CursorSettings {
            min_cutoff,
            beta,
            d_cutoff,
            edge_margin,
            source_width,
            source_height,
            screen_width,
            screen_height,
        };
        match resolved.save() {
            Ok(()) => {
                if let Some(path) = CursorSettings::settings_path() {
                    println!("💾 Settings saved to {}\n", path.display());
                }
            }
            Err(e) => eprintln!("⚠️ Failed to save settings: {}\n", e),
        }
    }

    if synthetic {
        run_synthetic(config, mapper)
    } else if let Some(path) = replay_path {
        run_replay(&path, config, mapper)
    } else {
        run_interactive(config, mapper)
    }
}

/// Replay a recorded trajectory file.
///
/// One sample per line as `t x y` (seconds, then normalized coordinates),
/// blank lines and `#` comments skipped. The first sample seeds the
/// pipeline.
fn run_replay(path: &str, config: FilterConfig, mapper: ScreenMapper) -> anyhow::Result<()> {
    println!("📼 Replaying {}\n", path);

    let content = fs::read_to_string(path)?;
    let mut pipeline: Option<CursorPipeline> = None;
    let mut accepted = 0usize;

    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((t, x, y)) = parse_sample(line) else {
            eprintln!("⚠️ Skipping malformed line {}: {}", number + 1, line);
            continue;
        };

        match pipeline {
            Some(ref mut active) => {
                let (px, py) = active.advance(t, x, y);
                println!(
                    "t={:>8.3}s  raw=({:.3}, {:.3})  →  ({}, {})",
                    t, x, y, px, py
                );
            }
            None => {
                pipeline = Some(CursorPipeline::new(t, x, y, config, mapper)?);
                println!("t={:>8.3}s  seeded at ({:.3}, {:.3})", t, x, y);
            }
        }
        accepted += 1;
    }

    println!("\n✅ Replayed {} samples", accepted);
    Ok(())
}

/// Drive the pipeline with a synthetic circular trajectory plus jitter.
fn run_synthetic(config: FilterConfig, mapper: ScreenMapper) -> anyhow::Result<()> {
    use rand::Rng;

    println!("🌀 Synthetic trajectory: circle with jitter, 240 frames at 60 Hz\n");

    let mut rng = rand::thread_rng();
    let noise = 0.005;

    let mut pipeline = CursorPipeline::new(0.0, 0.75, 0.5, config, mapper)?;
    for frame in 1..=240u32 {
        let t = frame as f64 / 60.0;
        let angle = t * std::f64::consts::TAU / 4.0;
        let x = 0.5 + 0.25 * angle.cos() + rng.gen_range(-noise..noise);
        let y = 0.5 + 0.25 * angle.sin() + rng.gen_range(-noise..noise);

        let (px, py) = pipeline.advance(t, x, y);
        if frame % 12 == 0 {
            let (sx, sy) = pipeline.smoothed();
            println!(
                "t={:>5.2}s  raw=({:.3}, {:.3})  smoothed=({:.3}, {:.3})  →  ({}, {})",
                t, x, y, sx, sy, px, py
            );
        }
    }

    println!("\n✅ Synthetic run complete");
    Ok(())
}

/// Interactive mode: read `t x y` samples from stdin.
fn run_interactive(config: FilterConfig, mapper: ScreenMapper) -> anyhow::Result<()> {
    println!("Interactive mode. Enter samples as: t x y");
    println!("Type 'reset' to re-seed on the next sample.");
    println!("Type 'quit' or 'exit' to exit.\n");

    let mut pipeline: Option<CursorPipeline> = None;
    let mut reseed_pending = false;

    let stdin = io::stdin();
    loop {
        print!("📍 Sample: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "exit" {
            println!("Goodbye! 👋");
            break;
        }

        if input == "reset" {
            reseed_pending = true;
            println!("🔄 Pipeline will re-seed on the next sample\n");
            continue;
        }

        let Some((t, x, y)) = parse_sample(input) else {
            eprintln!("❌ Expected three numbers: t x y\n");
            continue;
        };

        match pipeline {
            Some(ref mut existing) => {
                if reseed_pending {
                    existing.reset(t, x, y);
                    reseed_pending = false;
                }
                let (px, py) = existing.advance(t, x, y);
                let (sx, sy) = existing.smoothed();
                println!("→ ({}, {})  smoothed=({:.4}, {:.4})\n", px, py, sx, sy);
            }
            None => {
                let seeded = CursorPipeline::new(t, x, y, config, mapper)?;
                let (px, py) = seeded.mapper().map(x, y);
                pipeline = Some(seeded);
                reseed_pending = false;
                println!("→ seeded at ({}, {})\n", px, py);
            }
        }
    }

    Ok(())
}

/// Parse a `t x y` line into a timestamped sample.
fn parse_sample(line: &str) -> Option<(f64, f64, f64)> {
    let mut parts = line.split_whitespace();
    let t = parts.next()?.parse().ok()?;
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((t, x, y))
}
