//! Basic usage example for Air Cursor.

use air_cursor::{CursorPipeline, FilterConfig, ScreenMapper};

fn main() -> anyhow::Result<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    // Map a 640x480 camera frame to a 1920x1080 screen
    // You can customize these settings based on your setup
    let mapper = ScreenMapper::with_default_margin(640, 480, 1920, 1080)?;

    // Configure the smoothing
    let config = FilterConfig::default()
        .with_min_cutoff(1.0) // Heavier smoothing at rest
        .with_beta(0.3); // Quicker response to fast motion

    println!("🖱️ Starting Air Cursor...\n");

    // Seed the pipeline with the first tracked sample
    let mut pipeline = CursorPipeline::new(0.0, 0.50, 0.50, config, mapper)?;

    // A short hand-tracked trajectory: drifting right with sensor jitter
    let samples = [
        (0.016, 0.503, 0.498),
        (0.033, 0.509, 0.502),
        (0.050, 0.521, 0.499),
        (0.066, 0.538, 0.501),
        (0.083, 0.560, 0.497),
        (0.100, 0.584, 0.503),
        (0.116, 0.609, 0.500),
        (0.133, 0.633, 0.498),
    ];

    for (t, x, y) in samples {
        let (px, py) = pipeline.advance(t, x, y);
        println!("t={:.3}s  raw=({:.3}, {:.3})  →  screen=({}, {})", t, x, y, px, py);
    }

    let (sx, sy) = pipeline.smoothed();
    println!("\n✅ Final smoothed position: ({:.4}, {:.4})", sx, sy);

    Ok(())
}
