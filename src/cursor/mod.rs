//! Cursor orchestration: per-axis smoothing assembled into screen positions.

mod pipeline;

pub use pipeline::CursorPipeline;
