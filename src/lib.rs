// Copyright 2026 The Air Cursor Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Air Cursor
//!
//! Adaptive smoothing and screen mapping for vision-tracked pointer control.
//!
//! This library turns the noisy, normalized position of a point tracked by
//! an upstream vision pipeline (a fingertip, a stylus tip, a face landmark)
//! into a stable destination pixel coordinate suitable for driving a
//! pointer. A One Euro filter per axis removes jitter at rest without
//! adding lag during fast motion, and a margin-banded mapper stretches the
//! usable interior of the camera frame over the full screen.
//!
//! ## Example
//!
//! ```rust
//! use air_cursor::{CursorPipeline, FilterConfig, ScreenMapper};
//!
//! fn main() -> anyhow::Result<()> {
//!     // A 640x480 camera driving a 1920x1080 screen.
//!     let mapper = ScreenMapper::with_default_margin(640, 480, 1920, 1080)?;
//!     let config = FilterConfig::default()
//!         .with_min_cutoff(1.0)
//!         .with_beta(0.3);
//!
//!     // Seed with the first tracked sample, then advance each frame.
//!     let mut pipeline = CursorPipeline::new(0.0, 0.5, 0.5, config, mapper)?;
//!     let (x, y) = pipeline.advance(1.0 / 60.0, 0.52, 0.49);
//!
//!     println!("cursor at ({}, {})", x, y);
//!     Ok(())
//! }
//! ```

pub mod cursor;
pub mod filter;
pub mod geometry;
pub mod mapping;
pub mod settings;

// Smoothing exports
pub use filter::{
    FilterConfig, FilterError, OneEuroFilter, DEFAULT_BETA, DEFAULT_DERIVATIVE_CUTOFF,
    DEFAULT_MIN_CUTOFF,
};

// Mapping exports
pub use mapping::{MappingError, ScreenMapper, DEFAULT_EDGE_MARGIN};

pub use cursor::CursorPipeline;
pub use geometry::Point;
pub use settings::CursorSettings;
