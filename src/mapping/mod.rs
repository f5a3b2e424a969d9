//! Coordinate mapping from normalized source frames to destination screens.

mod screen_map;

pub use screen_map::{MappingError, ScreenMapper, DEFAULT_EDGE_MARGIN};
