//! End-to-end cursor pipeline: raw tracked samples in, screen pixels out.

use crate::filter::{FilterConfig, FilterError, OneEuroFilter};
use crate::mapping::ScreenMapper;

/// Smooths a stream of normalized 2D samples and maps them to screen pixels.
///
/// Owns one [`OneEuroFilter`] per axis plus a [`ScreenMapper`]. Feed it the
/// tracked position each frame via [`advance`](CursorPipeline::advance) and
/// move the pointer to the returned coordinates. When tracking is lost and
/// reacquired, call [`reset`](CursorPipeline::reset) with the first new
/// sample so the cursor does not sweep across the screen from its old
/// position.
pub struct CursorPipeline {
    filter_x: OneEuroFilter,
    filter_y: OneEuroFilter,
    mapper: ScreenMapper,
}

impl CursorPipeline {
    /// Create a pipeline seeded with the first tracked sample.
    ///
    /// # Arguments
    ///
    /// * `t0` - Timestamp of the first sample in seconds
    /// * `x0_norm` - Normalized horizontal position of the first sample
    /// * `y0_norm` - Normalized vertical position of the first sample
    /// * `filter_config` - Tuning shared by both axis filters
    /// * `mapper` - Screen mapper for the source and destination in use
    ///
    /// # Returns
    ///
    /// The seeded pipeline, or a [`FilterError`] if the filter tuning is
    /// invalid.
    pub fn new(
        t0: f64,
        x0_norm: f64,
        y0_norm: f64,
        filter_config: FilterConfig,
        mapper: ScreenMapper,
    ) -> Result<Self, FilterError> {
        tracing::debug!(
            "Creating cursor pipeline seeded at t={}, ({}, {})",
            t0,
            x0_norm,
            y0_norm
        );
        Ok(Self {
            filter_x: OneEuroFilter::new(t0, x0_norm, filter_config)?,
            filter_y: OneEuroFilter::new(t0, y0_norm, filter_config)?,
            mapper,
        })
    }

    /// Feed the next tracked sample and return the mapped screen position.
    ///
    /// Samples whose timestamp does not move forward leave the smoothing
    /// state untouched; the previous smoothed position is mapped again.
    ///
    /// # Arguments
    ///
    /// * `t` - Timestamp of the sample in seconds
    /// * `x_norm` - Normalized horizontal position
    /// * `y_norm` - Normalized vertical position
    pub fn advance(&mut self, t: f64, x_norm: f64, y_norm: f64) -> (i32, i32) {
        if t <= self.filter_x.last_timestamp() {
            tracing::trace!(
                "Stale sample at t={}, keeping previous smoothed position",
                t
            );
        }
        let x = self.filter_x.update(t, x_norm);
        let y = self.filter_y.update(t, y_norm);
        self.mapper.map(x, y)
    }

    /// Re-seed both axis filters, discarding all smoothing state.
    ///
    /// # Arguments
    ///
    /// * `t0` - Timestamp of the first sample after reacquisition
    /// * `x0_norm` - Normalized horizontal position of that sample
    /// * `y0_norm` - Normalized vertical position of that sample
    pub fn reset(&mut self, t0: f64, x0_norm: f64, y0_norm: f64) {
        tracing::debug!("Re-seeding cursor pipeline at t={}", t0);
        self.filter_x.reseed(t0, x0_norm);
        self.filter_y.reseed(t0, y0_norm);
    }

    /// The last smoothed normalized position.
    pub fn smoothed(&self) -> (f64, f64) {
        (self.filter_x.value(), self.filter_y.value())
    }

    /// The screen mapper in use.
    pub fn mapper(&self) -> &ScreenMapper {
        &self.mapper
    }

    /// The filter tuning in use.
    pub fn filter_config(&self) -> &FilterConfig {
        self.filter_x.config()
    }
}
