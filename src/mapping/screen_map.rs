//! Margin-banded mapping from normalized source coordinates to screen pixels.

use thiserror::Error;

/// Default edge margin in source pixels.
pub const DEFAULT_EDGE_MARGIN: u32 = 100;

/// Screen mapping errors.
#[derive(Error, Debug)]
pub enum MappingError {
    #[error("edge margin {margin}px leaves no active region inside the {width}x{height} source frame")]
    MarginTooLarge {
        margin: u32,
        width: u32,
        height: u32,
    },
}

/// Maps normalized source-frame coordinates to absolute destination pixels.
///
/// A margin band along each source edge is excluded from the mapping:
/// positions inside the band are clamped to its boundary, and the interior
/// region is stretched over the full destination. A tracked hand therefore
/// reaches the screen corners without being pushed to the physical edge of
/// the camera frame, where detection gets unreliable.
///
/// Input coordinates are normalized to `[0.0, 1.0]` relative to the source
/// frame; out-of-range values are clamped rather than rejected. Outputs
/// cover the destination inclusively, so `1.0` maps to `dst_width` exactly.
#[derive(Debug, Clone, Copy)]
pub struct ScreenMapper {
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
    margin: u32,
}

impl ScreenMapper {
    /// Create a new mapper.
    ///
    /// # Arguments
    ///
    /// * `src_width` - Source frame width in pixels
    /// * `src_height` - Source frame height in pixels
    /// * `dst_width` - Destination width in pixels
    /// * `dst_height` - Destination height in pixels
    /// * `margin` - Edge margin in source pixels
    ///
    /// # Returns
    ///
    /// The mapper, or [`MappingError::MarginTooLarge`] when the margin
    /// bands meet or overlap and no interior region remains.
    pub fn new(
        src_width: u32,
        src_height: u32,
        dst_width: u32,
        dst_height: u32,
        margin: u32,
    ) -> Result<Self, MappingError> {
        // Both source dimensions must be strictly wider than the two
        // margin bands, otherwise the interior region is empty.
        let doubled = 2 * margin as u64;
        if src_width as u64 <= doubled || src_height as u64 <= doubled {
            return Err(MappingError::MarginTooLarge {
                margin,
                width: src_width,
                height: src_height,
            });
        }
        Ok(Self {
            src_width,
            src_height,
            dst_width,
            dst_height,
            margin,
        })
    }

    /// Create a mapper with the default edge margin.
    pub fn with_default_margin(
        src_width: u32,
        src_height: u32,
        dst_width: u32,
        dst_height: u32,
    ) -> Result<Self, MappingError> {
        Self::new(src_width, src_height, dst_width, dst_height, DEFAULT_EDGE_MARGIN)
    }

    /// Map a normalized source position to destination pixels.
    ///
    /// Fractional results truncate toward zero.
    pub fn map(&self, x_norm: f64, y_norm: f64) -> (i32, i32) {
        (
            map_axis(x_norm, self.src_width, self.dst_width, self.margin),
            map_axis(y_norm, self.src_height, self.dst_height, self.margin),
        )
    }

    /// The edge margin in source pixels.
    pub fn margin(&self) -> u32 {
        self.margin
    }

    /// Destination dimensions in pixels.
    pub fn destination(&self) -> (u32, u32) {
        (self.dst_width, self.dst_height)
    }
}

/// Map one axis: scale to source pixels, clamp into the interior region,
/// renormalize over that region, scale to the destination, truncate.
fn map_axis(value_norm: f64, src: u32, dst: u32, margin: u32) -> i32 {
    let margin = margin as f64;
    let src = src as f64;

    let px = value_norm * src;
    let clamped = px.clamp(margin, src - margin);
    let band = (clamped - margin) / (src - 2.0 * margin);
    (band * dst as f64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper_1000_to_hd() -> ScreenMapper {
        ScreenMapper::new(1000, 1000, 1920, 1080, 100).unwrap()
    }

    #[test]
    fn test_corners_reach_destination_extremes() {
        let mapper = mapper_1000_to_hd();
        assert_eq!(mapper.map(0.0, 0.0), (0, 0));
        assert_eq!(mapper.map(1.0, 1.0), (1920, 1080));
    }

    #[test]
    fn test_midpoint_maps_to_destination_center() {
        let mapper = mapper_1000_to_hd();
        assert_eq!(mapper.map(0.5, 0.5), (960, 540));
    }

    #[test]
    fn test_positions_inside_margin_band_clamp_to_edges() {
        let mapper = mapper_1000_to_hd();
        // 0.05 lands at source pixel 50, inside the 100px band.
        assert_eq!(mapper.map(0.05, 0.05), (0, 0));
        assert_eq!(mapper.map(0.95, 0.95), (1920, 1080));
    }

    #[test]
    fn test_out_of_range_input_clamps() {
        let mapper = mapper_1000_to_hd();
        assert_eq!(mapper.map(1.25, -0.25), (1920, 0));
        assert_eq!(mapper.map(-10.0, 10.0), (0, 1080));
    }

    #[test]
    fn test_fractional_results_truncate_toward_zero() {
        let mapper = ScreenMapper::new(1000, 1000, 1000, 1000, 100).unwrap();
        // 0.54928 lands at source pixel 549.28, band position 0.5616,
        // destination 561.6. Truncation gives 561 where rounding would
        // give 562.
        let (x, _) = mapper.map(0.54928, 0.5);
        assert_eq!(x, 561);
    }

    #[test]
    fn test_margin_consuming_frame_is_rejected() {
        assert!(matches!(
            ScreenMapper::new(1000, 1000, 1920, 1080, 600),
            Err(MappingError::MarginTooLarge { margin: 600, .. })
        ));
        // Bands that exactly meet leave a zero-width interior.
        assert!(ScreenMapper::new(1000, 1000, 1920, 1080, 500).is_err());
        // One pixel of interior is enough.
        assert!(ScreenMapper::new(1001, 1001, 1920, 1080, 500).is_ok());
    }

    #[test]
    fn test_margin_checked_against_both_dimensions() {
        // Width passes but height does not.
        assert!(ScreenMapper::new(1000, 300, 1920, 1080, 150).is_err());
    }

    #[test]
    fn test_default_margin_constructor() {
        let mapper = ScreenMapper::with_default_margin(640, 480, 1920, 1080).unwrap();
        assert_eq!(mapper.margin(), DEFAULT_EDGE_MARGIN);
        assert_eq!(mapper.destination(), (1920, 1080));
        assert_eq!(mapper.map(0.5, 0.5), (960, 540));
    }

    #[test]
    fn test_mapping_is_monotonic_across_the_interior() {
        let mapper = mapper_1000_to_hd();
        let mut prev = -1;
        for i in 0..=100 {
            let (x, _) = mapper.map(i as f64 / 100.0, 0.5);
            assert!(x >= prev, "mapping decreased at step {i}");
            prev = x;
        }
        assert_eq!(prev, 1920);
    }
}
