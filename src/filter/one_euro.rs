//! One Euro adaptive low-pass filter for noisy, irregularly sampled signals.
//!
//! A single-pole low-pass filter whose cutoff frequency rises with the
//! estimated speed of the signal: heavy smoothing while the tracked point
//! rests (jitter removal), near-unity pass-through while it moves fast
//! (lag removal). One filter instance handles one scalar axis.

use std::f64::consts::TAU;

use thiserror::Error;

/// Default minimum cutoff frequency in Hz.
pub const DEFAULT_MIN_CUTOFF: f64 = 1.0;

/// Default speed coefficient.
pub const DEFAULT_BETA: f64 = 0.0;

/// Default cutoff frequency for the derivative estimate in Hz.
pub const DEFAULT_DERIVATIVE_CUTOFF: f64 = 1.0;

/// Filter configuration errors.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("minimum cutoff frequency must be strictly positive, got {0}")]
    InvalidMinCutoff(f64),

    #[error("derivative cutoff frequency must be strictly positive, got {0}")]
    InvalidDerivativeCutoff(f64),

    #[error("speed coefficient must be non-negative, got {0}")]
    InvalidBeta(f64),
}

/// Tuning parameters for a [`OneEuroFilter`].
///
/// Two knobs matter in practice: lower `min_cutoff` to remove more jitter
/// at rest, raise `beta` to cut lag during fast motion.
#[derive(Debug, Clone, Copy)]
pub struct FilterConfig {
    /// Minimum cutoff frequency in Hz, applied when the signal is at rest
    pub min_cutoff: f64,
    /// Speed coefficient scaling how much the cutoff rises with signal speed
    pub beta: f64,
    /// Cutoff frequency in Hz for smoothing the derivative estimate
    pub d_cutoff: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_cutoff: DEFAULT_MIN_CUTOFF,
            beta: DEFAULT_BETA,
            d_cutoff: DEFAULT_DERIVATIVE_CUTOFF,
        }
    }
}

impl FilterConfig {
    /// Set the minimum cutoff frequency in Hz.
    pub fn with_min_cutoff(mut self, min_cutoff: f64) -> Self {
        self.min_cutoff = min_cutoff;
        self
    }

    /// Set the speed coefficient.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Set the derivative cutoff frequency in Hz.
    pub fn with_d_cutoff(mut self, d_cutoff: f64) -> Self {
        self.d_cutoff = d_cutoff;
        self
    }

    /// Validate the configuration.
    ///
    /// Cutoff frequencies must be strictly positive and the speed
    /// coefficient non-negative. The comparisons are written so that NaN
    /// values are rejected as well.
    pub fn validate(&self) -> Result<(), FilterError> {
        if !(self.min_cutoff > 0.0) {
            return Err(FilterError::InvalidMinCutoff(self.min_cutoff));
        }
        if !(self.d_cutoff > 0.0) {
            return Err(FilterError::InvalidDerivativeCutoff(self.d_cutoff));
        }
        if !(self.beta >= 0.0) {
            return Err(FilterError::InvalidBeta(self.beta));
        }
        Ok(())
    }
}

/// One Euro filter over a single scalar axis.
///
/// Holds the smoothed value, the smoothed derivative estimate, and the
/// timestamp of the last accepted sample. Feed it timestamped samples via
/// [`update`](OneEuroFilter::update); it returns the smoothed value and
/// advances its state. Samples whose timestamp does not move forward are
/// ignored, so duplicated or out-of-order frames cannot corrupt the state.
#[derive(Debug, Clone)]
pub struct OneEuroFilter {
    config: FilterConfig,
    t_prev: f64,
    x_prev: f64,
    dx_prev: f64,
}

impl OneEuroFilter {
    /// Create a new filter seeded with the first observed sample.
    ///
    /// The initial derivative estimate is zero; use
    /// [`with_initial_derivative`](OneEuroFilter::with_initial_derivative)
    /// when a better estimate is known.
    ///
    /// # Arguments
    ///
    /// * `t0` - Timestamp of the first sample in seconds
    /// * `x0` - Value of the first sample
    /// * `config` - Tuning parameters
    ///
    /// # Returns
    ///
    /// The seeded filter, or a [`FilterError`] if the configuration is
    /// invalid.
    pub fn new(t0: f64, x0: f64, config: FilterConfig) -> Result<Self, FilterError> {
        config.validate()?;
        Ok(Self {
            config,
            t_prev: t0,
            x_prev: x0,
            dx_prev: 0.0,
        })
    }

    /// Replace the initial derivative estimate.
    pub fn with_initial_derivative(mut self, dx0: f64) -> Self {
        self.dx_prev = dx0;
        self
    }

    /// Feed the next sample and return the smoothed value.
    ///
    /// If `t` is not strictly greater than the timestamp of the last
    /// accepted sample, the sample is discarded and the previous smoothed
    /// value is returned unchanged.
    ///
    /// # Arguments
    ///
    /// * `t` - Timestamp of the sample in seconds
    /// * `x` - Raw sample value
    pub fn update(&mut self, t: f64, x: f64) -> f64 {
        let dt = t - self.t_prev;

        // Duplicated or out-of-order frames leave the state untouched.
        if dt <= 0.0 {
            return self.x_prev;
        }

        // Smooth the finite-difference derivative with a fixed cutoff.
        let dx = (x - self.x_prev) / dt;
        let alpha_d = smoothing_factor(dt, self.config.d_cutoff);
        let dx_hat = exponential_smoothing(alpha_d, dx, self.dx_prev);

        // The faster the signal moves, the higher the cutoff and the
        // closer the output tracks the raw input.
        let cutoff = self.config.min_cutoff + self.config.beta * dx_hat.abs();
        let alpha = smoothing_factor(dt, cutoff);
        let x_hat = exponential_smoothing(alpha, x, self.x_prev);

        self.t_prev = t;
        self.x_prev = x_hat;
        self.dx_prev = dx_hat;

        x_hat
    }

    /// Reset the state to a fresh initial sample, keeping the configuration.
    pub fn reseed(&mut self, t0: f64, x0: f64) {
        self.t_prev = t0;
        self.x_prev = x0;
        self.dx_prev = 0.0;
    }

    /// The last smoothed value.
    pub fn value(&self) -> f64 {
        self.x_prev
    }

    /// The last smoothed derivative estimate.
    pub fn derivative(&self) -> f64 {
        self.dx_prev
    }

    /// Timestamp of the last accepted sample in seconds.
    pub fn last_timestamp(&self) -> f64 {
        self.t_prev
    }

    /// The tuning parameters in use.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }
}

/// Smoothing factor of a one-pole low-pass filter discretized over `dt`.
///
/// `r / (r + 1)` with `r = 2π · cutoff · dt`, in `(0, 1)` for positive
/// inputs. Approaches 1 (no smoothing) as `cutoff · dt` grows.
fn smoothing_factor(dt: f64, cutoff: f64) -> f64 {
    let r = TAU * cutoff * dt;
    r / (r + 1.0)
}

/// Linear blend of the raw sample with the previous smoothed value.
fn exponential_smoothing(alpha: f64, x: f64, x_prev: f64) -> f64 {
    alpha * x + (1.0 - alpha) * x_prev
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_filter(t0: f64, x0: f64) -> OneEuroFilter {
        OneEuroFilter::new(t0, x0, FilterConfig::default()).unwrap()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FilterConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_min_cutoff() {
        let config = FilterConfig::default().with_min_cutoff(0.0);
        assert!(matches!(
            OneEuroFilter::new(0.0, 0.0, config),
            Err(FilterError::InvalidMinCutoff(_))
        ));

        let config = FilterConfig::default().with_min_cutoff(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(FilterError::InvalidMinCutoff(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_derivative_cutoff() {
        let config = FilterConfig::default().with_d_cutoff(-1.0);
        assert!(matches!(
            OneEuroFilter::new(0.0, 0.0, config),
            Err(FilterError::InvalidDerivativeCutoff(_))
        ));
    }

    #[test]
    fn test_rejects_negative_beta() {
        let config = FilterConfig::default().with_beta(-0.5);
        assert!(matches!(
            OneEuroFilter::new(0.0, 0.0, config),
            Err(FilterError::InvalidBeta(_))
        ));
    }

    #[test]
    fn test_constant_signal_is_a_fixed_point() {
        let mut filter = default_filter(0.0, 0.25);
        for i in 1..=50 {
            let out = filter.update(i as f64 * 0.01, 0.25);
            assert!(
                (out - 0.25).abs() < 1e-12,
                "constant input drifted to {out} at step {i}"
            );
        }
        assert!(filter.derivative().abs() < 1e-9);
    }

    #[test]
    fn test_converges_to_constant_input() {
        let mut filter = default_filter(0.0, 0.0);
        let mut last = 0.0;
        for i in 1..=300 {
            last = filter.update(i as f64 * 0.01, 1.0);
        }
        assert!((last - 1.0).abs() < 1e-3, "filter stuck at {last}");
        assert!(filter.derivative().abs() < 1e-3);
    }

    #[test]
    fn test_output_stays_between_previous_and_raw() {
        let mut filter = default_filter(0.0, 0.0);
        let out = filter.update(0.02, 1.0);
        assert!(out > 0.0 && out < 1.0, "expected a partial step, got {out}");
    }

    #[test]
    fn test_faster_motion_tracks_closer() {
        let config = FilterConfig::default().with_beta(1.0);
        let mut slow = OneEuroFilter::new(0.0, 0.0, config).unwrap();
        let mut fast = OneEuroFilter::new(0.0, 0.0, config).unwrap();

        // Same seed, same dt, different step sizes. With both seeded at
        // zero the output-to-input ratio is exactly the smoothing factor,
        // which must be larger for the faster step.
        let slow_ratio = slow.update(0.01, 0.001) / 0.001;
        let fast_ratio = fast.update(0.01, 1.0) / 1.0;
        assert!(
            fast_ratio > slow_ratio,
            "fast ratio {fast_ratio} not above slow ratio {slow_ratio}"
        );
    }

    #[test]
    fn test_beta_zero_ignores_speed() {
        let config = FilterConfig::default().with_beta(0.0);
        let mut slow = OneEuroFilter::new(0.0, 0.0, config).unwrap();
        let mut fast = OneEuroFilter::new(0.0, 0.0, config).unwrap();

        let slow_ratio = slow.update(0.01, 0.001) / 0.001;
        let fast_ratio = fast.update(0.01, 1.0) / 1.0;
        assert!((fast_ratio - slow_ratio).abs() < 1e-12);
    }

    #[test]
    fn test_stale_timestamps_are_ignored() {
        let mut filter = default_filter(0.0, 0.5);
        let out = filter.update(0.1, 0.8);
        let derivative = filter.derivative();

        // Duplicate timestamp, then a timestamp in the past.
        assert_eq!(filter.update(0.1, 0.9), out);
        assert_eq!(filter.update(0.05, -3.0), out);

        assert_eq!(filter.value(), out);
        assert_eq!(filter.derivative(), derivative);
        assert_eq!(filter.last_timestamp(), 0.1);
    }

    #[test]
    fn test_state_tracks_latest_accepted_sample() {
        let mut filter = default_filter(1.0, 0.0);
        let out = filter.update(1.5, 2.0);
        assert_eq!(filter.value(), out);
        assert_eq!(filter.last_timestamp(), 1.5);
        assert!(filter.derivative() > 0.0);
    }

    #[test]
    fn test_initial_derivative_seeding() {
        let filter = default_filter(0.0, 0.0).with_initial_derivative(5.0);
        assert_eq!(filter.derivative(), 5.0);

        // A seeded derivative pulls the first estimate upward compared to
        // the default zero seed.
        let mut seeded = default_filter(0.0, 0.0).with_initial_derivative(5.0);
        let mut unseeded = default_filter(0.0, 0.0);
        seeded.update(0.01, 0.1);
        unseeded.update(0.01, 0.1);
        assert!(seeded.derivative() > unseeded.derivative());
    }

    #[test]
    fn test_reseed_clears_state() {
        let mut filter = default_filter(0.0, 0.0);
        filter.update(0.1, 1.0);
        filter.update(0.2, 2.0);

        filter.reseed(5.0, 0.5);
        assert_eq!(filter.value(), 0.5);
        assert_eq!(filter.derivative(), 0.0);
        assert_eq!(filter.last_timestamp(), 5.0);

        // Samples older than the new seed are stale again.
        assert_eq!(filter.update(0.3, 9.9), 0.5);
    }

    #[test]
    fn test_smoothing_factor_bounds() {
        let alpha = smoothing_factor(0.01, 1.0);
        assert!(alpha > 0.0 && alpha < 1.0);

        // Larger cutoff or larger dt both push the factor toward 1.
        assert!(smoothing_factor(0.01, 10.0) > alpha);
        assert!(smoothing_factor(0.1, 1.0) > alpha);
    }
}
