//! Adaptive signal smoothing for tracked pointer axes.

mod one_euro;

pub use one_euro::{
    FilterConfig, FilterError, OneEuroFilter, DEFAULT_BETA, DEFAULT_DERIVATIVE_CUTOFF,
    DEFAULT_MIN_CUTOFF,
};
