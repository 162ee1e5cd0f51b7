//! Output sizes and paddings for sliding-window operators.
//!
//! This module computes, per spatial axis, how large the output of a
//! convolution or pooling operator is and how much padding is applied at
//! each end of the input. The single-axis calculation in [`window`] is
//! shared by the 2-axis forms in [`spatial`] and the N-axis forms in
//! [`volume`], so every call shape agrees on the arithmetic.

use std::fmt;

use crate::error::{Result, WindowError};

mod arith;
pub mod spatial;
pub mod volume;
pub mod window;

pub use spatial::{output_size_2d, output_size_2d_verbose, Output2d, Output2dVerbose, Padding2d};
pub use volume::{output_size_3d, output_size_nd, output_size_nd_explicit, OutputNd};
pub use window::{windowed_output_size, windowed_output_size_verbose};

/// One spatial axis of a windowed operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisSpec {
    /// Number of input elements along the axis.
    pub input: i64,
    /// Window (filter) extent along the axis.
    pub window: i64,
    /// Step between successive window positions.
    pub stride: i64,
}

impl AxisSpec {
    pub fn new(input: i64, window: i64, stride: i64) -> Self {
        Self {
            input,
            window,
            stride,
        }
    }

    /// Checks `input >= 0`, `window >= 1` and `stride >= 1`.
    pub fn validate(&self) -> Result<()> {
        if self.window <= 0 {
            return Err(WindowError::invalid_argument(format!(
                "Window size must be positive, got {}",
                self.window
            )));
        }
        if self.stride <= 0 {
            return Err(WindowError::invalid_argument(format!(
                "Stride must be positive, got {}",
                self.stride
            )));
        }
        if self.input < 0 {
            return Err(WindowError::invalid_argument(format!(
                "Input size must be non-negative, got {}",
                self.input
            )));
        }
        Ok(())
    }
}

impl fmt::Display for AxisSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[input: {}, window: {}, stride: {}]",
            self.input, self.window, self.stride
        )
    }
}

impl From<(i64, i64, i64)> for AxisSpec {
    fn from((input, window, stride): (i64, i64, i64)) -> Self {
        Self::new(input, window, stride)
    }
}

/// Output size and boundary padding of one axis.
///
/// When the total padding is odd, the extra element goes to `pad_after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisResult {
    pub output: i64,
    pub pad_before: i64,
    pub pad_after: i64,
}

impl AxisResult {
    pub fn new(output: i64, pad_before: i64, pad_after: i64) -> Self {
        Self {
            output,
            pad_before,
            pad_after,
        }
    }

    pub fn total_padding(&self) -> i64 {
        self.pad_before + self.pad_after
    }
}
