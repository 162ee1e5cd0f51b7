//! Output sizes for 2D windowed operators (convolution, pooling).
//!
//! Rows and columns are computed independently with the single-axis rules in
//! [`super::window`]. Output position `(r, c)` reads the input chunk
//! `(r * S_r - pad_top) .. + K_r` by `(c * S_c - pad_left) .. + K_c`.

use crate::dimension::window::windowed_output_size_verbose;
use crate::dimension::AxisSpec;
use crate::error::Result;
use crate::padding::{AxisPadding, Padding};

/// Output shape of a 2D operator with one (leading) padding per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Output2d {
    pub height: i64,
    pub width: i64,
    /// Rows of padding added above the input.
    pub pad_rows: i64,
    /// Columns of padding added left of the input.
    pub pad_cols: i64,
}

/// Output shape of a 2D operator with padding on all four sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Output2dVerbose {
    pub height: i64,
    pub width: i64,
    pub pad_top: i64,
    pub pad_bottom: i64,
    pub pad_left: i64,
    pub pad_right: i64,
}

impl Output2dVerbose {
    /// Drops the trailing paddings.
    pub fn compact(&self) -> Output2d {
        Output2d {
            height: self.height,
            width: self.width,
            pad_rows: self.pad_top,
            pad_cols: self.pad_left,
        }
    }
}

/// Caller-supplied paddings for a 2D operator using [`Padding::Explicit`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Padding2d {
    pub top: i64,
    pub bottom: i64,
    pub left: i64,
    pub right: i64,
}

impl Padding2d {
    pub fn new(top: i64, bottom: i64, left: i64, right: i64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn rows(&self) -> AxisPadding {
        AxisPadding::new(self.top, self.bottom)
    }

    pub fn cols(&self) -> AxisPadding {
        AxisPadding::new(self.left, self.right)
    }
}

/// Computes the output size of a 2D operator and the padding above and left of the input.
///
/// The padding below and right of the input may be one larger than the
/// reported value when the total padding of an axis is odd, which happens
/// with `Same` padding and strides greater than one. Kernels that pad
/// asymmetrically need [`output_size_2d_verbose`].
///
/// [`Padding::Explicit`] cannot be expressed in this form and is rejected.
pub fn output_size_2d(rows: AxisSpec, cols: AxisSpec, padding: Padding) -> Result<Output2d> {
    output_size_2d_verbose(rows, cols, padding, None).map(|out| out.compact())
}

/// Computes the output size of a 2D operator and the padding on every side.
///
/// Any odd element of padding goes to the bottom and right. `explicit`
/// is required for [`Padding::Explicit`] and ignored otherwise.
pub fn output_size_2d_verbose(
    rows: AxisSpec,
    cols: AxisSpec,
    padding: Padding,
    explicit: Option<Padding2d>,
) -> Result<Output2dVerbose> {
    let row = windowed_output_size_verbose(rows, padding, explicit.map(|p| p.rows()))?;
    let col = windowed_output_size_verbose(cols, padding, explicit.map(|p| p.cols()))?;

    Ok(Output2dVerbose {
        height: row.output,
        width: col.output,
        pad_top: row.pad_before,
        pad_bottom: row.pad_after,
        pad_left: col.pad_before,
        pad_right: col.pad_after,
    })
}
