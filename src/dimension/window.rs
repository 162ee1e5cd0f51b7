//! Single-axis output size computation.
//!
//! For an axis with input size `I`, window `K` and stride `S`:
//!
//! - `Valid`: no padding, `O = ceil((I - K + 1) / S)`.
//! - `Same`: `O = ceil(I / S)`, padded by `max(0, (O - 1) * S + K - I)` in
//!   total, half before and the rest (including any odd element) after.
//!   With `S = 1` this reduces to `O = I` and a total padding of `K - 1`.
//! - `Explicit`: the caller's `before`/`after` amounts are applied and the
//!   padded extent is treated like `Valid`.
//!
//! Output position `o` reads input positions
//! `o * S - pad_before .. o * S - pad_before + K`, which is what
//! [`crate::broadcast::broadcast_size`] inverts for gradient passes.

use crate::dimension::arith::{add, ceil_div, mul, sub};
use crate::dimension::{AxisResult, AxisSpec};
use crate::error::{Result, WindowError};
use crate::padding::{AxisPadding, Padding};

/// Computes the output size and both paddings of one axis.
///
/// `explicit` is required for [`Padding::Explicit`] and ignored otherwise.
///
/// # Errors
///
/// Returns [`WindowError::InvalidArgument`] if the window or stride is not
/// positive, the input is negative, explicit amounts are missing or negative,
/// or the window does not fit into the (padded) input.
pub fn windowed_output_size_verbose(
    axis: AxisSpec,
    padding: Padding,
    explicit: Option<AxisPadding>,
) -> Result<AxisResult> {
    axis.validate()?;
    let AxisSpec {
        input,
        window,
        stride,
    } = axis;

    let result = match padding {
        Padding::Valid => AxisResult::new(strided_output(input, window, stride)?, 0, 0),
        Padding::Same => {
            let output = ceil_div(input, stride)?;
            let covered = add(mul(output - 1, stride)?, window)?;
            let needed = sub(covered, input)?.max(0);
            let pad_before = needed / 2;
            AxisResult::new(output, pad_before, needed - pad_before)
        }
        Padding::Explicit => {
            let pads = explicit.ok_or_else(|| {
                WindowError::invalid_argument("Explicit padding requires padding amounts")
            })?;
            pads.validate()?;
            let padded = add(input, add(pads.before, pads.after)?)?;
            AxisResult::new(strided_output(padded, window, stride)?, pads.before, pads.after)
        }
    };

    log::trace!(
        "{} padding {} -> output {}, pad {}+{}",
        padding,
        axis,
        result.output,
        result.pad_before,
        result.pad_after
    );
    Ok(result)
}

/// Computes the output size and the leading padding of one axis.
///
/// The trailing padding can be larger by one; use
/// [`windowed_output_size_verbose`] when both ends are needed.
pub fn windowed_output_size(
    axis: AxisSpec,
    padding: Padding,
    explicit: Option<AxisPadding>,
) -> Result<(i64, i64)> {
    let result = windowed_output_size_verbose(axis, padding, explicit)?;
    Ok((result.output, result.pad_before))
}

// ceil((extent - window + 1) / stride), rejected when that ceiling is negative.
// A window overhanging by less than a stride still yields an empty output.
fn strided_output(extent: i64, window: i64, stride: i64) -> Result<i64> {
    let span = add(sub(extent, window)?, 1)?;
    if span <= -stride {
        return Err(WindowError::invalid_argument(format!(
            "Computed output size would be negative [input: {}, window: {}, stride: {}]",
            extent, window, stride
        )));
    }
    ceil_div(span.max(0), stride)
}
