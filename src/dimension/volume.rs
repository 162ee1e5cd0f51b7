//! Output sizes for N-dimensional windowed operators.
//!
//! Used by volumetric convolution and pooling, where the input is padded at
//! the lower end of every axis only: with zeros for convolution, or with
//! values that pooling ignores.

use crate::dimension::window::windowed_output_size_verbose;
use crate::dimension::AxisSpec;
use crate::error::{Result, WindowError};
use crate::padding::{ExplicitPaddings, Padding};

/// Per-axis output sizes and lower-end paddings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputNd {
    pub output: Vec<i64>,
    pub padding: Vec<i64>,
}

impl OutputNd {
    pub fn ndim(&self) -> usize {
        self.output.len()
    }
}

fn check_rank(input: &[i64], window: &[i64], strides: &[i64]) -> Result<()> {
    if window.len() != input.len() || strides.len() != input.len() {
        return Err(WindowError::invalid_argument(format!(
            "Input, window and strides must have the same rank, got {}, {} and {}",
            input.len(),
            window.len(),
            strides.len()
        )));
    }
    Ok(())
}

fn compute(
    input: &[i64],
    window: &[i64],
    strides: &[i64],
    padding: Padding,
    explicit: Option<&ExplicitPaddings>,
) -> Result<OutputNd> {
    check_rank(input, window, strides)?;

    let mut output = Vec::with_capacity(input.len());
    let mut pads = Vec::with_capacity(input.len());
    for (i, ((&extent, &size), &stride)) in input.iter().zip(window).zip(strides).enumerate() {
        let axis = AxisSpec::new(extent, size, stride);
        let pad = explicit.map(|paddings| paddings.axis(i)).transpose()?;
        let result = windowed_output_size_verbose(axis, padding, pad)?;
        output.push(result.output);
        pads.push(result.pad_before);
    }

    Ok(OutputNd {
        output,
        padding: pads,
    })
}

/// Computes output sizes and lower-end paddings for any number of axes.
///
/// # Errors
///
/// Returns [`WindowError::InvalidArgument`] if the three slices differ in
/// length, if any axis is invalid, or if `padding` is [`Padding::Explicit`]
/// (use [`output_size_nd_explicit`] instead).
pub fn output_size_nd(
    input: &[i64],
    window: &[i64],
    strides: &[i64],
    padding: Padding,
) -> Result<OutputNd> {
    if padding == Padding::Explicit {
        return Err(WindowError::invalid_argument(
            "Explicit padding needs per-axis amounts, use output_size_nd_explicit",
        ));
    }
    compute(input, window, strides, padding, None)
}

/// Computes output sizes for any number of axes with caller-supplied paddings.
///
/// `paddings` must cover exactly the axes in `input`.
pub fn output_size_nd_explicit(
    input: &[i64],
    window: &[i64],
    strides: &[i64],
    paddings: &ExplicitPaddings,
) -> Result<OutputNd> {
    if paddings.num_dims() != input.len() {
        return Err(WindowError::invalid_argument(format!(
            "Expected paddings for {} axes, got {}",
            input.len(),
            paddings.num_dims()
        )));
    }
    compute(input, window, strides, Padding::Explicit, Some(paddings))
}

/// Fixed-size form of [`output_size_nd`] for 3D operators.
///
/// Returns the output sizes and the lower-end paddings.
pub fn output_size_3d(
    input: [i64; 3],
    window: [i64; 3],
    strides: [i64; 3],
    padding: Padding,
) -> Result<([i64; 3], [i64; 3])> {
    let result = output_size_nd(&input, &window, &strides, padding)?;
    let mut output = [0; 3];
    let mut pads = [0; 3];
    output.copy_from_slice(&result.output);
    pads.copy_from_slice(&result.padding);
    Ok((output, pads))
}
