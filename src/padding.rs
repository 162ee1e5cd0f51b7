//! Padding policies for windowed operators.
//!
//! This module provides the [`Padding`] policy shared by every windowed
//! operator, its translation to the kernel-side [`PaddingType`] tag, and
//! validation of the caller-supplied amounts used by [`Padding::Explicit`].

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WindowError};

/// How the input of a windowed operator is padded at its boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Padding {
    /// No padding. The output shrinks whenever the window is wider than one element.
    Valid,
    /// Pad so that the output has `ceil(input / stride)` elements along every axis.
    Same,
    /// Padding amounts are supplied by the caller.
    Explicit,
}

/// Padding tag understood by the dense-array kernels.
///
/// Kernels only know how to derive their own padding for the two implicit
/// policies, so there is no explicit variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddingType {
    Valid,
    Same,
}

impl Padding {
    /// Returns the attribute string as written in an operator definition.
    pub fn as_str(&self) -> &'static str {
        match self {
            Padding::Valid => "VALID",
            Padding::Same => "SAME",
            Padding::Explicit => "EXPLICIT",
        }
    }

    /// Returns the attribute declaration accepted by operators that take a padding.
    pub fn attr_string(include_explicit: bool) -> &'static str {
        if include_explicit {
            "padding: {'SAME', 'VALID', 'EXPLICIT'}"
        } else {
            "padding: {'SAME', 'VALID'}"
        }
    }

    /// Translates the policy into the kernel padding tag.
    ///
    /// # Panics
    ///
    /// Panics on [`Padding::Explicit`]. Callers must resolve explicit padding
    /// themselves before handing work to a kernel; reaching this with an
    /// explicit policy is a bug in the caller.
    pub fn to_padding_type(self) -> PaddingType {
        match self {
            Padding::Valid => PaddingType::Valid,
            Padding::Same => PaddingType::Same,
            Padding::Explicit => panic!("Explicit padding has no kernel padding type"),
        }
    }
}

impl TryFrom<Padding> for PaddingType {
    type Error = WindowError;

    fn try_from(padding: Padding) -> Result<Self> {
        match padding {
            Padding::Valid => Ok(PaddingType::Valid),
            Padding::Same => Ok(PaddingType::Same),
            Padding::Explicit => Err(WindowError::invalid_argument(
                "Explicit padding has no kernel padding type",
            )),
        }
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Padding {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "VALID" => Ok(Padding::Valid),
            "SAME" => Ok(Padding::Same),
            "EXPLICIT" => Ok(Padding::Explicit),
            other => Err(WindowError::invalid_argument(format!(
                "Unknown padding '{}', expected one of VALID, SAME, EXPLICIT",
                other
            ))),
        }
    }
}

/// Padding applied to the two ends of a single axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AxisPadding {
    pub before: i64,
    pub after: i64,
}

impl AxisPadding {
    pub fn new(before: i64, after: i64) -> Self {
        Self { before, after }
    }

    /// The same amount on both ends.
    pub fn symmetric(amount: i64) -> Self {
        Self::new(amount, amount)
    }

    pub fn total(&self) -> i64 {
        self.before.saturating_add(self.after)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.before < 0 || self.after < 0 {
            return Err(WindowError::invalid_argument(format!(
                "Explicit padding must be non-negative, got before={} after={}",
                self.before, self.after
            )));
        }
        Ok(())
    }
}

/// Validated per-axis padding amounts for [`Padding::Explicit`].
///
/// Operators carry these as a flat `[before_0, after_0, before_1, after_1, ...]`
/// attribute with one pair per tensor dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExplicitPaddings {
    axes: Vec<AxisPadding>,
}

impl ExplicitPaddings {
    /// Builds the paddings from a flat attribute list of length `2 * num_dims`.
    pub fn from_flat(values: &[i64], num_dims: usize) -> Result<Self> {
        let expected = num_dims.checked_mul(2).ok_or_else(|| {
            WindowError::invalid_argument(format!("Too many dimensions: {}", num_dims))
        })?;
        if values.len() != expected {
            return Err(WindowError::invalid_argument(format!(
                "explicit_paddings must contain {} values for {} dimensions, got {}",
                expected,
                num_dims,
                values.len()
            )));
        }

        let axes = values
            .chunks_exact(2)
            .map(|pair| AxisPadding::new(pair[0], pair[1]))
            .collect::<Vec<_>>();
        for axis in &axes {
            axis.validate()?;
        }

        Ok(Self { axes })
    }

    /// Builds the paddings from one pair per axis.
    pub fn from_axes(axes: Vec<AxisPadding>) -> Result<Self> {
        for axis in &axes {
            axis.validate()?;
        }
        Ok(Self { axes })
    }

    /// Checks an operator's `padding` and `explicit_paddings` attributes together.
    ///
    /// Returns `None` for the implicit policies, which must come with an empty list.
    pub fn for_padding(padding: Padding, values: &[i64], num_dims: usize) -> Result<Option<Self>> {
        match padding {
            Padding::Explicit => Self::from_flat(values, num_dims).map(Some),
            _ if values.is_empty() => Ok(None),
            _ => Err(WindowError::invalid_argument(format!(
                "explicit_paddings must be empty when padding is {}",
                padding
            ))),
        }
    }

    pub fn num_dims(&self) -> usize {
        self.axes.len()
    }

    pub fn axis(&self, dim: usize) -> Result<AxisPadding> {
        self.axes.get(dim).copied().ok_or_else(|| {
            WindowError::invalid_argument(format!(
                "Axis {} out of range for paddings of {} dimensions",
                dim,
                self.axes.len()
            ))
        })
    }

    pub fn as_slice(&self) -> &[AxisPadding] {
        &self.axes
    }

    /// Rejects padding on the batch and feature axes, which windowed kernels never pad.
    pub fn check_batch_and_channel(&self, batch_dim: usize, channel_dim: usize) -> Result<()> {
        for dim in [batch_dim, channel_dim] {
            let axis = self.axis(dim)?;
            if axis.before != 0 || axis.after != 0 {
                return Err(WindowError::invalid_argument(format!(
                    "Nonzero explicit padding on dimension {} (batch or channel) is not supported",
                    dim
                )));
            }
        }
        Ok(())
    }

    /// Drops the batch and feature axes, keeping the spatial ones in order.
    pub fn spatial(&self, batch_dim: usize, channel_dim: usize) -> Result<Self> {
        self.check_batch_and_channel(batch_dim, channel_dim)?;
        let axes = self
            .axes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != batch_dim && *i != channel_dim)
            .map(|(_, axis)| *axis)
            .collect();
        Ok(Self { axes })
    }
}
