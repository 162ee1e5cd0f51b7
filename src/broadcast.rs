//! Input ranges read by a single output position.
//!
//! Gradient passes for pooling scatter each output-side value back over the
//! input positions its window covered. With padding, the window of an output
//! position near the boundary starts before the input or ends after it, so
//! both the start and the size of the range differ from `index * stride` and
//! the window size.

use std::ops::Range;

/// A range of input positions `[start, start + size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BroadcastWindow {
    pub start: i64,
    pub size: i64,
}

impl BroadcastWindow {
    pub fn range(&self) -> Range<i64> {
        self.start..self.start + self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// Computes the input range covered by the window of output position `index`.
///
/// The window starts at `index * stride - pad_size` and spans `ksize`
/// positions; it is clipped to `[0, in_size)`. `pad_size` is the leading
/// padding reported by the output size calculators for the same axis.
///
/// A window lying entirely in the padding yields an empty range rather than an error.
pub fn broadcast_size(
    index: i64,
    in_size: i64,
    ksize: i64,
    stride: i64,
    pad_size: i64,
) -> BroadcastWindow {
    let raw_start = index.saturating_mul(stride).saturating_sub(pad_size);
    let raw_end = raw_start.saturating_add(ksize);

    let start = raw_start.max(0);
    let end = raw_end.min(in_size);
    let size = end.saturating_sub(start).max(0);

    BroadcastWindow { start, size }
}
