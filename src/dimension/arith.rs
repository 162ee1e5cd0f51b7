//! Checked integer arithmetic shared by the window calculators.
//!
//! Every output size and padding is derived with exact integer arithmetic.
//! Overflow is reported as an invalid argument rather than wrapping.

use num_traits::PrimInt;

use crate::error::{Result, WindowError};

fn overflow() -> WindowError {
    WindowError::invalid_argument("Integer overflow while computing window geometry")
}

pub(crate) fn add<T: PrimInt>(a: T, b: T) -> Result<T> {
    a.checked_add(&b).ok_or_else(overflow)
}

pub(crate) fn sub<T: PrimInt>(a: T, b: T) -> Result<T> {
    a.checked_sub(&b).ok_or_else(overflow)
}

pub(crate) fn mul<T: PrimInt>(a: T, b: T) -> Result<T> {
    a.checked_mul(&b).ok_or_else(overflow)
}

/// `ceil(a / b)` for `a >= 0` and `b > 0`.
pub(crate) fn ceil_div<T: PrimInt>(a: T, b: T) -> Result<T> {
    debug_assert!(a >= T::zero() && b > T::zero());
    Ok(add(a, b - T::one())? / b)
}
