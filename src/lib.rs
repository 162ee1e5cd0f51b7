//! Window geometry for convolution and pooling operators.
//!
//! `windowdims` computes the output shape of sliding-window operators and
//! the padding applied at the input boundaries, for every padding policy in
//! [`Padding`], and the inverse mapping used when scattering gradients back
//! onto the input.
//!
//! ```
//! use windowdims::{windowed_output_size_verbose, AxisSpec, Padding};
//!
//! let axis = AxisSpec::new(7, 3, 2);
//! let same = windowed_output_size_verbose(axis, Padding::Same, None).unwrap();
//! assert_eq!((same.output, same.pad_before, same.pad_after), (4, 1, 1));
//!
//! let valid = windowed_output_size_verbose(axis, Padding::Valid, None).unwrap();
//! assert_eq!(valid.output, 3);
//! ```
//!
//! All functions are pure and allocation-free apart from the N-axis results.

pub mod broadcast;
pub mod dimension;
pub mod error;
pub mod padding;

pub use broadcast::{broadcast_size, BroadcastWindow};
pub use dimension::{
    output_size_2d, output_size_2d_verbose, output_size_3d, output_size_nd,
    output_size_nd_explicit, windowed_output_size, windowed_output_size_verbose, AxisResult,
    AxisSpec, Output2d, Output2dVerbose, OutputNd, Padding2d,
};
pub use error::{Result, WindowError};
pub use padding::{AxisPadding, ExplicitPaddings, Padding, PaddingType};
