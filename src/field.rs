//! Numeric field selection.
//!
//! The coefficient type is fixed at compile time; enable the `f32`
//! feature to trade precision for width.

#[cfg(feature = "f32")]
pub type Scalar = f32;
#[cfg(not(feature = "f32"))]
pub type Scalar = f64;
