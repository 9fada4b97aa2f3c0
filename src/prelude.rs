// src/prelude.rs
//! The "everything" import for the engine.
//!
//! Brings the most commonly used types and spaces in with one glob:
//! ```rust
//! use cga_engine::prelude::*;
//! ```

// core types
pub use crate::basis::{Sca, Subspace};
pub use crate::blade::Blade;
pub use crate::field::Scalar;
pub use crate::metric::{Conformal, Euclid, Metric, Sig};
pub use crate::multivector::{euclidean_pseudoscalar, pseudoscalar, Closed, Multivector};

// concrete spaces
pub use crate::spaces::cga3;
pub use crate::spaces::ega3;
