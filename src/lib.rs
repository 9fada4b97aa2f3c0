//! # CGA Engine Quickstart
//!
//! ```rust
//! use cga_engine::prelude::*;
//!
//! // Rotate (1,0,0) 90° about the Z axis
//! let v = ega3::vec(1.0, 0.0, 0.0);
//! let v_rot = v.rotate_axis_angle([0.0, 0.0, 1.0], std::f64::consts::FRAC_PI_2);
//!
//! // Should end up at (0,1,0)
//! const EPS: f64 = 1e-12;
//! assert!(v_rot.val[0].abs() < EPS);
//! assert!((v_rot.val[1] - 1.0).abs() < EPS);
//! assert!(v_rot.val[2].abs() < EPS);
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod blade;  // Blade bitmask encoding and const sign arithmetic
pub mod basis;  // Ordered blade lists and the Subspace marker trait
pub mod field;  // Compile-time scalar field selection
pub mod metric;  // Euclidean / conformal / general signatures
pub mod products;  // Compile-time product term tables
pub mod multivector;
pub mod prelude;

// Concrete algebra instantiations
pub mod spaces;

// SIMD batch path for the Euclidean 3D rotor
pub mod simd;

// --- Public API exports ---

pub use basis::Subspace;
pub use blade::Blade;
pub use field::Scalar;
pub use metric::{Conformal, Euclid, Metric, Sig};
pub use multivector::{Multivector, pseudoscalar, euclidean_pseudoscalar};
