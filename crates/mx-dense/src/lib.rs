//! `mx-dense` - Dense matrices with interchangeable multiplication strategies.
//!
//! This crate provides:
//! - A `DenseMatrix` value type with row-major `f64` storage
//! - A `Strategy` enum selecting standard, row-oriented, tiled or Strassen multiply
//! - Slice-level kernels for each strategy
//! - Elementwise add/subtract helpers shared with Strassen
//! - `MultiplyConfig` defaults for block size and Strassen threshold

pub mod arith;
pub mod config;
pub mod error;
pub mod kernels;
pub mod matrix;
pub mod shape;
pub mod strategy;

// Re-export primary types at the crate root for convenience.
pub use config::MultiplyConfig;
pub use error::{DenseError, Result};
pub use matrix::DenseMatrix;
pub use shape::Shape;
pub use strategy::Strategy;
