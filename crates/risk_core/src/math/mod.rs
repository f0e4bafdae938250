//! Numerical building blocks.
//!
//! Currently limited to standard normal distribution math; everything
//! here is pure, allocation-free, and generic over the float width.

pub mod gaussian;

pub use gaussian::{norm_cdf, norm_inv_cdf, norm_pdf};
