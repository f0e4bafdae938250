//! Random number generation for the simulation engine.
//!
//! Two layers sit between `rand` and the distribution models:
//!
//! - [`MonteCarloRng`]: a seedable wrapper around [`rand::rngs::StdRng`]
//!   implementing [`risk_core::RandomSource`], with child-stream
//!   spawning for parallel and per-asset fan-out
//! - [`AntitheticRng`]: a record/replay adapter that mirrors the
//!   uniforms of a primary draw sequence as `1 - u` for its paired
//!   antithetic sequence
//!
//! All reproducibility guarantees flow from here: a fixed seed fixes
//! the parent stream, the parent stream fixes every spawned child in
//! spawn order, and the antithetic adapter is deterministic given its
//! wrapped stream.

mod antithetic;
mod prng;

pub use antithetic::AntitheticRng;
pub use prng::MonteCarloRng;
