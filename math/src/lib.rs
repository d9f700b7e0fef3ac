//! # Fixed-point decimal math
//!
//! Every replica must derive byte-identical yield figures, so nothing in the
//! settlement path may touch floating point. [`Dec`] is an unsigned decimal
//! with 18 fractional digits stored as a scaled `u128`:
//!
//! ```text
//! Dec(raw)  ==  raw / 10^18
//! ```
//!
//! Multiplication and division widen to an arbitrary-precision intermediate
//! and round half-to-even at the 18th digit, so `1_000_000 × 0.15 ÷ 6_311_520`
//! is exact up to the last representable digit and identical everywhere.
//!
//! ```rust
//! use vrn_math::Dec;
//!
//! let rate: Dec = "0.15".parse().unwrap();
//! let annual = Dec::from_int(1_000_000).checked_mul(rate).unwrap();
//! let per_block = annual.checked_quo_int(6_311_520).unwrap();
//! assert_eq!(per_block.to_string(), "0.023766065860521713");
//! assert_eq!(per_block.truncate_int(), 0);
//! ```

pub mod decimal;
pub mod error;

pub use {
    decimal::{Dec, PRECISION},
    error::MathError,
};
