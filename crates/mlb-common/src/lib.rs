//! Shared utilities for the MLB trends crates.
//!
//! Polars column readers, display formatting, and the rounding and ratio
//! rules every summary uses.

pub mod frame;
pub mod numeric;

pub use frame::{column_f64, column_i64, column_str, format_optional};
pub use numeric::{checked_ratio, round_half_even};
