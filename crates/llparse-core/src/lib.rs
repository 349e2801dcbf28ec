#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the llparse crates.
//!
//! - [`Value`]: the dynamically typed payload every parser node produces
//! - [`Expected`]: ordered, de-duplicated set of expectation descriptions
//! - [`Colors`]: ANSI palette for traces and dumps

mod colors;
mod expected;
mod value;

#[cfg(test)]
mod expected_tests;

pub use colors::Colors;
pub use expected::Expected;
pub use value::{Value, ValueError, ValueKind};
