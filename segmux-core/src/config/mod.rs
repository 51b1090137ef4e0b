//! Configuration types
//!
//! Board-agnostic wiring, timing and capacity settings.

pub mod types;

pub use types::*;
