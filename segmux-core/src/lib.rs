//! Board-agnostic core of the seven-segment display driver
//!
//! This crate contains all logic that does not depend on a specific
//! microcontroller:
//!
//! - Segment pattern encoding
//! - Numeral formatting and scroll buffer construction
//! - The multiplexed display instance and its scroll state machine
//! - The bounded refresh scheduler
//! - Interrupt-safe sharing of displays and scheduler
//!
//! Boards supply pins, a millisecond clock and a periodic interrupt through
//! the `segmux-hal` traits.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod format;
pub mod scheduler;
pub mod segment;
pub mod shared;

#[cfg(test)]
mod testing;

pub use config::{DisplayConfig, Polarity, RefreshConfig, Repeats, ScrollConfig};
pub use display::{Mode, Multiplex, SegDisplay};
pub use scheduler::{Refresh, Registration, Scheduler};
pub use segment::Segments;
pub use shared::{Shared, SharedDisplay, SharedScheduler};
