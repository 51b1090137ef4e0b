//! RP2040-specific HAL for the seven-segment multiplexer
//!
//! This crate provides RP2040 implementations of the `segmux-hal` traits:
//!
//! - [`gpio::DisplayPin`]: push-pull output implementing `OutputPin`
//! - [`time::SystemClock`]: millisecond clock on the embassy time driver
//! - [`refresh::RefreshInterrupt`]: periodic refresh on a high-priority
//!   interrupt executor

#![no_std]

pub mod gpio;
pub mod refresh;
pub mod time;

pub use gpio::DisplayPin;
pub use refresh::{RefreshError, RefreshInterrupt};
pub use time::SystemClock;

// Re-export shared traits from segmux-hal for convenience
pub use segmux_hal::{Clock, Level, OutputPin, PeriodicInterrupt};
