//! segmux Hardware Abstraction Layer
//!
//! This crate defines the small hardware surface the multiplexed display
//! driver needs. Chip-specific crates (RP2040, ...) implement these traits;
//! host tests implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (segmux-firmware, etc.)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segmux-core (displays, scheduler)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segmux-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  segmux-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Segment and digit-enable lines
//! - [`time::Clock`] - Monotonic millisecond time
//! - [`timer::PeriodicInterrupt`] - Refresh tick source

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod time;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use gpio::{Level, OutputPin};
pub use time::Clock;
pub use timer::PeriodicInterrupt;
