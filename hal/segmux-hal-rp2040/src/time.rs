//! Millisecond clock backed by the embassy time driver

use embassy_time::Instant;
use segmux_hal::Clock;

/// System uptime clock
///
/// Wraps after about 49.7 days; hold-time arithmetic in the core uses
/// wrapping subtraction so the wrap is harmless.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
