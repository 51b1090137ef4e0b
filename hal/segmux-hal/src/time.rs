//! Monotonic time source
//!
//! Used by the scrolling mode to time the hold between shifts.

/// Monotonic millisecond clock
///
/// The counter is allowed to wrap; consumers compare instants with
/// `wrapping_sub`.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed epoch
    fn now_ms(&self) -> u32;

    /// Milliseconds elapsed since `since`, tolerant of counter wrap
    fn elapsed_ms(&self, since: u32) -> u32 {
        self.now_ms().wrapping_sub(since)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}
