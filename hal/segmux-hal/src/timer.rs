//! Periodic refresh interrupt
//!
//! A chip HAL installs one handler on a hardware timer (or an
//! interrupt-priority executor) and calls it at a fixed, approximate
//! period. Every display shares that single handler through the
//! scheduler in `segmux-core`.

/// Source of periodic, preemptive refresh ticks
pub trait PeriodicInterrupt {
    /// Error type for installation failures
    type Error;

    /// Install `handler` to run every `period_us` microseconds
    ///
    /// The period is a hint; hardware dividers only approximate it.
    /// Returns the period actually configured, in microseconds.
    ///
    /// Installation happens once. The handler runs in interrupt context
    /// and must not block.
    fn install(&mut self, period_us: u32, handler: fn()) -> Result<u32, Self::Error>;

    /// Check if a handler has been installed
    fn is_installed(&self) -> bool;
}
