//! Host-side mocks shared by the unit tests

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use segmux_hal::{Clock, OutputPin};

use crate::config::SEGMENT_COUNT;
use crate::display::SegDisplay;
use crate::segment::Segments;

/// Output pin backed by an atomic so the owning display stays `Sync`
pub struct MockPin<'a>(&'a AtomicBool);

impl OutputPin for MockPin<'_> {
    fn set_high(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }

    fn set_low(&mut self) {
        self.0.store(false, Ordering::Relaxed);
    }

    fn is_set_high(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Manually advanced millisecond clock
pub struct MockClock(AtomicU32);

impl MockClock {
    pub fn new(start_ms: u32) -> Self {
        Self(AtomicU32::new(start_ms))
    }

    pub fn advance(&self, ms: u32) {
        self.0.fetch_add(ms, Ordering::Relaxed);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }
}

pub type TestDisplay<'a, const N: usize> = SegDisplay<MockPin<'a>, &'a MockClock, N>;

/// Line levels of one display, as seen on the board
///
/// Pins start high, as on a freshly configured board where nothing has
/// been driven yet.
pub struct Rig<const N: usize> {
    pub segments: [AtomicBool; SEGMENT_COUNT],
    pub digits: [AtomicBool; N],
    pub clock: MockClock,
}

impl<const N: usize> Rig<N> {
    pub fn new() -> Self {
        Self {
            segments: core::array::from_fn(|_| AtomicBool::new(true)),
            digits: core::array::from_fn(|_| AtomicBool::new(true)),
            clock: MockClock::new(0),
        }
    }

    pub fn segment_pins(&self) -> [MockPin<'_>; SEGMENT_COUNT] {
        core::array::from_fn(|i| MockPin(&self.segments[i]))
    }

    pub fn digit_pins(&self) -> [MockPin<'_>; N] {
        core::array::from_fn(|i| MockPin(&self.digits[i]))
    }

    /// Common-cathode display wired to this rig
    pub fn display(&self) -> TestDisplay<'_, N> {
        SegDisplay::new(
            self.segment_pins(),
            self.digit_pins(),
            &self.clock,
            Default::default(),
        )
    }

    /// Indexes of digit lines pulled low (enabled, common cathode)
    pub fn enabled_digits(&self) -> heapless::Vec<usize, N> {
        self.digits
            .iter()
            .enumerate()
            .filter(|(_, d)| !d.load(Ordering::Relaxed))
            .map(|(i, _)| i)
            .collect()
    }

    /// Pattern currently on the segment lines (active high)
    pub fn lit(&self) -> Segments {
        let bits = self
            .segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.load(Ordering::Relaxed))
            .fold(0u8, |acc, (i, _)| acc | (1 << i));
        Segments(bits)
    }
}
