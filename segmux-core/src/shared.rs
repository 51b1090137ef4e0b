//! Sharing between normal context and the refresh interrupt
//!
//! [`Shared`] is a critical-section cell: every access briefly masks
//! interrupts, so the refresh step never observes a half-written buffer.
//! Content-replacing calls format outside the critical section and only
//! install the finished buffer inside it.

use core::cell::RefCell;

use critical_section::Mutex;
use segmux_hal::{Clock, OutputPin};

use crate::config::{ScrollConfig, MAX_DISPLAYS};
use crate::display::{Mode, Multiplex, SegDisplay};
use crate::format::{encode_scroll, encode_static, pad_scroll, render_float};
use crate::scheduler::{Refresh, Registration, Scheduler};
use crate::segment::Segments;

/// Value shared with interrupt context
pub struct Shared<T> {
    inner: Mutex<RefCell<T>>,
}

impl<T> Shared<T> {
    /// Wrap a value; usable in `static` initializers
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(value)),
        }
    }

    /// Run `f` on the value inside a critical section
    ///
    /// Keep `f` short: interrupts are masked while it runs.
    pub fn lock<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }
}

impl<T> Refresh for Shared<T>
where
    T: Multiplex + Send,
{
    fn refresh(&self) {
        self.lock(|display| display.step());
    }
}

/// A display shared with the refresh interrupt
pub type SharedDisplay<P, C, const N: usize> = Shared<SegDisplay<P, C, N>>;

/// A scheduler shared with the refresh interrupt
pub type SharedScheduler<'a, const M: usize = MAX_DISPLAYS> = Shared<Scheduler<'a, M>>;

impl<'a, const M: usize> Shared<Scheduler<'a, M>> {
    /// Add a display to the refresh order
    pub fn register(&self, display: &'a dyn Refresh) -> Registration {
        self.lock(|scheduler| scheduler.register(display))
    }

    /// Remove a display from the refresh order
    pub fn deregister(&self, display: &dyn Refresh) -> bool {
        self.lock(|scheduler| scheduler.deregister(display))
    }

    /// Check if `display` is registered
    pub fn is_registered(&self, display: &dyn Refresh) -> bool {
        self.lock(|scheduler| scheduler.is_registered(display))
    }

    /// Number of registered displays
    pub fn len(&self) -> usize {
        self.lock(|scheduler| scheduler.len())
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Refresh tick: step every registered display once
    ///
    /// This is the body of the periodic interrupt handler.
    pub fn tick(&self) {
        self.lock(|scheduler| scheduler.tick());
    }
}

impl<P, C, const N: usize> Shared<SegDisplay<P, C, N>>
where
    P: OutputPin + Send,
    C: Clock + Send,
{
    /// Start refreshing this display on `scheduler`'s tick
    ///
    /// The static buffer is kept while off, so turning back on shows the
    /// same content.
    pub fn turn_on<'a, const M: usize>(&'a self, scheduler: &SharedScheduler<'a, M>) -> Registration {
        let outcome = scheduler.register(self);

        #[cfg(feature = "defmt")]
        defmt::debug!("display on: {}", outcome);

        outcome
    }

    /// Stop refreshing this display and blank it
    ///
    /// Deregistration and blanking happen in one critical section, so no
    /// tick can light the display again after this returns.
    pub fn turn_off<const M: usize>(&self, scheduler: &SharedScheduler<'_, M>) {
        critical_section::with(|_| {
            scheduler.deregister(self);
            self.lock(|display| display.blank());
        });

        #[cfg(feature = "defmt")]
        defmt::debug!("display off");
    }

    /// Show a float with `fraction_digits` digits after the point
    pub fn set_number(&self, value: f32, fraction_digits: u8) {
        let digits = encode_static(&render_float(value, fraction_digits));
        self.lock(|display| display.load_static(digits));
    }

    /// Show a pre-rendered numeral
    pub fn set_numeral(&self, numeral: &str) {
        let digits = encode_static(numeral);
        self.lock(|display| display.load_static(digits));
    }

    /// Set one digit position to a raw pattern
    pub fn set_symbol(&self, symbol: Segments, index: usize) {
        self.lock(|display| display.set_symbol(symbol, index));
    }

    /// Replace the static buffer with raw patterns
    pub fn set_symbols(&self, symbols: &[Segments; N]) {
        let digits = *symbols;
        self.lock(|display| display.load_static(digits));
    }

    /// Blank the static buffer
    pub fn clear(&self) {
        self.lock(|display| display.clear());
    }

    /// Copy of the static buffer
    pub fn snapshot(&self) -> [Segments; N] {
        self.lock(|display| display.snapshot())
    }

    /// Scroll a float across the display
    pub fn show_number(&self, value: f32, fraction_digits: u8, scroll: ScrollConfig) {
        let buffer = encode_scroll(&render_float(value, fraction_digits), N);
        self.lock(|display| display.load_scroll(buffer, scroll));
    }

    /// Scroll a pre-rendered numeral across the display
    pub fn show_numeral(&self, numeral: &str, scroll: ScrollConfig) {
        let buffer = encode_scroll(numeral, N);
        self.lock(|display| display.load_scroll(buffer, scroll));
    }

    /// Scroll raw patterns across the display
    ///
    /// Same limits as [`SegDisplay::show_symbols`].
    pub fn show_symbols(&self, symbols: &[Segments], scroll: ScrollConfig) {
        let buffer = pad_scroll(symbols, N);
        self.lock(|display| display.load_scroll(buffer, scroll));
    }

    /// Stop scrolling and return to the static buffer
    pub fn cancel_dynamic(&self) {
        self.lock(|display| display.cancel_dynamic());
    }

    /// Check if a scroll is running
    pub fn is_dynamic(&self) -> bool {
        self.lock(|display| display.is_dynamic())
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.lock(|display| display.mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Repeats;
    use crate::segment::encode_digit;
    use crate::testing::{Rig, TestDisplay};

    fn d(digit: u8) -> Segments {
        encode_digit(digit, false)
    }

    #[test]
    fn test_turn_on_refreshes() {
        let rig = Rig::<3>::new();
        let disp: SharedDisplay<_, _, 3> = Shared::new(rig.display());
        let sched: SharedScheduler<'_> = Shared::new(Scheduler::new());

        disp.set_numeral("123");
        assert_eq!(disp.turn_on(&sched), Registration::Added);
        assert_eq!(disp.turn_on(&sched), Registration::AlreadyRegistered);

        for pos in 0..3 {
            sched.tick();
            assert_eq!(rig.enabled_digits().as_slice(), &[pos]);
            assert_eq!(rig.lit(), d(pos as u8 + 1));
        }
    }

    #[test]
    fn test_turn_off_blanks_and_deregisters() {
        let rig = Rig::<2>::new();
        let disp: SharedDisplay<_, _, 2> = Shared::new(rig.display());
        let sched: SharedScheduler<'_> = Shared::new(Scheduler::new());

        disp.set_numeral("88");
        disp.turn_on(&sched);
        sched.tick();
        assert_eq!(rig.enabled_digits().len(), 1);

        disp.turn_off(&sched);
        assert!(!sched.is_registered(&disp));
        assert!(sched.is_empty());
        assert!(rig.enabled_digits().is_empty());

        sched.tick();
        assert!(rig.enabled_digits().is_empty());

        // Content survives an off/on cycle
        assert_eq!(disp.snapshot(), [d(8), d(8)]);
        disp.turn_on(&sched);
        sched.tick();
        assert_eq!(rig.lit(), d(8));
    }

    #[test]
    fn test_mixed_widths_share_one_scheduler() {
        let wide = Rig::<4>::new();
        let narrow = Rig::<2>::new();
        let a: SharedDisplay<_, _, 4> = Shared::new(wide.display());
        let b: SharedDisplay<_, _, 2> = Shared::new(narrow.display());
        let sched: SharedScheduler<'_> = Shared::new(Scheduler::new());

        a.set_numeral("1234");
        b.set_numeral("56");
        a.turn_on(&sched);
        b.turn_on(&sched);

        for tick in 0..8usize {
            sched.tick();
            assert_eq!(wide.enabled_digits().as_slice(), &[tick % 4]);
            assert_eq!(narrow.enabled_digits().as_slice(), &[tick % 2]);
        }
    }

    #[test]
    fn test_scroll_through_shared() {
        let rig = Rig::<2>::new();
        let disp: SharedDisplay<_, _, 2> = Shared::new(rig.display());
        let sched: SharedScheduler<'_> = Shared::new(Scheduler::new());
        disp.turn_on(&sched);

        disp.set_number(4.0, 0);
        disp.show_numeral("7", ScrollConfig::new(0, Repeats::ONCE));
        assert_eq!(disp.mode(), Mode::Dynamic);

        // [B, B, 7, B, B]: 3 shifts + final wrap
        for _ in 0..8 {
            sched.tick();
        }
        assert!(!disp.is_dynamic());
        assert_eq!(disp.snapshot(), [d(4), Segments::BLANK]);
    }

    #[test]
    fn test_cancel_through_shared() {
        let rig = Rig::<2>::new();
        let disp: SharedDisplay<_, _, 2> = Shared::new(rig.display());

        disp.show_symbols(&[Segments(0x80)], ScrollConfig::default().looping());
        assert!(disp.is_dynamic());
        disp.cancel_dynamic();
        assert!(!disp.is_dynamic());
    }

    #[test]
    fn test_static_edits_through_shared() {
        let rig = Rig::<3>::new();
        let disp: SharedDisplay<_, _, 3> = Shared::new(rig.display());

        disp.set_symbols(&[Segments(1), Segments(2), Segments(3)]);
        disp.set_symbol(Segments(9), 1);
        disp.set_symbol(Segments(9), 7);
        assert_eq!(disp.snapshot(), [Segments(1), Segments(9), Segments(3)]);

        disp.clear();
        assert_eq!(disp.snapshot(), [Segments::BLANK; 3]);
    }

    #[test]
    fn test_lock_gives_full_access() {
        let rig = Rig::<2>::new();
        let disp: Shared<TestDisplay<'_, 2>> = Shared::new(rig.display());
        let width = disp.lock(|display| display.width());
        assert_eq!(width, 2);
    }
}
