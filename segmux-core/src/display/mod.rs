//! Multiplexed display instance
//!
//! A [`SegDisplay`] owns the segment lines and digit-enable lines of one
//! physical display. Each call to [`Multiplex::step`] lights exactly one
//! digit position and moves on to the next, so a periodic tick produces a
//! steadily lit display through persistence of vision.
//!
//! The display has two modes:
//!
//! - **Static**: shows the digit buffer set by `set_*`/`clear`.
//! - **Dynamic**: shows a window sliding over a scroll buffer started by
//!   `show_*`. The static buffer is untouched and reappears when the
//!   scroll finishes or is cancelled.

mod scroll;

use segmux_hal::{Clock, OutputPin};

use crate::config::{DisplayConfig, ScrollConfig, MAX_WIDTH, SEGMENT_COUNT};
use crate::format::{encode_scroll, encode_static, pad_scroll, render_float, ScrollBuffer};
use crate::segment::Segments;

use scroll::Scroll;

/// Display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Showing the static digit buffer
    Static,
    /// Scrolling
    Dynamic,
}

/// Something that can be refreshed one multiplexing step at a time
pub trait Multiplex {
    /// Light the next digit position
    ///
    /// Called from interrupt context: must not block or allocate.
    fn step(&mut self);

    /// Deassert every line
    fn blank(&mut self);
}

/// One multiplexed seven-segment display with `N` digit positions
pub struct SegDisplay<P, C, const N: usize>
where
    P: OutputPin,
    C: Clock,
{
    /// Segment lines, bit `i` of a pattern drives `segment_pins[i]`
    segment_pins: [P; SEGMENT_COUNT],
    /// Digit-enable lines, left to right
    digit_pins: [P; N],
    clock: C,
    config: DisplayConfig,
    /// Static digit buffer, left to right
    digits: [Segments; N],
    /// Active scroll, if in dynamic mode
    scroll: Option<Scroll>,
    /// Digit position lit by the next step
    position: usize,
}

impl<P, C, const N: usize> SegDisplay<P, C, N>
where
    P: OutputPin,
    C: Clock,
{
    /// Rejects, at compile time, displays wider than the scroll padding allows
    const WIDTH_FITS: () = assert!(N <= MAX_WIDTH, "display wider than MAX_WIDTH digits");

    /// Create a display and drive all of its lines inactive
    ///
    /// `N` must not exceed [`MAX_WIDTH`]; wider displays fail to build.
    ///
    /// # Arguments
    /// - `segment_pins`: segment lines in `[DP, G, F, E, D, C, B, A]` order
    /// - `digit_pins`: digit-enable lines, leftmost digit first
    /// - `clock`: time source for scroll hold periods
    /// - `config`: line polarity
    pub fn new(
        segment_pins: [P; SEGMENT_COUNT],
        digit_pins: [P; N],
        clock: C,
        config: DisplayConfig,
    ) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::WIDTH_FITS;

        let mut display = Self {
            segment_pins,
            digit_pins,
            clock,
            config,
            digits: [Segments::BLANK; N],
            scroll: None,
            position: 0,
        };
        display.blank();
        display
    }

    /// Number of digit positions
    pub const fn width(&self) -> usize {
        N
    }

    /// Wiring configuration
    pub fn config(&self) -> DisplayConfig {
        self.config
    }

    /// Show a float with `fraction_digits` digits after the point
    pub fn set_number(&mut self, value: f32, fraction_digits: u8) {
        self.set_numeral(&render_float(value, fraction_digits));
    }

    /// Show a pre-rendered numeral such as `"-12.5"`
    pub fn set_numeral(&mut self, numeral: &str) {
        self.load_static(encode_static(numeral));
    }

    /// Set one digit position to a raw pattern
    ///
    /// Out-of-range indexes are ignored.
    pub fn set_symbol(&mut self, symbol: Segments, index: usize) {
        if let Some(slot) = self.digits.get_mut(index) {
            *slot = symbol;
        }
    }

    /// Replace the whole static buffer with raw patterns
    pub fn set_symbols(&mut self, symbols: &[Segments; N]) {
        self.load_static(*symbols);
    }

    /// Blank every position of the static buffer
    pub fn clear(&mut self) {
        self.load_static([Segments::BLANK; N]);
    }

    /// Install a complete static buffer
    pub fn load_static(&mut self, digits: [Segments; N]) {
        self.digits = digits;
    }

    /// Copy of the static buffer
    pub fn snapshot(&self) -> [Segments; N] {
        self.digits
    }

    /// Scroll a float across the display
    pub fn show_number(&mut self, value: f32, fraction_digits: u8, scroll: ScrollConfig) {
        self.show_numeral(&render_float(value, fraction_digits), scroll);
    }

    /// Scroll a pre-rendered numeral across the display
    ///
    /// Up to [`MAX_SCROLL_SYMBOLS`](crate::config::MAX_SCROLL_SYMBOLS)
    /// characters scroll; the rest are dropped.
    pub fn show_numeral(&mut self, numeral: &str, scroll: ScrollConfig) {
        self.load_scroll(encode_scroll(numeral, N), scroll);
    }

    /// Scroll raw patterns across the display
    ///
    /// Any `u8` count of symbols fits. Symbols past
    /// [`MAX_SCROLL_SYMBOLS`](crate::config::MAX_SCROLL_SYMBOLS) are
    /// dropped.
    pub fn show_symbols(&mut self, symbols: &[Segments], scroll: ScrollConfig) {
        self.load_scroll(pad_scroll(symbols, N), scroll);
    }

    /// Enter dynamic mode with an already padded scroll buffer
    ///
    /// Replaces any running scroll and restarts from its first window.
    pub fn load_scroll(&mut self, buffer: ScrollBuffer, scroll: ScrollConfig) {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "scroll start: {} patterns, hold {} ms",
            buffer.len(),
            scroll.hold_ms
        );

        let now = self.clock.now_ms();
        self.scroll = Some(Scroll::new(buffer, scroll, now));
        self.position = 0;
    }

    /// Stop scrolling and return to the static buffer
    pub fn cancel_dynamic(&mut self) {
        if self.scroll.take().is_some() {
            #[cfg(feature = "defmt")]
            defmt::debug!("scroll cancelled");
            self.position = 0;
        }
    }

    /// Check if a scroll is running
    pub fn is_dynamic(&self) -> bool {
        self.scroll.is_some()
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        if self.is_dynamic() {
            Mode::Dynamic
        } else {
            Mode::Static
        }
    }

    /// Leftmost visible scroll index, if scrolling
    pub fn scroll_position(&self) -> Option<usize> {
        self.scroll.as_ref().map(Scroll::cursor)
    }

    /// Digit position lit by the next step
    pub fn position(&self) -> usize {
        self.position
    }

    /// Put `pattern` on the segment lines and enable only digit `position`
    fn drive(&mut self, pattern: Segments, position: usize) {
        let digit = self.config.digit;
        let segment = self.config.segment;

        // Deselect first so the old digit never shows the new pattern
        for pin in self.digit_pins.iter_mut() {
            pin.set_level(digit.level(false));
        }
        for (i, pin) in self.segment_pins.iter_mut().enumerate() {
            pin.set_level(segment.level(pattern.is_lit(i)));
        }
        if let Some(pin) = self.digit_pins.get_mut(position) {
            pin.set_level(digit.level(true));
        }
    }
}

impl<P, C, const N: usize> Multiplex for SegDisplay<P, C, N>
where
    P: OutputPin,
    C: Clock,
{
    fn step(&mut self) {
        if N == 0 {
            return;
        }
        if self.position >= N {
            self.position = 0;
        }

        let pattern = match &self.scroll {
            Some(scroll) => scroll.window(self.position),
            None => self.digits[self.position],
        };
        self.drive(pattern, self.position);

        self.position += 1;
        if self.position < N {
            return;
        }

        // Frame complete
        self.position = 0;
        if let Some(scroll) = self.scroll.as_mut() {
            if !scroll.on_frame(N, self.clock.now_ms()) {
                self.scroll = None;
            }
        }
    }

    fn blank(&mut self) {
        let digit = self.config.digit.level(false);
        let segment = self.config.segment.level(false);

        for pin in self.digit_pins.iter_mut() {
            pin.set_level(digit);
        }
        for pin in self.segment_pins.iter_mut() {
            pin.set_level(segment);
        }
    }
}

impl<P, C, const N: usize> Drop for SegDisplay<P, C, N>
where
    P: OutputPin,
    C: Clock,
{
    fn drop(&mut self) {
        self.blank();
    }
}
