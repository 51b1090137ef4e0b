//! Numeric formatting
//!
//! Turns a textual numeral into segment patterns, one per character
//! position. The first `'.'` does not take a position of its own: it is
//! folded into the character to its left as a lit decimal point. A
//! leading `'-'` becomes the minus sign. Any other non-digit renders
//! blank.

use core::fmt::Write;
use core::iter;

use heapless::{String, Vec};

use crate::config::{MAX_NUMERAL_LEN, MAX_SCROLL_LEN, MAX_SCROLL_SYMBOLS, MAX_WIDTH};
use crate::segment::{encode_char, Segments};

/// A rendered numeral, e.g. `"-12.50"`
pub type Numeral = String<MAX_NUMERAL_LEN>;

/// Blank-padded content of a scroll animation
pub type ScrollBuffer = Vec<Segments, MAX_SCROLL_LEN>;

/// Render a float with a fixed number of fraction digits
///
/// Non-finite values and values too long for [`Numeral`] render as an
/// empty numeral, which displays as blanks.
pub fn render_float(value: f32, fraction_digits: u8) -> Numeral {
    let mut out = Numeral::new();
    if !value.is_finite() {
        return out;
    }
    if write!(out, "{:.*}", fraction_digits as usize, value).is_err() {
        out.clear();
    }
    out
}

/// Feed the patterns for `text` to `sink`, left to right
///
/// Stops early when `sink` returns `false`.
fn for_each_pattern(text: &str, mut sink: impl FnMut(Segments) -> bool) {
    let text = text.trim();
    let decimal_at = text
        .chars()
        .position(|c| c == '.')
        .and_then(|p| p.checked_sub(1));

    let mut point_taken = false;
    let mut index = 0;
    for c in text.chars() {
        if c == '.' && !point_taken {
            point_taken = true;
            continue;
        }

        let mut pattern = encode_char(c);
        if Some(index) == decimal_at {
            pattern |= Segments::DECIMAL_POINT;
        }
        if !sink(pattern) {
            return;
        }
        index += 1;
    }
}

/// Encode `text` for an `N`-digit static display
///
/// Characters fill positions from the left; positions past the end of the
/// numeral stay blank and characters past the last position are dropped.
pub fn encode_static<const N: usize>(text: &str) -> [Segments; N] {
    let mut out = [Segments::BLANK; N];
    let mut slots = out.iter_mut();
    for_each_pattern(text, |pattern| match slots.next() {
        Some(slot) => {
            *slot = pattern;
            true
        }
        None => false,
    });
    out
}

/// Encode `text` as a scroll animation for a `width`-digit display
///
/// The content is padded with `width` blanks on both ends so it scrolls
/// fully into view from the right and fully out to the left. At most
/// [`MAX_SCROLL_SYMBOLS`] patterns are kept and `width` is capped at
/// [`MAX_WIDTH`].
pub fn encode_scroll(text: &str, width: usize) -> ScrollBuffer {
    let mut content: Vec<Segments, MAX_SCROLL_SYMBOLS> = Vec::new();
    for_each_pattern(text, |pattern| content.push(pattern).is_ok());
    pad_scroll(&content, width)
}

/// Build a scroll animation from raw symbols
///
/// Symbols past [`MAX_SCROLL_SYMBOLS`] are dropped and `width` is capped
/// at [`MAX_WIDTH`].
pub fn pad_scroll(symbols: &[Segments], width: usize) -> ScrollBuffer {
    let width = width.min(MAX_WIDTH);
    let symbols = &symbols[..symbols.len().min(MAX_SCROLL_SYMBOLS)];
    let blanks = || iter::repeat(Segments::BLANK).take(width);

    let mut buf = ScrollBuffer::new();
    for pattern in blanks().chain(symbols.iter().copied()).chain(blanks()) {
        let pushed = buf.push(pattern);
        debug_assert!(pushed.is_ok(), "scroll buffer sized below content + padding");
    }
    buf
}
