//! Scroll window state
//!
//! A scroll owns its padded buffer and slides a display-width window
//! across it, one position per elapsed hold period.

use crate::config::{Repeats, ScrollConfig};
use crate::format::ScrollBuffer;
use crate::segment::Segments;

/// Running scroll animation
#[derive(Debug, Clone)]
pub(crate) struct Scroll {
    /// Padded animation content
    buffer: ScrollBuffer,
    /// Index of the leftmost visible pattern
    cursor: usize,
    /// Passes left after the current one
    remaining: Repeats,
    /// Minimum time between shifts (ms)
    hold_ms: u32,
    /// Time of the last shift, or of the start (ms)
    shifted_at: u32,
}

impl Scroll {
    /// Start a scroll at the left end of `buffer`
    pub(crate) fn new(buffer: ScrollBuffer, config: ScrollConfig, now_ms: u32) -> Self {
        Self {
            buffer,
            cursor: 0,
            remaining: config.repeats,
            hold_ms: config.hold_ms,
            shifted_at: now_ms,
        }
    }

    /// Pattern shown at digit `position` of the current window
    pub(crate) fn window(&self, position: usize) -> Segments {
        self.buffer
            .get(self.cursor + position)
            .copied()
            .unwrap_or(Segments::BLANK)
    }

    /// Leftmost visible index
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    /// Passes left after the current one
    #[cfg(test)]
    pub(crate) fn remaining(&self) -> Repeats {
        self.remaining
    }

    /// Account for one completed frame on a `width`-digit display
    ///
    /// Shifts the window when the hold time has passed. Returns `false`
    /// once the last pass has scrolled out.
    pub(crate) fn on_frame(&mut self, width: usize, now_ms: u32) -> bool {
        if now_ms.wrapping_sub(self.shifted_at) < self.hold_ms {
            return true;
        }
        self.shifted_at = now_ms;

        if self.cursor + width < self.buffer.len() {
            self.cursor += 1;
            return true;
        }

        self.cursor = 0;
        match self.remaining {
            Repeats::Finite(0) => false,
            Repeats::Finite(n) => {
                self.remaining = Repeats::Finite(n - 1);
                true
            }
            Repeats::Indefinite => true,
        }
    }
}
