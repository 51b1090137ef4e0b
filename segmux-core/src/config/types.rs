//! Configuration type definitions
//!
//! Wiring polarity, scroll timing and refresh rate. All types are `Copy`
//! with `const` constructors so they can live in `static` items.

use segmux_hal::Level;

/// Maximum number of display instances refreshed by one scheduler
pub const MAX_DISPLAYS: usize = 5;

/// Segment lines per digit (A-G plus decimal point)
pub const SEGMENT_COUNT: usize = 8;

/// Maximum characters in a rendered numeral
pub const MAX_NUMERAL_LEN: usize = 24;

/// Maximum digit positions of one display
pub const MAX_WIDTH: usize = 16;

/// Maximum content symbols in one scroll, padding excluded
pub const MAX_SCROLL_SYMBOLS: usize = u8::MAX as usize;

/// Maximum patterns in a scroll buffer, blank padding included
pub const MAX_SCROLL_LEN: usize = MAX_SCROLL_SYMBOLS + 2 * MAX_WIDTH;

/// Fraction digits used when rendering floats without an explicit count
pub const DEFAULT_FRACTION_DIGITS: u8 = 2;

/// Default hold time between scroll shifts (ms)
pub const DEFAULT_HOLD_MS: u32 = 250;

/// Default refresh tick period (us)
pub const DEFAULT_REFRESH_PERIOD_US: u32 = 2_000;

/// Which logic level lights a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Line is active when driven high
    #[default]
    ActiveHigh,
    /// Line is active when driven low
    ActiveLow,
}

impl Polarity {
    /// Pin level that puts a line in the requested state
    pub fn level(self, active: bool) -> Level {
        match self {
            Polarity::ActiveHigh => Level::from(active),
            Polarity::ActiveLow => !Level::from(active),
        }
    }
}

/// Display wiring
///
/// The default matches a common-cathode module driven directly from GPIO:
/// segment anodes are active-high and each digit's cathode is pulled low
/// to enable it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Polarity of the eight segment lines
    pub segment: Polarity,
    /// Polarity of the digit-enable lines
    pub digit: Polarity,
}

impl DisplayConfig {
    /// Common-cathode module (segments high, digit enable low)
    pub const fn common_cathode() -> Self {
        Self {
            segment: Polarity::ActiveHigh,
            digit: Polarity::ActiveLow,
        }
    }

    /// Common-anode module (segments low, digit enable high)
    pub const fn common_anode() -> Self {
        Self {
            segment: Polarity::ActiveLow,
            digit: Polarity::ActiveHigh,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::common_cathode()
    }
}

/// How many times a scroll animation plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Repeats {
    /// Play once, then `n` extra passes
    Finite(u16),
    /// Loop until cancelled
    Indefinite,
}

impl Repeats {
    /// Play the animation a single time
    pub const ONCE: Repeats = Repeats::Finite(0);
}

impl Default for Repeats {
    fn default() -> Self {
        Self::ONCE
    }
}

/// Scroll (dynamic mode) parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollConfig {
    /// Minimum time a window stays put before shifting (ms)
    pub hold_ms: u32,
    /// Number of passes
    pub repeats: Repeats,
}

impl ScrollConfig {
    /// Create a scroll configuration
    pub const fn new(hold_ms: u32, repeats: Repeats) -> Self {
        Self { hold_ms, repeats }
    }

    /// Same hold time, looping until cancelled
    pub const fn looping(self) -> Self {
        Self {
            repeats: Repeats::Indefinite,
            ..self
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD_MS, Repeats::ONCE)
    }
}

/// Refresh interrupt parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshConfig {
    /// Requested tick period (us)
    pub period_us: u32,
}

impl RefreshConfig {
    /// Frame rate seen by one display with `digits` positions, in mHz
    ///
    /// Each tick lights one position, so a full frame takes `digits`
    /// ticks.
    pub const fn frame_rate_mhz(&self, digits: usize) -> u32 {
        if self.period_us == 0 || digits == 0 {
            return 0;
        }
        (1_000_000_000 / self.period_us) / digits as u32
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            period_us: DEFAULT_REFRESH_PERIOD_US,
        }
    }
}
