//! GPIO outputs for segment and digit lines

use embassy_rp::gpio::{self, AnyPin, Output};
use embassy_rp::Peri;
use segmux_hal::{Level, OutputPin};

/// A display line driven by an RP2040 GPIO
pub struct DisplayPin<'d> {
    output: Output<'d>,
}

impl<'d> DisplayPin<'d> {
    /// Configure `pin` as a push-pull output at `initial`
    pub fn new(pin: Peri<'d, impl gpio::Pin>, initial: Level) -> Self {
        Self {
            output: Output::new(pin, to_embassy(initial)),
        }
    }

    /// Configure a group of lines at the same level
    ///
    /// Typical use is the eight segment lines or the digit lines of one
    /// display, converted with `.into()` from the individual `PIN_n`s.
    pub fn array<const K: usize>(pins: [Peri<'d, AnyPin>; K], initial: Level) -> [Self; K] {
        pins.map(|pin| Self::new(pin, initial))
    }
}

impl OutputPin for DisplayPin<'_> {
    fn set_high(&mut self) {
        self.output.set_high();
    }

    fn set_low(&mut self) {
        self.output.set_low();
    }

    fn set_level(&mut self, level: Level) {
        self.output.set_level(to_embassy(level));
    }

    fn is_set_high(&self) -> bool {
        self.output.is_set_high()
    }
}

fn to_embassy(level: Level) -> gpio::Level {
    match level {
        Level::Low => gpio::Level::Low,
        Level::High => gpio::Level::High,
    }
}
