//! Segmux demo firmware
//!
//! Drives a 4-digit and a 2-digit common-cathode display from one RP2040.
//! Both share a single refresh interrupt: a task on a high-priority
//! interrupt executor ticks the scheduler, and each tick lights one digit
//! of every display that is turned on.
//!
//! Wiring (segments in `[DP, G, F, E, D, C, B, A]` order):
//!
//! | Display | Segments     | Digits         |
//! |---------|--------------|----------------|
//! | 4-digit | GPIO 0..=7   | GPIO 8..=11    |
//! | 2-digit | GPIO 12..=19 | GPIO 20, 21    |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_time::{Duration, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use segmux_core::config::{RefreshConfig, Repeats, ScrollConfig, DEFAULT_FRACTION_DIGITS};
use segmux_core::segment::encode_char;
use segmux_core::{DisplayConfig, Scheduler, SegDisplay, Segments, Shared, SharedDisplay, SharedScheduler};
use segmux_hal_rp2040::{DisplayPin, Level, PeriodicInterrupt, RefreshInterrupt, SystemClock};

type Display<const N: usize> = SharedDisplay<DisplayPin<'static>, SystemClock, N>;

/// Displays currently refreshed by the interrupt
static SCHEDULER: SharedScheduler<'static> = Shared::new(Scheduler::new());

/// Executor running the refresh task at raised priority
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

// Static cells for the displays (registered references must live forever)
static WIDE: StaticCell<Display<4>> = StaticCell::new();
static NARROW: StaticCell<Display<2>> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Refresh handler: one multiplexing step for every registered display
fn refresh() {
    SCHEDULER.tick();
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Segmux demo starting...");

    let p = embassy_rp::init(Default::default());

    let wide: &'static Display<4> = WIDE.init(Shared::new(SegDisplay::new(
        DisplayPin::array(
            [
                p.PIN_0.into(),
                p.PIN_1.into(),
                p.PIN_2.into(),
                p.PIN_3.into(),
                p.PIN_4.into(),
                p.PIN_5.into(),
                p.PIN_6.into(),
                p.PIN_7.into(),
            ],
            Level::Low,
        ),
        DisplayPin::array(
            [p.PIN_8.into(), p.PIN_9.into(), p.PIN_10.into(), p.PIN_11.into()],
            Level::High,
        ),
        SystemClock::new(),
        DisplayConfig::common_cathode(),
    )));

    let narrow: &'static Display<2> = NARROW.init(Shared::new(SegDisplay::new(
        DisplayPin::array(
            [
                p.PIN_12.into(),
                p.PIN_13.into(),
                p.PIN_14.into(),
                p.PIN_15.into(),
                p.PIN_16.into(),
                p.PIN_17.into(),
                p.PIN_18.into(),
                p.PIN_19.into(),
            ],
            Level::Low,
        ),
        DisplayPin::array([p.PIN_20.into(), p.PIN_21.into()], Level::High),
        SystemClock::new(),
        DisplayConfig::common_cathode(),
    )));

    // Start the refresh interrupt
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high_spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);

    let refresh_config = RefreshConfig::default();
    let mut timer = RefreshInterrupt::new(high_spawner);
    match timer.install(refresh_config.period_us, refresh) {
        Ok(period_us) => info!(
            "Refresh every {} us ({} mHz frame rate on 4 digits)",
            period_us,
            RefreshConfig { period_us }.frame_rate_mhz(4)
        ),
        Err(e) => error!("Failed to install refresh: {:?}", e),
    }

    info!("Turn on: {}", wide.turn_on(&SCHEDULER));
    info!("Turn on: {}", narrow.turn_on(&SCHEDULER));

    unwrap!(spawner.spawn(demo_task(wide, narrow)));

    info!("All tasks spawned");
}

/// Demo task - counter on the wide display, raw-symbol scroll on the narrow one
#[embassy_executor::task]
async fn demo_task(wide: &'static Display<4>, narrow: &'static Display<2>) {
    // Start-up banner: scroll a negative float once over the blank display
    wide.show_number(-273.15, DEFAULT_FRACTION_DIGITS, ScrollConfig::default());

    // Chase pattern on the narrow display until cancelled
    let chase = [
        Segments(0x80),
        Segments(0x40),
        Segments(0x20),
        Segments(0x10),
        Segments(0x08),
        Segments(0x04),
    ];
    narrow.show_symbols(&chase, ScrollConfig::new(120, Repeats::Indefinite));

    while wide.is_dynamic() {
        Timer::after_millis(50).await;
    }
    Timer::after(Duration::from_secs(2)).await;
    narrow.cancel_dynamic();
    narrow.set_symbols(&[encode_char('-'); 2]);

    let mut tenths: u32 = 0;
    loop {
        wide.set_number(tenths as f32 / 10.0, 1);
        Timer::after_millis(100).await;
        tenths = (tenths + 1) % 10_000;

        // Blank the narrow display for one second out of every ten
        match tenths % 100 {
            0 => narrow.turn_off(&SCHEDULER),
            10 => {
                narrow.turn_on(&SCHEDULER);
                debug!("Counter at {} s", tenths / 10);
            }
            _ => {}
        }
    }
}
