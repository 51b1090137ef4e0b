//! Periodic refresh interrupt
//!
//! The refresh handler runs in a task on an [`InterruptExecutor`], so it
//! preempts everything on the thread-mode executor. A [`Ticker`] keeps the
//! period without drift.
//!
//! The firmware owns the executor and its software interrupt:
//!
//! ```ignore
//! static EXECUTOR: InterruptExecutor = InterruptExecutor::new();
//!
//! #[interrupt]
//! unsafe fn SWI_IRQ_1() {
//!     EXECUTOR.on_interrupt()
//! }
//!
//! interrupt::SWI_IRQ_1.set_priority(Priority::P2);
//! let spawner = EXECUTOR.start(interrupt::SWI_IRQ_1);
//! let mut timer = RefreshInterrupt::new(spawner);
//! ```
//!
//! [`InterruptExecutor`]: embassy_executor::InterruptExecutor

use embassy_executor::SendSpawner;
use embassy_time::{Duration, Ticker};
use segmux_hal::PeriodicInterrupt;

/// Shortest accepted refresh period
pub const MIN_PERIOD_US: u32 = 100;

/// Error installing the refresh handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefreshError {
    /// A handler is already running
    AlreadyInstalled,
    /// The refresh task could not be spawned
    Spawn,
}

/// Periodic interrupt on an interrupt-mode executor
pub struct RefreshInterrupt {
    spawner: SendSpawner,
    installed: bool,
}

impl RefreshInterrupt {
    /// Create from the spawner of a started interrupt executor
    pub fn new(spawner: SendSpawner) -> Self {
        Self {
            spawner,
            installed: false,
        }
    }
}

impl PeriodicInterrupt for RefreshInterrupt {
    type Error = RefreshError;

    fn install(&mut self, period_us: u32, handler: fn()) -> Result<u32, Self::Error> {
        if self.installed {
            return Err(RefreshError::AlreadyInstalled);
        }

        let period_us = period_us.max(MIN_PERIOD_US);
        self.spawner
            .spawn(refresh_task(handler, period_us))
            .map_err(|_| RefreshError::Spawn)?;
        self.installed = true;

        #[cfg(feature = "defmt")]
        defmt::info!("refresh installed: {} us period", period_us);

        Ok(period_us)
    }

    fn is_installed(&self) -> bool {
        self.installed
    }
}

/// Refresh task - calls `handler` once per period
#[embassy_executor::task]
async fn refresh_task(handler: fn(), period_us: u32) {
    let mut ticker = Ticker::every(Duration::from_micros(period_us as u64));

    loop {
        handler();
        ticker.next().await;
    }
}
