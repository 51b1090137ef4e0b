//! Bounded registry of refreshable displays

use heapless::Vec;

use crate::config::MAX_DISPLAYS;

/// A display the scheduler can step from interrupt context
///
/// Implementations take care of their own locking; the scheduler only
/// holds shared references.
pub trait Refresh: Sync {
    /// Advance one multiplexing step
    ///
    /// Must be short and non-blocking.
    fn refresh(&self);
}

/// Outcome of [`Scheduler::register`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Registration {
    /// Appended to the refresh order
    Added,
    /// Already present; order unchanged
    AlreadyRegistered,
    /// No room; the display will stay dark
    RegistryFull,
}

/// Fixed-capacity set of displays, stepped in registration order
pub struct Scheduler<'a, const M: usize = MAX_DISPLAYS> {
    entries: Vec<&'a dyn Refresh, M>,
}

impl<'a, const M: usize> Scheduler<'a, M> {
    /// Create an empty scheduler
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a display at the end of the refresh order
    ///
    /// Registering twice, or past capacity, leaves the registry unchanged.
    pub fn register(&mut self, display: &'a dyn Refresh) -> Registration {
        if self.is_registered(display) {
            #[cfg(feature = "defmt")]
            defmt::debug!("display already registered");
            return Registration::AlreadyRegistered;
        }

        match self.entries.push(display) {
            Ok(()) => Registration::Added,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("refresh registry full ({} displays)", M);
                Registration::RegistryFull
            }
        }
    }

    /// Remove a display, keeping the others in their relative order
    ///
    /// Returns `true` if the display was registered.
    pub fn deregister(&mut self, display: &dyn Refresh) -> bool {
        match self.position(display) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Index of `display` in the refresh order
    pub fn position(&self, display: &dyn Refresh) -> Option<usize> {
        self.entries.iter().position(|&entry| same(entry, display))
    }

    /// Check if `display` is registered
    pub fn is_registered(&self, display: &dyn Refresh) -> bool {
        self.position(display).is_some()
    }

    /// Number of registered displays
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if another display would be dropped
    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    /// Maximum number of displays
    pub const fn capacity(&self) -> usize {
        M
    }

    /// Step every registered display once, in registration order
    pub fn tick(&self) {
        for display in self.entries.iter() {
            display.refresh();
        }
    }
}

impl<const M: usize> Default for Scheduler<'_, M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity comparison on the data pointer, ignoring vtables
fn same(a: &dyn Refresh, b: &dyn Refresh) -> bool {
    core::ptr::eq(
        a as *const dyn Refresh as *const (),
        b as *const dyn Refresh as *const (),
    )
}
