//! Refresh scheduler
//!
//! Holds the displays that are turned on and steps each of them once per
//! refresh tick. The tick handler installed on the periodic interrupt is
//! just [`SharedScheduler::tick`](crate::shared::SharedScheduler).

pub mod registry;

pub use registry::{Refresh, Registration, Scheduler};
