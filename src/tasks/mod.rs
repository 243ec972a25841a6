//! Background Tasks Module
//!
//! Contains background tasks that run alongside the command loop.
//!
//! # Tasks
//! - Cache sweep: removes stale responses once per cache interval

mod sweeper;

pub use sweeper::spawn_sweep_task;
