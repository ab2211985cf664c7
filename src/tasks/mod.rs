//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - TTL Sweep: removes expired cache entries at configured intervals, one
//!   task per cache instance

mod sweep;

pub use sweep::spawn_sweep_task;
