//! `ws-schedule` — deferred events keyed by due tick.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`scheduler`] | `EventScheduler<T, M>`, `ScheduledEvent<T, M>`            |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Firing model
//!
//! ```text
//! schedule_relative(d, target, m)   → due = now + d   (d ≥ 0)
//! fire_due(t, apply)                → now = t; apply every event with due ≤ t,
//!                                     earliest due first, FIFO within a tick
//! ```
//!
//! The scheduler knows nothing about what a mutation means; the caller's
//! `apply` closure interprets `(target, mutation)` pairs.

pub mod error;
pub mod scheduler;


pub use error::{ScheduleError, ScheduleResult};
pub use scheduler::{EventScheduler, ScheduledEvent};
