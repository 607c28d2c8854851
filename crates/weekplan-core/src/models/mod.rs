//! Data models for the week planner.
//!
//! This module contains the core domain models: the fixed [`Weekday`]
//! enumeration, the validated [`TimeOfDay`] slot key, and the scheduled
//! [`TaskInstance`] with its bounded [`Priority`]. Each model implements
//! `Display` for direct formatting; contextual formatting (day schedules,
//! week overviews) lives in [`crate::display`].

mod task;
mod time;
mod weekday;


pub use task::{Priority, TaskInstance};
pub(crate) use task::StoredTask;
pub use time::TimeOfDay;
pub use weekday::Weekday;
