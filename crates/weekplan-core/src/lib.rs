//! Core library for the Weekplan week-planning application.
//!
//! This crate provides the scheduling and persistence data layer: a
//! reusable catalog of task names, a planner grid assigning task instances
//! to weekday/time slots, JSON-backed persistence with atomic rewrites,
//! cleaning of orphaned instances, and point scoring. Presentation layers
//! (the CLI, or any future front end) call the store operations and render
//! whatever they return; they own no scheduling logic.
//!
//! # Architecture
//!
//! Two independent stores own all state:
//!
//! - [`CatalogStore`]: the master list of reusable task names, persisted as
//!   a JSON array, listed in locale-style alphabetic order.
//! - [`PlannerStore`]: the weekday → time → instance grid, persisted as a
//!   nested JSON object, with slot-uniqueness and chronological enumeration.
//!
//! The stores are deliberately decoupled: removing a catalog name does not
//! reach into the planner. Callers run the cleaning pass as an explicit
//! second step:
//!
//! ```rust
//! use weekplan_core::{params::CleanScope, StoreBuilder};
//!
//! # fn example() -> weekplan_core::Result<()> {
//! # let dir = tempfile::TempDir::new().unwrap();
//! let mut stores = StoreBuilder::new()
//!     .with_data_dir(Some(dir.path()))
//!     .build()?;
//!
//! stores.catalog.add("Run")?;
//! stores.catalog.remove("Run")?;
//! let _removed = stores
//!     .planner
//!     .clean(stores.catalog.as_set(), CleanScope::Week)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use weekplan_core::{params::AddTask, models::Weekday, StoreBuilder};
//!
//! # fn example() -> weekplan_core::Result<()> {
//! # let dir = tempfile::TempDir::new().unwrap();
//! let mut stores = StoreBuilder::new()
//!     .with_data_dir(Some(dir.path()))
//!     .build()?;
//!
//! stores.catalog.add("Run")?;
//! let task = stores.planner.add_task(&AddTask {
//!     weekday: Weekday::Monday,
//!     time: "08:00".to_string(),
//!     name: "Run".to_string(),
//!     priority: Some(3),
//!     description: None,
//! })?;
//! println!("scheduled: {task}");
//!
//! assert_eq!(stores.planner.collect_sorted_times(Weekday::Monday), ["08:00"]);
//! assert_eq!(stores.planner.count_points(), 0);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod models;
pub mod ordering;
pub mod params;
pub mod planner;
mod storage;

// Re-export commonly used types
pub use catalog::CatalogStore;
pub use display::{CatalogNames, DaySchedule, PointsSummary, WeekOverview};
pub use error::{Result, WeekplanError};
pub use models::{Priority, TaskInstance, TimeOfDay, Weekday};
pub use params::{AddTask, CleanScope, UpdateTaskRequest};
pub use planner::{Planner, PlannerStore, StoreBuilder, Stores};
