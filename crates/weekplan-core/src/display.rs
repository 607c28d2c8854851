//! Display wrapper types for formatting store output.
//!
//! The stores return these wrappers so every caller renders the same
//! structure: the CLI prints them directly, and tests assert on their
//! output. Empty collections format as a short message instead of nothing.

use std::fmt;

use crate::models::{TaskInstance, Weekday};

/// One weekday's schedule, chronological.
pub struct DaySchedule<'a> {
    pub weekday: Weekday,
    pub tasks: Vec<&'a TaskInstance>,
}

impl DaySchedule<'_> {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl fmt::Display for DaySchedule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.weekday)?;
        if self.tasks.is_empty() {
            writeln!(f, "No tasks scheduled.")
        } else {
            for task in &self.tasks {
                writeln!(f, "- {task}")?;
            }
            Ok(())
        }
    }
}

/// The whole week, Monday-first. Days without tasks are skipped; an empty
/// week formats as a single message.
pub struct WeekOverview<'a>(pub Vec<DaySchedule<'a>>);

impl WeekOverview<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(DaySchedule::is_empty)
    }
}

impl fmt::Display for WeekOverview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No tasks scheduled this week.");
        }
        for day in self.0.iter().filter(|day| !day.is_empty()) {
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the catalog name list.
pub struct CatalogNames(pub Vec<String>);

impl fmt::Display for CatalogNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No task names in the catalog.")
        } else {
            for name in &self.0 {
                writeln!(f, "- {name}")?;
            }
            Ok(())
        }
    }
}

/// Week score summary: completed points against scheduled tasks.
pub struct PointsSummary {
    pub points: u32,
    pub scheduled: usize,
}

impl fmt::Display for PointsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} point(s) earned, {} task(s) scheduled this week.",
            self.points, self.scheduled
        )
    }
}
