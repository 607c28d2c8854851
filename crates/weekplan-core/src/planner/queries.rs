//! Read-side planner operations: enumeration and scoring.

use std::collections::BTreeSet;

use super::PlannerStore;
use crate::{
    display::{DaySchedule, WeekOverview},
    models::{TaskInstance, TimeOfDay, Weekday},
    Result,
};

impl PlannerStore {
    /// Looks up the instance at a slot given its raw `HH:MM` time.
    pub fn get_task(&self, weekday: Weekday, time: &str) -> Result<Option<&TaskInstance>> {
        let time: TimeOfDay = time.parse()?;
        Ok(self.planner.get(weekday, time))
    }

    /// All instances scheduled on a weekday, in chronological order.
    pub fn tasks_for(&self, weekday: Weekday) -> Vec<&TaskInstance> {
        self.planner.day(weekday).values().collect()
    }

    /// All occupied slot times for a weekday, chronological, as `HH:MM`
    /// strings. Empty when the day has no tasks.
    pub fn collect_sorted_times(&self, weekday: Weekday) -> Vec<String> {
        self.planner
            .day(weekday)
            .keys()
            .map(ToString::to_string)
            .collect()
    }

    /// The union of occupied slot times across the whole week,
    /// chronological and deduplicated. Backs week-grid row enumeration.
    pub fn collect_week_times(&self) -> Vec<String> {
        let times: BTreeSet<TimeOfDay> = Weekday::all()
            .flat_map(|weekday| self.planner.day(weekday).keys().copied())
            .collect();
        times.iter().map(ToString::to_string).collect()
    }

    /// The week score: a flat 1 point per completed instance, independent
    /// of priority. Pure read, no side effects.
    pub fn count_points(&self) -> u32 {
        Weekday::all()
            .map(|weekday| self.count_points_for(weekday))
            .sum()
    }

    /// Points earned on one weekday.
    pub fn count_points_for(&self, weekday: Weekday) -> u32 {
        self.planner.day(weekday).values().map(TaskInstance::points).sum()
    }

    /// Number of instances scheduled on one weekday, done or not.
    pub fn count_scheduled_for(&self, weekday: Weekday) -> usize {
        self.planner.day(weekday).len()
    }

    /// A displayable schedule of one weekday.
    pub fn day_schedule(&self, weekday: Weekday) -> DaySchedule<'_> {
        DaySchedule {
            weekday,
            tasks: self.tasks_for(weekday),
        }
    }

    /// A displayable overview of the whole week, Monday-first.
    pub fn week_overview(&self) -> WeekOverview<'_> {
        WeekOverview(Weekday::all().map(|weekday| self.day_schedule(weekday)).collect())
    }
}
