use chrono::{Duration, NaiveDate};

use crate::model::ScheduleTask;

/// Number of padding days added on each side of the task extents.
pub const RANGE_PAD_DAYS: i64 = 7;

/// The visible date window of the chart. Recomputed from scratch whenever the
/// task list changes; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineRange {
    pub start: NaiveDate,
    /// Exclusive right edge of the window (start + total_days).
    pub end: NaiveDate,
    pub total_days: i64,
}

impl TimelineRange {
    /// Day offset of a date from the range start. Negative for dates before
    /// the window.
    pub fn day_offset(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days()
    }
}

/// Resolve the visible window for a set of tasks: 7 days of padding before
/// the earliest start and after the latest end.
///
/// With no tasks, falls back to a 67-day window around `today` so the chart
/// always has a sensible empty-state width. `today` is passed in rather than
/// read from the clock so the resolver stays deterministic.
pub fn resolve_range(tasks: &[ScheduleTask], today: NaiveDate) -> TimelineRange {
    let (earliest, latest) = match (
        tasks.iter().map(|t| t.start).min(),
        tasks.iter().map(|t| t.end).max(),
    ) {
        (Some(min), Some(max)) => (min, max),
        _ => (today, today + Duration::days(53)),
    };

    let start = earliest - Duration::days(RANGE_PAD_DAYS);
    let end = latest + Duration::days(RANGE_PAD_DAYS);
    TimelineRange {
        start,
        end,
        total_days: (end - start).num_days(),
    }
}

/// Day offset of the today marker, or `None` when today is outside the range.
pub fn today_offset(range: &TimelineRange, today: NaiveDate) -> Option<i64> {
    let offset = range.day_offset(today);
    if offset < 0 || offset > range.total_days {
        None
    } else {
        Some(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(start: NaiveDate, end: NaiveDate) -> ScheduleTask {
        ScheduleTask::new("t", start, end)
    }

    #[test]
    fn empty_list_yields_67_day_window_around_today() {
        let today = date(2025, 3, 15);
        let range = resolve_range(&[], today);
        assert_eq!(range.start, date(2025, 3, 8));
        assert_eq!(range.end, date(2025, 5, 14));
        assert_eq!(range.total_days, 67);
    }

    #[test]
    fn single_task_gets_seven_day_pad_each_side() {
        let tasks = vec![task(date(2025, 1, 10), date(2025, 1, 15))];
        let range = resolve_range(&tasks, date(2025, 1, 1));
        assert_eq!(range.start, date(2025, 1, 3));
        assert_eq!(range.end, date(2025, 1, 22));
        assert_eq!(range.total_days, 19);
    }

    #[test]
    fn range_brackets_task_extents() {
        let tasks = vec![
            task(date(2025, 2, 10), date(2025, 2, 20)),
            task(date(2025, 1, 5), date(2025, 1, 8)),
            task(date(2025, 3, 1), date(2025, 4, 2)),
        ];
        let range = resolve_range(&tasks, date(2025, 1, 1));
        let min_start = tasks.iter().map(|t| t.start).min().unwrap();
        let max_end = tasks.iter().map(|t| t.end).max().unwrap();
        assert!(range.start <= min_start);
        assert!(max_end <= range.end);
        assert_eq!(range.start, min_start - Duration::days(7));
        assert_eq!(range.end, max_end + Duration::days(7));
    }

    #[test]
    fn today_offset_inside_and_outside_range() {
        let tasks = vec![task(date(2025, 1, 10), date(2025, 1, 15))];
        let range = resolve_range(&tasks, date(2025, 1, 1));
        assert_eq!(today_offset(&range, date(2025, 1, 10)), Some(7));
        assert_eq!(today_offset(&range, date(2025, 1, 3)), Some(0));
        assert_eq!(today_offset(&range, date(2024, 12, 1)), None);
        assert_eq!(today_offset(&range, date(2025, 6, 1)), None);
    }

    #[test]
    fn resolver_is_deterministic() {
        let tasks = vec![
            task(date(2025, 2, 10), date(2025, 2, 20)),
            task(date(2025, 1, 5), date(2025, 1, 8)),
        ];
        let a = resolve_range(&tasks, date(2025, 1, 1));
        let b = resolve_range(&tasks, date(2025, 1, 1));
        assert_eq!(a, b);
    }
}
