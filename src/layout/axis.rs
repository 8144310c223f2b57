use chrono::{Datelike, Duration, NaiveDate};

use super::range::TimelineRange;

/// Day ticks are emitted at this interval unless the caller overrides it.
/// Fixed regardless of range length; long schedules get a dense axis.
pub const DEFAULT_TICK_INTERVAL: i64 = 7;

/// One month's header cell, clipped to the visible range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSpan {
    /// e.g. "Jan 2025".
    pub label: String,
    /// Day offset of the span's first day from the range start.
    pub start_day: i64,
    /// Number of days covered, clamped so the span never extends past
    /// `total_days`.
    pub days: i64,
}

/// A periodic tick mark below the month row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTick {
    pub day: i64,
    /// Day-of-month at this offset.
    pub label: String,
}

fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let (y, m) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1).unwrap_or(date + Duration::days(30))
}

/// Walk month by month across the range. The first and last spans may be
/// partial months.
pub fn month_spans(range: &TimelineRange) -> Vec<MonthSpan> {
    let mut spans = Vec::new();
    let mut cursor = range.start;

    while cursor <= range.end {
        let next_month = first_of_next_month(cursor);
        let month_end = next_month - Duration::days(1);

        let span_start = cursor.max(range.start);
        let span_end = month_end.min(range.end);

        let start_day = range.day_offset(span_start);
        let days = ((span_end - span_start).num_days() + 1).min(range.total_days - start_day);
        if days > 0 {
            spans.push(MonthSpan {
                label: span_start.format("%b %Y").to_string(),
                start_day,
                days,
            });
        }

        cursor = next_month;
    }

    spans
}

/// One tick at every multiple of `interval_days` in `0..=total_days`. The
/// final offset gets a tick only when evenly divisible.
pub fn day_ticks(range: &TimelineRange, interval_days: i64) -> Vec<DayTick> {
    let interval = interval_days.max(1);
    let mut ticks = Vec::new();
    let mut day = 0;
    while day <= range.total_days {
        let date = range.start + Duration::days(day);
        ticks.push(DayTick {
            day,
            label: date.day().to_string(),
        });
        day += interval;
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(start: NaiveDate, end: NaiveDate) -> TimelineRange {
        TimelineRange {
            start,
            end,
            total_days: (end - start).num_days(),
        }
    }

    #[test]
    fn spans_clip_to_range_and_sum_to_total_days() {
        let r = range(date(2025, 1, 15), date(2025, 3, 10));
        let spans = month_spans(&r);

        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].label, "Jan 2025");
        assert_eq!(spans[0].start_day, 0);
        assert_eq!(spans[0].days, 17); // Jan 15–31, partial
        assert_eq!(spans[1].label, "Feb 2025");
        assert_eq!(spans[1].days, 28); // full month
        assert_eq!(spans[2].label, "Mar 2025");
        assert_eq!(spans[2].days, 9); // clamped at the range edge

        let sum: i64 = spans.iter().map(|s| s.days).sum();
        assert_eq!(sum, r.total_days);
    }

    #[test]
    fn single_month_range_is_one_partial_span() {
        let r = range(date(2025, 6, 5), date(2025, 6, 20));
        let spans = month_spans(&r);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start_day, 0);
        assert_eq!(spans[0].days, r.total_days);
    }

    #[test]
    fn december_rolls_over_into_january() {
        let r = range(date(2024, 12, 20), date(2025, 1, 10));
        let spans = month_spans(&r);
        assert_eq!(spans[0].label, "Dec 2024");
        assert_eq!(spans[1].label, "Jan 2025");
        let sum: i64 = spans.iter().map(|s| s.days).sum();
        assert_eq!(sum, r.total_days);
    }

    #[test]
    fn ticks_are_periodic_and_duplicate_free() {
        let r = range(date(2025, 1, 1), date(2025, 1, 22)); // 21 days
        let ticks = day_ticks(&r, 7);
        let offsets: Vec<i64> = ticks.iter().map(|t| t.day).collect();
        assert_eq!(offsets, vec![0, 7, 14, 21]); // 21 divides evenly, tick at the edge
        assert_eq!(ticks[1].label, "8"); // Jan 8
    }

    #[test]
    fn no_tick_past_total_days() {
        let r = range(date(2025, 1, 1), date(2025, 1, 20)); // 19 days
        let ticks = day_ticks(&r, 7);
        let offsets: Vec<i64> = ticks.iter().map(|t| t.day).collect();
        assert_eq!(offsets, vec![0, 7, 14]);
    }

    #[test]
    fn interval_is_clamped_to_at_least_one_day() {
        let r = range(date(2025, 1, 1), date(2025, 1, 4));
        let ticks = day_ticks(&r, 0);
        assert_eq!(ticks.len(), 4);
    }
}
