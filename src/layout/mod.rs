//! The timeline layout engine behind the Gantt chart.
//!
//! Pure functions from an in-memory task slice (plus a day→pixel scale) to
//! the derived geometry the chart paints: the visible date window, month and
//! day axis marks, bar rectangles, milestone markers, and dependency
//! connector endpoints. No I/O, no caching, no shared state — each render
//! recomputes everything from scratch.

pub mod arrows;
pub mod axis;
pub mod bars;
pub mod range;

pub use arrows::{route_arrows, DependencyArrow};
pub use axis::{day_ticks, month_spans, DayTick, MonthSpan, DEFAULT_TICK_INTERVAL};
pub use bars::{layout_bar, layout_bars, layout_task, TaskBar, TaskShape};
pub use range::{resolve_range, today_offset, TimelineRange, RANGE_PAD_DAYS};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScheduleTask;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Full pipeline, run twice: every derived structure must come out
    // bit-identical. No hidden randomness, no mutable globals.
    #[test]
    fn full_pipeline_is_deterministic() {
        let a = ScheduleTask::new("Demolition", date(2025, 4, 1), date(2025, 4, 8));
        let mut b = ScheduleTask::new("Subfloor repair", date(2025, 4, 9), date(2025, 4, 16));
        b.depends_on.push(a.id);
        let m = ScheduleTask::new_milestone("Floors done", date(2025, 4, 20));
        let tasks = vec![a, b, m];
        let today = date(2025, 4, 3);

        let run = |tasks: &[ScheduleTask]| {
            let range = resolve_range(tasks, today);
            let bars = layout_bars(tasks, &range, 3.0);
            let arrows = route_arrows(tasks, &bars, 40.0);
            (range, month_spans(&range), day_ticks(&range, 7), bars, arrows)
        };

        let first = run(&tasks);
        let second = run(&tasks);
        assert_eq!(first.0, second.0);
        assert_eq!(first.1, second.1);
        assert_eq!(first.2, second.2);
        assert_eq!(first.3, second.3);
        assert_eq!(first.4, second.4);
    }

    #[test]
    fn pipeline_handles_milestones_and_bars_together() {
        let tasks = vec![
            ScheduleTask::new("Cabinets", date(2025, 5, 1), date(2025, 5, 14)),
            ScheduleTask::new_milestone("Countertop template", date(2025, 5, 15)),
        ];
        let range = resolve_range(&tasks, date(2025, 5, 1));

        let shapes: Vec<TaskShape> = tasks
            .iter()
            .map(|t| layout_task(t, &range, 3.0))
            .collect();
        assert!(matches!(shapes[0], TaskShape::Bar(_)));
        assert!(matches!(shapes[1], TaskShape::Marker { .. }));
    }
}
