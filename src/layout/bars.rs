use uuid::Uuid;

use super::range::TimelineRange;
use crate::model::ScheduleTask;

/// Horizontal geometry for one ranged (non-milestone) task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskBar {
    pub task_id: Uuid,
    pub left_px: f32,
    pub width_px: f32,
}

impl TaskBar {
    pub fn right_px(&self) -> f32 {
        self.left_px + self.width_px
    }
}

/// How a task occupies its row: a ranged bar, or a fixed-size milestone
/// marker centered on the start date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskShape {
    Bar(TaskBar),
    Marker { task_id: Uuid, center_px: f32 },
}

/// Map a task's date pair onto pixel offset and width.
///
/// Width never drops below one day so zero-duration and inverted date ranges
/// stay visible and clickable. Inverted ranges (`end < start`) clamp to zero
/// duration rather than producing negative widths.
pub fn layout_bar(task: &ScheduleTask, range: &TimelineRange, day_width_px: f32) -> TaskBar {
    let start_offset = range.day_offset(task.start);
    let duration = range.day_offset(task.end) - start_offset;
    let duration = duration.max(0);

    TaskBar {
        task_id: task.id,
        left_px: start_offset as f32 * day_width_px,
        width_px: (duration as f32 * day_width_px).max(day_width_px),
    }
}

/// Discriminate milestone markers from ranged bars.
pub fn layout_task(task: &ScheduleTask, range: &TimelineRange, day_width_px: f32) -> TaskShape {
    if task.is_milestone {
        TaskShape::Marker {
            task_id: task.id,
            center_px: range.day_offset(task.start) as f32 * day_width_px,
        }
    } else {
        TaskShape::Bar(layout_bar(task, range, day_width_px))
    }
}

/// Bar geometry for the whole rendered slice, one entry per task in order.
/// Milestones get a bar too (their row anchor for dependency routing); the
/// marker/bar split happens at draw time via [`layout_task`].
pub fn layout_bars(tasks: &[ScheduleTask], range: &TimelineRange, day_width_px: f32) -> Vec<TaskBar> {
    tasks
        .iter()
        .map(|t| layout_bar(t, range, day_width_px))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::range::resolve_range;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range_for(tasks: &[ScheduleTask]) -> TimelineRange {
        resolve_range(tasks, date(2025, 1, 1))
    }

    #[test]
    fn bar_offset_and_width_follow_day_scale() {
        let tasks = vec![ScheduleTask::new("tile", date(2025, 2, 10), date(2025, 2, 20))];
        let range = range_for(&tasks);
        let bar = layout_bar(&tasks[0], &range, 3.0);
        assert_eq!(bar.left_px, 21.0); // 7 pad days * 3px
        assert_eq!(bar.width_px, 30.0); // 10 days * 3px
    }

    #[test]
    fn zero_duration_task_keeps_one_day_width() {
        let task = ScheduleTask::new("inspect", date(2025, 2, 1), date(2025, 2, 1));
        let range = range_for(std::slice::from_ref(&task));
        let bar = layout_bar(&task, &range, 3.0);
        assert_eq!(bar.width_px, 3.0);
    }

    #[test]
    fn inverted_dates_clamp_to_minimum_width() {
        let task = ScheduleTask::new("bad", date(2025, 2, 10), date(2025, 2, 1));
        let range = TimelineRange {
            start: date(2025, 1, 1),
            end: date(2025, 3, 1),
            total_days: 59,
        };
        let bar = layout_bar(&task, &range, 4.0);
        assert_eq!(bar.width_px, 4.0);
        assert!(bar.width_px >= 4.0);
    }

    #[test]
    fn milestone_becomes_marker_at_start_position() {
        let mut tasks = vec![ScheduleTask::new("prep", date(2025, 3, 1), date(2025, 3, 10))];
        tasks.push(ScheduleTask::new_milestone("permit", date(2025, 3, 5)));
        let range = range_for(&tasks);

        match layout_task(&tasks[1], &range, 3.0) {
            TaskShape::Marker { center_px, .. } => {
                assert_eq!(center_px, range.day_offset(date(2025, 3, 5)) as f32 * 3.0);
            }
            TaskShape::Bar(_) => panic!("milestone should lay out as a marker"),
        }
        assert!(matches!(layout_task(&tasks[0], &range, 3.0), TaskShape::Bar(_)));
    }

    #[test]
    fn layout_is_idempotent() {
        let tasks = vec![
            ScheduleTask::new("a", date(2025, 1, 10), date(2025, 1, 15)),
            ScheduleTask::new("b", date(2025, 1, 12), date(2025, 1, 12)),
        ];
        let range = range_for(&tasks);
        let first = layout_bars(&tasks, &range, 3.0);
        let second = layout_bars(&tasks, &range, 3.0);
        assert_eq!(first, second);
    }
}
