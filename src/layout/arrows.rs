use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use super::bars::TaskBar;
use crate::model::ScheduleTask;

/// Endpoints for one dependency connector, from the prerequisite's bar right
/// edge to the dependent's bar left edge, each at its row's vertical center.
/// The curve between them is a rendering concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DependencyArrow {
    pub from_task: Uuid,
    pub to_task: Uuid,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// Route one arrow per valid dependency edge.
///
/// `bars` must be positionally aligned with `tasks` (as produced by
/// [`super::bars::layout_bars`]); row index is the task's index in the
/// rendered slice. Edges pointing at tasks outside the slice, at the task
/// itself, or listed twice are dropped without error.
pub fn route_arrows(
    tasks: &[ScheduleTask],
    bars: &[TaskBar],
    row_height_px: f32,
) -> Vec<DependencyArrow> {
    let row_of: HashMap<Uuid, usize> = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| (t.id, i))
        .collect();

    let mut seen: HashSet<(Uuid, Uuid)> = HashSet::new();
    let mut arrows = Vec::new();

    for (to_row, task) in tasks.iter().enumerate() {
        for &dep_id in &task.depends_on {
            if dep_id == task.id {
                continue;
            }
            // Dangling reference: prerequisite not in the current slice.
            let Some(&from_row) = row_of.get(&dep_id) else {
                continue;
            };
            if !seen.insert((dep_id, task.id)) {
                continue;
            }

            let from_bar = &bars[from_row];
            let to_bar = &bars[to_row];
            arrows.push(DependencyArrow {
                from_task: dep_id,
                to_task: task.id,
                x1: from_bar.right_px(),
                y1: (from_row as f32 + 0.5) * row_height_px,
                x2: to_bar.left_px,
                y2: (to_row as f32 + 0.5) * row_height_px,
            });
        }
    }

    arrows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::bars::layout_bars;
    use crate::layout::range::resolve_range;
    use chrono::NaiveDate;

    const DAY_WIDTH: f32 = 3.0;
    const ROW_HEIGHT: f32 = 40.0;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn arrows_for(tasks: &[ScheduleTask]) -> Vec<DependencyArrow> {
        let range = resolve_range(tasks, date(2025, 1, 1));
        let bars = layout_bars(tasks, &range, DAY_WIDTH);
        route_arrows(tasks, &bars, ROW_HEIGHT)
    }

    #[test]
    fn one_edge_yields_one_arrow_between_the_right_rows() {
        let a = ScheduleTask::new("rough-in", date(2025, 1, 10), date(2025, 1, 15));
        let mut b = ScheduleTask::new("drywall", date(2025, 1, 16), date(2025, 1, 22));
        b.depends_on.push(a.id);
        let tasks = vec![a, b];

        let arrows = arrows_for(&tasks);
        assert_eq!(arrows.len(), 1);
        let arrow = &arrows[0];
        assert_eq!(arrow.from_task, tasks[0].id);
        assert_eq!(arrow.to_task, tasks[1].id);
        assert_eq!(arrow.y1, 0.5 * ROW_HEIGHT);
        assert_eq!(arrow.y2, 1.5 * ROW_HEIGHT);
        // Right edge of A to left edge of B.
        assert_eq!(arrow.x1, 7.0 * DAY_WIDTH + 5.0 * DAY_WIDTH);
        assert_eq!(arrow.x2, 13.0 * DAY_WIDTH);
    }

    #[test]
    fn dangling_reference_is_dropped_without_panic() {
        let mut c = ScheduleTask::new("paint", date(2025, 2, 1), date(2025, 2, 5));
        c.depends_on.push(Uuid::new_v4());
        let tasks = vec![c];

        assert!(arrows_for(&tasks).is_empty());
    }

    #[test]
    fn self_reference_is_dropped() {
        let mut t = ScheduleTask::new("loop", date(2025, 2, 1), date(2025, 2, 5));
        t.depends_on.push(t.id);
        assert!(arrows_for(&[t]).is_empty());
    }

    #[test]
    fn duplicate_edges_collapse_to_one_arrow() {
        let a = ScheduleTask::new("order", date(2025, 1, 2), date(2025, 1, 4));
        let mut b = ScheduleTask::new("install", date(2025, 1, 5), date(2025, 1, 9));
        b.depends_on.push(a.id);
        b.depends_on.push(a.id);
        let tasks = vec![a, b];

        assert_eq!(arrows_for(&tasks).len(), 1);
    }

    #[test]
    fn multiple_prerequisites_fan_in() {
        let a = ScheduleTask::new("electrical", date(2025, 1, 2), date(2025, 1, 6));
        let b = ScheduleTask::new("plumbing", date(2025, 1, 2), date(2025, 1, 8));
        let mut c = ScheduleTask::new("close walls", date(2025, 1, 9), date(2025, 1, 12));
        c.depends_on = vec![a.id, b.id];
        let tasks = vec![a, b, c];

        let arrows = arrows_for(&tasks);
        assert_eq!(arrows.len(), 2);
        assert!(arrows.iter().all(|ar| ar.to_task == tasks[2].id));
    }

    #[test]
    fn routing_is_idempotent() {
        let a = ScheduleTask::new("a", date(2025, 1, 2), date(2025, 1, 6));
        let mut b = ScheduleTask::new("b", date(2025, 1, 7), date(2025, 1, 9));
        b.depends_on.push(a.id);
        let tasks = vec![a, b];

        assert_eq!(arrows_for(&tasks), arrows_for(&tasks));
    }
}
