use std::collections::HashMap;

use chrono::NaiveDate;
use egui::{Color32, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};
use uuid::Uuid;

use crate::layout::{
    self, DependencyArrow, TaskBar, TaskShape, TimelineRange, DEFAULT_TICK_INTERVAL,
};
use crate::model::{Contractor, ScheduleTask, WorkPackage};
use crate::ui::theme;

const ROW_HEIGHT: f32 = theme::ROW_HEIGHT;
const ROW_PADDING: f32 = theme::ROW_GAP;
const HEADER_HEIGHT: f32 = theme::HEADER_HEIGHT;
const ROW_PITCH: f32 = ROW_HEIGHT + ROW_PADDING;

/// Result details from interactions in the Gantt chart.
#[derive(Debug, Clone, Default)]
pub struct ChartInteraction {
    pub selected: Option<Uuid>,
    pub cleared_selection: bool,
}

/// Render the Gantt chart area (right panel).
///
/// All geometry comes from the layout engine; this function only paints and
/// handles clicks. Lookup maps are passed in explicitly so the chart renders
/// the same with or without them.
pub fn show_gantt_chart(
    tasks: &[ScheduleTask],
    wp_map: &HashMap<Uuid, &WorkPackage>,
    contractor_map: &HashMap<Uuid, &Contractor>,
    day_width: &mut f32,
    selected_task: Option<Uuid>,
    ui: &mut Ui,
) -> ChartInteraction {
    let mut interaction = ChartInteraction::default();

    let today = chrono::Local::now().date_naive();
    let range = layout::resolve_range(tasks, today);
    let bars = layout::layout_bars(tasks, &range, *day_width);
    let arrows = layout::route_arrows(tasks, &bars, ROW_PITCH);

    let available = ui.available_size();
    let chart_width = (range.total_days as f32 * *day_width).max(available.x);
    let chart_height = HEADER_HEIGHT + (tasks.len() as f32 * ROW_PITCH) + 40.0;

    // Ctrl+scroll zooms by changing the day→pixel scale
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta);
    if ui.rect_contains_pointer(ui.max_rect()) && ui.input(|i| i.modifiers.ctrl) {
        if scroll_delta.y > 0.0 {
            *day_width = (*day_width * 1.2).min(theme::MAX_DAY_WIDTH);
        } else if scroll_delta.y < 0.0 {
            *day_width = (*day_width / 1.2).max(theme::MIN_DAY_WIDTH);
        }
    }

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(
                Vec2::new(chart_width, chart_height.max(available.y)),
                Sense::click(),
            );
            let origin = response.rect.min;
            let mut consumed_click = false;

            painter.rect_filled(response.rect, 0.0, theme::BG_DARK);

            draw_header(&painter, origin, &range, *day_width, chart_width, chart_height);
            draw_today_line(&painter, origin, &range, *day_width, chart_height, today);

            // Alternating row backgrounds
            for i in 0..tasks.len() {
                let y = origin.y + HEADER_HEIGHT + i as f32 * ROW_PITCH;
                let row_bg = if i % 2 == 0 {
                    theme::BG_PANEL
                } else {
                    theme::BG_DARK
                };
                painter.rect_filled(
                    Rect::from_min_size(
                        Pos2::new(origin.x, y),
                        Vec2::new(chart_width, ROW_PITCH),
                    ),
                    0.0,
                    row_bg,
                );
                painter.line_segment(
                    [
                        Pos2::new(origin.x, y + ROW_PITCH),
                        Pos2::new(origin.x + chart_width, y + ROW_PITCH),
                    ],
                    Stroke::new(0.5, theme::BORDER_SUBTLE),
                );
            }

            // Connectors go under the bars
            for arrow in &arrows {
                draw_arrow(&painter, origin, arrow);
            }

            // Task bars and milestone diamonds
            for (i, task) in tasks.iter().enumerate() {
                let y = origin.y + HEADER_HEIGHT + i as f32 * ROW_PITCH + ROW_PADDING;
                let is_selected = selected_task == Some(task.id);

                let hit_rect = match layout::layout_task(task, &range, *day_width) {
                    TaskShape::Marker { center_px, .. } => {
                        draw_milestone(&painter, origin, center_px, task, y, is_selected)
                    }
                    TaskShape::Bar(bar) => {
                        draw_task_bar(&painter, origin, &bar, task, y, is_selected)
                    }
                };

                let task_response = ui.interact(
                    hit_rect.expand(4.0),
                    ui.make_persistent_id(("gantt-task", task.id)),
                    Sense::click(),
                );

                if task_response.clicked() {
                    interaction.selected = Some(task.id);
                    consumed_click = true;
                }

                if task_response.hovered() {
                    egui::show_tooltip_at_pointer(
                        ui.ctx(),
                        ui.layer_id(),
                        egui::Id::new(("gantt-tip", task.id)),
                        |ui| task_tooltip(ui, task, wp_map, contractor_map),
                    );
                }
            }

            // Empty click on background clears selection
            if response.clicked() && !consumed_click {
                interaction.cleared_selection = true;
            }
        });

    interaction
}

fn draw_header(
    painter: &egui::Painter,
    origin: Pos2,
    range: &TimelineRange,
    day_width: f32,
    width: f32,
    height: f32,
) {
    painter.rect_filled(
        Rect::from_min_size(origin, Vec2::new(width, HEADER_HEIGHT)),
        0.0,
        theme::BG_HEADER,
    );
    painter.line_segment(
        [
            Pos2::new(origin.x, origin.y + HEADER_HEIGHT),
            Pos2::new(origin.x + width, origin.y + HEADER_HEIGHT),
        ],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );

    // Month row: one span per (possibly partial) month, label hidden when the
    // cell is too narrow to fit it
    for span in layout::month_spans(range) {
        let x = origin.x + span.start_day as f32 * day_width;
        let span_width = span.days as f32 * day_width;

        painter.line_segment(
            [
                Pos2::new(x, origin.y),
                Pos2::new(x, origin.y + height),
            ],
            Stroke::new(0.5, theme::GRID_LINE),
        );

        if span_width > 44.0 {
            painter.text(
                Pos2::new(x + span_width / 2.0, origin.y + 12.0),
                egui::Align2::CENTER_CENTER,
                &span.label,
                theme::font_header(),
                theme::TEXT_PRIMARY,
            );
        }
    }

    // Day-of-month ticks below the month row
    for tick in layout::day_ticks(range, DEFAULT_TICK_INTERVAL) {
        let x = origin.x + tick.day as f32 * day_width;
        painter.line_segment(
            [
                Pos2::new(x, origin.y + HEADER_HEIGHT - 12.0),
                Pos2::new(x, origin.y + HEADER_HEIGHT - 6.0),
            ],
            Stroke::new(1.0, theme::TEXT_DIM),
        );
        painter.text(
            Pos2::new(x + 3.0, origin.y + HEADER_HEIGHT - 9.0),
            egui::Align2::LEFT_CENTER,
            &tick.label,
            theme::font_small(),
            theme::TEXT_SECONDARY,
        );
    }
}

fn draw_today_line(
    painter: &egui::Painter,
    origin: Pos2,
    range: &TimelineRange,
    day_width: f32,
    height: f32,
    today: NaiveDate,
) {
    let Some(offset) = layout::today_offset(range, today) else {
        return;
    };
    let x = origin.x + offset as f32 * day_width;

    painter.line_segment(
        [
            Pos2::new(x, origin.y + HEADER_HEIGHT),
            Pos2::new(x, origin.y + height),
        ],
        Stroke::new(1.5, theme::TODAY_LINE),
    );

    let badge_w = 42.0;
    let badge_rect = Rect::from_min_size(
        Pos2::new(x - badge_w / 2.0, origin.y + HEADER_HEIGHT - 1.0),
        Vec2::new(badge_w, 14.0),
    );
    painter.rect_filled(badge_rect, Rounding::same(3.0), theme::TODAY_LINE);
    painter.text(
        badge_rect.center(),
        egui::Align2::CENTER_CENTER,
        "Today",
        theme::font_small(),
        Color32::WHITE,
    );
}

/// Smooth connector through the horizontal midpoint, with an arrowhead at the
/// dependent's end.
fn draw_arrow(painter: &egui::Painter, origin: Pos2, arrow: &DependencyArrow) {
    let body_top = origin.y + HEADER_HEIGHT;
    let p1 = Pos2::new(origin.x + arrow.x1, body_top + arrow.y1);
    let p2 = Pos2::new(origin.x + arrow.x2, body_top + arrow.y2);
    let mid_x = (p1.x + p2.x) / 2.0;

    let curve = egui::epaint::CubicBezierShape::from_points_stroke(
        [
            p1,
            Pos2::new(mid_x, p1.y),
            Pos2::new(mid_x, p2.y),
            p2,
        ],
        false,
        Color32::TRANSPARENT,
        Stroke::new(1.5, theme::ARROW_COLOR),
    );
    painter.add(curve);

    let head = vec![
        p2,
        Pos2::new(p2.x - 7.0, p2.y - 3.5),
        Pos2::new(p2.x - 7.0, p2.y + 3.5),
    ];
    painter.add(egui::Shape::convex_polygon(
        head,
        theme::ARROW_COLOR,
        Stroke::NONE,
    ));
}

fn draw_task_bar(
    painter: &egui::Painter,
    origin: Pos2,
    bar: &TaskBar,
    task: &ScheduleTask,
    y: f32,
    is_selected: bool,
) -> Rect {
    let inset = theme::BAR_INSET;
    let bar_rect = Rect::from_min_size(
        Pos2::new(origin.x + bar.left_px, y + inset),
        Vec2::new(bar.width_px, ROW_HEIGHT - inset * 2.0),
    );
    let rounding = Rounding::same(theme::BAR_ROUNDING);
    let fill = theme::status_color(task.status);

    // Soft shadow
    let shadow_rect = bar_rect.translate(Vec2::new(1.0, 2.0));
    painter.rect_filled(shadow_rect, rounding, Color32::from_black_alpha(35));

    painter.rect_filled(bar_rect, rounding, fill);
    painter.rect_stroke(
        bar_rect,
        rounding,
        Stroke::new(1.0, theme::status_border_color(task.status)),
    );

    if is_selected {
        painter.rect_stroke(
            bar_rect.expand(1.5),
            Rounding::same(theme::BAR_ROUNDING + 1.5),
            Stroke::new(2.0, theme::BORDER_ACCENT),
        );
    }

    // Task name on bar (single line, clipped to bar bounds)
    if bar.width_px > 30.0 {
        let galley = painter.layout_no_wrap(task.name.clone(), theme::font_bar(), theme::TEXT_ON_BAR);
        let clipped = painter.with_clip_rect(bar_rect);
        let text_y = y + inset + (bar_rect.height() - galley.size().y) / 2.0;
        clipped.galley(
            Pos2::new(bar_rect.left() + 6.0, text_y),
            galley,
            Color32::TRANSPARENT,
        );
    }

    bar_rect
}

fn draw_milestone(
    painter: &egui::Painter,
    origin: Pos2,
    center_px: f32,
    task: &ScheduleTask,
    y: f32,
    is_selected: bool,
) -> Rect {
    let center = Pos2::new(origin.x + center_px, y + ROW_HEIGHT / 2.0 - ROW_PADDING / 2.0);
    let size = theme::MILESTONE_SIZE;
    let fill = theme::status_color(task.status);

    let points = vec![
        Pos2::new(center.x, center.y - size),
        Pos2::new(center.x + size, center.y),
        Pos2::new(center.x, center.y + size),
        Pos2::new(center.x - size, center.y),
    ];
    painter.add(egui::Shape::convex_polygon(
        points.clone(),
        fill,
        Stroke::new(1.0, theme::MILESTONE_ACCENT),
    ));

    if is_selected {
        painter.add(egui::Shape::convex_polygon(
            points,
            Color32::TRANSPARENT,
            Stroke::new(2.0, theme::BORDER_ACCENT),
        ));
    }

    painter.text(
        Pos2::new(center.x + size + 6.0, center.y),
        egui::Align2::LEFT_CENTER,
        &task.name,
        theme::font_bar(),
        theme::TEXT_SECONDARY,
    );

    Rect::from_center_size(center, Vec2::splat(size * 2.0 + 2.0))
}

fn task_tooltip(
    ui: &mut Ui,
    task: &ScheduleTask,
    wp_map: &HashMap<Uuid, &WorkPackage>,
    contractor_map: &HashMap<Uuid, &Contractor>,
) {
    ui.strong(&task.name);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Status:").color(theme::TEXT_DIM).size(11.0));
        ui.label(
            egui::RichText::new(task.status.label())
                .color(theme::status_color(task.status))
                .size(11.0),
        );
    });
    ui.label(format!(
        "{} — {}",
        task.start.format("%Y-%m-%d"),
        task.end.format("%Y-%m-%d"),
    ));
    // Lookup misses degrade to no label
    if let Some(wp) = task.work_package.and_then(|id| wp_map.get(&id)) {
        ui.label(format!("{} — {}", wp.badge(), wp.name));
    }
    if let Some(contractor) = task.contractor.and_then(|id| contractor_map.get(&id)) {
        ui.label(contractor.display_name());
    }
    if task.is_milestone {
        ui.label(
            egui::RichText::new("◆ Milestone")
                .color(theme::MILESTONE_ACCENT)
                .size(11.0),
        );
    }
    if !task.notes.is_empty() {
        ui.label(
            egui::RichText::new(&task.notes)
                .italics()
                .color(theme::TEXT_SECONDARY)
                .size(11.0),
        );
    }
}
