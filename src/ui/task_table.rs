use std::collections::HashMap;

use egui::{Color32, RichText, Ui};
use uuid::Uuid;

use crate::model::{Contractor, ScheduleTask, WorkPackage};
use crate::ui::theme;

/// Actions that the task table can request.
pub enum TaskTableAction {
    None,
    Select(Uuid),
    Delete(Uuid),
    Add,
}

/// Render the left-side task table panel.
pub fn show_task_table(
    tasks: &[ScheduleTask],
    wp_map: &HashMap<Uuid, &WorkPackage>,
    contractor_map: &HashMap<Uuid, &Contractor>,
    selected_task: Option<Uuid>,
    ui: &mut Ui,
) -> TaskTableAction {
    let mut action = TaskTableAction::None;

    ui.add_space(2.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Schedule")
                .strong()
                .size(15.0)
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(4.0);
        ui.label(
            RichText::new(format!("({})", tasks.len()))
                .size(11.0)
                .color(theme::TEXT_DIM),
        );
    });
    ui.add_space(4.0);

    let btn = egui::Button::new(
        RichText::new(format!("{}  Add Task", egui_phosphor::regular::PLUS))
            .color(Color32::WHITE)
            .size(12.0),
    )
    .fill(theme::ACCENT)
    .rounding(egui::Rounding::same(5.0));
    if ui.add_sized([ui.available_width(), 30.0], btn).clicked() {
        action = TaskTableAction::Add;
    }

    ui.add_space(6.0);
    ui.separator();
    ui.add_space(2.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (i, task) in tasks.iter().enumerate() {
                let is_selected = selected_task == Some(task.id);

                let row_bg = if is_selected {
                    theme::BG_SELECTED
                } else if i % 2 == 0 {
                    theme::BG_PANEL
                } else {
                    theme::BG_DARK
                };

                let frame = egui::Frame {
                    fill: row_bg,
                    rounding: egui::Rounding::same(4.0),
                    inner_margin: egui::Margin::symmetric(6.0, 4.0),
                    outer_margin: egui::Margin::ZERO,
                    stroke: egui::Stroke::NONE,
                    shadow: egui::epaint::Shadow::NONE,
                };

                let frame_resp = frame.show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 6.0;

                        // Status dot
                        let (dot_rect, _) =
                            ui.allocate_exact_size(egui::vec2(6.0, 6.0), egui::Sense::hover());
                        ui.painter().circle_filled(
                            dot_rect.center(),
                            3.0,
                            theme::status_color(task.status),
                        );

                        ui.vertical(|ui| {
                            ui.spacing_mut().item_spacing.y = 1.0;

                            let name = if task.is_milestone {
                                format!("◆ {}", task.name)
                            } else {
                                task.name.clone()
                            };
                            let name_text =
                                RichText::new(name).size(12.0).color(if is_selected {
                                    Color32::WHITE
                                } else {
                                    theme::TEXT_PRIMARY
                                });
                            ui.add(egui::Label::new(name_text).truncate());

                            // Decoration row: WP badge + contractor, shown only
                            // when the lookup resolves
                            ui.horizontal(|ui| {
                                ui.spacing_mut().item_spacing.x = 4.0;
                                if let Some(wp) =
                                    task.work_package.and_then(|id| wp_map.get(&id))
                                {
                                    ui.label(
                                        RichText::new(wp.badge())
                                            .size(9.0)
                                            .color(theme::ACCENT),
                                    );
                                }
                                if let Some(contractor) =
                                    task.contractor.and_then(|id| contractor_map.get(&id))
                                {
                                    ui.add(
                                        egui::Label::new(
                                            RichText::new(&contractor.name)
                                                .size(9.5)
                                                .color(theme::TEXT_DIM),
                                        )
                                        .truncate(),
                                    );
                                }
                            });
                        });

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.spacing_mut().item_spacing.x = 4.0;

                                let del_btn = ui.add(
                                    egui::Button::new(
                                        RichText::new(egui_phosphor::regular::X)
                                            .size(10.0)
                                            .color(theme::TEXT_DIM),
                                    )
                                    .frame(false),
                                );
                                if del_btn.on_hover_text("Delete task").clicked() {
                                    action = TaskTableAction::Delete(task.id);
                                }

                                ui.label(
                                    RichText::new(task.status.label())
                                        .size(9.5)
                                        .color(theme::status_color(task.status)),
                                );

                                ui.label(
                                    RichText::new(task.end.format("%m/%d").to_string())
                                        .size(10.0)
                                        .color(theme::TEXT_SECONDARY),
                                );
                                ui.label(RichText::new("→").size(9.0).color(theme::TEXT_DIM));
                                ui.label(
                                    RichText::new(task.start.format("%m/%d").to_string())
                                        .size(10.0)
                                        .color(theme::TEXT_SECONDARY),
                                );
                            },
                        );
                    });
                });

                // Make entire row clickable
                let row_rect = frame_resp.response.rect;
                let row_click = ui.interact(
                    row_rect,
                    egui::Id::new(("task-row", task.id)),
                    egui::Sense::click(),
                );
                if row_click.clicked() {
                    action = TaskTableAction::Select(task.id);
                }

                ui.add_space(1.0);
            }
        });

    action
}
