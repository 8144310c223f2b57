use egui::{Color32, Id, RichText, Ui};
use uuid::Uuid;

use crate::model::{Contractor, ScheduleTask, TaskStatus, WorkPackage};
use crate::ui::theme;

fn field_label(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).size(10.0).color(theme::TEXT_DIM).strong());
}

/// Render an inline editor for the selected task. Returns true when the task
/// was modified.
pub fn show_task_editor(
    task: &mut ScheduleTask,
    all_tasks: &[ScheduleTask],
    work_packages: &[WorkPackage],
    contractors: &[Contractor],
    ui: &mut Ui,
) -> bool {
    let mut changed = false;
    let task_id = task.id;

    ui.add_space(6.0);
    ui.label(
        RichText::new("Edit Task")
            .strong()
            .size(13.0)
            .color(theme::TEXT_PRIMARY),
    );
    ui.add_space(4.0);

    let frame = egui::Frame {
        fill: theme::BG_DARK,
        rounding: egui::Rounding::same(4.0),
        inner_margin: egui::Margin::same(8.0),
        outer_margin: egui::Margin::ZERO,
        stroke: egui::Stroke::new(1.0, theme::BORDER_SUBTLE),
        shadow: egui::epaint::Shadow::NONE,
    };

    frame.show(ui, |ui| {
        ui.spacing_mut().item_spacing.y = 6.0;
        ui.visuals_mut().extreme_bg_color = theme::BG_FIELD;

        // ── Name ──────────────────────────────────────────────────────
        field_label(ui, "Name");
        let name_edit = ui.add_sized(
            [ui.available_width(), 24.0],
            egui::TextEdit::singleline(&mut task.name)
                .font(egui::FontId::proportional(12.0))
                .text_color(theme::TEXT_PRIMARY),
        );
        if name_edit.changed() {
            changed = true;
        }

        ui.add_space(2.0);

        // ── Status ────────────────────────────────────────────────────
        field_label(ui, "Status");
        egui::ComboBox::from_id_salt("status_combo")
            .selected_text(
                RichText::new(task.status.label())
                    .size(11.0)
                    .color(theme::status_color(task.status)),
            )
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for status in TaskStatus::all() {
                    if ui
                        .selectable_value(&mut task.status, *status, status.label())
                        .changed()
                    {
                        changed = true;
                    }
                }
            });

        ui.add_space(2.0);

        // ── Dates ─────────────────────────────────────────────────────
        if task.is_milestone {
            field_label(ui, "Date");
            let resp = ui.add(
                egui_extras::DatePickerButton::new(&mut task.start).id_salt("dp_milestone"),
            );
            if resp.changed() {
                task.end = task.start;
                changed = true;
            }
        } else {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    field_label(ui, "Start");
                    let resp = ui.add(
                        egui_extras::DatePickerButton::new(&mut task.start).id_salt("dp_start"),
                    );
                    if resp.changed() {
                        if task.start > task.end {
                            task.end = task.start;
                        }
                        changed = true;
                    }
                });

                ui.add_space(8.0);

                ui.vertical(|ui| {
                    field_label(ui, "End");
                    let resp = ui.add(
                        egui_extras::DatePickerButton::new(&mut task.end).id_salt("dp_end"),
                    );
                    if resp.changed() {
                        if task.end < task.start {
                            task.start = task.end;
                        }
                        changed = true;
                    }
                });
            });
        }

        // ── Milestone toggle ──────────────────────────────────────────
        ui.horizontal(|ui| {
            let mut is_milestone = task.is_milestone;
            let resp = ui.checkbox(&mut is_milestone, "");
            ui.label(
                RichText::new("Milestone")
                    .size(11.0)
                    .color(theme::TEXT_SECONDARY),
            );
            if resp.changed() {
                task.is_milestone = is_milestone;
                if is_milestone {
                    task.end = task.start;
                }
                changed = true;
            }
        });

        ui.add_space(2.0);

        // ── Work package ──────────────────────────────────────────────
        field_label(ui, "Work Package");
        let wp_label = task
            .work_package
            .and_then(|id| work_packages.iter().find(|wp| wp.id == id))
            .map(|wp| format!("{} — {}", wp.badge(), wp.name))
            .unwrap_or_else(|| "— None —".to_string());
        egui::ComboBox::from_id_salt("wp_combo")
            .selected_text(RichText::new(&wp_label).size(11.0))
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(task.work_package.is_none(), "— None —")
                    .clicked()
                {
                    task.work_package = None;
                    changed = true;
                }
                for wp in work_packages {
                    let lbl = format!("{} — {}", wp.badge(), wp.name);
                    if ui
                        .selectable_label(task.work_package == Some(wp.id), lbl)
                        .clicked()
                    {
                        task.work_package = Some(wp.id);
                        changed = true;
                    }
                }
            });

        ui.add_space(2.0);

        // ── Contractor ────────────────────────────────────────────────
        field_label(ui, "Contractor");
        let contractor_label = task
            .contractor
            .and_then(|id| contractors.iter().find(|c| c.id == id))
            .map(|c| c.display_name())
            .unwrap_or_else(|| "— Unassigned —".to_string());
        egui::ComboBox::from_id_salt("contractor_combo")
            .selected_text(RichText::new(&contractor_label).size(11.0))
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(task.contractor.is_none(), "— Unassigned —")
                    .clicked()
                {
                    task.contractor = None;
                    changed = true;
                }
                for c in contractors {
                    let lbl = format!("{} ({})", c.name, c.trade);
                    if ui
                        .selectable_label(task.contractor == Some(c.id), lbl)
                        .clicked()
                    {
                        task.contractor = Some(c.id);
                        changed = true;
                    }
                }
            });

        ui.add_space(2.0);

        // ── Notes ─────────────────────────────────────────────────────
        field_label(ui, "Notes");
        let notes_resp = ui.add_sized(
            [ui.available_width(), 60.0],
            egui::TextEdit::multiline(&mut task.notes)
                .font(egui::FontId::proportional(11.0))
                .text_color(theme::TEXT_SECONDARY)
                .hint_text("Add notes..."),
        );
        if notes_resp.changed() {
            changed = true;
        }

        ui.add_space(4.0);
        ui.separator();
        ui.add_space(2.0);

        // ── Prerequisites ─────────────────────────────────────────────
        field_label(ui, "Prerequisites");
        ui.add_space(2.0);

        if task.depends_on.is_empty() {
            ui.label(
                RichText::new("No prerequisites yet")
                    .size(9.5)
                    .color(theme::TEXT_DIM),
            );
        } else {
            let mut remove: Option<Uuid> = None;
            for &dep_id in &task.depends_on {
                // A stale edge shows as "?" here; the chart drops it silently
                let dep_name = all_tasks
                    .iter()
                    .find(|t| t.id == dep_id)
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|| "?".to_string());

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} {}",
                            egui_phosphor::regular::ARROW_LEFT,
                            dep_name
                        ))
                        .size(11.0)
                        .color(theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let del = ui.add(
                            egui::Button::new(
                                RichText::new(egui_phosphor::regular::X)
                                    .size(9.0)
                                    .color(theme::TEXT_DIM),
                            )
                            .frame(false),
                        );
                        if del.on_hover_text("Remove prerequisite").clicked() {
                            remove = Some(dep_id);
                        }
                    });
                });
            }
            if let Some(dep_id) = remove {
                task.depends_on.retain(|id| *id != dep_id);
                changed = true;
            }
        }

        ui.add_space(4.0);

        // ── Add prerequisite picker ───────────────────────────────────
        let candidates: Vec<(Uuid, String)> = all_tasks
            .iter()
            .filter(|t| t.id != task_id && !task.depends_on.contains(&t.id))
            .map(|t| (t.id, t.name.clone()))
            .collect();

        if !candidates.is_empty() {
            let picker_id = Id::new(("dep-picker", task_id));
            let mut picked: Option<Uuid> =
                ui.ctx().data_mut(|d| d.get_temp(picker_id)).flatten();

            let target_label = picked
                .and_then(|id| candidates.iter().find(|(cid, _)| *cid == id))
                .map(|(_, name)| name.clone())
                .unwrap_or_else(|| "— pick task —".to_string());

            field_label(ui, "Add prerequisite");
            ui.horizontal(|ui| {
                let combo_w = (ui.available_width() - 30.0).clamp(60.0, 220.0);
                egui::ComboBox::from_id_salt("new-dep-target")
                    .selected_text(RichText::new(&target_label).size(11.0))
                    .width(combo_w)
                    .show_ui(ui, |ui| {
                        for (cid, cname) in &candidates {
                            if ui
                                .selectable_label(picked == Some(*cid), cname.as_str())
                                .clicked()
                            {
                                picked = Some(*cid);
                            }
                        }
                    });

                let can_add = picked.is_some();
                let btn = egui::Button::new(RichText::new("＋").size(13.0).color(Color32::WHITE))
                    .fill(if can_add { theme::ACCENT } else { theme::BG_FIELD })
                    .rounding(egui::Rounding::same(4.0));
                if ui.add_enabled(can_add, btn).clicked() {
                    if let Some(target) = picked.take() {
                        task.depends_on.push(target);
                        changed = true;
                    }
                }
            });

            ui.ctx().data_mut(|d| d.insert_temp(picker_id, picked));
        }
    });

    changed
}
