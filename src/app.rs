use chrono::{Duration, NaiveDate};
use std::path::PathBuf;
use uuid::Uuid;

use crate::model::{Contractor, Schedule, ScheduleTask, TaskStatus, WorkPackage};
use crate::ui;
use crate::ui::theme;

/// Main application state.
pub struct RenoApp {
    pub schedule: Schedule,
    /// Day→pixel scale handed to the layout engine; zoom changes it.
    pub day_width: f32,
    pub file_path: Option<PathBuf>,
    pub selected_task: Option<Uuid>,

    // Dialog state
    pub show_add_task: bool,
    pub show_about: bool,
    pub show_csv_help: bool,
    pub new_task_name: String,
    pub new_task_start: NaiveDate,
    pub new_task_end: NaiveDate,
    pub new_task_is_milestone: bool,

    // Status message
    pub status_message: String,
}

impl RenoApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let today = chrono::Local::now().date_naive();

        Self {
            schedule: Self::sample_schedule(),
            day_width: theme::DEFAULT_DAY_WIDTH,
            file_path: None,
            selected_task: None,
            show_add_task: false,
            show_about: false,
            show_csv_help: false,
            new_task_name: String::new(),
            new_task_start: today,
            new_task_end: today + Duration::days(7),
            new_task_is_milestone: false,
            status_message: "Ready".to_string(),
        }
    }

    /// Generate a sample renovation schedule for demonstration.
    fn sample_schedule() -> Schedule {
        let today = chrono::Local::now().date_naive();
        let mut schedule = Schedule::new("53 Thurston Road");

        let wp_kitchen = WorkPackage::new(1, "Kitchen");
        let wp_flooring = WorkPackage::new(2, "Flooring");
        let wp_paint = WorkPackage::new(3, "Paint & Finish");

        let mut marcus = Contractor::new("Marcus Webb", "General");
        marcus.company = Some("Webb & Sons".to_string());
        let dana = Contractor::new("Dana Ortiz", "Electrical");
        let priya = Contractor::new("Priya Shah", "Painting");

        // ── Kitchen ─────────────────────────────────────────────────
        let mut demo = ScheduleTask::new(
            "Demolition",
            today - Duration::days(10),
            today - Duration::days(5),
        );
        demo.status = TaskStatus::Complete;
        demo.work_package = Some(wp_kitchen.id);
        demo.contractor = Some(marcus.id);

        let mut rough_in = ScheduleTask::new(
            "Electrical rough-in",
            today - Duration::days(4),
            today + Duration::days(3),
        );
        rough_in.status = TaskStatus::InProgress;
        rough_in.work_package = Some(wp_kitchen.id);
        rough_in.contractor = Some(dana.id);
        rough_in.depends_on.push(demo.id);
        rough_in.notes = "Panel upgrade quoted separately".to_string();

        let mut cabinets = ScheduleTask::new(
            "Cabinet install",
            today + Duration::days(4),
            today + Duration::days(12),
        );
        cabinets.work_package = Some(wp_kitchen.id);
        cabinets.contractor = Some(marcus.id);
        cabinets.depends_on.push(rough_in.id);

        let mut template = ScheduleTask::new_milestone(
            "Countertop template",
            today + Duration::days(13),
        );
        template.work_package = Some(wp_kitchen.id);
        template.depends_on.push(cabinets.id);

        // ── Flooring ────────────────────────────────────────────────
        let mut subfloor = ScheduleTask::new(
            "Subfloor repair",
            today + Duration::days(2),
            today + Duration::days(6),
        );
        subfloor.status = TaskStatus::Delayed;
        subfloor.work_package = Some(wp_flooring.id);
        subfloor.contractor = Some(marcus.id);
        subfloor.notes = "Waiting on joist inspection".to_string();

        let mut hardwood = ScheduleTask::new(
            "Hardwood install",
            today + Duration::days(7),
            today + Duration::days(16),
        );
        hardwood.work_package = Some(wp_flooring.id);
        hardwood.depends_on.push(subfloor.id);

        // ── Paint & Finish ──────────────────────────────────────────
        let mut paint = ScheduleTask::new(
            "Interior painting",
            today + Duration::days(17),
            today + Duration::days(24),
        );
        paint.work_package = Some(wp_paint.id);
        paint.contractor = Some(priya.id);
        paint.depends_on = vec![hardwood.id, cabinets.id];

        let mut punch = ScheduleTask::new_milestone("Punch list walkthrough", today + Duration::days(26));
        punch.depends_on.push(paint.id);

        schedule.work_packages = vec![wp_kitchen, wp_flooring, wp_paint];
        schedule.contractors = vec![marcus, dana, priya];
        schedule.tasks = vec![
            demo, rough_in, cabinets, template, subfloor, hardwood, paint, punch,
        ];
        schedule
    }

    // --- File operations ---

    pub fn new_schedule(&mut self) {
        self.schedule = Schedule::default();
        self.file_path = None;
        self.selected_task = None;
        self.status_message = "New schedule created".to_string();
    }

    pub fn open_schedule(&mut self) {
        let mut dialog = rfd::FileDialog::new().add_filter("Schedule", &["json"]);
        if let Some(dir) = crate::io::data_dir() {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.pick_file() {
            match crate::io::load_schedule(&path) {
                Ok(schedule) => {
                    self.schedule = schedule;
                    self.file_path = Some(path);
                    self.selected_task = None;
                    self.status_message = "Schedule loaded".to_string();
                }
                Err(e) => {
                    self.status_message = format!("Error loading: {}", e);
                }
            }
        }
    }

    pub fn save_schedule(&mut self) {
        if let Some(path) = self.file_path.clone() {
            self.schedule.touch();
            match crate::io::save_schedule(&self.schedule, &path) {
                Ok(()) => self.status_message = "Schedule saved".to_string(),
                Err(e) => self.status_message = format!("Error saving: {}", e),
            }
        } else {
            self.save_schedule_as();
        }
    }

    pub fn save_schedule_as(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("Schedule", &["json"])
            .set_file_name(&format!("{}.json", self.schedule.name));
        if let Some(dir) = crate::io::data_dir() {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.save_file() {
            self.file_path = Some(path.clone());
            self.schedule.touch();
            match crate::io::save_schedule(&self.schedule, &path) {
                Ok(()) => self.status_message = "Schedule saved".to_string(),
                Err(e) => self.status_message = format!("Error saving: {}", e),
            }
        }
    }

    pub fn import_csv(&mut self) {
        // Guard: if the current schedule has tasks, confirm before replacing
        if !self.schedule.tasks.is_empty() {
            let confirm = rfd::MessageDialog::new()
                .set_title("Import CSV")
                .set_description("This will replace the current schedule. Continue?")
                .set_buttons(rfd::MessageButtons::YesNo)
                .show();
            if confirm != rfd::MessageDialogResult::Yes {
                return;
            }
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv", "txt"])
            .pick_file()
        {
            match crate::io::csv_import::import_csv(&path) {
                Ok((tasks, skipped)) => {
                    let name = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("Imported Schedule")
                        .to_string();

                    let count = tasks.len();
                    self.schedule = Schedule::new(name);
                    self.schedule.tasks = tasks;
                    self.file_path = None;
                    self.selected_task = None;

                    if skipped > 0 {
                        self.status_message =
                            format!("Imported {} tasks ({} rows skipped)", count, skipped);
                    } else {
                        self.status_message = format!("Imported {} tasks", count);
                    }
                }
                Err(e) => {
                    self.status_message = format!("CSV import failed: {}", e);
                }
            }
        }
    }

    pub fn export_csv(&mut self) {
        if self.schedule.tasks.is_empty() {
            self.status_message = "Nothing to export — schedule has no tasks".to_string();
            return;
        }

        let default_name = format!("{}.csv", self.schedule.name);
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(&default_name)
            .save_file()
        {
            match crate::io::csv_export::export_csv(&self.schedule.tasks, &path) {
                Ok(count) => {
                    self.status_message = format!("Exported {} tasks to CSV", count);
                }
                Err(e) => {
                    self.status_message = format!("CSV export failed: {}", e);
                }
            }
        }
    }

    // --- Task operations ---

    pub fn create_task_from_dialog(&mut self) {
        let name = if self.new_task_name.is_empty() {
            "New Task".to_string()
        } else {
            self.new_task_name.clone()
        };

        let start = self.new_task_start;
        let end = if self.new_task_end >= start {
            self.new_task_end
        } else {
            start
        };

        let task = if self.new_task_is_milestone {
            ScheduleTask::new_milestone(name, start)
        } else {
            ScheduleTask::new(name, start, end)
        };

        self.selected_task = Some(task.id);
        self.schedule.tasks.push(task);
        self.schedule.touch();
        self.reset_dialog_fields();
        self.status_message = "Task added".to_string();
    }

    pub fn delete_task(&mut self, id: Uuid) {
        self.schedule.remove_task(id);
        self.schedule.touch();
        if self.selected_task == Some(id) {
            self.selected_task = None;
        }
        self.status_message = "Task deleted".to_string();
    }

    pub fn zoom_in(&mut self) {
        self.day_width = (self.day_width * 1.2).min(theme::MAX_DAY_WIDTH);
    }

    pub fn zoom_out(&mut self) {
        self.day_width = (self.day_width / 1.2).max(theme::MIN_DAY_WIDTH);
    }

    fn reset_dialog_fields(&mut self) {
        let today = chrono::Local::now().date_naive();
        self.new_task_name = String::new();
        self.new_task_start = today;
        self.new_task_end = today + Duration::days(7);
        self.new_task_is_milestone = false;
    }
}

impl eframe::App for RenoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        let should_save = ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::S));
        if should_save {
            self.save_schedule();
        }

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(24.0)
            .frame(
                egui::Frame::default()
                    .fill(theme::BG_HEADER)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(theme::font_sub())
                            .color(theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("Tasks: {}", self.schedule.tasks.len()))
                                .size(10.5)
                                .color(theme::TEXT_DIM),
                        );
                        ui.label(egui::RichText::new(" · ").size(10.5).color(theme::TEXT_DIM));
                        ui.label(
                            egui::RichText::new(format!(
                                "Zoom: {:.0}%",
                                self.day_width / theme::DEFAULT_DAY_WIDTH * 100.0
                            ))
                            .size(10.5)
                            .color(theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Left panel: editor (when a task is selected) + task table
        let mut task_action = ui::task_table::TaskTableAction::None;
        let mut editor_changed = false;
        egui::SidePanel::left("task_panel")
            .default_width(300.0)
            .min_width(240.0)
            .max_width(520.0)
            .resizable(true)
            .frame(
                egui::Frame::default()
                    .fill(theme::BG_PANEL)
                    .inner_margin(egui::Margin::same(8.0))
                    .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE)),
            )
            .show(ctx, |ui| {
                if let Some(sel_id) = self.selected_task {
                    let tasks_snapshot: Vec<_> = self.schedule.tasks.clone();
                    let work_packages = self.schedule.work_packages.clone();
                    let contractors = self.schedule.contractors.clone();
                    if let Some(task) =
                        self.schedule.tasks.iter_mut().find(|t| t.id == sel_id)
                    {
                        editor_changed = ui::task_editor::show_task_editor(
                            task,
                            &tasks_snapshot,
                            &work_packages,
                            &contractors,
                            ui,
                        );
                    }
                    ui.add_space(4.0);
                    ui.separator();
                    ui.add_space(2.0);
                }

                let wp_map = self.schedule.work_package_map();
                let contractor_map = self.schedule.contractor_map();
                task_action = ui::task_table::show_task_table(
                    &self.schedule.tasks,
                    &wp_map,
                    &contractor_map,
                    self.selected_task,
                    ui,
                );
            });

        match task_action {
            ui::task_table::TaskTableAction::Select(id) => {
                self.selected_task = Some(id);
            }
            ui::task_table::TaskTableAction::Delete(id) => {
                self.delete_task(id);
            }
            ui::task_table::TaskTableAction::Add => {
                self.show_add_task = true;
            }
            ui::task_table::TaskTableAction::None => {}
        }

        if editor_changed {
            self.schedule.touch();
            self.status_message = "Task updated".to_string();
        }

        // Central panel: Gantt chart
        let chart_frame = egui::Frame::default()
            .fill(theme::BG_DARK)
            .inner_margin(egui::Margin::ZERO);
        egui::CentralPanel::default().frame(chart_frame).show(ctx, |ui| {
            let wp_map = self.schedule.work_package_map();
            let contractor_map = self.schedule.contractor_map();
            let interaction = ui::gantt_chart::show_gantt_chart(
                &self.schedule.tasks,
                &wp_map,
                &contractor_map,
                &mut self.day_width,
                self.selected_task,
                ui,
            );
            if let Some(id) = interaction.selected {
                self.selected_task = Some(id);
            } else if interaction.cleared_selection {
                self.selected_task = None;
            }
        });

        // Dialogs
        if self.show_add_task {
            ui::dialogs::show_add_task_dialog(self, ctx);
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
        if self.show_csv_help {
            ui::dialogs::show_csv_help_dialog(self, ctx);
        }
    }
}
