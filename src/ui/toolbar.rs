use crate::app::RenoApp;
use crate::ui::theme;
use egui::{menu, RichText, Ui};

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut RenoApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_header()), |ui| {
            if ui.button("  New Schedule").clicked() {
                app.new_schedule();
                ui.close_menu();
            }
            if ui.button("  Open...").clicked() {
                app.open_schedule();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Save          Ctrl+S").clicked() {
                app.save_schedule();
                ui.close_menu();
            }
            if ui.button("  Save As...").clicked() {
                app.save_schedule_as();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Import CSV...").clicked() {
                app.import_csv();
                ui.close_menu();
            }
            if ui.button("  Export CSV...").clicked() {
                app.export_csv();
                ui.close_menu();
            }
            if ui.button("  CSV Format Help").clicked() {
                app.show_csv_help = true;
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  View  ").font(theme::font_header()), |ui| {
            if ui.button("  Zoom In        Ctrl+Scroll ↑").clicked() {
                app.zoom_in();
                ui.close_menu();
            }
            if ui.button("  Zoom Out      Ctrl+Scroll ↓").clicked() {
                app.zoom_out();
                ui.close_menu();
            }
            if ui.button("  Reset Zoom").clicked() {
                app.day_width = theme::DEFAULT_DAY_WIDTH;
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Open Data Folder").clicked() {
                if let Some(dir) = crate::io::data_dir() {
                    let _ = open::that(&dir);
                }
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_header()), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        // Right-aligned schedule name
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let modified = if app.file_path.is_some() { "" } else { " (unsaved)" };
            ui.label(
                RichText::new(format!("{}{}", app.schedule.name, modified))
                    .size(11.0)
                    .weak(),
            );
        });
    });
}
