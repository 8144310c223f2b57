use std::collections::HashMap;
use std::path::Path;

use uuid::Uuid;

use crate::model::ScheduleTask;

/// Export tasks to a semicolon-delimited CSV file matching the import format.
///
/// Columns: Name ; Start ; End ; Status ; Milestone ; Depends On ; Notes
/// Dates are formatted as YYYY-MM-DD. Prerequisites are written as task names
/// joined with `|`; dangling IDs are omitted. Returns the number of tasks
/// written.
pub fn export_csv(tasks: &[ScheduleTask], path: &Path) -> Result<usize, String> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(path)
        .map_err(|e| format!("Failed to create CSV file: {}", e))?;

    wtr.write_record(["Name", "Start", "End", "Status", "Milestone", "Depends On", "Notes"])
        .map_err(|e| format!("Failed to write header: {}", e))?;

    let name_of: HashMap<Uuid, &str> = tasks.iter().map(|t| (t.id, t.name.as_str())).collect();

    for task in tasks {
        let depends = task
            .depends_on
            .iter()
            .filter_map(|id| name_of.get(id).copied())
            .collect::<Vec<_>>()
            .join("|");

        wtr.write_record([
            task.name.as_str(),
            &task.start.format("%Y-%m-%d").to_string(),
            &task.end.format("%Y-%m-%d").to_string(),
            task.status.label(),
            if task.is_milestone { "yes" } else { "no" },
            &depends,
            task.notes.as_str(),
        ])
        .map_err(|e| format!("Failed to write task '{}': {}", task.name, e))?;
    }

    wtr.flush().map_err(|e| format!("Failed to flush CSV: {}", e))?;
    Ok(tasks.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::csv_import::import_csv;
    use crate::model::TaskStatus;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn exported_file_imports_back_with_edges_intact() {
        let a = ScheduleTask::new("Demolition", date(2025, 4, 1), date(2025, 4, 8));
        let mut b = ScheduleTask::new("Framing", date(2025, 4, 9), date(2025, 4, 20));
        b.status = TaskStatus::InProgress;
        b.depends_on.push(a.id);
        b.depends_on.push(Uuid::new_v4()); // dangling, must not reach the file
        let tasks = vec![a, b];

        let path = std::env::temp_dir().join(format!("reno-gantt-export-{}.csv", Uuid::new_v4()));
        let written = export_csv(&tasks, &path).unwrap();
        assert_eq!(written, 2);

        let (imported, skipped) = import_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(skipped, 0);
        assert_eq!(imported.len(), 2);
        assert_eq!(imported[1].status, TaskStatus::InProgress);
        assert_eq!(imported[1].depends_on, vec![imported[0].id]);
    }
}
