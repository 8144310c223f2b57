use crate::model::Schedule;
use std::path::{Path, PathBuf};

/// Save a schedule to a JSON file.
pub fn save_schedule(schedule: &Schedule, path: &Path) -> Result<(), String> {
    let json = serde_json::to_string_pretty(schedule).map_err(|e| e.to_string())?;
    std::fs::write(path, json).map_err(|e| e.to_string())
}

/// Load a schedule from a JSON file.
pub fn load_schedule(path: &Path) -> Result<Schedule, String> {
    let json = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&json).map_err(|e| e.to_string())
}

/// Per-user data directory for schedule files. Created on first use.
pub fn data_dir() -> Option<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "reno-gantt")?;
    let dir = dirs.data_dir().to_path_buf();
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ScheduleTask, WorkPackage};
    use chrono::NaiveDate;

    #[test]
    fn schedule_round_trips_through_json() {
        let mut schedule = Schedule::new("53 Thurston Road");
        let wp = WorkPackage::new(1, "Kitchen");
        let mut task = ScheduleTask::new(
            "Demolition",
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 8).unwrap(),
        );
        task.work_package = Some(wp.id);
        task.notes = "Dumpster arrives Monday".to_string();
        schedule.work_packages.push(wp);
        schedule.tasks.push(task);

        let dir = std::env::temp_dir();
        let path = dir.join(format!("reno-gantt-test-{}.json", uuid::Uuid::new_v4()));
        save_schedule(&schedule, &path).unwrap();
        let loaded = load_schedule(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.name, schedule.name);
        assert_eq!(loaded.tasks.len(), 1);
        assert_eq!(loaded.tasks[0].work_package, Some(schedule.work_packages[0].id));
        assert_eq!(loaded.tasks[0].notes, "Dumpster arrives Monday");
    }

    #[test]
    fn load_reports_missing_file_as_error() {
        let path = std::env::temp_dir().join("reno-gantt-does-not-exist.json");
        assert!(load_schedule(&path).is_err());
    }
}
