use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::model::{ScheduleTask, TaskStatus};

/// Map a status string to a task status.
fn parse_status(status: &str) -> TaskStatus {
    match status.trim().to_lowercase().as_str() {
        "complete" | "completed" | "done" | "finished" => TaskStatus::Complete,
        "in progress" | "in-progress" | "in_progress" | "active" | "started" => {
            TaskStatus::InProgress
        }
        "delayed" | "late" | "blocked" | "behind" => TaskStatus::Delayed,
        _ => TaskStatus::Scheduled,
    }
}

/// Try parsing a date string with several common formats.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y/%m/%d", "%m-%d-%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

/// Detect delimiter by checking the first line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if semicolons >= commas && semicolons >= tabs {
        b';'
    } else if tabs >= commas {
        b'\t'
    } else {
        b','
    }
}

/// Normalize a header string to a canonical column key.
fn normalize_header(h: &str) -> String {
    h.trim().to_lowercase().replace([' ', '-', '_'], "")
}

/// Map a normalized header to our column index:
///   0 = name, 1 = start, 2 = end, 3 = status, 4 = milestone, 5 = notes,
///   6 = depends-on
fn header_to_col(normalized: &str) -> Option<usize> {
    match normalized {
        "name" | "task" | "tasklabel" | "taskname" | "label" | "title"
        | "activity" => Some(0),

        "start" | "startdate" | "from" | "begin" | "begindate" => Some(1),

        "end" | "enddate" | "to" | "finish" | "finishdate" | "due" | "duedate" => Some(2),

        "status" | "state" | "stage" => Some(3),

        "milestone" | "ismilestone" | "type" => Some(4),

        "notes" | "note" | "description" | "details" | "comment" | "comments" => Some(5),

        "dependson" | "depends" | "dependencies" | "prerequisites" | "after"
        | "predecessors" => Some(6),

        _ => None,
    }
}

/// Import schedule tasks from a CSV file.
///
/// Auto-detects delimiter (comma, semicolon, tab) and matches column headers
/// flexibly. The depends-on column lists prerequisite task names separated by
/// `|` (or commas); names are resolved to IDs in a second pass once every row
/// has been read, so a prerequisite may appear later in the file. Returns
/// `(tasks, skipped_count)` on success.
pub fn import_csv(path: &Path) -> Result<(Vec<ScheduleTask>, usize), String> {
    // Read the whole file to detect delimiter from the first line
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let first_line = content.lines().next().unwrap_or("");
    let delimiter = detect_delimiter(first_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read CSV headers: {}", e))?
        .clone();

    let col_map: Vec<Option<usize>> = headers
        .iter()
        .map(|h| header_to_col(&normalize_header(h)))
        .collect();

    let has_name = col_map.iter().any(|c| *c == Some(0));
    let has_start = col_map.iter().any(|c| *c == Some(1));
    let has_end = col_map.iter().any(|c| *c == Some(2));

    if !has_name || !has_start || !has_end {
        let found: Vec<&str> = headers.iter().collect();
        return Err(format!(
            "CSV is missing required columns. Found headers: {:?}. \
             Need columns for: task name, start date, end date.",
            found
        ));
    }

    // Accumulate (task, raw depends-on field) pairs; resolve names once all
    // rows are in.
    let mut tasks: Vec<ScheduleTask> = Vec::new();
    let mut depends_fields: Vec<Option<String>> = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Skipping CSV row {}: {}", i + 2, e);
                skipped += 1;
                continue;
            }
        };

        let mut name_val = None;
        let mut start_val = None;
        let mut end_val = None;
        let mut status_val = None;
        let mut milestone_val: Option<String> = None;
        let mut notes_val = None;
        let mut depends_val: Option<String> = None;

        for (col_idx, field) in record.iter().enumerate() {
            if col_idx < col_map.len() {
                match col_map[col_idx] {
                    Some(0) => name_val = Some(field.trim().to_string()),
                    Some(1) => start_val = Some(field.trim().to_string()),
                    Some(2) => end_val = Some(field.trim().to_string()),
                    Some(3) => status_val = Some(field.trim().to_string()),
                    Some(4) => milestone_val = Some(field.trim().to_string()),
                    Some(5) => notes_val = Some(field.trim().to_string()),
                    Some(6) => depends_val = Some(field.trim().to_string()),
                    _ => {}
                }
            }
        }

        let name = match name_val {
            Some(n) if !n.is_empty() => n,
            _ => {
                skipped += 1;
                continue;
            }
        };

        let start = match start_val.as_deref().and_then(parse_date) {
            Some(d) => d,
            None => {
                eprintln!(
                    "Skipping row {}: invalid start date '{}'",
                    i + 2,
                    start_val.as_deref().unwrap_or("")
                );
                skipped += 1;
                continue;
            }
        };

        let end = match end_val.as_deref().and_then(parse_date) {
            Some(d) => d,
            None => {
                eprintln!(
                    "Skipping row {}: invalid end date '{}'",
                    i + 2,
                    end_val.as_deref().unwrap_or("")
                );
                skipped += 1;
                continue;
            }
        };

        let status = status_val
            .as_deref()
            .map(parse_status)
            .unwrap_or(TaskStatus::Scheduled);

        // Explicit milestone column wins; otherwise infer from start == end.
        let is_milestone = milestone_val
            .as_deref()
            .map(|s| {
                matches!(
                    s.trim().to_lowercase().as_str(),
                    "true" | "yes" | "1" | "milestone"
                )
            })
            .unwrap_or(start == end);

        let mut task = ScheduleTask::new(name, start, end);
        task.status = status;
        task.is_milestone = is_milestone;
        task.notes = notes_val.unwrap_or_default();
        if is_milestone {
            task.end = task.start;
        }

        depends_fields.push(depends_val.filter(|s| !s.is_empty()));
        tasks.push(task);
    }

    if tasks.is_empty() && skipped > 0 {
        return Err(format!("No valid tasks found in CSV ({} rows skipped)", skipped));
    }
    if tasks.is_empty() {
        return Err("CSV file is empty or has no data rows".to_string());
    }

    // Second pass: resolve prerequisite names to task IDs.
    let name_to_id: HashMap<String, Uuid> = tasks
        .iter()
        .map(|t| (t.name.to_lowercase(), t.id))
        .collect();

    for (task, depends_field) in tasks.iter_mut().zip(depends_fields.iter()) {
        let Some(field) = depends_field else { continue };
        for dep_name in field.split(['|', ',']) {
            let dep_name = dep_name.trim();
            if dep_name.is_empty() {
                continue;
            }
            match name_to_id.get(&dep_name.to_lowercase()) {
                Some(&dep_id) if dep_id != task.id => {
                    if !task.depends_on.contains(&dep_id) {
                        task.depends_on.push(dep_id);
                    }
                }
                Some(_) => {} // self reference, ignore
                None => {
                    eprintln!(
                        "Warning: prerequisite '{}' not found for '{}'",
                        dep_name, task.name
                    );
                }
            }
        }
    }

    Ok((tasks, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn import_str(content: &str) -> Result<(Vec<ScheduleTask>, usize), String> {
        let path = std::env::temp_dir().join(format!("reno-gantt-csv-{}.csv", Uuid::new_v4()));
        std::fs::write(&path, content).unwrap();
        let result = import_csv(&path);
        std::fs::remove_file(&path).ok();
        result
    }

    #[test]
    fn imports_tasks_and_resolves_prerequisites_by_name() {
        let csv = "Name;Start;End;Status;Depends On\n\
                   Demolition;2025-04-01;2025-04-08;Complete;\n\
                   Framing;2025-04-09;2025-04-20;In Progress;Demolition\n\
                   Drywall;2025-04-21;2025-04-28;Scheduled;Framing|Demolition\n";
        let (tasks, skipped) = import_str(csv).unwrap();

        assert_eq!(skipped, 0);
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].status, TaskStatus::Complete);
        assert_eq!(tasks[1].depends_on, vec![tasks[0].id]);
        assert_eq!(tasks[2].depends_on, vec![tasks[1].id, tasks[0].id]);
    }

    #[test]
    fn same_day_row_is_inferred_as_milestone() {
        let csv = "Name,Start,End\nPermit approved,2025-05-01,2025-05-01\n";
        let (tasks, _) = import_str(csv).unwrap();
        assert!(tasks[0].is_milestone);
        assert_eq!(tasks[0].start, tasks[0].end);
    }

    #[test]
    fn bad_dates_are_skipped_not_fatal() {
        let csv = "Name,Start,End\n\
                   Good,2025-05-01,2025-05-04\n\
                   Bad,not-a-date,2025-05-06\n";
        let (tasks, skipped) = import_str(csv).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(skipped, 1);
    }

    #[test]
    fn unknown_prerequisite_name_is_dropped() {
        let csv = "Name,Start,End,Depends\n\
                   Paint,2025-05-01,2025-05-04,Sanding\n";
        let (tasks, _) = import_str(csv).unwrap();
        assert!(tasks[0].depends_on.is_empty());
    }

    #[test]
    fn missing_required_columns_is_an_error() {
        let csv = "Name,Owner\nDemolition,Dana\n";
        assert!(import_str(csv).is_err());
    }

    #[test]
    fn delimiter_is_sniffed_from_first_line() {
        let csv = "Name\tStart\tEnd\nTiling\t2025-06-01\t2025-06-10\n";
        let (tasks, _) = import_str(csv).unwrap();
        assert_eq!(tasks[0].name, "Tiling");
    }
}
