use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a schedule task. Transitions happen through direct
/// edits; this is a plain label, not a state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Scheduled,
    InProgress,
    Delayed,
    Complete,
}

impl TaskStatus {
    pub fn all() -> &'static [TaskStatus] {
        &[
            TaskStatus::Scheduled,
            TaskStatus::InProgress,
            TaskStatus::Delayed,
            TaskStatus::Complete,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Scheduled => "Scheduled",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Delayed => "Delayed",
            TaskStatus::Complete => "Complete",
        }
    }
}

/// A single task or milestone on the renovation schedule.
///
/// `end` is inclusive; a same-day task has `start == end`. Nothing upstream
/// validates `end >= start` — the layout code clamps inverted ranges instead
/// of rejecting them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleTask {
    pub id: Uuid,
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub status: TaskStatus,
    /// If true, rendered as a diamond marker at `start` instead of a bar.
    pub is_milestone: bool,
    /// Work package this task belongs to, if any.
    pub work_package: Option<Uuid>,
    /// Contractor performing the work, if assigned.
    pub contractor: Option<Uuid>,
    /// Prerequisite task IDs. May reference tasks that no longer exist or are
    /// filtered out; such edges are dropped at render time.
    #[serde(default)]
    pub depends_on: Vec<Uuid>,
    #[serde(default)]
    pub notes: String,
}

impl ScheduleTask {
    /// Create a new task with sensible defaults.
    pub fn new(name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start,
            end,
            status: TaskStatus::Scheduled,
            is_milestone: false,
            work_package: None,
            contractor: None,
            depends_on: Vec::new(),
            notes: String::new(),
        }
    }

    /// Create a new milestone (zero-duration, start == end).
    pub fn new_milestone(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start: date,
            end: date,
            status: TaskStatus::Scheduled,
            is_milestone: true,
            work_package: None,
            contractor: None,
            depends_on: Vec::new(),
            notes: String::new(),
        }
    }
}
