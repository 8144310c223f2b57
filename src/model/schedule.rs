use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::lookups::{Contractor, WorkPackage};
use super::task::ScheduleTask;

/// A renovation schedule: tasks plus the lookup tables used to decorate them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub name: String,
    pub tasks: Vec<ScheduleTask>,
    #[serde(default)]
    pub work_packages: Vec<WorkPackage>,
    #[serde(default)]
    pub contractors: Vec<Contractor>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            name: "Untitled Renovation".to_string(),
            tasks: Vec::new(),
            work_packages: Vec::new(),
            contractors: Vec::new(),
            created: Utc::now(),
            modified: Utc::now(),
        }
    }
}

impl Schedule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Touch the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }

    /// ID-keyed work package lookup, rebuilt per render and passed explicitly
    /// into the views so they stay testable without app state.
    pub fn work_package_map(&self) -> HashMap<Uuid, &WorkPackage> {
        self.work_packages.iter().map(|wp| (wp.id, wp)).collect()
    }

    /// ID-keyed contractor lookup.
    pub fn contractor_map(&self) -> HashMap<Uuid, &Contractor> {
        self.contractors.iter().map(|c| (c.id, c)).collect()
    }

    /// Remove a task and scrub it from every `depends_on` list so no live
    /// task keeps an edge to it.
    pub fn remove_task(&mut self, id: Uuid) {
        self.tasks.retain(|t| t.id != id);
        for task in &mut self.tasks {
            task.depends_on.retain(|dep| *dep != id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn remove_task_scrubs_dependencies() {
        let mut schedule = Schedule::new("test");
        let a = ScheduleTask::new("Demolition", date(2025, 1, 1), date(2025, 1, 5));
        let mut b = ScheduleTask::new("Framing", date(2025, 1, 6), date(2025, 1, 12));
        b.depends_on.push(a.id);
        let a_id = a.id;
        schedule.tasks = vec![a, b];

        schedule.remove_task(a_id);

        assert_eq!(schedule.tasks.len(), 1);
        assert!(schedule.tasks[0].depends_on.is_empty());
    }

    #[test]
    fn lookup_maps_are_keyed_by_id() {
        let mut schedule = Schedule::new("test");
        schedule.work_packages.push(WorkPackage::new(1, "Kitchen"));
        schedule.contractors.push(Contractor::new("Dana", "Electrical"));

        let wp_map = schedule.work_package_map();
        let c_map = schedule.contractor_map();
        assert_eq!(wp_map[&schedule.work_packages[0].id].name, "Kitchen");
        assert_eq!(c_map[&schedule.contractors[0].id].trade, "Electrical");
    }
}
