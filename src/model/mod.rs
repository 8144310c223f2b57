pub mod lookups;
pub mod schedule;
pub mod task;

pub use lookups::{Contractor, WorkPackage};
pub use schedule::Schedule;
pub use task::{ScheduleTask, TaskStatus};
