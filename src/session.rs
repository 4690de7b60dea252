use crate::model::EngineError;
use crate::schedule::ScheduleIndex;
use crate::storage::{self, DataLocation};
use crate::tasks::TaskList;

/// The in-memory schedule and to-do list for one run of the program.
///
/// Both stores are read in full by [`Session::open`] and written back in full
/// by [`Session::close`]; nothing touches the files in between. Dropping a
/// session without closing it discards its changes.
#[derive(Debug)]
pub struct Session {
    location: DataLocation,
    pub schedule: ScheduleIndex,
    pub tasks: TaskList,
}

impl Session {
    pub fn open(location: DataLocation) -> Result<Self, EngineError> {
        let schedule = storage::load_schedule(&location.schedule_path())?;
        let tasks = storage::load_tasks(&location.tasks_path())?;
        Ok(Session {
            location,
            schedule,
            tasks,
        })
    }

    pub fn location(&self) -> &DataLocation {
        &self.location
    }

    /// Writes both stores. A failure on one file does not stop the other from
    /// being written; the first error is returned.
    pub fn close(self) -> Result<(), EngineError> {
        let schedule = storage::save_schedule(&self.location.schedule_path(), &self.schedule);
        let tasks = storage::save_tasks(&self.location.tasks_path(), &self.tasks);
        if let Err(err) = &tasks {
            if schedule.is_err() {
                log::error!("also failed to save tasks: {}", err);
            }
        }
        schedule.and(tasks)
    }
}
