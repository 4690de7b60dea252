use crate::model::{EngineError, Task};

/// The to-do list, in display order.
///
/// Tasks have no identity beyond their record: two tasks with the same text
/// and completion state are interchangeable, and lookups always act on the
/// first one in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, description: impl Into<String>) -> &Task {
        self.push(Task::new(description))
    }

    pub(crate) fn push(&mut self, task: Task) -> &Task {
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    /// Flips the completion flag of the first task matching `task` and
    /// returns the updated task.
    pub fn toggle(&mut self, task: &Task) -> Result<&Task, EngineError> {
        let index = self.position(task)?;
        let found = &mut self.tasks[index];
        found.done = !found.done;
        Ok(&*found)
    }

    pub fn remove(&mut self, task: &Task) -> Result<Task, EngineError> {
        let index = self.position(task)?;
        Ok(self.tasks.remove(index))
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// First task with this description, whatever its completion state.
    pub fn find(&self, description: &str) -> Option<&Task> {
        let description = description.trim_end();
        self.tasks.iter().find(|t| t.description == description)
    }

    pub fn pending(&self) -> usize {
        self.tasks.iter().filter(|t| !t.done).count()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, task: &Task) -> Result<usize, EngineError> {
        self.tasks
            .iter()
            .position(|t| t == task)
            .ok_or_else(|| EngineError::NotFound(format!("task \"{}\"", task.description)))
    }
}
