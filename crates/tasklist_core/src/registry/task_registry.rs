//! Task registry aggregate.
//!
//! # Responsibility
//! - Keep projects in creation order, tasks in insertion order.
//! - Hand out the next global task id.
//!
//! # Invariants
//! - Failed writes leave ids and projects untouched.
//! - Project names are unique.

use crate::model::deadline::Deadline;
use crate::model::task::{Project, Task, TaskId};
use log::{debug, info};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry lookup/write errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    ProjectNotFound(String),
    DuplicateProject(String),
    TaskNotFound(TaskId),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectNotFound(name) => {
                write!(f, "Could not find a project with the name \"{name}\".")
            }
            Self::DuplicateProject(name) => {
                write!(f, "A project with the name \"{name}\" already exists.")
            }
            Self::TaskNotFound(id) => write!(f, "Could not find a task with an ID of {id}."),
        }
    }
}

impl Error for RegistryError {}

/// Owned aggregate of all projects for one session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskRegistry {
    projects: Vec<Project>,
    #[serde(skip)]
    last_id: u64,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects in creation order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.name == name)
    }

    /// Number of tasks across all projects.
    pub fn task_count(&self) -> usize {
        self.projects.iter().map(|project| project.tasks.len()).sum()
    }

    /// Appends a new, empty project.
    ///
    /// # Errors
    /// - `DuplicateProject` when a project with `name` already exists.
    pub fn add_project(&mut self, name: impl Into<String>) -> RegistryResult<()> {
        let name = name.into();
        if self.project(&name).is_some() {
            return Err(RegistryError::DuplicateProject(name));
        }

        self.projects.push(Project::new(name));
        info!(
            "event=project_added module=registry status=ok project_count={}",
            self.projects.len()
        );
        Ok(())
    }

    /// Appends a task to `project_name` and returns its freshly assigned id.
    ///
    /// # Errors
    /// - `ProjectNotFound` when no project is called `project_name`; no id is
    ///   consumed in that case.
    pub fn add_task(
        &mut self,
        project_name: &str,
        description: impl Into<String>,
    ) -> RegistryResult<TaskId> {
        let project = self
            .projects
            .iter_mut()
            .find(|project| project.name == project_name)
            .ok_or_else(|| RegistryError::ProjectNotFound(project_name.to_string()))?;

        self.last_id += 1;
        let id = TaskId(self.last_id);
        project.tasks.push(Task::new(id, description));
        info!("event=task_added module=registry status=ok task_id={id}");
        Ok(id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.projects
            .iter()
            .flat_map(|project| project.tasks.iter())
            .find(|task| task.id == id)
    }

    /// Finds a task by id across all projects.
    pub fn task_mut(&mut self, id: TaskId) -> RegistryResult<&mut Task> {
        self.projects
            .iter_mut()
            .find_map(|project| project.task_mut(id))
            .ok_or(RegistryError::TaskNotFound(id))
    }

    /// Sets the completion flag of task `id`.
    pub fn set_done(&mut self, id: TaskId, done: bool) -> RegistryResult<()> {
        self.task_mut(id)?.set_done(done);
        debug!("event=task_marked module=registry status=ok task_id={id} done={done}");
        Ok(())
    }

    /// Attaches `deadline` to task `id`.
    pub fn set_deadline(&mut self, id: TaskId, deadline: Deadline) -> RegistryResult<()> {
        self.task_mut(id)?.set_deadline(deadline);
        debug!("event=deadline_set module=registry status=ok task_id={id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{RegistryError, TaskRegistry};
    use crate::model::task::TaskId;

    #[test]
    fn ids_continue_across_projects() {
        let mut registry = TaskRegistry::new();
        registry.add_project("secrets").unwrap();
        registry.add_project("training").unwrap();

        assert_eq!(registry.add_task("secrets", "a").unwrap(), TaskId(1));
        assert_eq!(registry.add_task("training", "b").unwrap(), TaskId(2));
        assert_eq!(registry.add_task("secrets", "c").unwrap(), TaskId(3));
        assert_eq!(registry.task_count(), 3);
    }

    #[test]
    fn missing_project_does_not_consume_an_id() {
        let mut registry = TaskRegistry::new();
        registry.add_project("secrets").unwrap();

        let err = registry.add_task("nowhere", "lost").unwrap_err();
        assert_eq!(err, RegistryError::ProjectNotFound("nowhere".to_string()));
        assert_eq!(registry.add_task("secrets", "kept").unwrap(), TaskId(1));
    }

    #[test]
    fn duplicate_project_is_rejected_and_existing_kept() {
        let mut registry = TaskRegistry::new();
        registry.add_project("secrets").unwrap();
        registry.add_task("secrets", "a").unwrap();

        let err = registry.add_project("secrets").unwrap_err();
        assert_eq!(err, RegistryError::DuplicateProject("secrets".to_string()));
        assert_eq!(registry.projects().len(), 1);
        assert_eq!(registry.projects()[0].tasks.len(), 1);
    }

    #[test]
    fn set_done_reports_unknown_ids() {
        let mut registry = TaskRegistry::new();
        let err = registry.set_done(TaskId(4), true).unwrap_err();
        assert_eq!(err.to_string(), "Could not find a task with an ID of 4.");
    }
}
