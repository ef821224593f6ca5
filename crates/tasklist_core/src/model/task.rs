//! Project and task records.
//!
//! # Responsibility
//! - Define the records listed by `show` and `today`.
//! - Provide check/uncheck and deadline lifecycle helpers.
//!
//! # Invariants
//! - `TaskId` values are assigned by the registry, never by callers.
//! - Task order inside a project is insertion order.

use crate::model::deadline::Deadline;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Registry-wide task identifier, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One checkable unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub done: bool,
    pub deadline: Option<Deadline>,
}

impl Task {
    /// Creates an unchecked task without a deadline.
    pub fn new(id: TaskId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            done: false,
            deadline: None,
        }
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    /// Attaches `deadline`, replacing any earlier one.
    pub fn set_deadline(&mut self, deadline: Deadline) {
        self.deadline = Some(deadline);
    }

    /// Checkbox marker used by list rendering.
    pub fn marker(&self) -> char {
        if self.done {
            'x'
        } else {
            ' '
        }
    }
}

/// Named, ordered group of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub name: String,
    pub tasks: Vec<Task>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }
}
