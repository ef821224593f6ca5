//! Task list domain model.
//!
//! # Responsibility
//! - Define the project/task/deadline records the registry owns.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - A `Deadline` is never earlier than the day it was created on.
//! - A `Task` is owned by exactly one `Project`, by value.

pub mod deadline;
pub mod task;
