//! In-memory project/task registry.
//!
//! # Responsibility
//! - Own every project and task for one interactive session.
//! - Assign task ids and resolve ids across projects.
//!
//! # Invariants
//! - Task ids are unique and strictly increasing in assignment order.
//! - Registry APIs return semantic errors (`ProjectNotFound`, `TaskNotFound`)
//!   instead of silently ignoring bad references.

pub mod task_registry;
