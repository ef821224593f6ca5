//! Command dispatch for the interactive task list.
//!
//! # Responsibility
//! - Map command keywords to handlers through a registration table.
//! - Convert every handler failure into one user-facing line.
//!
//! # Invariants
//! - A keyword is registered at most once.
//! - Handlers never write to the console directly; they return output lines.

pub mod builtin;
pub mod kernel;
pub mod render;
