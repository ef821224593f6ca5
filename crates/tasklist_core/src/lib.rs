//! Core logic for the interactive task list.
//! This crate owns every rule; binaries only wire a console and a clock.

pub mod clock;
pub mod command;
pub mod console;
pub mod logging;
pub mod model;
pub mod registry;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use command::builtin::register_builtins;
pub use command::kernel::{
    CommandContext, CommandError, CommandHandler, CommandOutcome, CommandResult, CommandTable,
    CommandTableError, Flow,
};
pub use console::{Console, MemoryConsole, StdConsole};
pub use logging::{default_log_level, init_logging, logging_status, parse_level, LoggingError};
pub use model::deadline::{Deadline, DeadlineError};
pub use model::task::{Project, Task, TaskId};
pub use registry::task_registry::{RegistryError, RegistryResult, TaskRegistry};
pub use session::{TaskList, PROMPT};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
