//! Built-in task list commands.
//!
//! # Responsibility
//! - Implement `show`, `add`, `check`, `uncheck`, `deadline`, `today`,
//!   `help` and `quit` on top of the registry.
//! - Validate arguments and report misuse as one usage line.
//!
//! # Invariants
//! - A failed command leaves the registry unchanged.
//! - Deadline text is validated before the task id is resolved.

use crate::command::kernel::{
    CommandContext, CommandError, CommandHandler, CommandOutcome, CommandResult, CommandTable,
    CommandTableError,
};
use crate::command::render::render_projects;
use crate::model::deadline::Deadline;
use crate::model::task::TaskId;
use crate::registry::task_registry::RegistryError;

const ADD_PROJECT_USAGE: &str = "add project <project name>";
const ADD_TASK_USAGE: &str = "add task <project name> <task description>";
const ADD_USAGE: &str = "add project <project name> | add task <project name> <task description>";
const CHECK_USAGE: &str = "check <task ID>";
const UNCHECK_USAGE: &str = "uncheck <task ID>";
const DEADLINE_USAGE: &str = "deadline <task ID> <dd-mm-yyyy>";

/// Registers every built-in command, in `help` order.
pub fn register_builtins(table: &mut CommandTable) -> Result<(), CommandTableError> {
    table.register(ShowCommand)?;
    table.register(AddCommand)?;
    table.register(MarkCommand::check())?;
    table.register(MarkCommand::uncheck())?;
    table.register(DeadlineCommand)?;
    table.register(TodayCommand)?;
    table.register(HelpCommand)?;
    table.register(QuitCommand)?;
    Ok(())
}

/// Lists every project and task.
pub struct ShowCommand;

impl CommandHandler for ShowCommand {
    fn keyword(&self) -> &'static str {
        "show"
    }

    fn usage(&self) -> &'static [&'static str] {
        &["show"]
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &str) -> CommandResult {
        Ok(CommandOutcome::lines(render_projects(
            ctx.registry.projects(),
            |_| true,
        )))
    }
}

/// `add project <name>` and `add task <project> <description>`.
pub struct AddCommand;

impl CommandHandler for AddCommand {
    fn keyword(&self) -> &'static str {
        "add"
    }

    fn usage(&self) -> &'static [&'static str] {
        &[ADD_PROJECT_USAGE, ADD_TASK_USAGE]
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &str) -> CommandResult {
        let (target, rest) = match args.split_once(char::is_whitespace) {
            Some((target, rest)) => (target, rest.trim_start()),
            None => (args, ""),
        };

        match target {
            "project" => {
                let name = rest.trim();
                if name.is_empty() {
                    return Err(CommandError::Usage(ADD_PROJECT_USAGE));
                }
                ctx.registry.add_project(name)?;
            }
            "task" => {
                let Some((project, description)) = rest.split_once(char::is_whitespace) else {
                    return Err(CommandError::Usage(ADD_TASK_USAGE));
                };
                let description = description.trim_start();
                if description.is_empty() {
                    return Err(CommandError::Usage(ADD_TASK_USAGE));
                }
                ctx.registry.add_task(project, description)?;
            }
            _ => return Err(CommandError::Usage(ADD_USAGE)),
        }

        Ok(CommandOutcome::silent())
    }
}

/// `check <id>` / `uncheck <id>`.
pub struct MarkCommand {
    keyword: &'static str,
    usage: &'static [&'static str],
    done: bool,
}

impl MarkCommand {
    pub fn check() -> Self {
        Self {
            keyword: "check",
            usage: &[CHECK_USAGE],
            done: true,
        }
    }

    pub fn uncheck() -> Self {
        Self {
            keyword: "uncheck",
            usage: &[UNCHECK_USAGE],
            done: false,
        }
    }
}

impl CommandHandler for MarkCommand {
    fn keyword(&self) -> &'static str {
        self.keyword
    }

    fn usage(&self) -> &'static [&'static str] {
        self.usage
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &str) -> CommandResult {
        let id = parse_task_id(args, self.usage[0])?;
        ctx.registry.set_done(id, self.done)?;
        Ok(CommandOutcome::silent())
    }
}

/// `deadline <id> <dd-mm-yyyy>`.
pub struct DeadlineCommand;

impl CommandHandler for DeadlineCommand {
    fn keyword(&self) -> &'static str {
        "deadline"
    }

    fn usage(&self) -> &'static [&'static str] {
        &[DEADLINE_USAGE]
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &str) -> CommandResult {
        let mut parts = args.split_whitespace();
        let (Some(raw_id), Some(raw_date), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(CommandError::Usage(DEADLINE_USAGE));
        };

        let id = parse_task_id(raw_id, DEADLINE_USAGE)?;
        let deadline = Deadline::parse(raw_date, ctx.clock)?;
        ctx.registry
            .set_deadline(id, deadline)
            .map_err(|err| match err {
                RegistryError::TaskNotFound(id) => CommandError::DeadlineTaskMissing(id),
                other => CommandError::Registry(other),
            })?;
        Ok(CommandOutcome::silent())
    }
}

/// Lists only tasks whose deadline is the current day.
pub struct TodayCommand;

impl CommandHandler for TodayCommand {
    fn keyword(&self) -> &'static str {
        "today"
    }

    fn usage(&self) -> &'static [&'static str] {
        &["today"]
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &str) -> CommandResult {
        let clock = ctx.clock;
        Ok(CommandOutcome::lines(render_projects(
            ctx.registry.projects(),
            |task| {
                task.deadline
                    .is_some_and(|deadline| deadline.is_today(clock))
            },
        )))
    }
}

/// Prints the usage line of every registered command.
pub struct HelpCommand;

impl CommandHandler for HelpCommand {
    fn keyword(&self) -> &'static str {
        "help"
    }

    fn usage(&self) -> &'static [&'static str] {
        &["help"]
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &str) -> CommandResult {
        let mut lines = vec!["Commands:".to_string()];
        lines.extend(
            ctx.commands
                .usage_lines()
                .into_iter()
                .map(|usage| format!("  {usage}")),
        );
        lines.push(String::new());
        Ok(CommandOutcome::lines(lines))
    }
}

pub struct QuitCommand;

impl CommandHandler for QuitCommand {
    fn keyword(&self) -> &'static str {
        "quit"
    }

    fn usage(&self) -> &'static [&'static str] {
        &["quit"]
    }

    fn execute(&self, _ctx: &mut CommandContext<'_>, _args: &str) -> CommandResult {
        Ok(CommandOutcome::quit())
    }
}

fn parse_task_id(raw: &str, usage: &'static str) -> Result<TaskId, CommandError> {
    let raw = raw.trim();
    // `u64::from_str` would also take a leading `+`.
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(CommandError::Usage(usage));
    }
    raw.parse::<u64>()
        .map(TaskId)
        .map_err(|_| CommandError::Usage(usage))
}
