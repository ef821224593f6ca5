//! Command table contracts.

use crate::clock::Clock;
use crate::model::deadline::DeadlineError;
use crate::model::task::TaskId;
use crate::registry::task_registry::{RegistryError, TaskRegistry};
use log::debug;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CommandResult = Result<CommandOutcome, CommandError>;

/// Whether the read loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Lines to print plus the loop decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub lines: Vec<String>,
    pub flow: Flow,
}

impl CommandOutcome {
    /// No output, keep reading.
    pub fn silent() -> Self {
        Self::lines(Vec::new())
    }

    pub fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            flow: Flow::Continue,
        }
    }

    pub fn quit() -> Self {
        Self {
            lines: Vec::new(),
            flow: Flow::Quit,
        }
    }
}

/// State a handler may read or mutate while executing.
pub struct CommandContext<'a> {
    pub registry: &'a mut TaskRegistry,
    pub clock: &'a dyn Clock,
    pub commands: &'a CommandTable,
}

/// Behaviour bound to one command keyword.
pub trait CommandHandler {
    /// First token of the input line that selects this handler.
    fn keyword(&self) -> &'static str;

    /// Usage lines shown by `help`, one per accepted form.
    fn usage(&self) -> &'static [&'static str];

    /// Runs the command with everything after the keyword in `args`.
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &str) -> CommandResult;
}

/// Keyword → handler dispatch table.
#[derive(Default)]
pub struct CommandTable {
    handlers: BTreeMap<&'static str, Box<dyn CommandHandler>>,
    order: Vec<&'static str>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one handler under its keyword.
    pub fn register(
        &mut self,
        handler: impl CommandHandler + 'static,
    ) -> Result<(), CommandTableError> {
        let keyword = handler.keyword();
        if keyword.is_empty() || keyword.chars().any(char::is_whitespace) {
            return Err(CommandTableError::InvalidKeyword(keyword));
        }
        if self.handlers.contains_key(keyword) {
            return Err(CommandTableError::DuplicateKeyword(keyword));
        }

        self.handlers.insert(keyword, Box::new(handler));
        self.order.push(keyword);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.handlers.contains_key(keyword)
    }

    /// Usage lines of every handler, in registration order.
    pub fn usage_lines(&self) -> Vec<&'static str> {
        self.order
            .iter()
            .filter_map(|keyword| self.handlers.get(keyword))
            .flat_map(|handler| handler.usage().iter().copied())
            .collect()
    }

    /// Splits `line` into keyword and arguments and runs the matching handler.
    pub fn dispatch(
        &self,
        line: &str,
        registry: &mut TaskRegistry,
        clock: &dyn Clock,
    ) -> CommandResult {
        let (keyword, args) = split_command(line);
        let Some(handler) = self.handlers.get(keyword) else {
            debug!("event=command_unknown module=command status=rejected");
            return Err(CommandError::UnknownCommand(keyword.to_string()));
        };

        debug!("event=command_dispatch module=command keyword={keyword}");
        let mut ctx = CommandContext {
            registry,
            clock,
            commands: self,
        };
        handler.execute(&mut ctx, args)
    }
}

/// Splits off the first whitespace-delimited token; the rest is returned raw
/// apart from the separating whitespace.
pub fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim_start()),
        None => (line, ""),
    }
}

/// Command table registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandTableError {
    DuplicateKeyword(&'static str),
    InvalidKeyword(&'static str),
}

impl Display for CommandTableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKeyword(keyword) => {
                write!(f, "command keyword already registered: {keyword}")
            }
            Self::InvalidKeyword(keyword) => {
                write!(f, "command keyword must be one non-empty token: `{keyword}`")
            }
        }
    }
}

impl Error for CommandTableError {}

/// Recoverable command failure; `Display` is the line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    UnknownCommand(String),
    Usage(&'static str),
    Registry(RegistryError),
    Deadline(DeadlineError),
    DeadlineTaskMissing(TaskId),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(keyword) => {
                write!(f, "I don't know what the command \"{keyword}\" is.")
            }
            Self::Usage(usage) => write!(f, "Usage: {usage}"),
            Self::Registry(err) => write!(f, "{err}"),
            Self::Deadline(err) => write!(f, "{err}"),
            Self::DeadlineTaskMissing(_) => {
                write!(f, "Deadline cannot be added; id does not exist")
            }
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Registry(err) => Some(err),
            Self::Deadline(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RegistryError> for CommandError {
    fn from(value: RegistryError) -> Self {
        Self::Registry(value)
    }
}

impl From<DeadlineError> for CommandError {
    fn from(value: DeadlineError) -> Self {
        Self::Deadline(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        split_command, CommandContext, CommandError, CommandHandler, CommandOutcome,
        CommandResult, CommandTable, CommandTableError,
    };
    use crate::clock::FixedClock;
    use crate::registry::task_registry::TaskRegistry;
    use chrono::NaiveDate;

    struct Echo(&'static str);

    impl CommandHandler for Echo {
        fn keyword(&self) -> &'static str {
            self.0
        }

        fn usage(&self) -> &'static [&'static str] {
            &["echo <text>"]
        }

        fn execute(&self, _ctx: &mut CommandContext<'_>, args: &str) -> CommandResult {
            Ok(CommandOutcome::lines(vec![args.to_string()]))
        }
    }

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 8, 22).expect("valid date"))
    }

    #[test]
    fn split_command_keeps_remainder_raw() {
        assert_eq!(
            split_command("add task secrets  Eat more donuts. "),
            ("add", "task secrets  Eat more donuts. ")
        );
        assert_eq!(split_command("show"), ("show", ""));
        assert_eq!(split_command("  check\t3"), ("check", "3"));
    }

    #[test]
    fn rejects_duplicate_and_malformed_keywords() {
        let mut table = CommandTable::new();
        assert!(table.is_empty());
        table.register(Echo("echo")).expect("first registration");
        assert!(table.contains("echo"));
        assert!(!table.contains("show"));
        assert_eq!(
            table.register(Echo("echo")).unwrap_err(),
            CommandTableError::DuplicateKeyword("echo")
        );
        assert_eq!(
            table.register(Echo("two words")).unwrap_err(),
            CommandTableError::InvalidKeyword("two words")
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn dispatches_registered_handler_with_arguments() {
        let mut table = CommandTable::new();
        table.register(Echo("echo")).unwrap();
        let mut registry = TaskRegistry::new();

        let outcome = table
            .dispatch("echo hello there", &mut registry, &clock())
            .unwrap();
        assert_eq!(outcome.lines, vec!["hello there".to_string()]);
    }

    #[test]
    fn unknown_keyword_is_reported_verbatim() {
        let table = CommandTable::new();
        let mut registry = TaskRegistry::new();
        let err = table
            .dispatch("nonExistingCommand now", &mut registry, &clock())
            .unwrap_err();
        assert_eq!(
            err,
            CommandError::UnknownCommand("nonExistingCommand".to_string())
        );
        assert_eq!(
            err.to_string(),
            "I don't know what the command \"nonExistingCommand\" is."
        );
    }
}
