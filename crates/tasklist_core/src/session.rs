//! Interactive read-eval-print loop.
//!
//! # Responsibility
//! - Prompt, read one line, dispatch it and write the response, in order.
//! - Turn every command failure into one output line.
//!
//! # Invariants
//! - Output of one command is flushed before the next prompt is read.
//! - Only `quit`, end of input or a transport error end the loop.

use crate::clock::Clock;
use crate::command::builtin::register_builtins;
use crate::command::kernel::{CommandTable, CommandTableError, Flow};
use crate::console::Console;
use crate::registry::task_registry::TaskRegistry;
use log::{debug, info};
use std::io;

/// Prompt written before every read.
pub const PROMPT: &str = "> ";

/// Command interpreter bound to one console and clock.
pub struct TaskList<C: Console, K: Clock> {
    commands: CommandTable,
    console: C,
    clock: K,
}

impl<C: Console, K: Clock> TaskList<C, K> {
    pub fn new(commands: CommandTable, console: C, clock: K) -> Self {
        Self {
            commands,
            console,
            clock,
        }
    }

    /// Creates an interpreter with every built-in command registered.
    pub fn with_builtins(console: C, clock: K) -> Result<Self, CommandTableError> {
        let mut commands = CommandTable::new();
        register_builtins(&mut commands)?;
        Ok(Self::new(commands, console, clock))
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Runs until `quit` or end of input.
    ///
    /// # Errors
    /// - Returns the transport error when reading or writing fails.
    pub fn run(&mut self, registry: &mut TaskRegistry) -> io::Result<()> {
        info!("event=session_start module=session status=ok");
        let mut handled = 0_u64;

        loop {
            self.console.write(PROMPT)?;
            self.console.flush()?;

            let Some(line) = self.console.read_line()? else {
                info!(
                    "event=session_end module=session status=ok reason=eof commands={handled}"
                );
                return Ok(());
            };
            handled += 1;

            if self.execute_line(registry, &line)? == Flow::Quit {
                info!(
                    "event=session_end module=session status=ok reason=quit commands={handled}"
                );
                return Ok(());
            }
        }
    }

    /// Dispatches one input line and writes its output.
    ///
    /// Blank lines are ignored.
    pub fn execute_line(&mut self, registry: &mut TaskRegistry, line: &str) -> io::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let flow = match self.commands.dispatch(line, registry, &self.clock) {
            Ok(outcome) => {
                for output in &outcome.lines {
                    self.write_line(output)?;
                }
                outcome.flow
            }
            Err(err) => {
                debug!("event=command_failed module=session status=recovered kind={err:?}");
                self.write_line(&err.to_string())?;
                Flow::Continue
            }
        };

        self.console.flush()?;
        Ok(flow)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.console.write(line)?;
        self.console.write("\n")
    }
}
