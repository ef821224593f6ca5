//! Interactive task list entry point.
//!
//! # Responsibility
//! - Read logging configuration from flags/environment.
//! - Run the task list over stdin/stdout with the system clock.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tasklist_core::{
    default_log_level, init_logging, parse_level, Console, StdConsole, SystemClock, TaskList,
    TaskRegistry,
};

#[derive(Parser, Debug)]
#[command(name = "tasklist", version, about = "Interactive project and task list")]
struct Cli {
    /// Log level: trace, debug, info, warn or error
    #[arg(long, env = "TASKLIST_LOG_LEVEL")]
    log_level: Option<String>,

    /// Directory for rolling log files; logging is off when unset
    #[arg(long, env = "TASKLIST_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = parse_level(cli.log_level.as_deref().unwrap_or(default_log_level()))
        .context("Invalid log level")?;

    if let Some(dir) = cli.log_dir.as_deref() {
        let dir = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            std::env::current_dir()
                .context("Failed to resolve current directory")?
                .join(dir)
        };
        init_logging(level, &dir)
            .with_context(|| format!("Failed to initialize logging in {}", dir.display()))?;
    }

    run(StdConsole::stdio())
}

fn run(console: impl Console) -> Result<()> {
    let mut registry = TaskRegistry::new();
    let mut task_list =
        TaskList::with_builtins(console, SystemClock).context("Failed to register commands")?;
    task_list
        .run(&mut registry)
        .context("Console input/output failed")?;
    log::info!(
        "event=app_exit module=cli status=ok projects={} tasks={}",
        registry.projects().len(),
        registry.task_count()
    );
    Ok(())
}
