// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_config_path;
use crate::types::OutputFormat;

/// Command-line arguments for `taskorder`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskorder",
    version,
    about = "Compute an execution order for tasks from \"a => b\" dependency declarations.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the schedule file (TOML).
    ///
    /// Ignored when `--task` or `--dep` is given.
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Declare a task inline (repeatable, declaration order is kept).
    #[arg(long = "task", value_name = "NAME")]
    pub tasks: Vec<String>,

    /// Declare a dependency inline, e.g. `--dep "a => b"` (repeatable).
    #[arg(long = "dep", value_name = "DECL")]
    pub deps: Vec<String>,

    /// Output format; overrides `[config].output`.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKORDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + build the graph and print it, but don't resolve an order.
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    /// Whether the schedule comes from flags rather than a file.
    pub fn is_inline(&self) -> bool {
        !self.tasks.is_empty() || !self.deps.is_empty()
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
