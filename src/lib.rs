// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod schedule;
pub mod types;

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::ScheduleFile;
use crate::config::validate::warn_if_oversized;
use crate::dag::{parse_declarations, DependencyGraph};
use crate::errors::ScheduleError;

pub use crate::dag::{resolve, Edge};
pub use crate::errors::TaskorderError;
pub use crate::schedule::resolve_schedule;

/// High-level entry point used by `main.rs`; writes to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_writer(&args, &mut out)
}

/// Same as [`run`] but writes the result to `out`.
///
/// This wires together:
/// - schedule input (config file or inline flags)
/// - dry-run graph printing
/// - resolving and rendering the order
pub fn run_with_writer<W: Write>(args: &CliArgs, out: &mut W) -> Result<()> {
    let schedule = load_schedule(args)?;
    warn_if_oversized(schedule.task_count(), schedule.config.max_tasks);

    if args.dry_run {
        print_dry_run(&schedule, out)?;
        return Ok(());
    }

    let order = resolve_schedule(schedule.tasks.as_deref(), schedule.dependencies.as_deref())?;
    info!(tasks = order.len(), "resolved schedule");

    let format = args.format.unwrap_or(schedule.config.output);
    out.write_all(format.render(&order).as_bytes())?;
    out.flush()?;
    Ok(())
}

fn load_schedule(args: &CliArgs) -> Result<ScheduleFile> {
    if args.is_inline() {
        debug!("using inline --task/--dep schedule");
        return Ok(ScheduleFile::inline(args.tasks.clone(), args.deps.clone()));
    }

    let path = &args.config;
    let schedule = load_and_validate(path)
        .with_context(|| format!("failed to load schedule file {}", path.display()))?;
    Ok(schedule)
}

/// Print tasks, their dependencies and the roots without resolving.
///
/// The graph is still built, so duplicate or unknown tasks are reported.
fn print_dry_run<W: Write>(schedule: &ScheduleFile, out: &mut W) -> Result<()> {
    let (Some(tasks), Some(dependencies)) = (&schedule.tasks, &schedule.dependencies) else {
        return Err(ScheduleError::InvalidInput(
            "schedule needs both `tasks` and `dependencies`".to_string(),
        )
        .into());
    };

    let edges = parse_declarations(dependencies)?;
    let graph = DependencyGraph::build(tasks, &edges)?;

    writeln!(out, "taskorder dry-run")?;
    writeln!(out, "  config.max_tasks = {}", schedule.config.max_tasks)?;
    writeln!(out, "  config.output = {:?}", schedule.config.output)?;
    writeln!(out)?;

    writeln!(out, "tasks ({}):", graph.len())?;
    for name in graph.tasks() {
        writeln!(out, "  - {name}")?;
        let deps = graph.dependencies_of(name);
        if !deps.is_empty() {
            writeln!(out, "      after: {deps:?}")?;
        }
    }
    writeln!(out)?;
    writeln!(out, "roots: {:?}", graph.roots())?;

    debug!("dry-run complete (nothing resolved)");
    Ok(())
}
