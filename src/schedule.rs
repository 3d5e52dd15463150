// src/schedule.rs

//! Top-level ordering entry point over raw task names and declarations.

use tracing::debug;

use crate::dag::{parse_declarations, resolve};
use crate::errors::ScheduleError;

/// Compute the execution order for `tasks` given `"a => b"` declarations.
///
/// `None` stands for an absent collection and is rejected before anything
/// else is looked at. Otherwise declarations are parsed in order, the graph
/// is built and resolved; the first failure aborts the whole call. Task
/// names follow the same lowercase-word grammar as declarations.
///
/// ```
/// use taskorder::resolve_schedule;
///
/// let order = resolve_schedule(Some(&["a", "b"][..]), Some(&["a => b"][..])).unwrap();
/// assert_eq!(order, vec!["b", "a"]);
/// ```
pub fn resolve_schedule<T, D>(
    tasks: Option<&[T]>,
    dependencies: Option<&[D]>,
) -> Result<Vec<String>, ScheduleError>
where
    T: AsRef<str>,
    D: AsRef<str>,
{
    let (tasks, dependencies) = match (tasks, dependencies) {
        (Some(t), Some(d)) => (t, d),
        (None, None) => {
            return Err(ScheduleError::InvalidInput(
                "tasks and dependencies are missing".to_string(),
            ));
        }
        (None, Some(_)) => {
            return Err(ScheduleError::InvalidInput("tasks are missing".to_string()));
        }
        (Some(_), None) => {
            return Err(ScheduleError::InvalidInput(
                "dependencies are missing".to_string(),
            ));
        }
    };

    let edges = parse_declarations(dependencies)?;
    debug!(
        tasks = tasks.len(),
        edges = edges.len(),
        "resolving schedule"
    );

    resolve(tasks, &edges)
}
