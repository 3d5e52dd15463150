// tests/error_handling.rs

use std::io::Write;
use tempfile::NamedTempFile;
use taskorder::config::load_and_validate;
use taskorder::errors::{ScheduleError, TaskorderError};
use taskorder::resolve_schedule;

fn schedule_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_schedule_file_loads_tasks_and_dependencies() {
    let file = schedule_file(
        r#"
tasks = ["a", "b", "c"]
dependencies = ["a => b", "b => c"]
"#,
    );

    let schedule = load_and_validate(file.path()).unwrap();
    assert_eq!(schedule.config.max_tasks, 50);
    assert_eq!(schedule.task_count(), 3);

    let order =
        resolve_schedule(schedule.tasks.as_deref(), schedule.dependencies.as_deref()).unwrap();
    assert_eq!(order, vec!["c", "b", "a"]);
}

#[test]
fn test_missing_dependencies_key_is_an_absent_input() {
    let file = schedule_file(r#"tasks = ["a"]"#);

    let schedule = load_and_validate(file.path()).unwrap();
    assert!(schedule.dependencies.is_none());

    let result = resolve_schedule(schedule.tasks.as_deref(), schedule.dependencies.as_deref());
    assert!(matches!(result, Err(ScheduleError::InvalidInput(_))));
}

#[test]
fn test_cycle_in_file_returns_structured_error() {
    let file = schedule_file(
        r#"
tasks = ["a", "b"]
dependencies = ["a => b", "b => a"]
"#,
    );

    let schedule = load_and_validate(file.path()).unwrap();
    let result = resolve_schedule(schedule.tasks.as_deref(), schedule.dependencies.as_deref());

    match result {
        Err(ScheduleError::CyclicDependency { cycle }) => {
            assert_eq!(cycle, vec!["a", "b", "a"]);
        }
        Err(e) => panic!("Expected CyclicDependency error, got: {:?}", e),
        Ok(order) => panic!("Expected error, got Ok({order:?})"),
    }
}

#[test]
fn test_zero_max_tasks_returns_config_error() {
    let file = schedule_file(
        r#"
tasks = []
dependencies = []

[config]
max_tasks = 0
"#,
    );

    match load_and_validate(file.path()) {
        Err(TaskorderError::ConfigError(msg)) => {
            assert!(msg.contains("max_tasks"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_unknown_output_format_is_a_toml_error() {
    let file = schedule_file(
        r#"
tasks = ["a"]
dependencies = []

[config]
output = "yaml"
"#,
    );

    let result = load_and_validate(file.path());
    assert!(matches!(result, Err(TaskorderError::TomlError(_))));
}

#[test]
fn test_unknown_top_level_key_is_rejected() {
    let file = schedule_file(
        r#"
tasks = ["a"]
dependencies = []
depends = ["a => b"]
"#,
    );

    let result = load_and_validate(file.path());
    assert!(matches!(result, Err(TaskorderError::TomlError(_))));
}

#[test]
fn test_missing_file_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_and_validate(dir.path().join("nope.toml"));
    assert!(matches!(result, Err(TaskorderError::IoError(_))));
}

#[test]
fn test_schedule_error_converts_into_crate_error() {
    let err: TaskorderError = ScheduleError::DuplicateTask("a".to_string()).into();
    assert_eq!(err.to_string(), "Duplicate task: a");
}
