// src/errors.rs

//! Crate-wide error types.
//!
//! [`ScheduleError`] is the closed set of failures a single resolve call can
//! produce. [`TaskorderError`] wraps it together with the config/IO failures
//! of the outer layers.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid inputs: {0}")]
    InvalidInput(String),

    #[error("Malformed dependency declaration: {0:?} (expected \"<dependent> => <dependency>\")")]
    MalformedDeclaration(String),

    #[error("Invalid task name: {0:?} (expected a lowercase word)")]
    InvalidTaskName(String),

    #[error("Duplicate task: {0}")]
    DuplicateTask(String),

    #[error("Unknown task '{task}' referenced by dependency '{declaration}'")]
    UnknownTask { task: String, declaration: String },

    #[error("Cyclic dependency: {}", cycle.join(" => "))]
    CyclicDependency { cycle: Vec<String> },
}

#[derive(Error, Debug)]
pub enum TaskorderError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TaskorderError>;
