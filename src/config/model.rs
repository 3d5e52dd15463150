// src/config/model.rs

use serde::{Deserialize, Serialize};

use crate::types::OutputFormat;

/// Schedule file as read from TOML, before validation.
///
/// ```toml
/// tasks = ["a", "b", "c"]
/// dependencies = ["a => b", "b => c"]
///
/// [config]
/// max_tasks = 50
/// output = "lines"
/// ```
///
/// `tasks` and `dependencies` stay optional here: a missing key is an
/// absent input and is reported by the resolver, not by the loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawScheduleFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,

    #[serde(default)]
    pub config: ConfigSection,
}

/// `[config]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigSection {
    /// Soft upper bound on the number of tasks. Exceeding it only warns.
    #[serde(default = "default_max_tasks")]
    pub max_tasks: usize,

    #[serde(default)]
    pub output: OutputFormat,
}

fn default_max_tasks() -> usize {
    50
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            max_tasks: default_max_tasks(),
            output: OutputFormat::default(),
        }
    }
}

/// A schedule file that passed validation.
///
/// Only constructible through `TryFrom<RawScheduleFile>` (or
/// [`ScheduleFile::new_unchecked`] inside the crate).
#[derive(Debug, Clone)]
pub struct ScheduleFile {
    pub config: ConfigSection,
    pub tasks: Option<Vec<String>>,
    pub dependencies: Option<Vec<String>>,
}

impl ScheduleFile {
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        tasks: Option<Vec<String>>,
        dependencies: Option<Vec<String>>,
    ) -> Self {
        Self {
            config,
            tasks,
            dependencies,
        }
    }

    /// Build a schedule from inline lists (CLI flags), using default config.
    pub fn inline(tasks: Vec<String>, dependencies: Vec<String>) -> Self {
        Self::new_unchecked(ConfigSection::default(), Some(tasks), Some(dependencies))
    }

    pub fn task_count(&self) -> usize {
        self.tasks.as_ref().map_or(0, Vec::len)
    }
}
