// src/config/validate.rs

use tracing::warn;

use crate::config::model::{RawScheduleFile, ScheduleFile};
use crate::errors::{Result, TaskorderError};

impl TryFrom<RawScheduleFile> for ScheduleFile {
    type Error = TaskorderError;

    fn try_from(raw: RawScheduleFile) -> std::result::Result<Self, Self::Error> {
        validate_config(&raw)?;
        Ok(ScheduleFile::new_unchecked(
            raw.config,
            raw.tasks,
            raw.dependencies,
        ))
    }
}

/// Check the `[config]` section.
pub fn validate_config(raw: &RawScheduleFile) -> Result<()> {
    if raw.config.max_tasks == 0 {
        return Err(TaskorderError::ConfigError(
            "[config].max_tasks must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

/// The bound is soft: ordering still works, it just gets logged.
pub fn warn_if_oversized(count: usize, max_tasks: usize) {
    if count > max_tasks {
        warn!(
            tasks = count,
            max_tasks,
            "task list is larger than the configured bound"
        );
    }
}
