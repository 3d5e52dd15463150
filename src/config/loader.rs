// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{RawScheduleFile, ScheduleFile};
use crate::errors::Result;

/// Load a schedule file from `path` and return the raw `RawScheduleFile`.
///
/// This only performs TOML deserialization; it does **not** check the
/// `[config]` section. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawScheduleFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawScheduleFile = toml::from_str(&contents)?;
    debug!(path = %path.display(), "loaded schedule file");

    Ok(raw)
}

/// Load a schedule file and validate its `[config]` section.
///
/// Task and dependency problems (duplicates, unknown names, cycles) are left
/// to the resolver so they surface as [`crate::errors::ScheduleError`]s.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ScheduleFile> {
    let raw = load_from_path(&path)?;
    let schedule = ScheduleFile::try_from(raw)?;
    Ok(schedule)
}

/// `Taskorder.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Taskorder.toml")
}
