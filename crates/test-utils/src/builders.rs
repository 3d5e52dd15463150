#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use taskorder::cli::CliArgs;
use taskorder::config::{ConfigSection, RawScheduleFile, ScheduleFile};
use taskorder::types::OutputFormat;
use tracing::debug;

/// Builder for `ScheduleFile` to simplify test setup.
pub struct ScheduleBuilder {
    raw: RawScheduleFile,
}

impl ScheduleBuilder {
    /// Starts with both `tasks` and `dependencies` present and empty.
    pub fn new() -> Self {
        Self {
            raw: RawScheduleFile {
                config: ConfigSection::default(),
                tasks: Some(Vec::new()),
                dependencies: Some(Vec::new()),
            },
        }
    }

    pub fn task(mut self, name: &str) -> Self {
        self.raw.tasks.get_or_insert_with(Vec::new).push(name.to_string());
        self
    }

    pub fn tasks(mut self, names: &[&str]) -> Self {
        for name in names {
            self = self.task(name);
        }
        self
    }

    /// Adds `"<dependent> => <dependency>"`.
    pub fn dep(mut self, dependent: &str, dependency: &str) -> Self {
        self.raw
            .dependencies
            .get_or_insert_with(Vec::new)
            .push(format!("{dependent} => {dependency}"));
        self
    }

    /// Adds a raw declaration string as-is.
    pub fn declaration(mut self, decl: &str) -> Self {
        self.raw
            .dependencies
            .get_or_insert_with(Vec::new)
            .push(decl.to_string());
        self
    }

    pub fn without_tasks(mut self) -> Self {
        self.raw.tasks = None;
        self
    }

    pub fn without_dependencies(mut self) -> Self {
        self.raw.dependencies = None;
        self
    }

    pub fn max_tasks(mut self, max: usize) -> Self {
        self.raw.config.max_tasks = max;
        self
    }

    pub fn output(mut self, format: OutputFormat) -> Self {
        self.raw.config.output = format;
        self
    }

    pub fn build_raw(self) -> RawScheduleFile {
        self.raw
    }

    pub fn build(self) -> ScheduleFile {
        ScheduleFile::try_from(self.raw).expect("Failed to build valid schedule from builder")
    }

    /// Render as TOML, in the shape a user would write by hand.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(&self.raw)?)
    }

    /// Write the TOML form into `file`.
    pub fn write_to(&self, file: &mut impl Write) -> Result<()> {
        let toml = self.to_toml()?;
        debug!(%toml, "writing schedule file");
        file.write_all(toml.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

impl Default for ScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `CliArgs` with every flag at its default, pointed at `config`.
pub fn cli_args(config: &str) -> CliArgs {
    CliArgs {
        config: PathBuf::from(config),
        tasks: Vec::new(),
        deps: Vec::new(),
        format: None,
        log_level: None,
        dry_run: false,
    }
}
