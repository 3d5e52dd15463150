// src/config/mod.rs

//! Schedule file loading and validation.
//!
//! - `model.rs`: the TOML-backed data model.
//! - `loader.rs`: reading a file from disk.
//! - `validate.rs`: `[config]` sanity checks.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{ConfigSection, RawScheduleFile, ScheduleFile};
pub use validate::validate_config;
