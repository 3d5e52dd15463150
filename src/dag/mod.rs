// src/dag/mod.rs

//! Dependency graph and ordering.
//!
//! - [`declaration`] parses `"a => b"` strings into [`Edge`]s.
//! - [`graph`] holds the immutable [`DependencyGraph`].
//! - [`resolver`] computes a deterministic topological order and reports
//!   cycles.

pub mod declaration;
pub mod graph;
pub mod resolver;

pub use declaration::{is_task_name, parse_declarations, Edge};
pub use graph::DependencyGraph;
pub use resolver::resolve;
