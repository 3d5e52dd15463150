// src/dag/declaration.rs

//! Parsing of textual dependency declarations.
//!
//! A declaration has the form `<dependent> => <dependency>`, for example
//! `"build => fetch"` ("build must run after fetch"). Whitespace around the
//! arrow and the tokens is ignored, so `"c=>d"` is accepted too.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::ScheduleError;

/// A task name: a lowercase word.
const TOKEN: &str = "[a-z][a-z0-9_]*";

static TASK_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{TOKEN}$")).expect("task name regex is valid"));

/// Both sides must be task names.
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\s*({TOKEN})\s*=>\s*({TOKEN})\s*$"))
        .expect("declaration regex is valid")
});

/// Whether `name` can be used as a task identity (and so appear in a declaration).
pub fn is_task_name(name: &str) -> bool {
    TASK_NAME.is_match(name)
}

/// A single "must run after" relation between two tasks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// The task that has to wait.
    pub dependent: String,
    /// The task that has to run first.
    pub dependent_on: String,
}

impl Edge {
    pub fn new(dependent: impl Into<String>, dependent_on: impl Into<String>) -> Self {
        Self {
            dependent: dependent.into(),
            dependent_on: dependent_on.into(),
        }
    }

    pub fn is_self_dependency(&self) -> bool {
        self.dependent == self.dependent_on
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.dependent, self.dependent_on)
    }
}

impl FromStr for Edge {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DECLARATION
            .captures(s)
            .ok_or_else(|| ScheduleError::MalformedDeclaration(s.to_string()))?;

        Ok(Edge::new(&caps[1], &caps[2]))
    }
}

/// Parse every declaration, keeping their original order.
///
/// Fails on the first declaration that does not match the grammar.
pub fn parse_declarations<D: AsRef<str>>(declarations: &[D]) -> Result<Vec<Edge>, ScheduleError> {
    declarations
        .iter()
        .map(|d| d.as_ref().parse::<Edge>())
        .collect()
}
