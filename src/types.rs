use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the resolved order is printed.
///
/// - `Lines`: one task per line (default).
/// - `Inline`: a single comma-separated line, e.g. `b, a, d, c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Lines,
    Inline,
}

impl OutputFormat {
    pub fn render(self, order: &[String]) -> String {
        match self {
            OutputFormat::Lines => order.iter().map(|t| format!("{t}\n")).collect(),
            OutputFormat::Inline => format!("{}\n", order.join(", ")),
        }
    }
}
