//! Output formatting utilities

use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown output format: {} (expected table or json)", other),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Render a query result.
///
/// `None` means "no data" and stays distinct from an empty list: `(none)` in
/// table output, `null` in JSON.
pub fn render_list<T, F>(items: Option<&[T]>, format: OutputFormat, row: F) -> String
where
    T: Serialize,
    F: Fn(&T) -> String,
{
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&items).unwrap_or_else(|_| "null".to_string())
        }
        OutputFormat::Table => match items {
            None => "(none)".to_string(),
            Some(items) => items.iter().map(row).collect::<Vec<_>>().join("\n"),
        },
    }
}
