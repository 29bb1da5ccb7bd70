//! Output formatting utilities

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Determine the effective output format
///
/// An explicit `--format` wins, then the configured format, then text.
pub fn effective_format(format: OutputFormat, configured: Option<OutputFormat>) -> OutputFormat {
    match format {
        OutputFormat::Auto => match configured {
            Some(OutputFormat::Auto) | None => OutputFormat::Text,
            Some(other) => other,
        },
        other => other,
    }
}

/// Print `value` as YAML or JSON
///
/// Returns `false` for text formats so the caller can render its own view.
pub fn print_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<bool> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value).into_diagnostic()?;
            println!("{}", json);
            Ok(true)
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(value).into_diagnostic()?;
            print!("{}", yaml);
            Ok(true)
        }
        OutputFormat::Text | OutputFormat::Auto => Ok(false),
    }
}
