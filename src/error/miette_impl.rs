//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::CliError;

/// A diagnostic wrapper for CLI errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct CliDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<CliError> for CliDiagnostic {
    fn from(e: CliError) -> Self {
        match e {
            CliError::MissingTitle => CliDiagnostic {
                message: "no title given".into(),
                source: None,
                help: Some("pass --title <text> with a non-empty value".into()),
                severity: Severity::Error,
            },
            CliError::Write { target, source } => CliDiagnostic {
                message: format!("write to '{target}' failed"),
                source: Some(Box::new(source)),
                help: Some("check that the output stream is still open".into()),
                severity: Severity::Error,
            },
        }
    }
}

impl From<CliError> for miette::Report {
    fn from(e: CliError) -> Self {
        miette::Report::new(CliDiagnostic::from(e))
    }
}
