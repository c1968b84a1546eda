//! Error handling and display for the CLI.

use std::io;

use colored::Colorize;
use plfm_id128::Id128Error;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("'{input}' is not a valid id128: {source}")]
    InvalidId {
        input: String,
        #[source]
        source: Id128Error,
    },

    #[error("{path}: {source}")]
    IdFile {
        path: String,
        #[source]
        source: Id128Error,
    },
}

impl CliError {
    pub fn invalid_id(input: impl Into<String>, source: Id128Error) -> Self {
        Self::InvalidId {
            input: input.into(),
            source,
        }
    }

    pub fn id_file(path: impl Into<String>, source: Id128Error) -> Self {
        Self::IdFile {
            path: path.into(),
            source,
        }
    }

    /// A hint to show below the error, if any.
    fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::InvalidId { .. } => Some(
                "Hint: use 32 hex digits, or the 8-4-4-4-12 hyphenated UUID form.",
            ),
            CliError::IdFile { source, .. } => match source {
                Id128Error::NoMedium => Some("Hint: the file is empty."),
                Id128Error::InvalidArgument { .. } => Some(
                    "Hint: an id file holds one id followed by a newline. Check --id-format.",
                ),
                Id128Error::Io(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                    Some("Hint: id files are created read-only (0444).")
                }
                _ => None,
            },
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = err.downcast_ref::<CliError>().and_then(CliError::hint) {
        eprintln!("\n{}", hint.yellow());
    }
}
