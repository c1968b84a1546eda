//! Check candidate id strings.

use anyhow::Result;
use clap::Args;
use plfm_id128::{classify, decode, Id128Format};
use serde::Serialize;

use crate::error::CliError;
use crate::output::{print_json, print_success, OutputFormat};

use super::CommandContext;

/// Check whether a string is a valid id.
///
/// Reports both the shape check and the strict hex decode. A string can pass
/// the first and fail the second; the command fails unless it decodes.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// The candidate id.
    pub(super) text: String,

    /// Text form the candidate must be in (any, plain or uuid).
    #[arg(long, env = "ID128_FORMAT", default_value = "any")]
    pub(super) id_format: Id128Format,
}

#[derive(Debug, Serialize)]
struct ValidateView<'a> {
    input: &'a str,
    shape: Option<&'static str>,
    decoded: Option<String>,
}

impl ValidateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let shape = classify(&self.text);
        let decoded = decode(&self.text, self.id_format);

        if ctx.format == OutputFormat::Json {
            print_json(&ValidateView {
                input: &self.text,
                shape: shape.map(Id128Format::as_str),
                decoded: decoded.as_ref().ok().map(ToString::to_string),
            });
        }

        let id = decoded.map_err(|e| CliError::invalid_id(&self.text, e))?;

        if ctx.format == OutputFormat::Table {
            print_success(&format!("{} is a valid id128 ({})", self.text, id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, id_format: Id128Format) -> Result<()> {
        ValidateCommand {
            text: text.to_string(),
            id_format,
        }
        .run(CommandContext {
            format: OutputFormat::Table,
        })
    }

    #[test]
    fn test_valid_ids() {
        run("00112233445566778899aabbccddeeff", Id128Format::Any).unwrap();
        run("00112233-4455-6677-8899-aabbccddeeff", Id128Format::Uuid).unwrap();
    }

    #[test]
    fn test_shape_only_is_not_enough() {
        assert!(run("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz", Id128Format::Any).is_err());
    }

    #[test]
    fn test_format_mismatch() {
        assert!(run("00112233445566778899aabbccddeeff", Id128Format::Uuid).is_err());
    }
}
