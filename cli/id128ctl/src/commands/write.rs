//! Write an id to a file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use plfm_id128::{write_to_path_with, Id128, Id128Format, WriteOptions};
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_id, print_success, IdView, OutputFormat};

use super::CommandContext;

/// Write an id to a file as a single newline-terminated record.
#[derive(Debug, Args)]
pub struct WriteCommand {
    /// Path of the id file. Created with mode 0444 if it does not exist.
    pub(super) path: PathBuf,

    /// The id, as 32 hex digits or in UUID form.
    pub(super) id: String,

    /// Text form to write (plain or uuid; any writes plain).
    #[arg(long, env = "ID128_FORMAT", default_value = "plain")]
    pub(super) id_format: Id128Format,

    /// Sync the file to disk before returning.
    #[arg(long)]
    pub(super) sync: bool,
}

impl WriteCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let id: Id128 = self
            .id
            .parse()
            .map_err(|e| CliError::invalid_id(&self.id, e))?;

        let path_display = self.path.display().to_string();
        debug!(
            path = %path_display,
            id = %id,
            id_format = %self.id_format,
            sync = self.sync,
            "writing id file"
        );

        write_to_path_with(
            &self.path,
            self.id_format,
            &id,
            WriteOptions { sync: self.sync },
        )
        .map_err(|e| CliError::id_file(&path_display, e))?;

        match ctx.format {
            OutputFormat::Json => print_id(&IdView::new(&id).with_path(path_display), ctx.format),
            OutputFormat::Table => print_success(&format!("Wrote {} to {}", id, path_display)),
        }

        Ok(())
    }
}
