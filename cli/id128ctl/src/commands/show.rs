//! Show the id stored in a file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use plfm_id128::{read_from_path, Id128Format};
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_id, IdView};

use super::CommandContext;

/// Read an id file and print both text forms of the id.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Path of the id file (e.g. /etc/machine-id).
    pub(super) path: PathBuf,

    /// Text form the file must be in (any, plain or uuid).
    #[arg(long, env = "ID128_FORMAT", default_value = "any")]
    pub(super) id_format: Id128Format,
}

impl ShowCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let path_display = self.path.display().to_string();
        debug!(path = %path_display, id_format = %self.id_format, "showing id file");

        let id = read_from_path(&self.path, self.id_format)
            .map_err(|e| CliError::id_file(&path_display, e))?;

        print_id(&IdView::new(&id).with_path(path_display), ctx.format);
        Ok(())
    }
}
