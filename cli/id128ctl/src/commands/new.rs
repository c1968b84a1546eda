//! Generate a new random id.

use anyhow::Result;
use clap::Args;
use plfm_id128::{Id128, Id128Format};
use tracing::debug;

use crate::output::{render_json, IdView, OutputFormat};

use super::CommandContext;

/// Print a new random (UUID v4) id.
#[derive(Debug, Args)]
pub struct NewCommand {
    /// Text form to print in table output (plain or uuid).
    #[arg(long, env = "ID128_FORMAT", default_value = "plain")]
    pub(super) id_format: Id128Format,
}

impl NewCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let id = Id128::from(uuid::Uuid::new_v4());
        debug!(id = %id, "generated id");

        println!("{}", render(&id, self.id_format, ctx.format));
        Ok(())
    }
}

fn render(id: &Id128, id_format: Id128Format, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => render_json(&IdView::new(id)),
        OutputFormat::Table => match id_format {
            Id128Format::Uuid => format!("{id:#}"),
            Id128Format::Plain | Id128Format::Any => id.to_string(),
        },
    }
}
