//! CLI commands.

mod new;
mod show;
mod validate;
mod write;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// id128 - Inspect, validate and write 128-bit id files.
#[derive(Debug, Parser)]
#[command(name = "id128")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the id stored in a file.
    Show(show::ShowCommand),

    /// Write an id to a file.
    Write(write::WriteCommand),

    /// Check whether a string is a valid id.
    Validate(validate::ValidateCommand),

    /// Print a new random id.
    New(new::NewCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let ctx = CommandContext {
            format: OutputFormat::parse(&self.format),
        };

        match self.command {
            Commands::Show(cmd) => cmd.run(ctx),
            Commands::Write(cmd) => cmd.run(ctx),
            Commands::Validate(cmd) => cmd.run(ctx),
            Commands::New(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("id128 {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use plfm_id128::Id128Format;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_with_format() {
        let cli = Cli::try_parse_from(["id128", "show", "/etc/machine-id", "--id-format", "plain"])
            .unwrap();
        match cli.command {
            Commands::Show(cmd) => {
                assert_eq!(cmd.path.to_str(), Some("/etc/machine-id"));
                assert_eq!(cmd.id_format, Id128Format::Plain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_id_format_is_rejected() {
        let result = Cli::try_parse_from(["id128", "show", "/etc/machine-id", "--id-format", "hex"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["id128", "new", "--format", "json", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(OutputFormat::parse(&cli.format), OutputFormat::Json);
    }
}
