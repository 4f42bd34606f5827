//! CLI entry point for drills.

mod cli;
mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

use cli::{Cli, Commands};
use drills::config::Overrides;

fn main() -> Result<()> {
    let cli = Cli::parse();

    drills::logging::init(cli.verbose);
    drills::ui::configure_color(cli.quiet);

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Temperature {
            min,
            max,
            unit,
            input,
        } => {
            let config = cmd::load_config(
                config_path,
                Overrides {
                    min,
                    max,
                    unit,
                    ..Default::default()
                },
            )?;
            cmd::cmd_temperature(&config, input.as_deref())
        }
        Commands::Table { seed } => {
            let config = cmd::load_config(
                config_path,
                Overrides {
                    seed,
                    ..Default::default()
                },
            )?;
            cmd::cmd_table(&config)
        }
        Commands::Config => {
            let config = cmd::load_config(config_path, Overrides::default())?;
            cmd::cmd_config(&config)
        }
        Commands::Completion { shell } => cmd_completion(shell),
    }
}

/// Generate shell completion script
fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "drills", &mut io::stdout());
    Ok(())
}
