use crate::service::ServiceFactory;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "sauber")]
#[command(about = "Run the sauber service from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Call the service once and print its result
    Main,
}

/// Dispatches a parsed command. Without a subcommand nothing happens.
pub fn run(cli: Cli, factory: &dyn ServiceFactory, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Some(Commands::Main) => {
            let service = factory.create()?;
            let message = service.main_function()?;
            writeln!(out, "{}", message)?;
        }
        None => debug!("no subcommand given"),
    }
    Ok(())
}
