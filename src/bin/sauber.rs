use clap::Parser;
use sauber::cli::{self, Cli};
use sauber::service;

fn main() -> anyhow::Result<()> {
    sauber::init_tracing();

    let cli = Cli::parse();
    let factory = service::default_factory();
    let stdout = std::io::stdout();
    cli::run(cli, &factory, &mut stdout.lock())
}
