use std::io;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use stroke_desk::cli::Cli;
use stroke_desk::config;
use stroke_desk::session::{self, Session};

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let loaded = config::load_config()?;
    let config = loaded.config;

    // Logs go to stderr so the generated message on stdout stays verbatim.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    if let Some(from) = loaded.migrated_from {
        tracing::info!(from, to = config.config_version, "migrated config");
    }

    if cli.init_config {
        let path = config::save_config(&config)?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut session = Session::new(config.coercion);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    session::run(&mut session, stdin.lock(), &mut stdout, &mut stderr)?;
    Ok(())
}
