use clap::Parser;

/// Terminal stroke alert form. Reads field edits and commands from stdin,
/// one per line, and prints the generated message on stdout.
#[derive(Debug, Parser)]
#[command(name = "stroke-desk")]
#[command(about = "Stroke alert assessment form for the terminal")]
pub struct Cli {
    /// Write the current config (defaults if none exists) and exit
    #[arg(long)]
    pub init_config: bool,
}
