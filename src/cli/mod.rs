mod args;
mod commands;
mod config;
mod global;
mod handlers;
mod logging;

use args::{ConfigArgs, DecodeArgs, EncodeArgs, InspectArgs};
use clap::{Parser, Subcommand};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "float12")]
#[command(version)]
#[command(about = "Encode and decode numbers as compact 12-bit Base64 units", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode numbers as Base64 text (two symbols per number)
    Encode(EncodeArgs),
    /// Decode Base64 text back into numbers
    Decode(DecodeArgs),
    /// Show the Float12 fields of each number
    Inspect(InspectArgs),
    /// Print the effective configuration
    Config(ConfigArgs),
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(&cli.global)?;

    match cli.command {
        Command::Encode(args) => handlers::encode::handle(args, &config::load_config(&cli.global)?),
        Command::Decode(args) => handlers::decode::handle(args, &config::load_config(&cli.global)?),
        Command::Config(args) => handlers::config::handle(args, &config::load_config(&cli.global)?),
        // inspect needs no settings
        Command::Inspect(args) => handlers::inspect::handle(args),
    }
}
