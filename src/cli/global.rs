use clap::{ArgAction, Args};

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Read settings from this file instead of the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,
}
