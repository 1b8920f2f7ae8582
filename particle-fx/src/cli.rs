//! Root CLI structure for particle-fx

use clap::{Parser, Subcommand};

use crate::commands::{curve::CurveArgs, simulate::SimulateArgs, validate::ValidateArgs};

#[derive(Parser)]
#[command(name = "particle-fx")]
#[command(about = "Validate and preview particle behavior configurations", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a behavior file and show the execution order
    Validate(ValidateArgs),

    /// Sample a keyframe curve given on the command line
    Curve(CurveArgs),

    /// Spawn particles from a behavior file and run frames headlessly
    Simulate(SimulateArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
