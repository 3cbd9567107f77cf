// Desktop/tooling crate — unwrap/expect/panic acceptable in non-embedded code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod check;
mod demo;
mod doc;
mod stage;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Navigation controller development tasks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the workspace builds, lints and formatting
    Check,
    /// Run all tests (unit, integration, property and doc tests)
    Test {
        /// Run only unit tests
        #[arg(long)]
        unit: bool,
        /// Run only integration tests
        #[arg(long)]
        integration: bool,
        /// Override the number of cases per controller property
        #[arg(long, value_name = "N")]
        proptest_cases: Option<u32>,
    },
    /// Build and optionally open documentation
    Doc {
        /// Open documentation in browser
        #[arg(long)]
        open: bool,
    },
    /// Run the navigation demo binary
    Demo {
        /// JSON script of button taps (defaults to the built-in walkthrough)
        #[arg(long)]
        script: Option<std::path::PathBuf>,
        /// Show debug logs from the navigation crate
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => check::run(),
        Commands::Test {
            unit,
            integration,
            proptest_cases,
        } => test::run(unit, integration, proptest_cases),
        Commands::Doc { open } => doc::run(open),
        Commands::Demo { script, verbose } => demo::run(script.as_deref(), verbose),
    }
}
