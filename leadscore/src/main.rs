// leadscore/src/main.rs

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug leadscore run ... to see the stage details
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            project_dir,
            run_date,
            seed,
            sequential,
        } => commands::run::execute(project_dir, run_date, seed, sequential),
        Commands::Validate { project_dir } => commands::validate::execute(project_dir),
        Commands::Inspect {
            project_dir,
            vertical,
            limit,
        } => commands::inspect::execute(project_dir, vertical, limit),
        Commands::Clean { project_dir } => commands::clean::execute(project_dir),
    }
}
