// leadscore/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "leadscore")]
#[command(about = "Weekly merchant lead scoring and vertical routing", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Scores the weekly batch and writes the per-vertical exports
    Run {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Execution date used for contact-by dates (default: today)
        #[arg(long, env = "LEADSCORE_RUN_DATE")]
        run_date: Option<NaiveDate>,

        /// Overrides the competitor simulation seed
        #[arg(long)]
        seed: Option<u64>,

        /// Scores records on a single thread
        #[arg(long, default_value = "false")]
        sequential: bool,
    },

    /// ✅ Loads and validates the configuration without scoring anything
    Validate {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// 🔍 Shows the top leads of the last export
    Inspect {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Restrict to one vertical (restaurants | grocery | retail | unknown)
        #[arg(long, short)]
        vertical: Option<String>,

        /// Number of leads to display
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// 🧹 Removes the export directory
    Clean {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },
}
