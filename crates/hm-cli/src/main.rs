//! CLI frontend for the Heermeister roster checker.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hm",
    about = "Heermeister — army list building and legality checking",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a roster file against its composition rules
    Check {
        /// Path to the roster JSON file
        roster: PathBuf,

        /// Rulebook JSON file (default: the built-in reference rulebook)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Message catalog JSON file for display names
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Emit the findings as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the rule entries of a composition
    Rules {
        /// Composition key (e.g. grand-army)
        #[arg(default_value = "grand-army")]
        composition: String,

        /// Rulebook JSON file (default: the built-in reference rulebook)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Only show entries for one section
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Summarize a roster file section by section
    Show {
        /// Path to the roster JSON file
        roster: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            roster,
            rules,
            catalog,
            json,
        } => commands::check::run(&roster, rules.as_deref(), catalog.as_deref(), json),
        Commands::Rules {
            composition,
            rules,
            section,
        } => commands::rules::run(&composition, rules.as_deref(), section.as_deref()),
        Commands::Show { roster } => commands::show::run(&roster),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
