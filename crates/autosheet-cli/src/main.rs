//! Autosheet CLI - Command-line interface for autotile template generation
//!
//! This binary provides commands for generating autotile sprite-sheet
//! templates and adjusting externally produced sheets onto the template
//! grid.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

// Use modules from the library crate
use autosheet_cli::commands;

/// Autosheet - Autotile Sprite-Sheet Template Toolkit
#[derive(Parser)]
#[command(name = "autosheet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a template image from a template spec
    Template {
        /// Path to the template spec file (JSON)
        #[arg(short, long)]
        spec: String,

        /// Output PNG path (default: sprite_template_<format>tiles.png)
        #[arg(short, long)]
        out: Option<String>,

        /// Overlay semi-transparent grid lines on the output
        #[arg(long)]
        grid: bool,
    },

    /// Adjust a sprite sheet to fit the template grid
    Adjust {
        /// Path to the template spec file (JSON)
        #[arg(short, long)]
        spec: String,

        /// Path to the sprite sheet image to adjust (PNG)
        #[arg(short, long)]
        input: String,

        /// Output PNG path (default: sprite_adjusted_<format>tiles.png)
        #[arg(short, long)]
        out: Option<String>,

        /// Scaling strategy: per-cell or average-normalized
        #[arg(long, default_value = "normalized", value_parser = ["single", "normalized"])]
        mode: String,

        /// Write the per-cell adjustment report to this JSON file
        #[arg(long)]
        report: Option<String>,
    },

    /// Print template grid dimensions for a spec
    Info {
        /// Path to the template spec file (JSON)
        #[arg(short, long)]
        spec: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Template { spec, out, grid } => {
            commands::template::run(&spec, out.as_deref(), grid)
        }
        Commands::Adjust {
            spec,
            input,
            out,
            mode,
            report,
        } => commands::adjust::run(&spec, &input, out.as_deref(), &mode, report.as_deref()),
        Commands::Info { spec, json } => commands::info::run(&spec, json),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
