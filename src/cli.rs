use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// MacroTracker: build a day's food cart and track it against macro goals.
#[derive(Parser, Debug)]
#[command(name = "macro_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a TOML config file (defaults to ./macro_tracker.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to a food catalog (JSON or CSV). Overrides the config file.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Start an interactive tracking session.
    #[default]
    Session,

    /// List catalog foods whose name contains a search term.
    Search {
        /// Case-insensitive search term; empty lists everything.
        #[arg(default_value = "")]
        term: String,
    },

    /// Compute gram targets for a calorie goal and macro split.
    Goals {
        /// Daily calorie goal.
        #[arg(long)]
        calories: Option<f64>,

        /// Protein share of calories (%).
        #[arg(long, allow_negative_numbers = true)]
        protein: Option<f64>,

        /// Carbohydrate share of calories (%).
        #[arg(long, allow_negative_numbers = true)]
        carbs: Option<f64>,

        /// Fat share of calories (%).
        #[arg(long, allow_negative_numbers = true)]
        fats: Option<f64>,

        /// Rescale the percentages to sum to 100 before computing.
        #[arg(long)]
        normalize: bool,
    },

    /// Load the catalog and report whether every record is valid.
    Validate,
}
