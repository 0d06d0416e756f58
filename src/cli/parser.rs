use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for eldlog
/// Render drivers' daily logs from duty-status checkpoints
#[derive(Parser)]
#[command(
    name = "eldlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render drivers' daily duty-status log sheets from trip log JSON",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the standard one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose diagnostics on stderr (-v debug, -vv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the log sheet of every day (or a single day)
    Render {
        /// Trip logs JSON file
        file: PathBuf,

        #[arg(long = "day", help = "Only render this day number")]
        day: Option<u32>,

        #[arg(
            long = "close-day",
            help = "Let the last status of each day run to 24:00"
        )]
        close_day: bool,
    },

    /// Validate every day of a trip log without rendering it
    Check {
        /// Trip logs JSON file
        file: PathBuf,
    },

    /// Export the derived sheets
    Export {
        /// Trip logs JSON file
        file: PathBuf,

        #[arg(long, value_enum, help = "Export format: csv or json")]
        format: ExportFormat,

        #[arg(long = "out", value_name = "FILE", help = "Output file path")]
        out: String,

        #[arg(long = "day", help = "Only export this day number")]
        day: Option<u32>,

        #[arg(
            long = "close-day",
            help = "Let the last status of each day run to 24:00"
        )]
        close_day: bool,

        #[arg(long, help = "Overwrite an existing output file without asking")]
        force: bool,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },
}
