use crate::core::calculator::normalizer::OddLengthPolicy;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line interface definition for rAppearance
/// Measures how long lesson, pupil and tutor were all present together
#[derive(Parser)]
#[command(
    name = "rappearance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute the time during which the lesson, the pupil and the tutor were all present",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v debug, -vv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the overlap for one attendance record (JSON)
    Compute {
        /// Attendance JSON file, or '-' / nothing for stdin
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        #[arg(long = "details", help = "Show overlap segments and per-role presence")]
        details: bool,

        #[arg(
            long = "odd-length",
            value_enum,
            help = "Override how odd-length timestamp lists are handled"
        )]
        odd_length: Option<OddLengthPolicy>,
    },

    /// Export the overlap segments of an attendance record
    Export {
        #[arg(long, value_name = "FILE")]
        input: PathBuf,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "out", value_name = "FILE")]
        out: PathBuf,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Run the built-in reference cases
    Check,

    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Replace an existing configuration file")]
        force: bool,
    },

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration as YAML")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },
}
