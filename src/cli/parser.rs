use crate::export::ExportFormat;
use crate::input::InputFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for alibi
#[derive(Parser)]
#[command(
    name = "alibi",
    version = env!("CARGO_PKG_VERSION"),
    about = "Check suspects' recorded activities against a crime window and report who has an alibi",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Evaluate a case and print the alibi report
    Check {
        /// Case file; reads stdin when omitted or "-"
        file: Option<String>,

        #[arg(long, value_enum, help = "Input format (defaults to the configured one)")]
        format: Option<InputFormat>,

        #[arg(long, help = "Show merged unavailability and free gaps per suspect")]
        details: bool,

        #[arg(long = "no-color", help = "Disable ANSI colours in the report")]
        no_color: bool,

        #[arg(long = "no-log", help = "Do not record this evaluation in the database")]
        no_log: bool,
    },

    /// Evaluate a case and export the verdicts
    Export {
        /// Case file; reads stdin when omitted or "-"
        input: Option<String>,

        #[arg(long = "input-format", value_enum)]
        input_format: Option<InputFormat>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,

        #[arg(long = "no-log", help = "Do not record this evaluation in the database")]
        no_log: bool,
    },

    /// Print the internal log or the recorded evaluations
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "evaluations", help = "List recorded evaluations")]
        evaluations: bool,
    },
}
