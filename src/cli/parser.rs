use crate::export::OutputFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rShiftCheck
/// Labor-rule compliance checks for restaurant shifts
#[derive(Parser)]
#[command(
    name = "rshiftcheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Check shifts against daily hours, amplitude and rest-period limits",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or per-site rules)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Check a single shift
    Check {
        /// Clock-in (YYYY-MM-DD HH:MM or RFC 3339)
        #[arg(long = "in", help = "Clock-in date-time (YYYY-MM-DD HH:MM)")]
        start: String,

        /// Clock-out (YYYY-MM-DD HH:MM or RFC 3339)
        #[arg(long = "out", help = "Clock-out date-time (YYYY-MM-DD HH:MM)")]
        end: String,

        /// Unpaid break in minutes
        #[arg(
            long = "break",
            default_value_t = 0,
            allow_negative_numbers = true,
            help = "Unpaid break duration in minutes"
        )]
        break_minutes: i64,

        #[arg(
            long = "prev-in",
            requires = "prev_end",
            help = "Clock-in of the previous shift"
        )]
        prev_start: Option<String>,

        #[arg(
            long = "prev-out",
            requires = "prev_start",
            help = "Clock-out of the previous shift"
        )]
        prev_end: Option<String>,

        #[arg(long, value_enum, help = "Output format (default from configuration)")]
        format: Option<OutputFormat>,

        #[arg(long, help = "Skip input validation (malformed spans are evaluated as-is)")]
        lenient: bool,

        #[arg(long = "fail-on-block", help = "Exit with status 2 on a BLOCK finding")]
        fail_on_block: bool,
    },

    /// Check every shift of a CSV or JSON file, per employee
    Batch {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, help = "Output format (default from configuration)")]
        format: Option<OutputFormat>,

        #[arg(long, help = "Skip input validation (malformed spans are evaluated as-is)")]
        lenient: bool,

        #[arg(long = "fail-on-block", help = "Exit with status 2 on a BLOCK finding")]
        fail_on_block: bool,
    },
}
