use clap::{Parser, Subcommand};

/// Command-line interface definition for WLog
/// CLI application to log daily OJT shifts and track required-hours progress
#[derive(Parser)]
#[command(
    name = "wlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple shift logging CLI: track OJT hours and your progress toward the required total",
    long_about = None
)]
pub struct Cli {
    /// Override store file path (useful for tests or a custom location)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty shift store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log the shifts worked on one day
    Add {
        /// Date of the shift (YYYY-MM-DD)
        date: String,

        /// Morning clock-in (H:MM on the 12-hour dial)
        #[arg(long = "morning-in", help = "Morning clock-in time (H:MM)")]
        morning_in: Option<String>,

        /// Morning clock-out (H:MM)
        #[arg(long = "morning-out", help = "Morning clock-out time (H:MM)")]
        morning_out: Option<String>,

        /// Afternoon clock-in (H:MM)
        #[arg(long = "afternoon-in", help = "Afternoon clock-in time (H:MM)")]
        afternoon_in: Option<String>,

        /// Afternoon clock-out (H:MM)
        #[arg(long = "afternoon-out", help = "Afternoon clock-out time (H:MM)")]
        afternoon_out: Option<String>,
    },

    /// Remove the logged entry for a date
    Del {
        date: String,

        #[arg(long = "yes", help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List logged entries, newest first
    List {
        #[arg(
            long = "plain",
            help = "Print raw `date minutes` rows in insertion order"
        )]
        plain: bool,
    },

    /// Show overall progress toward the required hours
    Status,

    /// Show the last seven days as a bar chart
    Week {
        #[arg(long = "date", help = "Use this date as today (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Show or set the required hours target
    Required {
        /// New target in hours; omit to print the current value
        hours: Option<String>,
    },

    /// Print the operations journal
    Journal {
        #[arg(long = "print", help = "Print the journal entries")]
        print: bool,
    },
}
