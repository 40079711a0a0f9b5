use crate::config::Backend;
use crate::export::ExportFormat;
use crate::models::Profile;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rollcall
/// CLI application to run attendance check-in against a roster
#[derive(Parser)]
#[command(
    name = "rollcall",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance check-in: stamp arrivals and departures against a roster, manage scores and export reports",
    long_about = None
)]
pub struct Cli {
    /// Use another configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the roster store path (CSV file or sheet database)
    #[arg(global = true, long = "store", value_name = "PATH")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and seed the roster store
    Init {
        /// Roster layout: roll-call (name, check-out, scores) or offline (email, check-in only)
        #[arg(long, value_enum)]
        profile: Option<Profile>,

        /// Backing store: csv (local file) or sheet (worksheet database)
        #[arg(long, value_enum)]
        backend: Option<Backend>,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "upgrade",
            help = "Rewrite the configuration file with missing fields filled in"
        )]
        upgrade: bool,

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

    /// Check in (first time) or check out (second time) an attendee
    Checkin {
        /// Name or email, as listed in the roster
        key: String,
    },

    /// Administrator commands (password required)
    Admin {
        /// Admin password from the configuration
        #[arg(long, short = 'p')]
        password: String,

        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
pub enum AdminAction {
    /// Show the roster with check-in status and scores
    List,

    /// Add points to an attendee (negative values subtract)
    Score {
        /// Attendee key
        key: String,

        /// Points to add (default from config, usually 5)
        #[arg(long, short = 'n', allow_negative_numbers = true)]
        points: Option<i64>,
    },

    /// Add an attendee with empty times and score 0
    Add {
        /// Name or email of the new attendee
        key: String,
    },

    /// Remove an attendee from the roster
    Remove {
        /// Attendee key
        key: String,
    },

    /// Edit fields of one attendee (empty value clears a time)
    Set {
        /// Attendee key
        key: String,

        /// Check-in time (HH:MM, "" to clear)
        #[arg(long = "in")]
        check_in: Option<String>,

        /// Check-out time (HH:MM, "" to clear)
        #[arg(long = "out")]
        check_out: Option<String>,

        /// Score value
        #[arg(long, allow_negative_numbers = true)]
        score: Option<i64>,

        /// Channel tag (e.g. OFFLINE, "" to clear)
        #[arg(long)]
        mode: Option<String>,
    },

    /// Replace the whole roster with an edited CSV file
    Import {
        /// CSV file with the same header as the roster
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Download the roster as a report
    Export {
        /// Export format: csv, json, xlsx
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (default: <prefix>_Report_<date>.<ext> in the current directory)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the check-in page address to share with attendees
    Url,
}
