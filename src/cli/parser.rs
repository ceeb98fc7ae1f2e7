use crate::core::patch::EntryPatch;
use crate::export::ExportFormat;
use crate::models::timesheet::TimesheetId;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI application to fill, submit and export weekly timesheets
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A weekly timesheet CLI: fill drafts, submit them for approval and export them",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Diagnostic log filter (overridden by RUST_LOG), e.g. "debug" or "rtimesheet=trace"
    #[arg(global = true, long = "log-level", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Print the seven days of a week as they appear in a new timesheet
    Week {
        /// First day of the week (YYYY-MM-DD), defaults to this week's Monday
        #[arg(long = "start")]
        start: Option<String>,
    },

    /// Create a new timesheet (saved as draft unless --submit)
    New {
        /// First day of the week (YYYY-MM-DD), defaults to this week's Monday
        #[arg(long = "start")]
        start: Option<String>,

        #[arg(long = "client", help = "Customer name (default from config)")]
        client: Option<String>,

        #[arg(long = "manager", help = "Approving manager (default from config)")]
        manager: Option<String>,

        /// Fill a day: DAY is mon..sun, 1..7 or a date of the week
        #[arg(long = "set", value_name = "DAY=HOURS[:DESCRIPTION]")]
        set: Vec<EntryPatch>,

        #[arg(long = "submit", help = "Submit for approval instead of saving a draft")]
        submit: bool,
    },

    /// Change a draft and save it again (or submit it)
    Edit {
        /// Timesheet id
        id: TimesheetId,

        /// Move the sheet to another week (clears all days)
        #[arg(long = "start")]
        start: Option<String>,

        #[arg(long = "client")]
        client: Option<String>,

        #[arg(long = "manager")]
        manager: Option<String>,

        /// Fill a day: DAY is mon..sun, 1..7 or a date of the week
        #[arg(long = "set", value_name = "DAY=HOURS[:DESCRIPTION]")]
        set: Vec<EntryPatch>,

        #[arg(long = "submit", help = "Submit for approval after applying the changes")]
        submit: bool,
    },

    /// Submit a draft for approval
    Submit {
        /// Timesheet id
        id: TimesheetId,
    },

    /// List timesheet history, newest first
    List {
        #[arg(long = "status", help = "Only show draft, submitted, approved or rejected sheets")]
        status: Option<String>,
    },

    /// Show the days of a timesheet
    Show {
        /// Timesheet id
        id: TimesheetId,
    },

    /// Delete a draft
    Del {
        /// Timesheet id
        id: TimesheetId,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export a timesheet (printable HTML, JSON or CSV)
    Export {
        /// Timesheet id
        id: TimesheetId,

        #[arg(long, value_enum, default_value = "html")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: <export_prefix>-<MMDDYY>.<ext> in the current directory)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Print the internal log table (audit rows and applied migrations)
    Log {
        /// Kept for compatibility: printing is the default
        #[arg(long = "print", hide = true)]
        print: bool,
    },
}
