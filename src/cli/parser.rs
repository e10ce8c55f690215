use crate::import::reconcile::DuplicateStrategy;
use crate::models::EventType;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for bitacora
#[derive(Parser)]
#[command(
    name = "bitacora",
    version = env!("CARGO_PKG_VERSION"),
    about = "A delivery log book: record events, search them, export and import CSV",
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

/// Form fields shared by `add`, `edit` and `draft save`.
#[derive(Args, Debug, Clone, Default)]
pub struct EventFields {
    /// Date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Event type
    #[arg(long = "type", value_enum)]
    pub kind: Option<EventType>,

    /// Route (optional free text)
    #[arg(long)]
    pub route: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    /// Description; embedded newlines are kept
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor")]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a new event (date defaults to today)
    Add {
        #[command(flatten)]
        fields: EventFields,

        /// Fill missing fields from the saved draft
        #[arg(long = "from-draft")]
        from_draft: bool,
    },

    /// Edit an existing event; id and creation time are kept
    Edit {
        id: i64,

        #[command(flatten)]
        fields: EventFields,
    },

    /// Delete an event by id
    Del {
        id: i64,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Delete ALL events
    Clear {
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List events (newest first) with search, filters and pagination
    List {
        /// Case-insensitive text search over title, description and route
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Only events on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        #[arg(long = "type", value_enum)]
        kind: Option<EventType>,

        /// Page number (1-based)
        #[arg(long, short = 'p', default_value_t = 1)]
        page: usize,

        /// Items per page (0 = all); defaults to the configured value
        #[arg(long = "per-page")]
        per_page: Option<usize>,

        /// Show full descriptions
        #[arg(long)]
        details: bool,
    },

    /// Show counters: total, today, per type
    Stats,

    /// Export all events to CSV
    Export {
        /// Output directory (file name is generated)
        #[arg(long, value_name = "DIR", conflicts_with = "file")]
        dir: Option<String>,

        /// Explicit output file
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import events from a CSV file
    Import {
        #[arg(value_name = "FILE")]
        file: String,

        /// What to do with duplicates; asked interactively when omitted
        #[arg(long = "on-duplicate", value_enum)]
        on_duplicate: Option<DuplicateStrategy>,
    },

    /// Manage the unsaved form draft
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },
}

#[derive(Subcommand)]
pub enum DraftAction {
    /// Save (or update) the draft
    Save {
        #[command(flatten)]
        fields: EventFields,
    },
    /// Show the saved draft
    Show,
    /// Discard the saved draft
    Discard,
}
