use clap::{Args, Parser, Subcommand, ValueEnum};
use docfind::filter::{ConsultationType, SortBy};

#[derive(Parser, Debug)]
#[command(name = "docfind", bin_name = "docfind", version)]
#[command(about = "Find a doctor: search, filter and sort a doctor directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Where to load doctors from (http(s) URL or JSON file), overrides the config
    #[arg(long, global = true, value_name = "URL|PATH", help_heading = "Options")]
    pub source: Option<String>,

    /// Page query to start from (e.g. "search=shah&sortBy=fees")
    #[arg(long, global = true, value_name = "QUERY", help_heading = "Options")]
    pub query: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List doctors matching the filters
    #[command(alias = "ls", display_order = 1)]
    List(FilterArgs),

    /// Suggest doctor names for partially typed text
    #[command(display_order = 2)]
    Suggest {
        /// Text typed so far
        text: String,
    },

    /// List every speciality in the directory
    #[command(alias = "specs", display_order = 3)]
    Specialities,

    /// Browse interactively, reading commands from stdin
    #[command(display_order = 4)]
    Browse,

    /// Get or set configuration
    #[command(display_order = 5)]
    Config {
        /// Configuration key (source, page-url)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Filter flags. Each one given replaces the matching value from `--query`.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Match doctor names containing this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Consultation type
    #[arg(short = 't', long = "type", value_enum)]
    pub consultation: Option<ConsultationArg>,

    /// Speciality to include (repeatable, any selected one matches)
    #[arg(short = 'p', long = "speciality", value_name = "NAME")]
    pub specialities: Vec<String>,

    /// Sort order
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConsultationArg {
    Video,
    Clinic,
    All,
}

impl ConsultationArg {
    pub fn to_filter(self) -> Option<ConsultationType> {
        match self {
            ConsultationArg::Video => Some(ConsultationType::VideoConsult),
            ConsultationArg::Clinic => Some(ConsultationType::InClinic),
            ConsultationArg::All => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Fees,
    Experience,
    None,
}

impl SortArg {
    pub fn to_filter(self) -> Option<SortBy> {
        match self {
            SortArg::Fees => Some(SortBy::Fees),
            SortArg::Experience => Some(SortBy::Experience),
            SortArg::None => None,
        }
    }
}
