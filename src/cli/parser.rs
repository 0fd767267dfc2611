use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for emotrack
/// Emotion detection in text with SQLite-backed usage analytics
#[derive(Parser)]
#[command(
    name = "emotrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Emotion detection in text: classify, then monitor page visits and predictions stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override classifier model path
    #[arg(global = true, long = "model")]
    pub model: Option<String>,

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

    /// Maintain the telemetry database
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Home page: detect the emotion in a text
    Home {
        /// Text to classify
        text: Option<String>,
    },

    /// Monitor page: page and classifier metrics
    Monitor {
        #[arg(long = "pages", help = "Show only page metrics")]
        pages: bool,

        #[arg(long = "predictions", help = "Show only classifier metrics")]
        predictions: bool,
    },

    /// About page
    About,

    /// Export recorded history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long = "predictions",
            short = 'p',
            help = "Export predictions instead of page visits"
        )]
        predictions: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
