use crate::export::{ExportFormat, ExportView};
use clap::{Parser, Subcommand};

/// Command-line interface definition for hiasify
#[derive(Parser)]
#[command(
    name = "hiasify",
    version = env!("CARGO_PKG_VERSION"),
    about = "Listening statistics from a Spotify extended streaming history export (my_spotify_data.zip)",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the configuration in use")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing keys")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing keys with their default values")]
        migrate: bool,

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

    /// List the years selectable in the wrapped view
    Years,

    /// Top tracks, artists and albums over the whole history
    Alltime {
        /// Exported archive (zip or tar.gz)
        archive: String,

        /// Only rows containing this text (case-insensitive)
        #[arg(long, short)]
        search: Option<String>,

        /// Rows per table (0 = all; default from config)
        #[arg(long, short)]
        limit: Option<usize>,
    },

    /// Year in review: top tracks and artists of one year
    Wrapped {
        /// Exported archive (zip or tar.gz)
        archive: String,

        /// Year to show (default: first configured year)
        #[arg(long, short)]
        year: Option<i32>,

        /// Rows per table (0 = all; default from config)
        #[arg(long, short)]
        limit: Option<usize>,
    },

    /// Export one table to a file
    Export {
        /// Exported archive (zip or tar.gz)
        archive: String,

        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Table to export
        #[arg(long, value_enum, default_value = "tracks")]
        view: ExportView,

        /// Year for the wrapped views
        #[arg(long)]
        year: Option<i32>,

        /// Search filter for the all-time views
        #[arg(long)]
        search: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
