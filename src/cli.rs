//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can render the man page from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::time::parse_time;

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("SUBPLAY_BUILD_DATE"),
    ")"
);

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SUBPLAY_BUILD_DATE"),
    ")"
);

/// Synchronized subtitle player for the terminal
#[derive(Debug, Parser)]
#[command(name = "subplay", version = VERSION, about, long_about = None)]
#[command(after_help = "\
Times accept HH:MM:SS[.mmm], MM:SS or plain milliseconds.
Set SUBPLAY_LOG (e.g. SUBPLAY_LOG=debug) to control log output.")]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a SubRip (.srt) file in the terminal
    Play {
        /// Subtitle file to play
        file: PathBuf,

        /// Position to start playback from
        #[arg(long, value_name = "TIME", value_parser = parse_time)]
        start: Option<u64>,

        /// Timer interval in milliseconds (overrides the config file)
        #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,

        /// Arrow-key seek step in milliseconds (overrides the config file)
        #[arg(long, value_name = "MS")]
        step: Option<u64>,

        /// Print subtitles line by line instead of the full-screen player
        #[arg(long)]
        plain: bool,
    },

    /// Show a summary of a subtitle file
    Info {
        /// Subtitle file to inspect
        file: PathBuf,

        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the subtitle shown at a given time
    At {
        /// Subtitle file to look up
        file: PathBuf,

        /// Playback position
        #[arg(value_parser = parse_time)]
        time: u64,
    },

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the current configuration as TOML
    Show,
    /// Print the location of the configuration file
    Path,
    /// Open the configuration file in $EDITOR
    Edit,
    /// Reset display settings to their defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
