use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lyricbook", version)]
#[command(about = "Store, search and fetch song lyrics", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this lyrics file instead of ~/.lyricbook.json
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new song to your lyricbook
    Add {
        artist: String,
        song: String,
        lyrics: String,
    },

    /// Fetch lyrics from Genius and save them
    Fetch { artist: String, song: String },

    /// List all saved songs
    #[command(alias = "ls")]
    List,

    /// View lyrics for a specific song
    #[command(alias = "v")]
    View { artist: String, song: String },

    /// Search lyrics for a word or phrase
    Search { term: String },

    /// Remove a song from your lyricbook
    #[command(alias = "rm")]
    Remove { artist: String, song: String },

    /// Show the effective configuration
    Config,
}
