//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::dictionary::DictionaryFormat;
use crate::profile::ProfileKind;

#[derive(Parser)]
#[command(name = "poetics")]
#[command(about = "Guess the metre, rhyme scheme and form of a poem")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Print intermediate artifacts and debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Dictionary and language options shared by the analysis commands.
#[derive(Args, Debug, Clone, Default)]
pub struct DictArgs {
    /// Pronouncing dictionary file
    #[arg(short, long)]
    pub dict: Option<PathBuf>,

    /// Dictionary format (auto-detected if not specified)
    #[arg(short = 'f', long)]
    pub format: Option<DictionaryFormat>,

    /// Language profile
    #[arg(short, long)]
    pub profile: Option<ProfileKind>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Guess the poem's form
    Form {
        /// Poem file (reads stdin if omitted)
        poem: Option<PathBuf>,

        #[command(flatten)]
        dict: DictArgs,

        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the stress pattern of every line
    Scan {
        /// Poem file (reads stdin if omitted)
        poem: Option<PathBuf>,

        #[command(flatten)]
        dict: DictArgs,
    },

    /// Print the rhyme label of every line
    Rhyme {
        /// Poem file (reads stdin if omitted)
        poem: Option<PathBuf>,

        #[command(flatten)]
        dict: DictArgs,
    },

    /// Look up pronunciations and stress of words
    Lookup {
        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,

        #[command(flatten)]
        dict: DictArgs,
    },

    /// Show or update user settings
    Settings {
        /// Set default dictionary path
        #[arg(long)]
        set_dict: Option<PathBuf>,

        /// Set default language profile
        #[arg(long)]
        set_profile: Option<ProfileKind>,

        /// Set default verbosity
        #[arg(long)]
        set_verbose: Option<bool>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
