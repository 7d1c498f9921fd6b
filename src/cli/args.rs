//! Command line argument parsing for the wnram CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::pos::PartOfSpeech;
use crate::relation::Relation;

/// wnram - query an in-memory WordNet database
#[derive(Parser, Debug, Clone)]
#[command(name = "wnram")]
#[command(about = "Query an in-memory WordNet database")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WnramArgs {
    /// WordNet dictionary directory (or a single data file)
    #[arg(short, long, value_name = "DICT", env = "WNRAM_DICT")]
    pub dict: PathBuf,

    /// Loader configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WnramArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Look up a word and show its senses and relations
    Lookup(LookupArgs),

    /// List synsets in load order
    List(ListArgs),

    /// Show database statistics
    Stats,
}

/// Arguments for looking up a word
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Word or collocation to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Restrict to parts of speech (n, v, a, r; comma separated)
    #[arg(short, long, value_delimiter = ',')]
    pub pos: Vec<PartOfSpeech>,

    /// Relations to follow (e.g. antonym,hypernym; default: all)
    #[arg(short, long, value_delimiter = ',', value_parser = parse_relation)]
    pub relation: Vec<Relation>,
}

impl LookupArgs {
    /// Union of the requested relations, or every relation when none was
    /// given.
    pub fn relation_mask(&self) -> Relation {
        if self.relation.is_empty() {
            return Relation::ANY;
        }
        self.relation
            .iter()
            .fold(Relation::NONE, |mask, relation| mask | *relation)
    }
}

/// Arguments for listing synsets
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Restrict to parts of speech (n, v, a, r; comma separated)
    #[arg(short, long, value_delimiter = ',')]
    pub pos: Vec<PartOfSpeech>,

    /// Maximum number of synsets to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn parse_relation(name: &str) -> Result<Relation, String> {
    Relation::parse_name(name).ok_or_else(|| format!("unknown relation: {name}"))
}
