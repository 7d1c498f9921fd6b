//! # wnram
//!
//! An in-memory reader for the Princeton WordNet lexical database.
//!
//! ## Features
//!
//! - Loads WordNet 3.x `data.*` files into a cross-referenced synset graph
//! - Case- and whitespace-insensitive lemma lookup with part-of-speech filters
//! - Semantic and word-level (syntactic) relations selected by bit masks
//! - Adjective satellites, adjective markers and verb frames
//! - Read-only handle that can be shared between threads
//! - Example CLI with human and JSON output

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod index;
pub mod loader;
pub mod parser;
pub mod pos;
pub mod relation;
pub mod wordnet;

pub use config::{RedefinitionPolicy, WordNetConfig};
pub use error::{Result, WordNetError};
pub use graph::SynsetKey;
pub use pos::PartOfSpeech;
pub use relation::Relation;
pub use wordnet::{Lookup, WordNet, WordNetStats};

pub mod prelude {
    pub use crate::config::{RedefinitionPolicy, WordNetConfig};
    pub use crate::error::{Result, WordNetError};
    pub use crate::pos::PartOfSpeech;
    pub use crate::relation::Relation;
    pub use crate::wordnet::{Lookup, WordNet};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
