//! Configuration for loading a WordNet database.
//!
//! # Examples
//!
//! ```
//! use wnram::config::{RedefinitionPolicy, WordNetConfig};
//!
//! let config = WordNetConfig::default();
//! assert_eq!(config.file_prefix, "data");
//! assert_eq!(config.redefinition, RedefinitionPolicy::Overwrite);
//!
//! let mut strict = WordNetConfig::default();
//! strict.redefinition = RedefinitionPolicy::Reject;
//! strict.verify_offsets = true;
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordNetError};

/// Buffer size used when reading data files (8 MiB).
pub const DEFAULT_READ_BUFFER_SIZE: usize = 8 * 1024 * 1024;

/// Settings that control how data files are selected and parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordNetConfig {
    /// Only files whose name starts with this prefix are loaded.
    pub file_prefix: String,
    /// What to do when the same identity is defined twice.
    pub redefinition: RedefinitionPolicy,
    /// Require every record's offset to equal its byte offset in the file.
    pub verify_offsets: bool,
    /// Capacity of the buffered reader, in bytes.
    pub read_buffer_size: usize,
}

impl Default for WordNetConfig {
    fn default() -> Self {
        Self {
            file_prefix: "data".to_string(),
            redefinition: RedefinitionPolicy::Overwrite,
            verify_offsets: false,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        }
    }
}

impl WordNetConfig {
    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WordNetError::config(format!(
                "Failed to read configuration file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: WordNetConfig = serde_json::from_str(&content).map_err(|e| {
            WordNetError::config(format!(
                "Failed to parse configuration JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.read_buffer_size == 0 {
            return Err(WordNetError::config("read_buffer_size must be positive"));
        }
        Ok(())
    }
}

/// Handling of a second defining line for an identity that is already
/// defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedefinitionPolicy {
    /// The later definition replaces the words and gloss. Relations from
    /// both definitions are kept.
    #[default]
    Overwrite,
    /// A second definition fails the load.
    Reject,
}
