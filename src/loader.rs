//! Loading data files into a [`WordNet`].
//!
//! The loader selects data files, reads them line by line, parses every line
//! and feeds the entries to a [`GraphBuilder`]. Loading is all-or-nothing:
//! the first error aborts it and [`Loader::finish`] is never reached.
//!
//! # Examples
//!
//! ```
//! use wnram::config::WordNetConfig;
//! use wnram::loader::Loader;
//!
//! let mut loader = Loader::new(WordNetConfig::default()).unwrap();
//! loader
//!     .load_reader("data.noun", "00010600 04 n 01 punch 0 000 | a blow with the fist\n".as_bytes())
//!     .unwrap();
//! let wn = loader.finish().unwrap();
//! assert_eq!(wn.len(), 1);
//! ```

pub mod files;
pub mod records;

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};

use crate::config::WordNetConfig;
use crate::error::{Result, WordNetError};
use crate::graph::GraphBuilder;
use crate::parser::parse_line;
use crate::wordnet::WordNet;

pub use files::{collect_data_files, is_data_file};
pub use records::read_records;

/// Incremental, single-threaded loader.
#[derive(Debug)]
pub struct Loader {
    config: WordNetConfig,
    builder: GraphBuilder,
    sources: usize,
    entries: u64,
}

impl Loader {
    pub fn new(config: WordNetConfig) -> Result<Self> {
        config.validate()?;
        Ok(Loader {
            builder: GraphBuilder::new(config.redefinition),
            config,
            sources: 0,
            entries: 0,
        })
    }

    pub fn config(&self) -> &WordNetConfig {
        &self.config
    }

    /// Load a directory (recursively) or a single file.
    pub fn load_path(&mut self, path: &Path) -> Result<()> {
        if path.is_dir() {
            let files = collect_data_files(path, &self.config.file_prefix)?;
            if files.is_empty() {
                warn!(
                    "no files starting with {:?} under {}",
                    self.config.file_prefix,
                    path.display()
                );
            }
            for file in files {
                self.load_file(&file)?;
            }
            Ok(())
        } else {
            self.load_file(path)
        }
    }

    /// Load one data file, whatever its name.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let start = Instant::now();
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(self.config.read_buffer_size, file);
        let name = path.display().to_string();
        let before = self.entries;
        self.load_buffered(&name, reader)?;
        info!(
            "{} in {:?} ({} entries)",
            name,
            start.elapsed(),
            self.entries - before
        );
        Ok(())
    }

    /// Load data lines from any reader. `name` is used in error messages.
    pub fn load_reader<R: Read>(&mut self, name: &str, reader: R) -> Result<()> {
        let reader = BufReader::with_capacity(self.config.read_buffer_size, reader);
        self.load_buffered(name, reader)
    }

    fn load_buffered<R: BufRead>(&mut self, name: &str, reader: R) -> Result<()> {
        let verify_offsets = self.config.verify_offsets;
        let builder = &mut self.builder;
        let entries = &mut self.entries;

        read_records(reader, |data, line, offset| {
            let Some(entry) = parse_line(data, line).map_err(|e| e.in_source(name))? else {
                debug!("{name}:{line}: header line");
                return Ok(());
            };
            if verify_offsets && entry.offset.parse::<u64>().ok() != Some(offset) {
                return Err(WordNetError::format(
                    line,
                    format!("record offset {} does not match byte offset {offset}", entry.offset),
                )
                .in_source(name));
            }
            builder.add_entry(entry).map_err(|e| match e {
                WordNetError::Integrity(msg) => {
                    WordNetError::integrity(format!("{name}:{line}: {msg}"))
                }
                other => other,
            })?;
            *entries += 1;
            Ok(())
        })?;

        self.sources += 1;
        Ok(())
    }

    /// Check graph integrity and build the lemma index.
    pub fn finish(self) -> Result<WordNet> {
        let start = Instant::now();
        let graph = self.builder.build()?;
        let wordnet = WordNet::from_graph(graph);
        info!(
            "indexed {} synsets from {} sources ({} entries) in {:?}",
            wordnet.len(),
            self.sources,
            self.entries,
            start.elapsed()
        );
        Ok(wordnet)
    }
}
