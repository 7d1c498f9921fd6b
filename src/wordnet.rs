//! The read-only database handle.
//!
//! A [`WordNet`] owns the synset arena and the lemma index. It is built once
//! by a loader and never changes afterwards, so it can be shared between
//! threads without locking.
//!
//! # Examples
//!
//! ```
//! use wnram::{PartOfSpeech, Relation, WordNet};
//!
//! let data = "\
//! 00001740 00 a 01 good 0 001 ! 00001900 a 0101 | having desirable qualities
//! 00001900 00 a 01 bad 0 001 ! 00001740 a 0101 | having undesirable qualities
//! ";
//! let wn = WordNet::from_reader("data.adj", data.as_bytes()).unwrap();
//!
//! let found = wn.lookup("Good", &[PartOfSpeech::Adjective]).unwrap();
//! assert_eq!(found.len(), 1);
//! let antonyms: Vec<_> = found[0]
//!     .related(Relation::ANTONYM)
//!     .iter()
//!     .map(|l| l.word().to_string())
//!     .collect();
//! assert_eq!(antonyms, vec!["bad"]);
//! ```

pub mod lookup;
pub mod stats;

use std::borrow::Cow;
use std::io::Read;
use std::path::Path;

use crate::config::WordNetConfig;
use crate::error::{Result, WordNetError};
use crate::graph::Graph;
use crate::index::{LemmaIndex, normalize};
use crate::loader::Loader;
use crate::pos::PartOfSpeech;

pub use lookup::Lookup;
pub use stats::WordNetStats;

/// An initialized, read-only, in-memory WordNet database.
#[derive(Debug, Clone)]
pub struct WordNet {
    graph: Graph,
    index: LemmaIndex,
}

impl WordNet {
    /// Load every data file under `path` (a directory or a single file) with
    /// the default configuration.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, &WordNetConfig::default())
    }

    pub fn open_with_config<P: AsRef<Path>>(path: P, config: &WordNetConfig) -> Result<Self> {
        let mut loader = Loader::new(config.clone())?;
        loader.load_path(path.as_ref())?;
        loader.finish()
    }

    /// Load a single stream of data lines. `name` is used in error messages.
    pub fn from_reader<R: Read>(name: &str, reader: R) -> Result<Self> {
        let mut loader = Loader::new(WordNetConfig::default())?;
        loader.load_reader(name, reader)?;
        loader.finish()
    }

    /// Index a finished graph.
    pub(crate) fn from_graph(graph: Graph) -> Self {
        let index = LemmaIndex::build(&graph);
        WordNet { graph, index }
    }

    /// Look up synsets containing `text`. An empty `pos` filter accepts
    /// every part of speech. No match yields an empty vector.
    pub fn lookup<'a>(&'a self, text: &str, pos: &[PartOfSpeech]) -> Result<Vec<Lookup<'a>>> {
        if text.is_empty() {
            return Err(WordNetError::query(
                "empty string passed as criteria to lookup",
            ));
        }
        let key = normalize(text);
        let found = self
            .index
            .get(&key)
            .iter()
            .filter(|id| self.graph.synset(**id).pos().matches(pos))
            .map(|id| Lookup::new(Cow::Owned(text.to_string()), *id, &self.graph))
            .collect();
        Ok(found)
    }

    /// Visit every synset (optionally filtered by part of speech) in
    /// construction order. The first error returned by `visitor` stops the
    /// traversal and is returned unchanged.
    pub fn iterate<'a, F, E>(&'a self, pos: &[PartOfSpeech], mut visitor: F) -> std::result::Result<(), E>
    where
        F: FnMut(Lookup<'a>) -> std::result::Result<(), E>,
    {
        for (id, synset) in self.graph.iter() {
            if synset.pos().matches(pos) {
                visitor(Lookup::at_lemma(id, &self.graph))?;
            }
        }
        Ok(())
    }

    /// The traversal of [`WordNet::iterate`] as an iterator.
    pub fn iter<'a>(&'a self, pos: &'a [PartOfSpeech]) -> impl Iterator<Item = Lookup<'a>> + 'a {
        self.graph
            .iter()
            .filter(move |(_, synset)| synset.pos().matches(pos))
            .map(move |(id, _)| Lookup::at_lemma(id, &self.graph))
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn index(&self) -> &LemmaIndex {
        &self.index
    }

    /// Number of synsets.
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn stats(&self) -> WordNetStats {
        WordNetStats::collect(&self.graph, &self.index)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::relation::Relation;

    const DATA: &str = "  1 test data
00001740 00 a 01 good 0 002 ! 00001900 a 0101 & 00002200 s 0000 | having desirable qualities
00001900 00 a 01 bad 0 001 ! 00001740 a 0101 | having undesirable qualities
00002200 00 s 02 amazing 0 awesome 0 001 & 00001740 a 0000 | inspiring awe
00010000 03 n 01 good 0 001 = 00001740 a 0000 | benefit
";

    fn load() -> WordNet {
        WordNet::from_reader("test", DATA.as_bytes()).unwrap()
    }

    fn words(lookups: &[Lookup<'_>]) -> BTreeSet<String> {
        lookups.iter().map(|l| l.word().to_string()).collect()
    }

    #[test]
    fn test_lookup_filters_pos() {
        let wn = load();
        assert_eq!(wn.lookup("good", &[]).unwrap().len(), 2);
        let adj = wn.lookup("good", &[PartOfSpeech::Adjective]).unwrap();
        assert_eq!(adj.len(), 1);
        assert_eq!(adj[0].pos(), PartOfSpeech::Adjective);
        assert!(wn.lookup("good", &[PartOfSpeech::Verb]).unwrap().is_empty());
        assert!(wn.lookup("nonexistent", &[]).unwrap().is_empty());
    }

    #[test]
    fn test_lookup_empty_text() {
        let wn = load();
        assert!(matches!(wn.lookup("", &[]), Err(WordNetError::Query(_))));
    }

    #[test]
    fn test_lookup_keeps_search_text() {
        let wn = load();
        let found = wn.lookup(" AWESOME ", &[]).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].word(), " AWESOME ");
        assert_eq!(found[0].lemma(), "amazing");
        assert!(found[0].is_satellite());

        // syntactic relations are matched against the normalized search text
        let good = wn.lookup("  GOOD ", &[PartOfSpeech::Adjective]).unwrap();
        assert_eq!(good[0].related(Relation::ANTONYM).len(), 1);
    }

    #[test]
    fn test_related_semantic_and_syntactic() {
        let wn = load();
        let good = wn.lookup("good", &[PartOfSpeech::Adjective]).unwrap();
        assert_eq!(words(&good[0].related(Relation::ANTONYM)), BTreeSet::from(["bad".to_string()]));
        assert_eq!(
            words(&good[0].related(Relation::SIMILAR_TO)),
            BTreeSet::from(["amazing".to_string()])
        );
        assert!(good[0].related(Relation::HYPERNYM).is_empty());

        let both = good[0].related(Relation::ANTONYM | Relation::SIMILAR_TO);
        assert_eq!(both.len(), 2);
        let kinds: Vec<Relation> = good[0]
            .relations(Relation::ANY)
            .into_iter()
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(kinds, vec![Relation::SIMILAR_TO, Relation::ANTONYM]);
    }

    #[test]
    fn test_syntactic_relations_only_from_searched_word() {
        let data = "\
00000001 00 a 02 good 0 right 0 001 ! 00000002 a 0101 | ok
00000002 00 a 01 bad 0 001 ! 00000001 a 0101 | not ok
";
        let wn = WordNet::from_reader("test", data.as_bytes()).unwrap();
        let right = wn.lookup("right", &[]).unwrap();
        assert!(right[0].related(Relation::ANTONYM).is_empty());
        let good = wn.lookup("good", &[]).unwrap();
        assert_eq!(good[0].related(Relation::ANTONYM).len(), 1);
    }

    #[test]
    fn test_iterate() {
        let wn = load();
        let mut seen = Vec::new();
        wn.iterate(&[PartOfSpeech::Adjective], |l| {
            seen.push(l.word().to_string());
            Ok::<(), WordNetError>(())
        })
        .unwrap();
        assert_eq!(seen, vec!["good", "bad", "amazing"]);

        let mut count = 0;
        wn.iterate(&[], |_| {
            count += 1;
            Ok::<(), WordNetError>(())
        })
        .unwrap();
        assert_eq!(count, 4);
        assert_eq!(wn.iter(&[]).count(), 4);
        // restartable
        assert_eq!(wn.iter(&[]).count(), 4);
    }

    #[test]
    fn test_iterate_stops_on_error() {
        let wn = load();
        let mut visited = 0;
        let result = wn.iterate(&[], |l| {
            visited += 1;
            if l.lemma() == "bad" {
                Err(format!("stop at {}", l.word()))
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("stop at bad".to_string()));
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_describe() {
        let wn = load();
        let found = wn.lookup("awesome", &[]).unwrap();
        assert_eq!(found[0].to_string(), "\"awesome\" (adj)");
        let dump = found[0].describe();
        assert!(dump.contains("Synonyms: amazing, awesome"));
        assert!(dump.contains("| inspiring awe"));
    }

    #[test]
    fn test_stats() {
        let stats = load().stats();
        assert_eq!(stats.synsets, 4);
        assert_eq!(stats.words, 5);
        assert_eq!(stats.lemmas, 4);
        assert_eq!(stats.semantic_relations, 3);
        assert_eq!(stats.syntactic_relations, 2);
        assert_eq!(stats.satellites, 1);
        assert_eq!(stats.synsets_by_pos[&PartOfSpeech::Adjective], 3);
        assert_eq!(stats.synsets_by_pos[&PartOfSpeech::Noun], 1);
    }

    #[test]
    fn test_handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WordNet>();

        let wn = load();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    let found = wn.lookup("bad", &[]).unwrap();
                    assert_eq!(found[0].related(Relation::ANTONYM)[0].word(), "good");
                });
            }
        });
    }
}
