//! Two-phase graph construction.
//!
//! The first reference to an identity, whether its own defining line or a
//! pointer from another line, reserves a slot in the arena. The defining line
//! fills the slot in. Data files point at records by byte offset regardless
//! of file order, so this needs a single pass and a single identity table.

use ahash::AHashMap;
use log::warn;

use crate::config::RedefinitionPolicy;
use crate::error::{Result, WordNetError};
use crate::graph::Graph;
use crate::graph::synset::{
    SemanticRelation, Synset, SynsetId, SynsetKey, SyntacticRelation, Word,
};
use crate::parser::{ParsedEntry, RelationNature};

/// Accumulates parsed entries into a [`Graph`].
#[derive(Debug)]
pub struct GraphBuilder {
    synsets: Vec<Synset>,
    by_key: AHashMap<SynsetKey, SynsetId>,
    redefinition: RedefinitionPolicy,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(RedefinitionPolicy::default())
    }
}

impl GraphBuilder {
    pub fn new(redefinition: RedefinitionPolicy) -> Self {
        GraphBuilder {
            synsets: Vec::new(),
            by_key: AHashMap::new(),
            redefinition,
        }
    }

    /// Number of identities seen so far, defined or not.
    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    /// Find the slot for `key`, reserving a placeholder if it is new.
    fn resolve(&mut self, key: SynsetKey) -> SynsetId {
        if let Some(id) = self.by_key.get(&key) {
            return *id;
        }
        let id = SynsetId(self.synsets.len() as u32);
        self.synsets.push(Synset::placeholder(key.clone()));
        self.by_key.insert(key, id);
        id
    }

    /// Merge one parsed entry into the graph.
    pub fn add_entry(&mut self, entry: ParsedEntry) -> Result<SynsetId> {
        let pos = entry.pos();
        let key = SynsetKey::new(entry.offset, pos);
        let id = self.resolve(key);

        {
            let synset = &mut self.synsets[id.index()];
            if synset.defined {
                match self.redefinition {
                    RedefinitionPolicy::Reject => {
                        return Err(WordNetError::integrity(format!(
                            "synset {} is defined more than once",
                            synset.key
                        )));
                    }
                    RedefinitionPolicy::Overwrite => {
                        warn!(
                            "synset {} redefined, replacing its words and gloss",
                            synset.key
                        );
                    }
                }
            }
            synset.pos = pos;
            synset.satellite = entry.pos_code.is_satellite();
            synset.lex_filenum = entry.lex_filenum;
            synset.gloss = entry.gloss;
            synset.frames = entry.frames;
            synset.words = entry
                .words
                .into_iter()
                .map(|w| Word {
                    text: w.text,
                    sense: w.sense,
                    marker: w.marker,
                    relations: Vec::new(),
                })
                .collect();
            synset.defined = true;
        }

        for parsed in entry.relations {
            let target = self.resolve(SynsetKey::new(parsed.target_offset, parsed.target_pos));
            let synset = &mut self.synsets[id.index()];
            match parsed.nature {
                RelationNature::Semantic => synset.relations.push(SemanticRelation {
                    relation: parsed.relation,
                    target,
                }),
                RelationNature::Syntactic {
                    source,
                    target: target_word,
                } => {
                    if source >= synset.words.len() {
                        return Err(WordNetError::integrity(format!(
                            "synset {}: bogus relation source word {} (words: {})",
                            synset.key,
                            source + 1,
                            synset.words.len()
                        )));
                    }
                    synset.words[source].relations.push(SyntacticRelation {
                        relation: parsed.relation,
                        target,
                        target_word,
                    });
                }
            }
        }

        Ok(id)
    }

    /// Run the post-pass integrity checks and freeze the arena.
    pub fn build(self) -> Result<Graph> {
        for synset in &self.synsets {
            if synset.words.is_empty() {
                return Err(WordNetError::integrity(format!(
                    "synset {} is referenced but never defined",
                    synset.key
                )));
            }
        }
        for synset in &self.synsets {
            for word in &synset.words {
                for rel in &word.relations {
                    let target = &self.synsets[rel.target.index()];
                    if rel.target_word >= target.words.len() {
                        return Err(WordNetError::integrity(format!(
                            "synset {}: {} relation from {:?} points at word {} of {} (words: {})",
                            synset.key,
                            rel.relation,
                            word.text,
                            rel.target_word + 1,
                            target.key,
                            target.words.len()
                        )));
                    }
                }
            }
        }
        Ok(Graph::new(self.synsets, self.by_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;
    use crate::pos::PartOfSpeech;
    use crate::relation::Relation;

    fn add(builder: &mut GraphBuilder, line: &str) -> Result<SynsetId> {
        let entry = parse_line(line.as_bytes(), 100)?.unwrap();
        builder.add_entry(entry)
    }

    #[test]
    fn test_forward_reference_is_filled() {
        let mut builder = GraphBuilder::default();
        let food = add(&mut builder, "00010000 03 n 01 food 0 001 ~ 00010200 n 0000 | nutrient").unwrap();
        assert_eq!(builder.len(), 2);
        let chocolate =
            add(&mut builder, "00010200 13 n 01 chocolate 0 001 @ 00010000 n 0000 | cacao").unwrap();
        assert_eq!(builder.len(), 2);

        let graph = builder.build().unwrap();
        assert_eq!(graph.synset(food).relations()[0].target, chocolate);
        assert_eq!(graph.synset(chocolate).lemma(), "chocolate");
        assert_eq!(graph.synset(chocolate).relations()[0].relation, Relation::HYPERNYM);
        assert_eq!(graph.synset(chocolate).relations()[0].target, food);
    }

    #[test]
    fn test_identity_includes_pos() {
        let mut builder = GraphBuilder::default();
        let noun = add(&mut builder, "00001740 00 n 01 entity 0 000 | a thing").unwrap();
        let verb = add(&mut builder, "00001740 29 v 01 breathe 0 000 | draw air").unwrap();
        assert_ne!(noun, verb);
        let graph = builder.build().unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(
            graph.find(&SynsetKey::new("00001740", PartOfSpeech::Verb)),
            Some(verb)
        );
    }

    #[test]
    fn test_dangling_reference_fails() {
        let mut builder = GraphBuilder::default();
        add(&mut builder, "00001740 00 a 01 good 0 001 & 00009999 a 0000 | fine").unwrap();
        let err = builder.build().unwrap_err();
        assert!(err.is_integrity());
        assert!(err.to_string().contains("00009999/adj"));
    }

    #[test]
    fn test_bogus_source_word_fails() {
        let mut builder = GraphBuilder::default();
        let err = add(&mut builder, "00001740 00 a 01 good 0 001 ! 00001900 a 0201 | fine").unwrap_err();
        assert!(err.is_integrity());
    }

    #[test]
    fn test_bogus_target_word_fails_at_build() {
        let mut builder = GraphBuilder::default();
        add(&mut builder, "00001740 00 a 01 good 0 001 ! 00001900 a 0103 | fine").unwrap();
        add(&mut builder, "00001900 00 a 01 bad 0 000 | not fine").unwrap();
        let err = builder.build().unwrap_err();
        assert!(err.is_integrity());
        assert!(err.to_string().contains("word 3"));
    }

    #[test]
    fn test_redefinition_policies() {
        let first = "00001740 00 a 01 good 0 001 & 00001740 a 0000 | first";
        let second = "00001740 00 a 02 good 0 fine 0 000 | second";

        let mut builder = GraphBuilder::new(RedefinitionPolicy::Overwrite);
        let id = add(&mut builder, first).unwrap();
        add(&mut builder, second).unwrap();
        let graph = builder.build().unwrap();
        let synset = graph.synset(id);
        assert_eq!(synset.gloss(), "second");
        assert_eq!(synset.words().len(), 2);
        assert_eq!(synset.relations().len(), 1);

        let mut builder = GraphBuilder::new(RedefinitionPolicy::Reject);
        add(&mut builder, first).unwrap();
        assert!(add(&mut builder, second).unwrap_err().is_integrity());
    }

    #[test]
    fn test_satellite_flag() {
        let mut builder = GraphBuilder::default();
        let id = add(&mut builder, "00002200 00 s 01 amazing 0 000 | awe").unwrap();
        let graph = builder.build().unwrap();
        assert!(graph.synset(id).is_satellite());
        assert_eq!(graph.synset(id).pos(), PartOfSpeech::Adjective);
    }
}
