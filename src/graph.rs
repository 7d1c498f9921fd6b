//! The synset graph.
//!
//! All synsets live in one arena owned by [`Graph`]; relations refer to
//! their targets by [`SynsetId`], so the graph is cyclic without any owning
//! back-references.
//!
//! - [`synset`] - nodes and edges
//! - [`builder`] - placeholder-then-fill construction and integrity checks

pub mod builder;
pub mod synset;

use ahash::AHashMap;

pub use builder::GraphBuilder;
pub use synset::{SemanticRelation, Synset, SynsetId, SynsetKey, SyntacticRelation, Word};

/// An immutable arena of synsets.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    synsets: Vec<Synset>,
    by_key: AHashMap<SynsetKey, SynsetId>,
}

impl Graph {
    pub(crate) fn new(synsets: Vec<Synset>, by_key: AHashMap<SynsetKey, SynsetId>) -> Self {
        Graph { synsets, by_key }
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    /// The synset behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this graph.
    pub fn synset(&self, id: SynsetId) -> &Synset {
        &self.synsets[id.index()]
    }

    pub fn get(&self, id: SynsetId) -> Option<&Synset> {
        self.synsets.get(id.index())
    }

    /// Find a synset by its identity key.
    pub fn find(&self, key: &SynsetKey) -> Option<SynsetId> {
        self.by_key.get(key).copied()
    }

    /// All synsets in construction order.
    pub fn iter(&self) -> impl Iterator<Item = (SynsetId, &Synset)> + '_ {
        self.synsets
            .iter()
            .enumerate()
            .map(|(i, synset)| (SynsetId(i as u32), synset))
    }
}
