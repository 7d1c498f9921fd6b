//! Summary counts over a loaded database.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::index::LemmaIndex;
use crate::pos::PartOfSpeech;

/// Size of a loaded database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordNetStats {
    pub synsets: usize,
    pub words: usize,
    pub lemmas: usize,
    pub semantic_relations: usize,
    pub syntactic_relations: usize,
    pub satellites: usize,
    pub synsets_by_pos: BTreeMap<PartOfSpeech, usize>,
}

impl WordNetStats {
    pub(crate) fn collect(graph: &Graph, index: &LemmaIndex) -> Self {
        let mut stats = WordNetStats {
            synsets: graph.len(),
            lemmas: index.len(),
            ..Default::default()
        };
        for (_, synset) in graph.iter() {
            *stats.synsets_by_pos.entry(synset.pos()).or_default() += 1;
            stats.words += synset.words().len();
            stats.semantic_relations += synset.relations().len();
            stats.syntactic_relations += synset
                .words()
                .iter()
                .map(|w| w.relations().len())
                .sum::<usize>();
            if synset.is_satellite() {
                stats.satellites += 1;
            }
        }
        stats
    }
}
