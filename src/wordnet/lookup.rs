//! Result views over the synset graph.

use std::borrow::Cow;
use std::fmt;

use crate::graph::{Graph, Synset, SynsetId, SynsetKey};
use crate::index::normalize;
use crate::parser::VerbFrame;
use crate::pos::PartOfSpeech;
use crate::relation::Relation;

/// One synset found by a search, seen through the word that found it.
///
/// The word is the caller's original search text for [`WordNet::lookup`],
/// the first member word for [`WordNet::iterate`], and the target word for
/// results of [`Lookup::related`].
///
/// [`WordNet::lookup`]: crate::WordNet::lookup
/// [`WordNet::iterate`]: crate::WordNet::iterate
#[derive(Clone)]
pub struct Lookup<'a> {
    word: Cow<'a, str>,
    id: SynsetId,
    graph: &'a Graph,
}

impl<'a> Lookup<'a> {
    pub(crate) fn new(word: Cow<'a, str>, id: SynsetId, graph: &'a Graph) -> Self {
        Lookup { word, id, graph }
    }

    /// A view anchored at the synset's first member word.
    pub(crate) fn at_lemma(id: SynsetId, graph: &'a Graph) -> Self {
        Lookup::new(Cow::Borrowed(graph.synset(id).lemma()), id, graph)
    }

    fn synset(&self) -> &'a Synset {
        self.graph.synset(self.id)
    }

    /// The word that was searched for.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// A canonical synonym for this word: the synset's first member.
    pub fn lemma(&self) -> &'a str {
        self.synset().lemma()
    }

    /// All member words, in data file order.
    pub fn synonyms(&self) -> Vec<&'a str> {
        self.synset().words().iter().map(|w| w.text()).collect()
    }

    pub fn pos(&self) -> PartOfSpeech {
        self.synset().pos()
    }

    pub fn gloss(&self) -> &'a str {
        self.synset().gloss()
    }

    pub fn id(&self) -> SynsetId {
        self.id
    }

    /// Identity the synset was loaded under.
    pub fn key(&self) -> &'a SynsetKey {
        self.synset().key()
    }

    pub fn is_satellite(&self) -> bool {
        self.synset().is_satellite()
    }

    pub fn frames(&self) -> &'a [VerbFrame] {
        self.synset().frames()
    }

    /// Related synsets with the single kind that links each one.
    ///
    /// Semantic relations of the whole synset come first, followed by
    /// syntactic relations that start at the searched word.
    pub fn relations(&self, mask: Relation) -> Vec<(Relation, Lookup<'a>)> {
        let synset = self.synset();
        let mut found = Vec::new();

        for rel in synset.relations() {
            if rel.relation.intersects(mask) {
                found.push((rel.relation, Lookup::at_lemma(rel.target, self.graph)));
            }
        }

        let key = normalize(&self.word);
        for word in synset.words() {
            if normalize(word.text()) != key {
                continue;
            }
            for rel in word.relations() {
                if !rel.relation.intersects(mask) {
                    continue;
                }
                let target = self.graph.synset(rel.target);
                let text = target
                    .words()
                    .get(rel.target_word)
                    .map(|w| w.text())
                    .unwrap_or_else(|| target.lemma());
                found.push((
                    rel.relation,
                    Lookup::new(Cow::Borrowed(text), rel.target, self.graph),
                ));
            }
        }

        found
    }

    /// Words related to this word. `mask` is a union of relation kinds to
    /// include.
    pub fn related(&self, mask: Relation) -> Vec<Lookup<'a>> {
        self.relations(mask)
            .into_iter()
            .map(|(_, lookup)| lookup)
            .collect()
    }

    /// A multi-line human-readable dump.
    pub fn describe(&self) -> String {
        let synset = self.synset();
        let mut s = format!("Word: {self}\n");
        s += &format!("Synonyms: {}\n", self.synonyms().join(", "));
        s += &format!("{} semantic relationships\n", synset.relations().len());
        s += &format!("| {}\n", synset.gloss());
        s
    }
}

impl PartialEq for Lookup<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.word == other.word && std::ptr::eq(self.graph, other.graph)
    }
}

impl Eq for Lookup<'_> {}

impl fmt::Display for Lookup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self.word, self.pos())
    }
}

impl fmt::Debug for Lookup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lookup")
            .field("word", &self.word)
            .field("synset", self.key())
            .finish()
    }
}
