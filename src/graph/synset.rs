//! Synset nodes and the edges between them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parser::{AdjectiveMarker, VerbFrame};
use crate::pos::PartOfSpeech;
use crate::relation::Relation;

/// Index of a synset in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SynsetId(pub u32);

impl SynsetId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identity of a synset across data files: its verbatim 8-digit offset plus
/// its part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SynsetKey {
    pub offset: String,
    pub pos: PartOfSpeech,
}

impl SynsetKey {
    pub fn new<S: Into<String>>(offset: S, pos: PartOfSpeech) -> Self {
        SynsetKey {
            offset: offset.into(),
            pos,
        }
    }
}

impl fmt::Display for SynsetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.offset, self.pos)
    }
}

/// A relation between two whole synsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticRelation {
    pub relation: Relation,
    pub target: SynsetId,
}

/// A relation from one word to a specific word of another synset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntacticRelation {
    pub relation: Relation,
    pub target: SynsetId,
    /// 0-based index into the target synset's words.
    pub target_word: usize,
}

/// One lexical form inside a synset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub(crate) text: String,
    pub(crate) sense: u8,
    pub(crate) marker: Option<AdjectiveMarker>,
    pub(crate) relations: Vec<SyntacticRelation>,
}

impl Word {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lexical id distinguishing this sense within its lexicographer file.
    pub fn sense(&self) -> u8 {
        self.sense
    }

    pub fn marker(&self) -> Option<AdjectiveMarker> {
        self.marker
    }

    pub fn relations(&self) -> &[SyntacticRelation] {
        &self.relations
    }
}

/// A set of words sharing one sense.
///
/// A synset first exists as a placeholder (no words) when some other line
/// points at it, and is filled in by its own defining line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synset {
    pub(crate) key: SynsetKey,
    pub(crate) pos: PartOfSpeech,
    pub(crate) satellite: bool,
    pub(crate) lex_filenum: u8,
    pub(crate) words: Vec<Word>,
    pub(crate) gloss: String,
    pub(crate) relations: Vec<SemanticRelation>,
    pub(crate) frames: Vec<VerbFrame>,
    pub(crate) defined: bool,
}

impl Synset {
    pub(crate) fn placeholder(key: SynsetKey) -> Self {
        Synset {
            pos: key.pos,
            key,
            satellite: false,
            lex_filenum: 0,
            words: Vec::new(),
            gloss: String::new(),
            relations: Vec::new(),
            frames: Vec::new(),
            defined: false,
        }
    }

    /// Origin marker: the identity this synset was loaded under.
    pub fn key(&self) -> &SynsetKey {
        &self.key
    }

    pub fn pos(&self) -> PartOfSpeech {
        self.pos
    }

    /// Whether the defining line used the adjective satellite code `s`.
    pub fn is_satellite(&self) -> bool {
        self.satellite
    }

    pub fn lex_filenum(&self) -> u8 {
        self.lex_filenum
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The canonical word of this synset (its first member).
    pub fn lemma(&self) -> &str {
        self.words.first().map(|w| w.text.as_str()).unwrap_or_default()
    }

    pub fn gloss(&self) -> &str {
        &self.gloss
    }

    pub fn relations(&self) -> &[SemanticRelation] {
        &self.relations
    }

    pub fn frames(&self) -> &[VerbFrame] {
        &self.frames
    }

    pub fn is_defined(&self) -> bool {
        self.defined
    }
}
