//! Parts of speech.
//!
//! WordNet data lines tag every synset with a one-letter code. The adjective
//! satellite code `s` is folded into [`PartOfSpeech::Adjective`]: the
//! head/satellite distinction lives in the similar-to pointers between
//! clusters, not in the part of speech. The raw code is still available as a
//! [`PosCode`] for callers that want it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The part of speech of a synset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    /// All parts of speech, in data file order.
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Map a data file code to a part of speech.
    pub fn from_code(code: u8) -> Option<Self> {
        PosCode::from_byte(code).map(PosCode::part_of_speech)
    }

    /// Short name used in dumps (`noun`, `verb`, `adj`, `adv`).
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }

    /// Whether this part of speech passes `filter`. An empty filter accepts
    /// everything.
    pub fn matches(&self, filter: &[PartOfSpeech]) -> bool {
        filter.is_empty() || filter.contains(self)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PartOfSpeech {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "noun" => Ok(PartOfSpeech::Noun),
            "v" | "verb" => Ok(PartOfSpeech::Verb),
            "a" | "s" | "adj" | "adjective" => Ok(PartOfSpeech::Adjective),
            "r" | "adv" | "adverb" => Ok(PartOfSpeech::Adverb),
            other => Err(format!("unknown part of speech: {other}")),
        }
    }
}

/// The raw part-of-speech code as written in a data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosCode {
    Noun,
    Verb,
    Adjective,
    AdjectiveSatellite,
    Adverb,
}

impl PosCode {
    /// Parse one code byte (`n`, `v`, `a`, `s`, `r`).
    pub fn from_byte(code: u8) -> Option<Self> {
        match code {
            b'n' => Some(PosCode::Noun),
            b'v' => Some(PosCode::Verb),
            b'a' => Some(PosCode::Adjective),
            b's' => Some(PosCode::AdjectiveSatellite),
            b'r' => Some(PosCode::Adverb),
            _ => None,
        }
    }

    /// The part of speech this code stands for. Satellites are adjectives.
    pub fn part_of_speech(self) -> PartOfSpeech {
        match self {
            PosCode::Noun => PartOfSpeech::Noun,
            PosCode::Verb => PartOfSpeech::Verb,
            PosCode::Adjective | PosCode::AdjectiveSatellite => PartOfSpeech::Adjective,
            PosCode::Adverb => PartOfSpeech::Adverb,
        }
    }

    pub fn is_satellite(self) -> bool {
        self == PosCode::AdjectiveSatellite
    }
}
