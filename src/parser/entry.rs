//! Line grammar for WordNet data files.
//!
//! ```text
//! offset filenum pos wordcount { word senseid } pointercount
//!   { symbol targetOffset targetPos nature } [ framecount { + frame word } ] | gloss
//! ```
//!
//! A line that does not start with an offset but with a decimal number equal
//! to its own 1-based line number is a header line and produces no entry.

use log::trace;

use crate::error::{Result, WordNetError};
use crate::parser::lexer::{LexError, Lexer};
use crate::pos::{PartOfSpeech, PosCode};
use crate::relation::Relation;

/// Syntactic position marker on an adjective, e.g. `galore(ip)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjectiveMarker {
    /// `(p)`: predicate position.
    Predicative,
    /// `(a)`: prenominal (attributive) position.
    Prenominal,
    /// `(ip)`: immediately postnominal position.
    Postnominal,
}

impl AdjectiveMarker {
    /// Split a trailing marker off an adjective.
    pub fn split(word: &str) -> (&str, Option<AdjectiveMarker>) {
        let markers = [
            ("(ip)", AdjectiveMarker::Postnominal),
            ("(p)", AdjectiveMarker::Predicative),
            ("(a)", AdjectiveMarker::Prenominal),
        ];
        for (suffix, marker) in markers {
            if let Some(stripped) = word.strip_suffix(suffix)
                && !stripped.is_empty()
            {
                return (stripped, Some(marker));
            }
        }
        (word, None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdjectiveMarker::Predicative => "p",
            AdjectiveMarker::Prenominal => "a",
            AdjectiveMarker::Postnominal => "ip",
        }
    }
}

/// One member word as read from a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedWord {
    pub text: String,
    pub sense: u8,
    pub marker: Option<AdjectiveMarker>,
}

/// How a pointer attaches to its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationNature {
    /// Whole synset to whole synset.
    Semantic,
    /// Specific word to specific word, both 0-based.
    Syntactic { source: usize, target: usize },
}

impl RelationNature {
    /// Decode the 4-hex-digit source/target field.
    fn decode(nature: u64) -> std::result::Result<Self, String> {
        if nature == 0 {
            return Ok(RelationNature::Semantic);
        }
        if nature > 0xFFFF {
            return Err(format!("source/target field out of range: {nature:x}"));
        }
        let source = (nature >> 8) as usize;
        let target = (nature & 0xFF) as usize;
        if source == 0 || target == 0 {
            return Err(format!("word numbers are 1-based: {nature:04x}"));
        }
        Ok(RelationNature::Syntactic {
            source: source - 1,
            target: target - 1,
        })
    }
}

/// One outgoing pointer as read from a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRelation {
    pub relation: Relation,
    pub target_offset: String,
    pub target_pos: PartOfSpeech,
    pub nature: RelationNature,
}

/// A verb frame. `word` is `None` when the frame applies to every word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VerbFrame {
    pub frame: u16,
    pub word: Option<usize>,
}

/// A fully parsed data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub offset: String,
    pub lex_filenum: u8,
    pub pos_code: PosCode,
    pub words: Vec<ParsedWord>,
    pub relations: Vec<ParsedRelation>,
    pub frames: Vec<VerbFrame>,
    pub gloss: String,
}

impl ParsedEntry {
    pub fn pos(&self) -> PartOfSpeech {
        self.pos_code.part_of_speech()
    }
}

/// Parse one line. `line` is the 1-based line number within its file.
///
/// Returns `Ok(None)` for header lines.
pub fn parse_line(data: &[u8], line: u64) -> Result<Option<ParsedEntry>> {
    let mut lexer = Lexer::new(data);
    let fail = |what: &str, e: LexError| WordNetError::format(line, format!("{what}: {e}"));

    let offset = match lexer.offset() {
        Ok(offset) => offset.to_string(),
        Err(_) => {
            if let Ok(n) = lexer.decimal()
                && n == line
            {
                trace!("line {line} is a header line");
                return Ok(None);
            }
            return Err(WordNetError::format(
                line,
                "can't parse line, expected comment or offset",
            ));
        }
    };

    let lex_filenum = lexer.decimal().map_err(|e| fail("file number expected", e))?;
    let lex_filenum = u8::try_from(lex_filenum)
        .map_err(|_| WordNetError::format(line, format!("file number too large: {lex_filenum}")))?;
    let pos_code = lexer
        .pos_code()
        .map_err(|e| fail("part of speech expected", e))?;

    let word_count = lexer.hex().map_err(|e| fail("word count expected", e))?;
    if word_count == 0 {
        return Err(WordNetError::format(line, "word count must be positive"));
    }
    let mut words = Vec::with_capacity(word_count.min(256) as usize);
    for _ in 0..word_count {
        let raw = lexer.word().map_err(|e| fail("word expected", e))?;
        if raw.is_empty() {
            return Err(WordNetError::format(line, "word expected, found end of line"));
        }
        let sense = lexer.hex().map_err(|e| fail("sense id expected", e))?;
        let sense = u8::try_from(sense)
            .map_err(|_| WordNetError::format(line, format!("sense id too large: {sense:x}")))?;
        let (text, marker) = match pos_code.part_of_speech() {
            PartOfSpeech::Adjective => AdjectiveMarker::split(&raw),
            _ => (raw.as_str(), None),
        };
        words.push(ParsedWord {
            text: text.to_string(),
            sense,
            marker,
        });
    }

    let pointer_count = lexer.decimal().map_err(|e| fail("pointer count expected", e))?;
    let mut relations = Vec::with_capacity(pointer_count.min(1024) as usize);
    for _ in 0..pointer_count {
        let relation = lexer.relation().map_err(|e| fail("pointer", e))?;
        let target_offset = lexer
            .offset()
            .map_err(|e| fail("pointer target", e))?
            .to_string();
        let target_pos = lexer
            .pos_code()
            .map_err(|e| fail("pointer part of speech", e))?
            .part_of_speech();
        let nature = lexer.hex().map_err(|e| fail("pointer source/target", e))?;
        let nature = RelationNature::decode(nature).map_err(|e| WordNetError::format(line, e))?;
        relations.push(ParsedRelation {
            relation,
            target_offset,
            target_pos,
            nature,
        });
    }

    // frames are optional; only verb lines carry them
    let mut frames = Vec::new();
    let checkpoint = lexer.clone();
    match lexer.decimal() {
        Ok(frame_count) => {
            for _ in 0..frame_count {
                lexer
                    .expect(b'+')
                    .map_err(|e| fail("missing frame marker", e))?;
                let frame = lexer.decimal().map_err(|e| fail("malformed frame number", e))?;
                let frame = u16::try_from(frame).map_err(|_| {
                    WordNetError::format(line, format!("frame number too large: {frame}"))
                })?;
                let word = lexer
                    .hex()
                    .map_err(|e| fail("malformed word number in frame", e))?;
                frames.push(VerbFrame {
                    frame,
                    word: word.checked_sub(1).map(|w| w as usize),
                });
            }
        }
        Err(_) => lexer = checkpoint,
    }

    let gloss = lexer.gloss().map_err(|e| fail("definition", e))?;

    Ok(Some(ParsedEntry {
        offset,
        lex_filenum,
        pos_code,
        words,
        relations,
        frames,
        gloss,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ParsedEntry {
        parse_line(line.as_bytes(), 10).unwrap().unwrap()
    }

    #[test]
    fn test_parse_adjective_line() {
        let entry = parse(
            "00001740 00 a 01 good 0 002 ! 00001900 a 0101 & 00002200 s 0000 | having desirable qualities",
        );
        assert_eq!(entry.offset, "00001740");
        assert_eq!(entry.lex_filenum, 0);
        assert_eq!(entry.pos(), PartOfSpeech::Adjective);
        assert_eq!(entry.words.len(), 1);
        assert_eq!(entry.words[0].text, "good");
        assert_eq!(entry.relations.len(), 2);
        assert_eq!(entry.relations[0].relation, Relation::ANTONYM);
        assert_eq!(
            entry.relations[0].nature,
            RelationNature::Syntactic { source: 0, target: 0 }
        );
        assert_eq!(entry.relations[1].relation, Relation::SIMILAR_TO);
        assert_eq!(entry.relations[1].target_pos, PartOfSpeech::Adjective);
        assert_eq!(entry.relations[1].nature, RelationNature::Semantic);
        assert!(entry.frames.is_empty());
        assert_eq!(entry.gloss, "having desirable qualities");
    }

    #[test]
    fn test_satellite_code_is_adjective() {
        let entry = parse("00002200 00 s 01 amazing 0 000 | inspiring awe");
        assert_eq!(entry.pos(), PartOfSpeech::Adjective);
        assert!(entry.pos_code.is_satellite());
    }

    #[test]
    fn test_hex_word_count_and_multiword() {
        let words: Vec<String> = (0..10).map(|i| format!("w{i} 0")).collect();
        let line = format!("00010400 13 n 0a {} 000 | ten words", words.join(" "));
        let entry = parse(&line);
        assert_eq!(entry.words.len(), 10);

        let entry = parse("00010400 13 n 01 alimentary_paste 1 000 | dough");
        assert_eq!(entry.words[0].text, "alimentary paste");
        assert_eq!(entry.words[0].sense, 1);
    }

    #[test]
    fn test_syntactic_nature_is_zero_based() {
        let entry = parse("00000001 00 a 02 x 0 y 0 001 ! 00000002 a 0203 | g");
        assert_eq!(
            entry.relations[0].nature,
            RelationNature::Syntactic { source: 1, target: 2 }
        );
    }

    #[test]
    fn test_verb_frames() {
        let entry = parse(
            "00020000 34 v 02 eat 0 feed 1 001 * 00020100 v 0000 02 + 08 00 + 11 01 | take in solid food",
        );
        assert_eq!(entry.relations[0].relation, Relation::ENTAILMENT);
        assert_eq!(
            entry.frames,
            vec![
                VerbFrame { frame: 8, word: None },
                VerbFrame { frame: 11, word: Some(0) },
            ]
        );
        assert_eq!(entry.gloss, "take in solid food");
    }

    #[test]
    fn test_adjective_markers() {
        let entry = parse("00002400 00 a 02 mere(a) 0 galore(ip) 0 000 | being nothing more");
        assert_eq!(entry.words[0].text, "mere");
        assert_eq!(entry.words[0].marker, Some(AdjectiveMarker::Prenominal));
        assert_eq!(entry.words[1].text, "galore");
        assert_eq!(entry.words[1].marker, Some(AdjectiveMarker::Postnominal));

        // only adjectives carry markers
        let entry = parse("00000005 00 n 01 (a) 0 000 | the letter");
        assert_eq!(entry.words[0].text, "(a)");
        assert_eq!(entry.words[0].marker, None);
    }

    #[test]
    fn test_header_lines() {
        assert_eq!(parse_line(b"2", 2).unwrap(), None);
        assert_eq!(parse_line(b"  1 This software and database", 1).unwrap(), None);
        assert!(parse_line(b"2", 3).unwrap_err().is_format());
        assert!(parse_line(b"", 1).unwrap_err().is_format());
    }

    #[test]
    fn test_format_errors() {
        let cases: &[&[u8]] = &[
            b"00001740 xx a 01 good 0 000 | g",
            b"00001740 00 q 01 good 0 000 | g",
            b"00001740 00 a 01 good 0 001 ? 00001900 a 0000 | g",
            b"00001740 00 a 01 good 0 001 ! 0000190 a 0000 | g",
            b"00001740 00 a 01 good 0 001 ! 00001900 a 0100 | g",
            b"00001740 00 a 01 good 0 001 ! 00001900 a 10101 | g",
            b"00001740 00 a 01 good 0 000 g",
            b"00001740 00 a 02 good 0",
            b"00020000 34 v 01 eat 0 000 01 08 00 | g",
            b"00001740 00 a 00 000 | g",
            b"00001740 00 a 01 good 1ff 000 | g",
            b"00020000 34 v 01 eat 0 000 01 + 70000 00 | g",
        ];
        for case in cases {
            let err = parse_line(case, 5).unwrap_err();
            assert!(err.is_format(), "{}", String::from_utf8_lossy(case));
            assert!(err.to_string().contains(":5:"));
        }
    }

    #[test]
    fn test_out_of_range_fields_are_rejected() {
        let err = parse_line(b"00001740 00 a 00 000 | g", 3).unwrap_err();
        assert!(err.to_string().contains("word count must be positive"), "{err}");

        let err = parse_line(b"00001740 00 a 01 good 1ff 000 | g", 3).unwrap_err();
        assert!(err.to_string().contains("sense id too large: 1ff"), "{err}");

        let err = parse_line(b"00020000 34 v 01 eat 0 000 01 + 70000 00 | g", 3).unwrap_err();
        assert!(err.to_string().contains("frame number too large: 70000"), "{err}");

        let entry = parse("00001740 00 a 01 good ff 000 | g");
        assert_eq!(entry.words[0].sense, 0xff);
    }
}
