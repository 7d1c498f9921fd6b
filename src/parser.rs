//! Parsing of WordNet data lines.
//!
//! - [`lexer`] - the byte cursor and its typed primitives
//! - [`entry`] - the record grammar built on top of it
//!
//! # Examples
//!
//! ```
//! use wnram::parser::parse_line;
//! use wnram::pos::PartOfSpeech;
//!
//! let line = b"00010700 04 n 02 jab 0 jabbing 0 001 @ 00010600 n 0000 | a quick short punch";
//! let entry = parse_line(line, 12).unwrap().unwrap();
//! assert_eq!(entry.pos(), PartOfSpeech::Noun);
//! assert_eq!(entry.words[1].text, "jabbing");
//!
//! // header lines carry their own line number and produce nothing
//! assert!(parse_line(b"  2", 2).unwrap().is_none());
//! ```

pub mod entry;
pub mod lexer;

pub use entry::{
    AdjectiveMarker, ParsedEntry, ParsedRelation, ParsedWord, RelationNature, VerbFrame,
    parse_line,
};
pub use lexer::{LexError, Lexer, TokenKind};
