//! Cursor over the bytes of one data line.
//!
//! Every primitive first skips ASCII whitespace, then consumes one typed
//! token. A failing primitive reports what it expected; the line parser
//! turns that into a [`WordNetError::Format`](crate::error::WordNetError)
//! with the line number attached.

use std::fmt;
use std::str;

use crate::pos::PosCode;
use crate::relation::Relation;

/// Width of a synset offset field.
pub const OFFSET_WIDTH: usize = 8;

/// The kinds of token a [`Lexer`] can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Decimal,
    Hex,
    Word,
    Offset,
    PartOfSpeech,
    RelationSymbol,
    Gloss,
    Byte(u8),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Decimal => f.write_str("decimal number"),
            TokenKind::Hex => f.write_str("hex number"),
            TokenKind::Word => f.write_str("word"),
            TokenKind::Offset => f.write_str("8-digit offset"),
            TokenKind::PartOfSpeech => f.write_str("part of speech"),
            TokenKind::RelationSymbol => f.write_str("pointer symbol"),
            TokenKind::Gloss => f.write_str("gloss"),
            TokenKind::Byte(b) => write!(f, "'{}'", *b as char),
        }
    }
}

/// Why a primitive failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub expected: TokenKind,
    pub message: String,
}

impl LexError {
    fn new<S: Into<String>>(expected: TokenKind, message: S) -> Self {
        LexError {
            expected,
            message: message.into(),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} expected: {}", self.expected, self.message)
    }
}

impl std::error::Error for LexError {}

pub type LexResult<T> = std::result::Result<T, LexError>;

/// A stateful cursor over one line.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Lexer { input, pos: 0 }
    }

    /// Byte position of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unconsumed part of the line, lossily decoded, for diagnostics.
    pub fn rest(&self) -> String {
        String::from_utf8_lossy(&self.input[self.pos..]).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn skip_whitespace(&mut self) {
        while self.pos < self.input.len() && self.input[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consume the longest run of bytes matching `pred`.
    fn take_while<F: Fn(u8) -> bool>(&mut self, pred: F) -> &'a [u8] {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    fn number(&mut self, kind: TokenKind) -> LexResult<u64> {
        self.skip_whitespace();
        let (radix, digits) = match kind {
            TokenKind::Hex => (16, self.take_while(|b| b.is_ascii_hexdigit())),
            _ => (10, self.take_while(|b| b.is_ascii_digit())),
        };
        if digits.is_empty() {
            return Err(LexError::new(
                kind,
                format!("number not found in {:?}", self.rest()),
            ));
        }
        // digits are ASCII by construction
        let text = str::from_utf8(digits).unwrap_or_default();
        u64::from_str_radix(text, radix)
            .map_err(|e| LexError::new(kind, format!("{text}: {e}")))
    }

    /// A maximal run of decimal digits.
    pub fn decimal(&mut self) -> LexResult<u64> {
        self.number(TokenKind::Decimal)
    }

    /// A maximal run of hex digits.
    pub fn hex(&mut self) -> LexResult<u64> {
        self.number(TokenKind::Hex)
    }

    /// A maximal run of non-space bytes, with `_` turned into a space.
    pub fn word(&mut self) -> LexResult<String> {
        self.skip_whitespace();
        let raw = self.take_while(|b| !b.is_ascii_whitespace());
        let text = str::from_utf8(raw)
            .map_err(|e| LexError::new(TokenKind::Word, format!("invalid UTF-8: {e}")))?;
        Ok(text.replace('_', " "))
    }

    /// Exactly eight decimal digits, verbatim. Consumes nothing on failure.
    pub fn offset(&mut self) -> LexResult<&'a str> {
        self.skip_whitespace();
        let remaining = &self.input[self.pos..];
        if remaining.len() < OFFSET_WIDTH {
            return Err(LexError::new(TokenKind::Offset, "invalid offset"));
        }
        let candidate = &remaining[..OFFSET_WIDTH];
        if !candidate.iter().all(u8::is_ascii_digit) {
            return Err(LexError::new(
                TokenKind::Offset,
                format!(
                    "invalid chars in offset: {}",
                    String::from_utf8_lossy(candidate)
                ),
            ));
        }
        self.pos += OFFSET_WIDTH;
        Ok(str::from_utf8(candidate).unwrap_or_default())
    }

    /// A single part-of-speech code byte.
    pub fn pos_code(&mut self) -> LexResult<PosCode> {
        self.skip_whitespace();
        let b = self
            .peek()
            .ok_or_else(|| LexError::new(TokenKind::PartOfSpeech, "unexpected end of input"))?;
        let code = PosCode::from_byte(b).ok_or_else(|| {
            LexError::new(
                TokenKind::PartOfSpeech,
                format!("invalid part of speech: {}", b as char),
            )
        })?;
        self.pos += 1;
        Ok(code)
    }

    /// A pointer symbol such as `@`, `~i` or `!`.
    pub fn relation(&mut self) -> LexResult<Relation> {
        let symbol = self.word()?;
        if symbol.is_empty() {
            return Err(LexError::new(
                TokenKind::RelationSymbol,
                "unexpected end of input",
            ));
        }
        Relation::from_symbol(&symbol).ok_or_else(|| {
            LexError::new(
                TokenKind::RelationSymbol,
                format!("unrecognized pointer type: {symbol:?}"),
            )
        })
    }

    /// One specific byte.
    pub fn expect(&mut self, byte: u8) -> LexResult<()> {
        self.skip_whitespace();
        match self.peek() {
            Some(b) if b == byte => {
                self.pos += 1;
                Ok(())
            }
            Some(b) => Err(LexError::new(
                TokenKind::Byte(byte),
                format!("got '{}'", b as char),
            )),
            None => Err(LexError::new(TokenKind::Byte(byte), "unexpected end of input")),
        }
    }

    /// The `|` delimiter followed by the free-text gloss, trimmed.
    pub fn gloss(&mut self) -> LexResult<String> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'|') => self.pos += 1,
            Some(b) => {
                return Err(LexError::new(
                    TokenKind::Gloss,
                    format!("want '|' got '{}' [{:?}]", b as char, self.rest()),
                ));
            }
            None => return Err(LexError::new(TokenKind::Gloss, "definition expected")),
        }
        let text = str::from_utf8(&self.input[self.pos..])
            .map_err(|e| LexError::new(TokenKind::Gloss, format!("invalid UTF-8: {e}")))?;
        self.pos = self.input.len();
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::PartOfSpeech;

    #[test]
    fn test_numbers() {
        let mut lexer = Lexer::new(b"  0042 1f zz");
        assert_eq!(lexer.decimal().unwrap(), 42);
        assert_eq!(lexer.hex().unwrap(), 0x1f);
        let err = lexer.decimal().unwrap_err();
        assert_eq!(err.expected, TokenKind::Decimal);
    }

    #[test]
    fn test_hex_stops_at_non_hex() {
        let mut lexer = Lexer::new(b"0a1g");
        assert_eq!(lexer.hex().unwrap(), 0xa1);
        assert_eq!(lexer.rest(), "g");
    }

    #[test]
    fn test_word_underscores() {
        let mut lexer = Lexer::new(b" alimentary_paste 0");
        assert_eq!(lexer.word().unwrap(), "alimentary paste");
        assert_eq!(lexer.decimal().unwrap(), 0);
        assert!(lexer.is_empty());
    }

    #[test]
    fn test_word_invalid_utf8() {
        let mut lexer = Lexer::new(b"caf\xe9 0");
        assert_eq!(lexer.word().unwrap_err().expected, TokenKind::Word);
    }

    #[test]
    fn test_offset_is_verbatim() {
        let mut lexer = Lexer::new(b"00001740 03");
        assert_eq!(lexer.offset().unwrap(), "00001740");
        assert_eq!(lexer.decimal().unwrap(), 3);
    }

    #[test]
    fn test_offset_failures_do_not_consume() {
        let mut lexer = Lexer::new(b"  2");
        assert!(lexer.offset().is_err());
        assert_eq!(lexer.decimal().unwrap(), 2);

        let mut lexer = Lexer::new(b"0000a740 03");
        assert!(lexer.offset().is_err());
        assert_eq!(lexer.decimal().unwrap(), 0);
    }

    #[test]
    fn test_pos_codes() {
        let mut lexer = Lexer::new(b"n v a s r x");
        let parsed: Vec<PartOfSpeech> = (0..5)
            .map(|_| lexer.pos_code().unwrap().part_of_speech())
            .collect();
        assert_eq!(
            parsed,
            vec![
                PartOfSpeech::Noun,
                PartOfSpeech::Verb,
                PartOfSpeech::Adjective,
                PartOfSpeech::Adjective,
                PartOfSpeech::Adverb,
            ]
        );
        assert!(lexer.pos_code().is_err());
    }

    #[test]
    fn test_relation_symbols() {
        let mut lexer = Lexer::new(b"@ ~i \\ ?");
        assert_eq!(lexer.relation().unwrap(), Relation::HYPERNYM);
        assert_eq!(lexer.relation().unwrap(), Relation::INSTANCE_HYPONYM);
        assert_eq!(lexer.relation().unwrap(), Relation::PERTAINYM);
        let err = lexer.relation().unwrap_err();
        assert_eq!(err.expected, TokenKind::RelationSymbol);
    }

    #[test]
    fn test_gloss() {
        let mut lexer = Lexer::new(b" |  a quick short punch  \n");
        assert_eq!(lexer.gloss().unwrap(), "a quick short punch");

        let mut lexer = Lexer::new(b" 01 | x");
        assert_eq!(lexer.gloss().unwrap_err().expected, TokenKind::Gloss);

        let mut lexer = Lexer::new(b"   ");
        assert!(lexer.gloss().is_err());
    }

    #[test]
    fn test_expect() {
        let mut lexer = Lexer::new(b" + 08");
        lexer.expect(b'+').unwrap();
        assert_eq!(lexer.decimal().unwrap(), 8);
        assert!(lexer.expect(b'+').is_err());
    }
}
