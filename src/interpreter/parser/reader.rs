use logos::{Lexer, Logos};

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{LexError, LexerExtras, Token},
        parser::core::ParseResult,
        value::core::Unit,
    },
};

/// Pulls atoms out of source text one at a time.
///
/// The reader is the only way the engine sees the source: each call yields
/// one literal or unresolved name, or [`Unit::Nil`] once the input is
/// exhausted.
pub struct Reader<'src> {
    lexer: Lexer<'src, Token>,
}

impl<'src> Reader<'src> {
    /// Creates a reader positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: Token::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }

    /// The line the reader is currently on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.lexer.extras.line
    }

    /// Reads the next atom.
    ///
    /// Strings become [`Unit::String`], integers [`Unit::Integer`], and both
    /// identifiers and symbol runs [`Unit::Name`]. Returns [`Unit::Nil`] at
    /// the end of input.
    ///
    /// # Errors
    /// Returns the `ParseError` matching the lexical failure; no partial
    /// value is produced.
    ///
    /// # Example
    /// ```
    /// use glyph::interpreter::{parser::reader::Reader, value::core::Unit};
    ///
    /// let mut reader = Reader::new("__def x \"a\\tb\" 42 ==");
    ///
    /// assert_eq!(reader.next_unit().unwrap(), Unit::name("__def"));
    /// assert_eq!(reader.next_unit().unwrap(), Unit::name("x"));
    /// assert_eq!(reader.next_unit().unwrap(), Unit::from("a\tb"));
    /// assert_eq!(reader.next_unit().unwrap(), Unit::Integer(42));
    /// assert_eq!(reader.next_unit().unwrap(), Unit::name("=="));
    /// assert!(reader.next_unit().unwrap().is_nil());
    /// ```
    pub fn next_unit(&mut self) -> ParseResult<Unit> {
        let Some(token) = self.lexer.next() else {
            return Ok(Unit::Nil);
        };
        let line = self.line();

        match token {
            Ok(Token::Str(s)) => Ok(Unit::String(s)),
            Ok(Token::Integer(n)) => Ok(Unit::Integer(n)),
            Ok(Token::Name(n) | Token::Symbol(n)) => Ok(Unit::Name(n)),
            Ok(Token::NewLine | Token::Ignored) => self.next_unit(),
            Err(LexError::InvalidSymbol) => {
                Err(ParseError::InvalidSymbol { token: self.lexer.slice().to_string(),
                                                line })
            },
            Err(LexError::UnterminatedString(start)) => {
                Err(ParseError::UnterminatedString { line: start })
            },
            Err(LexError::InvalidEscape(escape)) => {
                Err(ParseError::InvalidEscape { escape, line })
            },
            Err(LexError::LiteralTooLarge) => Err(ParseError::LiteralTooLarge { line }),
        }
    }
}
