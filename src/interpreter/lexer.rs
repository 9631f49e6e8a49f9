use logos::{Lexer, Logos, Skip};

/// Represents a lexical token in the source input.
///
/// The language has only four atom shapes. Whitespace separates atoms and is
/// otherwise ignored; there are no keywords, since operators are ordinary
/// names that resolve to operator values.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
pub enum Token {
    /// Quoted string literal such as `"a\tb"`.
    #[token("\"", lex_string)]
    Str(String),
    /// Unsigned decimal integer literal such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier such as `x` or `__def`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Name(String),
    /// A maximal run of punctuation such as `;`, `{` or `==`.
    #[regex(r#"[!#$%&'()*+,\-./:;<=>?@\[\\\]^`{|}~]+"#, |lex| lex.slice().to_string())]
    Symbol(String),
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Skip
    })]
    NewLine,
    /// Spaces, tabs, vertical tabs and feeds.
    #[regex(r"[ \t\r\f\x0B]+", logos::skip)]
    Ignored,
}

/// Failures detected while cutting the source into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// A character that cannot start any token.
    #[default]
    InvalidSymbol,
    /// End of input inside a string literal opened on the given line.
    UnterminatedString(usize),
    /// A backslash followed by an unsupported character.
    InvalidEscape(char),
    /// An integer literal outside the `i64` range.
    LiteralTooLarge,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Errors
/// Returns `LexError::LiteralTooLarge` if the digits do not fit into `i64`.
fn parse_integer(lex: &Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::LiteralTooLarge)
}

/// Reads the body of a string literal after its opening quote.
///
/// Consumes up to and including the closing quote and advances the line
/// counter past any newlines inside the literal.
fn lex_string(lex: &mut Lexer<Token>) -> Result<String, LexError> {
    let (consumed, newlines, result) = scan_string(lex.remainder(), lex.extras.line);
    lex.bump(consumed);
    lex.extras.line += newlines;
    result
}

/// Scans string contents, returning the bytes consumed, the newlines seen and
/// the decoded text. `line` is where the literal opened.
fn scan_string(source: &str, line: usize) -> (usize, usize, Result<String, LexError>) {
    let mut text = String::new();
    let mut newlines = 0;
    let mut chars = source.char_indices();

    while let Some((index, c)) = chars.next() {
        match c {
            '"' => return (index + 1, newlines, Ok(text)),
            '\\' => match chars.next() {
                Some((_, 'n')) => text.push('\n'),
                Some((_, 't')) => text.push('\t'),
                Some((_, '\\')) => text.push('\\'),
                Some((_, '"')) => text.push('"'),
                Some((next, other)) => {
                    return (next + other.len_utf8(), newlines, Err(LexError::InvalidEscape(other)));
                },
                None => break,
            },
            '\n' => {
                newlines += 1;
                text.push(c);
            },
            _ => text.push(c),
        }
    }

    (source.len(), newlines, Err(LexError::UnterminatedString(line)))
}
