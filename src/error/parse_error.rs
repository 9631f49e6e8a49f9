#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading atoms or assembling
/// operator invocations.
pub enum ParseError {
    /// Found a character that cannot start any atom.
    InvalidSymbol {
        /// The offending source text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input inside a string literal.
    UnterminatedString {
        /// The source line where the string started.
        line: usize,
    },
    /// A string literal contained an escape sequence other than `\n`, `\t`,
    /// `\\` or `\"`.
    InvalidEscape {
        /// The character following the backslash.
        escape: char,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// An integer literal does not fit into 64 signed bits.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator found fewer operands to its left than it declares.
    MissingPrefixOperands {
        /// The operator name.
        operator:  String,
        /// The declared prefix arity.
        required:  usize,
        /// The operands actually available.
        available: usize,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An operator found fewer operands to its right than it declares.
    MissingSuffixOperands {
        /// The operator name.
        operator:  String,
        /// The declared suffix arity.
        required:  usize,
        /// The operands actually available.
        available: usize,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// The input ended before the closing delimiter of an open literal.
    MismatchedDelimiter {
        /// The closing delimiter that was expected.
        expected: String,
        /// The source line where the literal was opened.
        line:     usize,
    },
    /// A closing delimiter appeared that does not close the open literal.
    UnexpectedDelimiter {
        /// The delimiter that was found.
        delimiter: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Operands were left on the argument buffer when a block or program
    /// finished.
    UnconsumedArguments {
        /// The leftover operands, rendered.
        arguments: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Too many block or group literals were open at once.
    NestingTooDeep {
        /// The maximum number of open literals.
        limit: usize,
        /// The source line of the literal that exceeded the limit.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSymbol { token, line } => {
                write!(f, "Error on line {line}: Invalid symbol: {token:?}.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: End of input inside string.")
            },
            Self::InvalidEscape { escape, line } => {
                write!(f, "Error on line {line}: Invalid escape sequence '\\{escape}'.")
            },
            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
            Self::MissingPrefixOperands { operator,
                                          required,
                                          available,
                                          line, } => write!(f,
                                                            "Error on line {line}: '{operator}' requires {required} prefix args but {available} available."),
            Self::MissingSuffixOperands { operator,
                                          required,
                                          available,
                                          line, } => write!(f,
                                                            "Error on line {line}: '{operator}' requires {required} suffix args but {available} available."),
            Self::MismatchedDelimiter { expected, line } => write!(f,
                                                                   "Error on line {line}: Mismatched delimiter, expected '{expected}' before end of input."),
            Self::UnexpectedDelimiter { delimiter, line } => {
                write!(f, "Error on line {line}: Unexpected delimiter '{delimiter}'.")
            },
            Self::UnconsumedArguments { arguments, line } => {
                write!(f, "Error on line {line}: Unconsumed arguments {arguments}.")
            },
            Self::NestingTooDeep { limit, line } => {
                write!(f, "Error on line {line}: Literals nested deeper than {limit} levels.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
