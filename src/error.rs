/// Parsing errors.
///
/// Defines all error types that can occur while reading atoms from the source
/// and while the precedence engine assembles operator invocations: malformed
/// tokens, arity shortfalls, delimiter mismatches and leftover operands.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised by operator behaviors while
/// they execute, such as binding a name twice in one scope or invoking
/// something that is not a code block.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any fatal condition raised while a program is read and evaluated.
///
/// Reading and executing are interleaved in a single pass, so both kinds of
/// failure travel through the same result type.
pub enum Error {
    /// The source could not be read or structured.
    Parse(ParseError),
    /// An operator behavior failed.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
