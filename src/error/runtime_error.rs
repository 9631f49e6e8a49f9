#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors raised by operator behaviors while they execute.
pub enum RuntimeError {
    /// A name is already bound in the current scope.
    NameAlreadyDefined {
        /// The name being bound.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator required a name operand but received something else.
    ExpectedName {
        /// The operator that required the name.
        operator: String,
        /// The kind of value that was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operator required a code block operand but received something else.
    ExpectedCodeBlock {
        /// The operator that required the code block.
        operator: String,
        /// The kind of value that was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operator behavior received a different number of operands than it
    /// takes.
    WrongOperandCount {
        /// The operator whose behavior ran.
        operator: String,
        /// The number of operands the behavior takes.
        expected: usize,
        /// The number of operands it received.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Writing diagnostic output failed.
    Output {
        /// Details reported by the writer.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameAlreadyDefined { name, line } => write!(f,
                                                              "Error on line {line}: Name '{name}' is already defined in this scope."),
            Self::ExpectedName { operator, found, line } => {
                write!(f, "Error on line {line}: {operator}: expected name, found {found}.")
            },
            Self::ExpectedCodeBlock { operator, found, line } => {
                write!(f, "Error on line {line}: {operator}: expected code, found {found}.")
            },
            Self::WrongOperandCount { operator,
                                      expected,
                                      found,
                                      line, } => write!(f,
                                                        "Error on line {line}: {operator}: expected {expected} operands, found {found}."),
            Self::Output { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
