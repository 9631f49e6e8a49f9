use std::rc::Rc;

use crate::interpreter::value::{operator::Operator, scope::CodeBlock};

/// Represents a single value flowing through the engine.
///
/// Every atom read from the source, every operand on the argument buffer and
/// every binding in a scope is a `Unit`. Operators are values too: binding
/// power and arity live on the [`Operator`] stored in a scope, which is how
/// the engine recognizes them after name resolution.
#[derive(Debug, Clone)]
pub enum Unit {
    /// No value; also signals the end of input.
    Nil,
    /// A 64-bit signed integer.
    Integer(i64),
    /// A string literal.
    String(String),
    /// An identifier or symbol, either unresolved or used as a literal token.
    Name(String),
    /// An ordered sequence produced by a separator inside parentheses.
    Group(Vec<Self>),
    /// An operator definition, shared by every scope and call that refers to
    /// it.
    Operator(Rc<Operator>),
    /// A block literal with its own scope and retained calls.
    CodeBlock(Rc<CodeBlock>),
}

impl PartialEq for Unit {
    /// Literals compare structurally, operators and code blocks by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::String(a), Self::String(b)) | (Self::Name(a), Self::Name(b)) => a == b,
            (Self::Group(a), Self::Group(b)) => a == b,
            (Self::Operator(a), Self::Operator(b)) => Rc::ptr_eq(a, b),
            (Self::CodeBlock(a), Self::CodeBlock(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for Unit {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Operator> for Unit {
    fn from(op: Operator) -> Self {
        Self::Operator(Rc::new(op))
    }
}

impl Unit {
    /// Creates a name unit.
    ///
    /// # Example
    /// ```
    /// use glyph::interpreter::value::core::Unit;
    ///
    /// assert_eq!(Unit::name("x"), Unit::Name("x".to_string()));
    /// ```
    #[must_use]
    pub fn name(text: &str) -> Self {
        Self::Name(text.to_string())
    }

    /// Returns the name of the active variant, for diagnostics.
    ///
    /// # Example
    /// ```
    /// use glyph::interpreter::value::core::Unit;
    ///
    /// assert_eq!(Unit::Integer(3).kind(), "integer");
    /// assert_eq!(Unit::name("x").kind(), "name");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Integer(_) => "integer",
            Self::String(_) => "string",
            Self::Name(_) => "name",
            Self::Group(_) => "group",
            Self::Operator(_) => "operator",
            Self::CodeBlock(_) => "code",
        }
    }

    /// Returns `true` if the unit is [`Nil`](Self::Nil).
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the identifier text if the unit is a name.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the operator if the unit is one.
    #[must_use]
    pub const fn as_operator(&self) -> Option<&Rc<Operator>> {
        match self {
            Self::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// Returns the code block if the unit is one.
    #[must_use]
    pub const fn as_code_block(&self) -> Option<&Rc<CodeBlock>> {
        match self {
            Self::CodeBlock(block) => Some(block),
            _ => None,
        }
    }
}

/// Renders a sequence of units as `[a, b, c]`.
///
/// # Example
/// ```
/// use glyph::interpreter::value::core::{Unit, render_list};
///
/// let units = [Unit::Integer(1), Unit::name("x")];
/// assert_eq!(render_list(&units), "[1, name(x)]");
/// ```
#[must_use]
pub fn render_list(units: &[Unit]) -> String {
    let parts = units.iter().map(ToString::to_string).collect::<Vec<_>>();
    format!("[{}]", parts.join(", "))
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Name(n) => write!(f, "name({n})"),
            Self::Group(members) => {
                write!(f, "(")?;

                for (index, member) in members.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{member}")?;
                }

                write!(f, ")")
            },
            Self::Operator(op) => write!(f, "op({op})"),
            Self::CodeBlock(block) => write!(f, "{block}"),
        }
    }
}
