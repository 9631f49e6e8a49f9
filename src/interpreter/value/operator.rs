use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::core::Unit,
};

/// Weakest binding power; operators with it yield to everything.
pub const MIN_POWER: i32 = i32::MIN;
/// Strongest binding power; nothing out-binds an operator collecting with it.
pub const MAX_POWER: i32 = i32::MAX;

/// Signature of a native operator behavior.
///
/// A native receives the interpreter context, the window of already-resolved
/// operands (prefix operands first, then suffix operands) and the source line
/// of the invocation. Natives act through side effects only.
pub type NativeFn = fn(&mut Context, &[Unit], usize) -> EvalResult<()>;

/// The two composite literal forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `{ ... }`, which produces a code block with its own scope.
    Block,
    /// `( ... )`, which produces a group when it contains a separator.
    Group,
}

impl Delimiter {
    /// Returns the token that closes this literal.
    ///
    /// # Example
    /// ```
    /// use glyph::interpreter::value::operator::Delimiter;
    ///
    /// assert_eq!(Delimiter::Block.closing(), "}");
    /// assert_eq!(Delimiter::Group.closing(), ")");
    /// ```
    #[must_use]
    pub const fn closing(self) -> &'static str {
        match self {
            Self::Block => "}",
            Self::Group => ")",
        }
    }
}

/// Role of an operator that performs no action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Separates statements or reserves a keyword.
    Plain,
    /// Separates the members of a group.
    Separator,
    /// Closes a block or group literal.
    Close(Delimiter),
}

/// What happens when an operator invocation is dispatched.
#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    /// Pure syntax: the operator takes part in precedence and its operand
    /// window vanishes without effect.
    Marker(Marker),
    /// Opens a nested block or group literal.
    Open(Delimiter),
    /// Runs while the source is read, at any nesting depth.
    Definition(NativeFn),
    /// Runs immediately at top level and is retained as a call inside block
    /// literals.
    Native(NativeFn),
}

/// A named operator with arity and binding power.
///
/// `left_power` is how strongly the operator claims the operands collected
/// to its left when it appears mid-stream; `right_power` is how much it
/// resists later operators while collecting its own suffix operands. An
/// operator nests inside the current frame only when its left power is
/// strictly greater than the frame's right power.
#[derive(Debug, Clone)]
pub struct Operator {
    /// The name the operator is bound under.
    pub name:        String,
    /// Binding power towards operands on the left.
    pub left_power:  i32,
    /// Binding power while collecting operands on the right.
    pub right_power: i32,
    /// Number of operands consumed to the left.
    pub prefix:      usize,
    /// Number of operands consumed to the right.
    pub suffix:      usize,
    /// Number of leading suffix operands taken as written instead of being
    /// resolved.
    pub quoted:      usize,
    /// The action performed on dispatch.
    pub behavior:    Behavior,
}

impl Operator {
    /// Creates an operator with neutral binding powers and no quoted operands.
    ///
    /// # Example
    /// ```
    /// use glyph::interpreter::value::operator::{Behavior, Marker, Operator};
    ///
    /// let op = Operator::new("fn", 0, 2, Behavior::Marker(Marker::Plain));
    /// assert_eq!(op.left_power, 0);
    /// assert_eq!(op.suffix, 2);
    /// ```
    #[must_use]
    pub fn new(name: &str, prefix: usize, suffix: usize, behavior: Behavior) -> Self {
        Self { name: name.to_string(),
               left_power: 0,
               right_power: 0,
               prefix,
               suffix,
               quoted: 0,
               behavior }
    }

    /// The zero-arity, minimal-power frame that seeds every sequence.
    #[must_use]
    pub fn base() -> Self {
        Self::new("", 0, 0, Behavior::Marker(Marker::Plain)).with_powers(MIN_POWER, MIN_POWER)
    }

    /// Sets the left and right binding powers.
    #[must_use]
    pub const fn with_powers(mut self, left_power: i32, right_power: i32) -> Self {
        self.left_power = left_power;
        self.right_power = right_power;
        self
    }

    /// Sets how many leading suffix operands are taken as written.
    #[must_use]
    pub const fn with_quoted(mut self, quoted: usize) -> Self {
        self.quoted = quoted;
        self
    }

    /// Returns `true` if the operator consumes no operands on either side.
    #[must_use]
    pub const fn is_nullary(&self) -> bool {
        self.prefix == 0 && self.suffix == 0
    }

    /// Returns `true` if the operator performs no action.
    #[must_use]
    pub const fn is_marker(&self) -> bool {
        matches!(self.behavior, Behavior::Marker(_))
    }

    /// Returns `true` if the operator separates group members.
    #[must_use]
    pub const fn is_separator(&self) -> bool {
        matches!(self.behavior, Behavior::Marker(Marker::Separator))
    }

    /// Returns the literal this operator closes, if any.
    #[must_use]
    pub const fn closes(&self) -> Option<Delimiter> {
        match self.behavior {
            Behavior::Marker(Marker::Close(delimiter)) => Some(delimiter),
            _ => None,
        }
    }
}

fn fmt_power(power: i32) -> String {
    match power {
        MIN_POWER => "min".to_string(),
        MAX_POWER => "max".to_string(),
        p => p.to_string(),
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "{}/{}/{} {}:{}",
               self.prefix,
               self.name,
               self.suffix,
               fmt_power(self.left_power),
               fmt_power(self.right_power))
    }
}
