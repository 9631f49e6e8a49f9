use std::{
    io::{self, Write},
    ops::RangeBounds,
};

use tracing::{debug, trace};

use crate::{
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::function::core::base_scope,
        parser::core::Parser,
        value::{core::Unit, operator::Operator, scope::Scope},
    },
};

/// Result type used by the evaluator.
///
/// Reading and executing happen in one pass, so every evaluation function
/// returns either a value of type `T` or an [`Error`] of either kind.
pub type EvalResult<T> = Result<T, Error>;

/// Stores the runtime evaluation context.
///
/// This struct holds all state that lives across a program: the stack of
/// active scopes (the base scope with the built-in operators is always at the
/// bottom), the shared argument buffer the precedence engine uses as its
/// operand stack, and the writer that diagnostic built-ins print to.
///
/// ## Usage
///
/// `Context` is created once and may run several sources in turn; bindings
/// made at top level persist between runs.
///
/// ```
/// use glyph::interpreter::{evaluator::core::Context, value::core::Unit};
///
/// let mut context = Context::new();
/// context.execute("__def x 5 ;").unwrap();
///
/// assert_eq!(context.lookup("x"), Some(&Unit::Integer(5)));
/// assert!(context.operands().is_empty());
/// ```
pub struct Context {
    scopes: Vec<Scope>,
    units:  Vec<Unit>,
    output: Box<dyn Write>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context that writes diagnostics to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }

    /// Creates a context that writes diagnostics to `output`.
    #[must_use]
    pub fn with_output(output: Box<dyn Write>) -> Self {
        Self { scopes: vec![base_scope()],
               units: Vec::new(),
               output }
    }

    /// Reads and evaluates `source` against this context.
    ///
    /// Top-level invocations run as they are read; invocations inside block
    /// literals are retained in the block's scope.
    ///
    /// # Errors
    /// Returns the first fatal condition. Effects that already happened are
    /// kept, but the scope stack and argument buffer are reset so the context
    /// can be reused.
    pub fn execute(&mut self, source: &str) -> EvalResult<()> {
        let result = Parser::new(self, source).program();
        if result.is_err() {
            self.scopes.truncate(1);
            self.units.clear();
        }
        result
    }

    /// Registers an operator in the base scope under its own name.
    ///
    /// # Errors
    /// Returns `NameAlreadyDefined` if the base scope already binds the name.
    ///
    /// # Example
    /// ```
    /// use glyph::interpreter::{
    ///     evaluator::core::Context,
    ///     value::operator::{Behavior, Marker, Operator},
    /// };
    ///
    /// let mut context = Context::new();
    /// let op = Operator::new("then", 0, 0, Behavior::Marker(Marker::Plain));
    ///
    /// assert!(context.define_operator(op.clone()).is_ok());
    /// assert!(context.define_operator(op).is_err());
    /// ```
    pub fn define_operator(&mut self, operator: Operator) -> EvalResult<()> {
        let name = operator.name.clone();
        match self.scopes.first_mut() {
            Some(base) => base.bind(&name, operator.into(), 0),
            None => Ok(()),
        }
    }

    /// Number of active scopes; `1` means top level.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// The innermost active scope.
    #[must_use]
    pub fn current_scope(&self) -> &Scope {
        &self.scopes[self.scopes.len() - 1]
    }

    pub(crate) fn current_scope_mut(&mut self) -> &mut Scope {
        let innermost = self.scopes.len() - 1;
        &mut self.scopes[innermost]
    }

    pub(crate) fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
        debug!(depth = self.scopes.len(), "scope opened");
    }

    /// Removes the innermost scope. The base scope is never removed.
    pub(crate) fn pop_scope(&mut self) -> Scope {
        if self.scopes.len() > 1 {
            debug!(depth = self.scopes.len(), "scope closed");
            self.scopes.pop().unwrap_or_default()
        } else {
            Scope::new()
        }
    }

    /// Binds `value` under `name` in the innermost scope.
    ///
    /// # Errors
    /// Returns `NameAlreadyDefined` if the innermost scope already binds
    /// `name`. Shadowing a binding of an enclosing scope is allowed.
    pub fn bind(&mut self, name: &str, value: Unit, line: usize) -> EvalResult<()> {
        debug!(name, %value, depth = self.scopes.len(), "bind");
        self.current_scope_mut().bind(name, value, line)
    }

    /// Searches the scope stack for `name`, innermost scope first.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Unit> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Resolves a unit against the scope stack.
    ///
    /// A name bound in any active scope resolves to its binding; an unbound
    /// name stays a free-standing name. Other units resolve to themselves.
    ///
    /// # Example
    /// ```
    /// use glyph::interpreter::{evaluator::core::Context, value::core::Unit};
    ///
    /// let mut context = Context::new();
    /// context.bind("x", Unit::Integer(1), 1).unwrap();
    ///
    /// assert_eq!(context.resolve(&Unit::name("x")), Unit::Integer(1));
    /// assert_eq!(context.resolve(&Unit::name("y")), Unit::name("y"));
    /// assert_eq!(context.resolve(&Unit::Integer(7)), Unit::Integer(7));
    /// ```
    #[must_use]
    pub fn resolve(&self, unit: &Unit) -> Unit {
        unit.as_name()
            .and_then(|name| self.lookup(name))
            .unwrap_or(unit)
            .clone()
    }

    /// The argument buffer.
    #[must_use]
    pub fn operands(&self) -> &[Unit] {
        &self.units
    }

    /// Pushes a unit onto the argument buffer.
    ///
    /// Natives may use this to leave a result for the operator collecting
    /// operands around them.
    pub fn push_operand(&mut self, unit: Unit) {
        trace!(%unit, "push");
        self.units.push(unit);
    }

    pub(crate) fn drain_operands<R>(&mut self, range: R) -> Vec<Unit>
        where R: RangeBounds<usize>
    {
        self.units.drain(range).collect()
    }

    /// Writes one line of diagnostic output.
    ///
    /// # Errors
    /// Returns `RuntimeError::Output` if the writer fails.
    pub fn write_line(&mut self, text: &str, line: usize) -> EvalResult<()> {
        writeln!(self.output, "{text}").map_err(|e| {
                                             RuntimeError::Output { details: e.to_string(),
                                                                    line }.into()
                                         })
    }
}
