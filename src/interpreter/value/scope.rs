use std::{collections::BTreeMap, rc::Rc};

use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            core::{Unit, render_list},
            operator::{Behavior, Operator},
        },
    },
};

/// A captured operator invocation.
///
/// The call holds a shared handle to its operator, so the definition stays
/// alive for as long as any retained call refers to it. Calls are immutable
/// once recorded.
#[derive(Debug, Clone)]
pub struct Call {
    operator: Rc<Operator>,
    args:     Vec<Unit>,
    line:     usize,
}

impl Call {
    /// Captures `operator` applied to an already-resolved operand window.
    #[must_use]
    pub const fn new(operator: Rc<Operator>, args: Vec<Unit>, line: usize) -> Self {
        Self { operator, args, line }
    }

    /// The operator this call invokes.
    #[must_use]
    pub const fn operator(&self) -> &Rc<Operator> {
        &self.operator
    }

    /// The captured operands, prefix operands first.
    #[must_use]
    pub fn args(&self) -> &[Unit] {
        &self.args
    }

    /// Re-executes the operator's native behavior against the captured
    /// operands.
    ///
    /// Markers and literal openers carry no native behavior, so invoking a
    /// call to one of them does nothing.
    pub fn invoke(&self, context: &mut Context) -> EvalResult<()> {
        match self.operator.behavior {
            Behavior::Native(func) | Behavior::Definition(func) => {
                debug!(operator = %self.operator.name, args = %render_list(&self.args), "replay");
                func(context, &self.args, self.line)
            },
            Behavior::Marker(_) | Behavior::Open(_) => Ok(()),
        }
    }
}

impl std::fmt::Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.operator.name)?;

        for (index, arg) in self.args.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{arg}")?;
        }

        write!(f, ")")
    }
}

/// A lexical scope: name bindings plus the calls retained while a block
/// literal was being read.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    bindings: BTreeMap<String, Unit>,
    calls:    Vec<Call>,
}

impl Scope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a binding in this scope only.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Unit> {
        self.bindings.get(name)
    }

    /// Binds `value` under `name`.
    ///
    /// # Errors
    /// Returns `NameAlreadyDefined` if this scope already binds `name`.
    /// Bindings in enclosing scopes are not consulted.
    ///
    /// # Example
    /// ```
    /// use glyph::interpreter::value::{core::Unit, scope::Scope};
    ///
    /// let mut scope = Scope::new();
    /// scope.bind("x", Unit::Integer(5), 1).unwrap();
    ///
    /// assert_eq!(scope.get("x"), Some(&Unit::Integer(5)));
    /// assert!(scope.bind("x", Unit::Integer(6), 2).is_err());
    /// ```
    pub fn bind(&mut self, name: &str, value: Unit, line: usize) -> EvalResult<()> {
        if self.bindings.contains_key(name) {
            return Err(RuntimeError::NameAlreadyDefined { name: name.to_string(),
                                                          line }.into());
        }
        self.bindings.insert(name.to_string(), value);
        Ok(())
    }

    /// Appends a call to the retained-call list.
    pub fn retain(&mut self, call: Call) {
        self.calls.push(call);
    }

    /// All bindings, ordered by name.
    #[must_use]
    pub const fn bindings(&self) -> &BTreeMap<String, Unit> {
        &self.bindings
    }

    /// Retained calls in recording order.
    #[must_use]
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;

        for (index, (name, value)) in self.bindings.iter().enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }

            write!(f, " {name}: {value}")?;
        }

        write!(f, " }}")
    }
}

/// The value of a `{ ... }` literal.
#[derive(Debug, Clone, Default)]
pub struct CodeBlock {
    scope: Scope,
}

impl CodeBlock {
    /// Wraps a finished scope.
    #[must_use]
    pub const fn new(scope: Scope) -> Self {
        Self { scope }
    }

    /// The block's own scope.
    #[must_use]
    pub const fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Replays every retained call in recorded order.
    ///
    /// Nothing is memoized; side effects repeat on every invocation.
    pub fn invoke(&self, context: &mut Context) -> EvalResult<()> {
        debug!(calls = self.scope.calls.len(), "invoke block");
        for call in &self.scope.calls {
            call.invoke(context)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ scope: {}, calls: [", self.scope)?;

        for (index, call) in self.scope.calls.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{call}")?;
        }

        write!(f, "] }}")
    }
}
