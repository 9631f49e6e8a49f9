use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::EvalResult,
        parser::core::Parser,
        value::{
            core::render_list,
            operator::{Behavior, Operator},
            scope::Call,
        },
    },
};

impl Parser<'_, '_> {
    /// Dispatches one saturated operator invocation.
    ///
    /// The operator's window of operands is `[at - prefix, at + suffix)` in
    /// the argument buffer. The window is removed from the buffer and handed
    /// to the operator's behavior:
    ///
    /// - markers do nothing;
    /// - literal openers read the literal's body;
    /// - definitions run at once, whatever the nesting depth;
    /// - natives run at once at top level and are retained as a [`Call`] in
    ///   the innermost scope otherwise.
    ///
    /// # Errors
    /// - `MissingSuffixOperands` if fewer than `suffix` operands follow `at`.
    /// - `MissingPrefixOperands` if fewer than `prefix` operands precede `at`.
    /// - Any error raised by the behavior itself.
    pub(in crate::interpreter::parser) fn callf(&mut self,
                                                operator: &Rc<Operator>,
                                                at: usize)
                                                -> EvalResult<()> {
        let line = self.reader.line();
        let len = self.context.operands().len();
        let available = len.saturating_sub(at);

        if available < operator.suffix {
            return Err(ParseError::MissingSuffixOperands { operator: operator.name.clone(),
                                                           required: operator.suffix,
                                                           available,
                                                           line }.into());
        }
        if at < operator.prefix {
            return Err(ParseError::MissingPrefixOperands { operator: operator.name.clone(),
                                                           required: operator.prefix,
                                                           available: at,
                                                           line }.into());
        }

        let window = self.context
                         .drain_operands(at - operator.prefix..at + operator.suffix);

        match operator.behavior {
            Behavior::Marker(_) => {
                trace!(operator = %operator.name, "marker");
                Ok(())
            },
            Behavior::Open(delimiter) => self.open(delimiter, line),
            Behavior::Definition(func) => {
                debug!(operator = %operator.name, args = %render_list(&window), "define");
                func(self.context, &window, line)
            },
            Behavior::Native(func) if self.context.depth() == 1 => {
                debug!(operator = %operator.name, args = %render_list(&window), "execute");
                func(self.context, &window, line)
            },
            Behavior::Native(_) => {
                debug!(operator = %operator.name,
                       args = %render_list(&window),
                       depth = self.context.depth(),
                       "retain");
                self.context
                    .current_scope_mut()
                    .retain(Call::new(Rc::clone(operator), window, line));
                Ok(())
            },
        }
    }
}
