use std::rc::Rc;

use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        parser::reader::Reader,
        value::{
            core::{Unit, render_list},
            operator::Operator,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many block and group literals may be open at once.
pub const MAX_NESTING: usize = 128;

/// The single-pass operator-precedence engine.
///
/// A parser borrows the interpreter [`Context`] for the duration of one
/// source text. It uses the context's argument buffer as an implicit operand
/// stack: atoms are resolved and pushed as they are read, and an operator
/// invocation is dispatched as soon as its operands are in place. No syntax
/// tree is ever built.
pub struct Parser<'src, 'ctx> {
    pub(in crate::interpreter::parser) reader:  Reader<'src>,
    pub(in crate::interpreter::parser) context: &'ctx mut Context,
    pub(in crate::interpreter::parser) base:    Rc<Operator>,
    pub(in crate::interpreter::parser) nesting: usize,
}

impl<'src, 'ctx> Parser<'src, 'ctx> {
    /// Creates a parser reading `source` into `context`.
    pub fn new(context: &'ctx mut Context, source: &'src str) -> Self {
        Self { reader: Reader::new(source),
               context,
               base: Rc::new(Operator::base()),
               nesting: 0 }
    }

    /// Reads the whole source as a top-level sequence.
    ///
    /// Each operator returned by [`expr`](Self::expr) becomes the frame of
    /// the next round, until the input is exhausted.
    ///
    /// # Errors
    /// - `UnexpectedDelimiter` for a closing delimiter with no open literal.
    /// - `UnconsumedArguments` if operands are left on the buffer at the end.
    /// - Any error raised while reading or dispatching.
    pub fn program(&mut self) -> EvalResult<()> {
        let at = self.context.operands().len();
        let mut frame = Some(Rc::clone(&self.base));

        while let Some(current) = frame {
            if current.closes().is_some() {
                return Err(ParseError::UnexpectedDelimiter { delimiter: current.name.clone(),
                                                             line:      self.reader.line(), }.into());
            }
            frame = self.expr(&current, self.context.operands().len())?;
        }

        self.check_consumed(at)
    }

    /// Collects operands for `frame` and climbs into tighter-binding
    /// operators.
    ///
    /// `at` is the index in the argument buffer where `frame`'s suffix
    /// operands start; its prefix operands sit just below it.
    ///
    /// Operands are pushed until an operator arrives. A nullary operator that
    /// has a behavior (a literal opener or an introspection built-in) is
    /// dispatched on the spot. Any other operator nests into `frame` while
    /// its left power is strictly greater than `frame`'s right power: one
    /// without suffix operands is dispatched at once, one with suffix
    /// operands becomes the frame of a recursive call. Once the operator in
    /// hand no longer out-binds `frame`, `frame` itself is dispatched and
    /// that operator is handed back to the caller.
    ///
    /// # Returns
    /// The operator that ended the frame, or `None` at the end of input.
    ///
    /// # Errors
    /// - `MissingPrefixOperands` if a nesting operator lacks left operands.
    /// - Any error raised while reading or dispatching.
    pub fn expr(&mut self,
                frame: &Rc<Operator>,
                at: usize)
                -> EvalResult<Option<Rc<Operator>>> {
        trace!(frame = %frame.name, at, "frame");

        'atoms: loop {
            let atom = self.reader.next_unit()?;
            if atom.is_nil() {
                self.callf(frame, at)?;
                return Ok(None);
            }

            let collected = self.context.operands().len().saturating_sub(at);
            if collected < frame.quoted {
                self.context.push_operand(atom);
                continue;
            }

            let next = match self.context.resolve(&atom) {
                Unit::Operator(next) => next,
                resolved => {
                    self.context.push_operand(resolved);
                    continue;
                },
            };

            if next.is_nullary() && !next.is_marker() {
                self.callf(&next, self.context.operands().len())?;
                continue;
            }

            let mut pending = Some(next);
            while let Some(next) = pending.take_if(|next| next.left_power > frame.right_power) {
                let len = self.context.operands().len();
                let available = len.saturating_sub(at);
                if available < next.prefix {
                    return Err(ParseError::MissingPrefixOperands { operator: next.name.clone(),
                                                                   required: next.prefix,
                                                                   available,
                                                                   line: self.reader.line() }.into());
                }
                if next.suffix == 0 {
                    self.callf(&next, len)?;
                    continue 'atoms;
                }
                pending = self.expr(&next, len)?;
            }

            self.callf(frame, at)?;
            return Ok(pending);
        }
    }

    /// Fails if operands above `at` are still waiting for an operator.
    pub(in crate::interpreter::parser) fn check_consumed(&self, at: usize) -> EvalResult<()> {
        let leftover = &self.context.operands()[at.min(self.context.operands().len())..];
        if leftover.is_empty() {
            return Ok(());
        }
        Err(ParseError::UnconsumedArguments { arguments: render_list(leftover),
                                              line:      self.reader.line(), }.into())
    }
}
