use std::rc::Rc;

use tracing::debug;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::EvalResult,
        parser::core::{MAX_NESTING, Parser},
        value::{
            core::Unit,
            operator::Delimiter,
            scope::CodeBlock,
        },
    },
};

impl Parser<'_, '_> {
    /// Reads the body of a literal whose opening delimiter was just
    /// dispatched, and pushes the resulting value onto the argument buffer.
    ///
    /// # Parameters
    /// - `delimiter`: Which literal was opened.
    /// - `line`: Line of the opening delimiter.
    ///
    /// # Errors
    /// Returns `NestingTooDeep` if more than [`MAX_NESTING`] literals would be
    /// open at once, and otherwise whatever reading the literal raises.
    pub(in crate::interpreter::parser) fn open(&mut self,
                                               delimiter: Delimiter,
                                               line: usize)
                                               -> EvalResult<()> {
        if self.nesting >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                    line }.into());
        }

        self.nesting += 1;
        let result = match delimiter {
            Delimiter::Block => self.block(line),
            Delimiter::Group => self.group(line),
        };
        self.nesting -= 1;
        result
    }

    /// Reads a `{ ... }` literal into a [`CodeBlock`].
    ///
    /// The body is read inside a fresh scope, so bindings made by `__def`
    /// land in the block and every other invocation is retained rather than
    /// run. The scope is closed again whether or not the body is well formed.
    ///
    /// # Errors
    /// - `MismatchedDelimiter` if the input ends before the closing `}`.
    /// - `UnconsumedArguments` if operands inside the body were never taken.
    fn block(&mut self, line: usize) -> EvalResult<()> {
        let at = self.context.operands().len();
        self.context.push_scope();

        let body = self.sequence_until(Delimiter::Block, line)
                       .and_then(|_| self.check_consumed(at));
        let scope = self.context.pop_scope();
        body?;

        debug!(bindings = scope.bindings().len(),
               calls = scope.calls().len(),
               "block literal");
        self.context
            .push_operand(Unit::CodeBlock(Rc::new(CodeBlock::new(scope))));
        Ok(())
    }

    /// Reads a `( ... )` literal.
    ///
    /// Operands left between the parentheses stay on the buffer. If the body
    /// contained a `,` separator they are gathered into a single
    /// [`Unit::Group`]; otherwise the parentheses only group precedence.
    fn group(&mut self, line: usize) -> EvalResult<()> {
        let at = self.context.operands().len();
        let separated = self.sequence_until(Delimiter::Group, line)?;

        if separated {
            let members = self.context.drain_operands(at..);
            debug!(members = members.len(), "group literal");
            self.context.push_operand(Unit::Group(members));
        }
        Ok(())
    }

    /// Runs sequence rounds until the closing delimiter of `delimiter`.
    ///
    /// # Returns
    /// `true` if any round ended in a separator.
    ///
    /// # Errors
    /// - `MismatchedDelimiter` if the input ends first.
    /// - `UnexpectedDelimiter` if a different literal is closed first.
    fn sequence_until(&mut self, delimiter: Delimiter, line: usize) -> EvalResult<bool> {
        let mut frame = Rc::clone(&self.base);
        let mut separated = false;

        loop {
            let Some(next) = self.expr(&frame, self.context.operands().len())? else {
                return Err(ParseError::MismatchedDelimiter { expected: delimiter.closing()
                                                                                .to_string(),
                                                             line }.into());
            };

            match next.closes() {
                Some(closed) if closed == delimiter => return Ok(separated),
                Some(_) => {
                    return Err(ParseError::UnexpectedDelimiter { delimiter: next.name.clone(),
                                                                 line:      self.reader.line(), }.into());
                },
                None => {},
            }

            separated |= next.is_separator();
            frame = next;
        }
    }
}
