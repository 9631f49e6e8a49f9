use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::core::is_builtin,
        },
        value::core::{Unit, render_list},
    },
};

/// Writes the argument buffer.
///
/// Takes no operands. The buffer is printed as it stands when the call runs,
/// so a retained `__stack` shows the buffer at replay time.
pub fn stack(context: &mut Context, _args: &[Unit], line: usize) -> EvalResult<()> {
    let text = render_list(context.operands());
    context.write_line(&text, line)
}

/// Writes the bindings of the innermost scope.
///
/// Takes no operands. Built-in operators are left out so that the base scope
/// shows only what the program defined.
pub fn scope(context: &mut Context, _args: &[Unit], line: usize) -> EvalResult<()> {
    let entries = context.current_scope()
                         .bindings()
                         .iter()
                         .filter(|(name, value)| {
                             !(is_builtin(name) && value.as_operator().is_some())
                         })
                         .map(|(name, value)| format!("{name}: {value}"))
                         .collect::<Vec<_>>();

    let text = if entries.is_empty() {
        "{ }".to_string()
    } else {
        format!("{{ {} }}", entries.join(", "))
    };
    context.write_line(&text, line)
}

/// Writes a single value.
///
/// Takes exactly one operand.
///
/// # Errors
/// Returns `WrongOperandCount` unless exactly one operand is given.
///
/// # Example
/// ```
/// use std::{cell::RefCell, io::Write, rc::Rc};
///
/// use glyph::interpreter::{
///     evaluator::{core::Context, function::introspect::dump},
///     value::core::Unit,
/// };
///
/// #[derive(Clone, Default)]
/// struct Sink(Rc<RefCell<Vec<u8>>>);
///
/// impl Write for Sink {
///     fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
///         self.0.borrow_mut().extend_from_slice(buf);
///         Ok(buf.len())
///     }
///
///     fn flush(&mut self) -> std::io::Result<()> {
///         Ok(())
///     }
/// }
///
/// let sink = Sink::default();
/// let mut context = Context::with_output(Box::new(sink.clone()));
/// dump(&mut context, &[Unit::from("hi")], 1).unwrap();
///
/// assert_eq!(sink.0.borrow().as_slice(), b"\"hi\"\n");
/// ```
pub fn dump(context: &mut Context, args: &[Unit], line: usize) -> EvalResult<()> {
    let [value] = args else {
        return Err(RuntimeError::WrongOperandCount { operator: "__dump".to_string(),
                                                     expected: 1,
                                                     found: args.len(),
                                                     line }.into());
    };
    let text = value.to_string();
    context.write_line(&text, line)
}
