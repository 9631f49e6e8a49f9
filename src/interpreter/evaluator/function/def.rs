use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::{Context, EvalResult}, value::core::Unit},
};

/// Binds a value under a name in the innermost scope.
///
/// Takes exactly two operands: the name, taken as written, and the value,
/// already resolved. `__def` runs while the source is read, so a binding
/// made inside a block literal belongs to that block's scope and is visible
/// to the rest of the block immediately.
///
/// # Errors
/// - `WrongOperandCount` unless exactly two operands are given.
/// - `ExpectedName` if the first operand is not a name.
/// - `NameAlreadyDefined` if the innermost scope already binds it.
///
/// # Example
/// ```
/// use glyph::interpreter::{
///     evaluator::{core::Context, function::def::def},
///     value::core::Unit,
/// };
///
/// let mut context = Context::new();
/// def(&mut context, &[Unit::name("x"), Unit::Integer(5)], 1).unwrap();
///
/// assert_eq!(context.lookup("x"), Some(&Unit::Integer(5)));
/// assert!(def(&mut context, &[Unit::Integer(1), Unit::Integer(5)], 1).is_err());
/// ```
pub fn def(context: &mut Context, args: &[Unit], line: usize) -> EvalResult<()> {
    let [target, value] = args else {
        return Err(RuntimeError::WrongOperandCount { operator: "__def".to_string(),
                                                     expected: 2,
                                                     found: args.len(),
                                                     line }.into());
    };
    let Some(name) = target.as_name() else {
        return Err(RuntimeError::ExpectedName { operator: "__def".to_string(),
                                                found: target.kind().to_string(),
                                                line }.into());
    };

    context.bind(name, value.clone(), line)
}
