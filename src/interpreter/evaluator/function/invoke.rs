use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::{Context, EvalResult}, value::core::Unit},
};

/// Replays the retained calls of a code block.
///
/// Takes exactly one operand, the block, which precedes the operator:
/// `block __invoke`. Calls run in the order they were recorded, every time
/// the block is invoked.
///
/// # Errors
/// Returns `WrongOperandCount` unless exactly one operand is given,
/// `ExpectedCodeBlock` if the operand is not a code block, and propagates the
/// first error raised by a replayed call.
pub fn invoke(context: &mut Context, args: &[Unit], line: usize) -> EvalResult<()> {
    let [target] = args else {
        return Err(RuntimeError::WrongOperandCount { operator: "__invoke".to_string(),
                                                     expected: 1,
                                                     found: args.len(),
                                                     line }.into());
    };
    let Some(block) = target.as_code_block() else {
        return Err(RuntimeError::ExpectedCodeBlock { operator: "__invoke".to_string(),
                                                     found: target.kind().to_string(),
                                                     line }.into());
    };

    block.invoke(context)
}
