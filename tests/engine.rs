use std::{cell::RefCell, io::Write, rc::Rc};

use glyph::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{def::def, introspect::dump, invoke::invoke},
        },
        parser::core::MAX_NESTING,
        value::{
            core::Unit,
            operator::{Behavior, Operator},
        },
    },
};

/// Collects everything a context writes.
#[derive(Clone, Default)]
struct Transcript(Rc<RefCell<Vec<u8>>>);

impl Transcript {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for Transcript {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn context() -> (Context, Transcript) {
    let transcript = Transcript::default();
    (Context::with_output(Box::new(transcript.clone())), transcript)
}

fn run(source: &str) -> String {
    let (mut context, transcript) = context();
    if let Err(e) = context.execute(source) {
        panic!("Script failed: {e}\n{source}");
    }
    transcript.text()
}

fn run_err(source: &str) -> Error {
    let (mut context, _) = context();
    match context.execute(source) {
        Ok(()) => panic!("Script succeeded but was expected to fail:\n{source}"),
        Err(e) => e,
    }
}

fn integers(args: &[Unit]) -> (i64, i64) {
    match args {
        [Unit::Integer(a), Unit::Integer(b)] => (*a, *b),
        _ => panic!("expected two integers, got {args:?}"),
    }
}

fn subtract(context: &mut Context, args: &[Unit], _line: usize) -> EvalResult<()> {
    let (a, b) = integers(args);
    context.push_operand(Unit::Integer(a - b));
    Ok(())
}

fn multiply(context: &mut Context, args: &[Unit], _line: usize) -> EvalResult<()> {
    let (a, b) = integers(args);
    context.push_operand(Unit::Integer(a * b));
    Ok(())
}

fn power(context: &mut Context, args: &[Unit], _line: usize) -> EvalResult<()> {
    let (a, b) = integers(args);
    context.push_operand(Unit::Integer(a.pow(u32::try_from(b).unwrap_or(0))));
    Ok(())
}

fn negate(context: &mut Context, args: &[Unit], _line: usize) -> EvalResult<()> {
    match args {
        [Unit::Integer(a)] => context.push_operand(Unit::Integer(-a)),
        _ => panic!("expected one integer, got {args:?}"),
    }
    Ok(())
}

/// A context with a small arithmetic vocabulary: `-` and `*` are left
/// associative with `*` binding tighter, `^` is right associative, and `neg`
/// is a prefix operator binding tighter than all of them.
fn arithmetic() -> (Context, Transcript) {
    let (mut context, transcript) = context();
    let operators = [Operator::new("-", 1, 1, Behavior::Native(subtract)).with_powers(10, 10),
                     Operator::new("*", 1, 1, Behavior::Native(multiply)).with_powers(20, 20),
                     Operator::new("^", 1, 1, Behavior::Native(power)).with_powers(30, 29),
                     Operator::new("neg", 0, 1, Behavior::Native(negate)).with_powers(40, 40)];
    for operator in operators {
        if let Err(e) = context.define_operator(operator) {
            panic!("failed to define operator: {e}");
        }
    }
    (context, transcript)
}

fn eval(source: &str) -> String {
    let (mut context, transcript) = arithmetic();
    if let Err(e) = context.execute(source) {
        panic!("Script failed: {e}\n{source}");
    }
    transcript.text()
}

#[test]
fn definition_binds_without_leftovers() {
    let (mut context, transcript) = context();
    context.execute("__def x 5 ;").unwrap();

    assert_eq!(context.lookup("x"), Some(&Unit::Integer(5)));
    assert!(context.operands().is_empty());
    assert_eq!(context.depth(), 1);
    assert_eq!(transcript.text(), "");
}

#[test]
fn bindings_persist_between_runs() {
    let (mut context, transcript) = context();
    context.execute("__def x 5 ;").unwrap();
    context.execute("__dump x ;").unwrap();

    assert_eq!(transcript.text(), "5\n");
}

#[test]
fn dump_renders_every_kind() {
    assert_eq!(run("__dump 7 ;"), "7\n");
    assert_eq!(run("__dump \"a\\tb\" ;"), "\"a\\tb\"\n");
    assert_eq!(run("__dump unbound ;"), "name(unbound)\n");
    assert_eq!(run("__dump ( 1 , \"two\" , three ) ;"), "(1, \"two\", name(three))\n");
    assert_eq!(run("__def b { __def y 1 ; __dump y ; } ; __dump b ;"),
               "{ scope: { y: 1 }, calls: [__dump(1)] }\n");
}

#[test]
fn block_literal_records_bindings_and_calls() {
    let (mut context, transcript) = context();
    context.execute("__def b { __def y 1 ; __dump y ; } ;").unwrap();

    let block = context.lookup("b")
                       .and_then(Unit::as_code_block)
                       .expect("b is a code block")
                       .clone();
    assert_eq!(block.scope().get("y"), Some(&Unit::Integer(1)));
    assert_eq!(block.scope().calls().len(), 1);

    let call = &block.scope().calls()[0];
    assert_eq!(call.operator().name, "__dump");
    assert_eq!(call.args(), &[Unit::Integer(1)]);

    assert_eq!(transcript.text(), "");
    assert_eq!(context.lookup("y"), None);
}

#[test]
fn invocation_replays_in_order_every_time() {
    let output = run("__def b { __dump 1 ; __dump 2 ; } ; b __invoke ; b __invoke ;");
    assert_eq!(output, "1\n2\n1\n2\n");
}

#[test]
fn block_with_only_definitions_has_no_effect() {
    let (mut context, transcript) = context();
    context.execute("__def b { __def q 1 ; } ; b __invoke ;").unwrap();

    let block = context.lookup("b").and_then(Unit::as_code_block).unwrap();
    assert!(block.scope().calls().is_empty());
    assert_eq!(transcript.text(), "");
    assert_eq!(context.lookup("q"), None);
}

#[test]
fn nested_blocks_defer_until_outermost_invocation() {
    let source = r#"
        __def outer {
            __def inner { __dump "inner" ; } ;
            __dump "outer" ;
            inner __invoke ;
        } ;
    "#;
    let (mut context, transcript) = context();
    context.execute(source).unwrap();
    assert_eq!(transcript.text(), "");

    context.execute("outer __invoke ;").unwrap();
    assert_eq!(transcript.text(), "\"outer\"\n\"inner\"\n");
}

#[test]
fn definition_in_block_shadows_enclosing_binding() {
    let output = run("__def x 1 ; __def b { __def x 2 ; __dump x ; } ; b __invoke ; __dump x ;");
    assert_eq!(output, "2\n1\n");
}

#[test]
fn groups_need_a_separator() {
    assert_eq!(run("__dump ( 1 , 2 , 3 ) ;"), "(1, 2, 3)\n");
    assert_eq!(run("__dump ( 1 ) ;"), "1\n");
    assert_eq!(run("__dump ( 1 , ( 2 , 3 ) ) ;"), "(1, (2, 3))\n");
}

#[test]
fn introspection_reports_buffer_and_scope() {
    assert_eq!(run("__scope"), "{ }\n");
    assert_eq!(run("__def b 2 ; __def a 1 ; __scope"), "{ a: 1, b: 2 }\n");
    assert_eq!(run("__def x __stack 1 ;"), "[name(x)]\n");
}

#[test]
fn equal_powers_associate_left() {
    assert_eq!(eval("__dump 10 - 3 - 2 ;"), "5\n");
    assert_eq!(eval("__dump 2 * 3 * 4 ;"), "24\n");
}

#[test]
fn lower_right_power_associates_right() {
    assert_eq!(eval("__dump 2 ^ 3 ^ 2 ;"), "512\n");
}

#[test]
fn tighter_operators_take_operands_first() {
    assert_eq!(eval("__dump 10 - 2 * 3 ;"), "4\n");
    assert_eq!(eval("__dump 2 * 3 - 1 ;"), "5\n");
    assert_eq!(eval("__dump 2 * 2 ^ 3 - 1 ;"), "15\n");
    assert_eq!(eval("__dump neg 2 * 3 ;"), "-6\n");
}

#[test]
fn parentheses_override_binding_power() {
    assert_eq!(eval("__dump ( 10 - 2 ) * 3 ;"), "24\n");
    assert_eq!(eval("__dump 10 - ( 3 - 2 ) ;"), "9\n");
}

#[test]
fn registered_operators_are_retained_in_blocks() {
    let (mut context, transcript) = arithmetic();
    context.execute("__def b { 6 * 7 ; } ;").unwrap();

    let block = context.lookup("b").and_then(Unit::as_code_block).unwrap();
    let names = block.scope()
                     .calls()
                     .iter()
                     .map(|call| call.operator().name.clone())
                     .collect::<Vec<_>>();
    assert_eq!(names, ["*"]);
    assert_eq!(transcript.text(), "");
}

#[test]
fn missing_prefix_operands() {
    let error = run_err("__invoke ;");
    assert_eq!(error,
               Error::Parse(ParseError::MissingPrefixOperands { operator:  "__invoke".to_string(),
                                                                required:  1,
                                                                available: 0,
                                                                line:      1, }));
}

#[test]
fn missing_suffix_operands() {
    let error = run_err("__def x ;");
    assert_eq!(error,
               Error::Parse(ParseError::MissingSuffixOperands { operator:  "__def".to_string(),
                                                                required:  2,
                                                                available: 1,
                                                                line:      1, }));
}

#[test]
fn unterminated_block() {
    let error = run_err("__def b {\n__def z 1 ;");
    assert_eq!(error,
               Error::Parse(ParseError::MismatchedDelimiter { expected: "}".to_string(),
                                                              line:     1, }));
}

#[test]
fn stray_closing_delimiter() {
    let error = run_err("__def x 1 ;\n)");
    assert_eq!(error,
               Error::Parse(ParseError::UnexpectedDelimiter { delimiter: ")".to_string(),
                                                              line:      2, }));
}

#[test]
fn leftover_operands_are_listed() {
    let error = run_err("1 two \"three\" ;");
    assert_eq!(error,
               Error::Parse(ParseError::UnconsumedArguments { arguments: "[1, name(two), \"three\"]".to_string(),
                                                              line:      1, }));
}

#[test]
fn leftover_operands_inside_block() {
    let error = run_err("__def b { 1 } ;");
    assert!(matches!(error, Error::Parse(ParseError::UnconsumedArguments { .. })));
}

#[test]
fn redefinition_reports_line() {
    let error = run_err("__def x 1 ;\n__def x 2 ;");
    assert_eq!(error,
               Error::Runtime(RuntimeError::NameAlreadyDefined { name: "x".to_string(),
                                                                 line: 2, }));
    assert_eq!(error.to_string(),
               "Error on line 2: Name 'x' is already defined in this scope.");
}

#[test]
fn operand_kind_errors() {
    assert!(matches!(run_err("__def 5 5 ;"),
                     Error::Runtime(RuntimeError::ExpectedName { .. })));
    assert!(matches!(run_err("5 __invoke ;"),
                     Error::Runtime(RuntimeError::ExpectedCodeBlock { .. })));
}

#[test]
fn lexical_errors_carry_lines() {
    assert_eq!(run_err("__dump \"a\nb\" ;\n__dump ;"),
               Error::Parse(ParseError::MissingSuffixOperands { operator:  "__dump".to_string(),
                                                                required:  1,
                                                                available: 0,
                                                                line:      3, }));
    assert_eq!(run_err("\n\n__dump \"abc"),
               Error::Parse(ParseError::UnterminatedString { line: 3 }));
    assert_eq!(run_err("__dump \"\\q\" ;"),
               Error::Parse(ParseError::InvalidEscape { escape: 'q', line: 1 }));
    assert_eq!(run_err("__dump 99999999999999999999 ;"),
               Error::Parse(ParseError::LiteralTooLarge { line: 1 }));
    assert!(matches!(run_err("__dump \u{a7} ;"),
                     Error::Parse(ParseError::InvalidSymbol { line: 1, .. })));
}

#[test]
fn failed_run_resets_engine_state() {
    let (mut context, transcript) = context();
    assert!(context.execute("__def a 1 ; __dump a ; __def b { 1 2").is_err());

    assert_eq!(context.depth(), 1);
    assert!(context.operands().is_empty());
    assert_eq!(context.lookup("a"), Some(&Unit::Integer(1)));
    assert_eq!(transcript.text(), "1\n");

    context.execute("__def c 3 ; __dump c ;").unwrap();
    assert_eq!(transcript.text(), "1\n3\n");
}

#[test]
fn block_can_rebind_an_operator_name() {
    let (mut context, transcript) = context();
    context.execute("__def b { __def __dump 1 ; __def fn 2 ; __def y __dump ; } ;")
           .unwrap();

    let block = context.lookup("b").and_then(Unit::as_code_block).unwrap();
    assert_eq!(block.scope().get("__dump"), Some(&Unit::Integer(1)));
    assert_eq!(block.scope().get("fn"), Some(&Unit::Integer(2)));
    assert_eq!(block.scope().get("y"), Some(&Unit::Integer(1)));
    assert!(block.scope().calls().is_empty());

    assert!(context.lookup("__dump").and_then(Unit::as_operator).is_some());
    context.execute("__dump 3 ;").unwrap();
    assert_eq!(transcript.text(), "3\n");
}

#[test]
fn rebinding_an_operator_in_its_own_scope_fails() {
    assert_eq!(run_err("__def __dump 1 ;"),
               Error::Runtime(RuntimeError::NameAlreadyDefined { name: "__dump".to_string(),
                                                                 line: 1, }));
}

#[test]
fn nesting_within_limit() {
    let depth = MAX_NESTING - 1;
    let source = format!("__dump {}1{} ;", "( ".repeat(depth), " )".repeat(depth));
    assert_eq!(run(&source), "1\n");
}

#[test]
fn nesting_beyond_limit_is_error() {
    assert_eq!(run_err(&"{ ".repeat(20_000)),
               Error::Parse(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                         line:  1, }));

    let depth = MAX_NESTING + 1;
    let source = format!("__dump {}1{} ;", "( ".repeat(depth), " )".repeat(depth));
    assert!(matches!(run_err(&source),
                     Error::Parse(ParseError::NestingTooDeep { .. })));
}

#[test]
fn unterminated_string_reports_opening_line() {
    assert_eq!(run_err("__def s 1 ;\n__dump \"abc\n\ndef"),
               Error::Parse(ParseError::UnterminatedString { line: 2 }));
}

#[test]
fn vertical_tab_is_whitespace() {
    assert_eq!(run("__def a\x0b1 ;\x0b__dump a ;"), "1\n");
}

#[test]
fn natives_reject_wrong_operand_counts() {
    let (mut context, _) = context();
    context.define_operator(Operator::new("bind", 0, 1, Behavior::Definition(def)))
           .unwrap();
    context.define_operator(Operator::new("show", 0, 0, Behavior::Native(dump)))
           .unwrap();

    assert_eq!(context.execute("bind x ;").unwrap_err(),
               Error::Runtime(RuntimeError::WrongOperandCount { operator: "__def".to_string(),
                                                                expected: 2,
                                                                found:    1,
                                                                line:     1, }));
    assert_eq!(context.execute("show ;").unwrap_err(),
               Error::Runtime(RuntimeError::WrongOperandCount { operator: "__dump".to_string(),
                                                                expected: 1,
                                                                found:    0,
                                                                line:     1, }));
    assert_eq!(invoke(&mut context, &[], 4).unwrap_err(),
               Error::Runtime(RuntimeError::WrongOperandCount { operator: "__invoke".to_string(),
                                                                expected: 1,
                                                                found:    0,
                                                                line:     4, }));
}
