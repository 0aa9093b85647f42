/// End-to-end integration tests for e-lang
/// Demonstrates: Scanner → Parser → Evaluator working together
use elang::error::{Error, Stage};
use elang::lexer::{Scanner, TokenKind};
use elang::parser::Parser;
use elang::runtime::{Evaluator, Value};
use elang::Session;

use std::cell::RefCell;
use std::io::{self, Cursor, Write};
use std::rc::Rc;

/// Output sink the test can read back after evaluation
#[derive(Clone, Default)]
struct Captured(Rc<RefCell<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

fn quiet_evaluator() -> Evaluator {
    Evaluator::with_io(io::sink(), Cursor::new(""))
}

fn run(evaluator: &mut Evaluator, source: &str) -> elang::Result<Value> {
    let mut scanner = Scanner::new(source);
    let tokens = scanner.scan_tokens()?;
    let mut parser = Parser::new(tokens);
    let tree = parser.parse()?;
    evaluator.eval(&tree)
}

fn eval(source: &str) -> elang::Result<Value> {
    run(&mut quiet_evaluator(), source)
}

#[test]
fn test_e2e_simple_arithmetic() {
    let source = "(+ 1 2 3)";

    // Lex
    let mut scanner = Scanner::new(source);
    let tokens = scanner.scan_tokens().unwrap();

    // Parse
    let mut parser = Parser::new(tokens);
    let tree = parser.parse().unwrap();

    // Evaluate
    let mut evaluator = quiet_evaluator();
    let result = evaluator.eval(&tree).unwrap();

    assert_eq!(result, Value::Numeric(6.0));
}

#[test]
fn test_e2e_numeric_literals() {
    for literal in ["0", "7", "42", "3.25", "1000000", "0.125"] {
        let expected: f64 = literal.parse().unwrap();

        assert_eq!(eval(literal).unwrap(), Value::Numeric(expected));
        assert_eq!(
            eval(&format!("({})", literal)).unwrap(),
            Value::Numeric(expected)
        );
    }
}

#[test]
fn test_e2e_program_with_variables() {
    let source = r#"
# compute a hypotenuse
(program
    (assign a 3)
    (assign b 4)
    (assign c (^ (+ (^ a 2) (^ b 2)) 0.5))
    (print "c = " c "\n"))
"#;

    let out = Captured::default();
    let mut evaluator = Evaluator::with_io(out.clone(), Cursor::new(""));
    let result = run(&mut evaluator, source).unwrap();

    assert_eq!(result, Value::None);
    assert_eq!(out.text(), "c = 5\n");
    assert_eq!(
        evaluator.environment().get("c"),
        Some(&Value::Numeric(5.0))
    );
}

#[test]
fn test_e2e_string_building() {
    let source = r#"
(program
    (assign n 12)
    (assign label (+ "n=" (to_string n) ", half=" (to_string (/ n 8))))
    (print label))
"#;

    let out = Captured::default();
    let mut evaluator = Evaluator::with_io(out.clone(), Cursor::new(""));
    run(&mut evaluator, source).unwrap();

    assert_eq!(out.text(), "n=12, half=1.5");
}

#[test]
fn test_e2e_input_roundtrip() {
    let source = r#"
(program
    (assign x (to_numeric (input "x? ")))
    (assign y (to_numeric (input "y? ")))
    (print (* x y)))
"#;

    let out = Captured::default();
    let mut evaluator = Evaluator::with_io(out.clone(), Cursor::new("6\n   7\n"));
    run(&mut evaluator, source).unwrap();

    assert_eq!(out.text(), "x? y? 42");
}

#[test]
fn test_e2e_assign_is_idempotent() {
    let mut evaluator = quiet_evaluator();

    run(&mut evaluator, "(assign x (5))").unwrap();
    run(&mut evaluator, "(assign x (5))").unwrap();

    assert_eq!(evaluator.environment().len(), 1);
    assert_eq!(
        evaluator.environment().get("x"),
        Some(&Value::Numeric(5.0))
    );
    assert_eq!(run(&mut evaluator, "x").unwrap(), Value::Numeric(5.0));
}

#[test]
fn test_e2e_type_mismatch() {
    let err = eval("(+ (5) (\"a\"))").unwrap_err();
    assert_eq!(err.stage(), Stage::Runtime);
    assert_eq!(
        err.to_string(),
        "Runtime error: cannot apply add operator on different types"
    );

    let err = eval("(- (\"a\") (\"b\"))").unwrap_err();
    assert_eq!(err.stage(), Stage::Runtime);
}

#[test]
fn test_e2e_arity() {
    let err = eval("(sin (1) (2))").unwrap_err();
    assert!(matches!(err, Error::InvalidArguments { .. }));
    assert_eq!(err.stage(), Stage::Runtime);
}

#[test]
fn test_e2e_unassigned_identifier() {
    let err = eval("y").unwrap_err();
    assert_eq!(err.to_string(), "Runtime error: unassigned identifier y");
}

#[test]
fn test_e2e_comment_handling() {
    let with_comment = Scanner::new("5 # comment\n").scan_tokens().unwrap();
    let plain = Scanner::new("5").scan_tokens().unwrap();

    assert_eq!(with_comment, plain);
    assert_eq!(with_comment.len(), 1);
    assert_eq!(with_comment[0].kind, TokenKind::Numeric);
}

#[test]
fn test_e2e_two_cycles_share_environment() {
    let mut session = Session::with_evaluator(quiet_evaluator());

    session.run_source("(assign x (2))").unwrap();
    let value = session.run_source("(+ x (3))").unwrap();

    assert_eq!(value, Some(Value::Numeric(5.0)));
}

#[test]
fn test_e2e_failed_cycle_resets_environment() {
    let mut session = Session::with_evaluator(quiet_evaluator());

    session.run_source("(assign x (2))").unwrap();
    session.run_source("(sin x x)").unwrap_err();

    let err = session.run_source("x").unwrap_err();
    assert!(matches!(err, Error::UnassignedIdentifier { .. }));
}

#[test]
fn test_e2e_parse_errors_have_parser_stage() {
    for source in ["(+ 1 2", ")", "((+ 1 2))", "(5 6)", "(+ 1 2) 3", "(- 1.2.3)"] {
        let err = eval(source).unwrap_err();
        assert_eq!(err.stage(), Stage::Parser, "source: {}", source);
        assert!(err.to_string().starts_with("Parser error: "));
    }
}

#[test]
fn test_e2e_unknown_word_is_identifier() {
    // `sqrt` is not an operator, so `(sqrt 4)` is an atom followed by junk
    let err = eval("(sqrt 4)").unwrap_err();
    assert_eq!(err.stage(), Stage::Parser);
}
