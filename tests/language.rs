use std::fs::{self};

use spacecalc::{
    display::render_report,
    error::{Error, ParseError, RuntimeError, Stage},
    get_result,
    interpreter::{
        evaluator::core::Environment,
        lexer::{TokenKind, tokenize},
        statement::Evaluation,
    },
    util::span::Span,
};
use walkdir::WalkDir;

const TOLERANCE: f64 = 1e-10;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_calc_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut env = Environment::with_constants();
            for line in code.lines() {
                for report in get_result(line, &mut env) {
                    if let Err(e) = report.outcome {
                        panic!("Example {} in {:?} failed:\n{}\nError: {e:?}",
                               i + 1,
                               path,
                               report.statement);
                    }
                }
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_calc_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```spacecalc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// Evaluates `src` in a fresh session and returns the last statement.
fn eval_last(src: &str) -> Result<Evaluation, Error> {
    let mut env = Environment::new();
    let mut reports = get_result(src, &mut env);
    reports.pop()
           .unwrap_or_else(|| panic!("{src:?} holds no statement"))
           .outcome
}

fn assert_value(src: &str, expected: f64) {
    match eval_last(src) {
        Ok(evaluation) => assert!((evaluation.value - expected).abs() < TOLERANCE,
                                  "{src:?} evaluated to {}, expected {expected}",
                                  evaluation.value),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(evaluation) = eval_last(src) {
        panic!("{src:?} evaluated to {} but was expected to fail", evaluation.value)
    }
}

fn assert_error(src: &str, expected: impl Into<Error>) {
    assert_eq!(eval_last(src), Err(expected.into()), "{src:?}");
}

fn assert_processed(src: &str, expected: &str) {
    match eval_last(src) {
        Ok(evaluation) => assert_eq!(evaluation.processed, expected, "{src:?}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

#[test]
fn number_literals() {
    assert_value(".420", 0.42);
    assert_value("1337.", 1337.0);
    assert_value("69_420", 69_420.0);
    assert_value("69___420__", 69_420.0);
    assert_value("-5", -5.0);
    assert_failure("__69___420__");
    assert_failure("4.2_0");
    assert_error(".", ParseError::InvalidNumber { literal: ".".to_string(),
                                                  span:    Span::at(0), });
}

#[test]
fn basic_operators() {
    assert_value("1+2", 3.0);
    assert_value("7-10", -3.0);
    assert_value("3*4", 12.0);
    assert_value("3/4", 0.75);
    assert_value("4//6", 0.0);
    assert_value("-7//2", -4.0);
    assert_value("7%10", 7.0);
    assert_value("-7%3", -1.0);
    assert_value("2**8", 256.0);
    assert_value("3v27", 3.0);
    assert_value("(1+2)v27", 3.0);
}

#[test]
fn implicit_multiplication() {
    assert_value("3(-2)", -6.0);
    assert_value("(3)2", 6.0);
    assert_value("(3)(-2)", -6.0);
    assert_value("(2)+(3)4(2+3-1)", 50.0);
    assert_value("(1+2*3)*4", 28.0);
}

#[test]
fn associativity_and_precedence() {
    assert_value("3-4-5+6", 0.0);
    assert_value("3/4/5*2", 0.3);
    assert_value("3*4/5*2", 4.8);
    assert_value("3+4*5", 23.0);
    assert_value("3*4+5", 17.0);
    assert_value("3*4v5", 4.486_046_343_663_661);
    assert_value("3-4**5", -1021.0);
}

#[test]
fn brackets() {
    assert_value("((2)+(3))", 5.0);
    assert_value("(((2(2", 4.0);
    assert_value("(1+2", 3.0);
}

#[test]
fn functions() {
    assert_value("sin 2", 2f64.sin());
    assert_value("asin .1", 0.1f64.asin());
    assert_value("sin -.2", (-0.2f64).sin());
    assert_value("sin cos 2", 2f64.cos().sin());
    assert_value("sin cos -2 * 2", (-2f64).cos().sin() * 2.0);
    assert_value("sin 4*2", 8f64.sin());
    assert_value("sin 4 *2", 4f64.sin() * 2.0);
    assert_value("sin (4 *2", 8f64.sin());
    assert_value("atan(1)4", 1f64.atan() * 4.0);
}

#[test]
fn spaces_group() {
    assert_value("1+ 1", 2.0);
    assert_value("1 + 1 + 1 * 2", 4.0);
    assert_value("1+1 *2", 4.0);
    assert_value("( 1+1*2)", 3.0);
    assert_value("(1+1 *2", 4.0);
    assert_value("1+1 *2 **2", 16.0);
    assert_value("1+1 *2** 2", 8.0);
    assert_value("1 - -5", 6.0);
}

#[test]
fn processed_expressions() {
    assert_processed("1+1 *2", "(1+1)*2");
    assert_processed("sin 4*2", "sin(4*2)");
    assert_processed("1+1 *2** 2", "(1+1)*2**(2)");
    assert_processed("( 1+1*2)", "(1+1*2)");
    assert_processed("A = 1+1 *2", "A = (1+1)*2");
    assert_processed("B = 2 ** 10", "B = (2)**(10)");
}

#[test]
fn lexer_disambiguation() {
    for name in ["sine", "sin2", "sin_x", "val", "vA", "atan2"] {
        let kinds: Vec<_> = tokenize(name).unwrap().iter().map(|t| t.kind).collect();
        assert_eq!(kinds, [TokenKind::Symbol], "{name:?}");
    }

    let kinds: Vec<_> = tokenize("3v27").unwrap().iter().map(|t| t.kind).collect();
    assert_eq!(kinds, [TokenKind::Number, TokenKind::Operator, TokenKind::Number]);

    let kinds: Vec<_> = tokenize("sin x").unwrap().iter().map(|t| t.kind).collect();
    assert_eq!(kinds, [TokenKind::Function, TokenKind::Space, TokenKind::Symbol]);

    assert_value("sine = 2; sine*3", 6.0);
    assert_value("val = 4; 2v val", 2.0);
    assert_error("sin_x", RuntimeError::UndefinedVariable { name: "sin_x".to_string(),
                                                             span: Span::new(0, 5), });
}

#[test]
fn rendered_session_output() {
    let mut env = Environment::new();
    let rendered: Vec<_> = get_result("A = 2 ** 10; 2v(A*A)", &mut env).iter()
                                                                     .map(|r| render_report(r, false))
                                                                     .collect();
    assert_eq!(rendered, ["= A = 1024", "= 1024"]);
}

#[test]
fn variables_persist_within_a_session() {
    let mut env = Environment::new();
    let mut value_of = |src: &str| -> f64 {
        let report = get_result(src, &mut env).remove(0);
        report.outcome
              .unwrap_or_else(|e| panic!("{src:?} failed: {e}"))
              .value
    };

    assert!((value_of("A = 1+1 *2") - 4.0).abs() < TOLERANCE);
    assert!((value_of("A") - 4.0).abs() < TOLERANCE);
    assert!((value_of("A+1") - 5.0).abs() < TOLERANCE);
    assert!((value_of("A+A") - 8.0).abs() < TOLERANCE);
    assert!((value_of("B = A*A") - 16.0).abs() < TOLERANCE);
    assert!((value_of("snake_case_69 = B") - 16.0).abs() < TOLERANCE);
    assert!((value_of("snake_case_69 + 1") - 17.0).abs() < TOLERANCE);
    assert!((value_of("A = A + 1") - 5.0).abs() < TOLERANCE);
}

#[test]
fn statements_are_independent() {
    let mut env = Environment::new();
    let reports = get_result("A = 3; A +; A*2 ;  ; ", &mut env);

    assert_eq!(reports.len(), 3);
    assert_eq!(reports[1].statement, "A +");
    assert!(reports[1].outcome.is_err());
    assert_eq!(reports[2].outcome.as_ref().map(|e| e.value), Ok(6.0));
}

#[test]
fn failed_assignment_keeps_old_value() {
    let mut env = Environment::new();
    get_result("A = 2", &mut env);
    let reports = get_result("A = 1/0", &mut env);

    assert!(reports[0].outcome.is_err());
    assert_eq!(env.get("A"), Some(2.0));
}

#[test]
fn constants_are_prebound() {
    let mut env = Environment::with_constants();
    let reports = get_result("PI", &mut env);
    assert_eq!(reports[0].outcome.as_ref().map(|e| e.value), Ok(std::f64::consts::PI));
}

#[test]
fn invalid_expressions() {
    for src in ["1(", ")1", "1+", "+1", "1+1++1", "1+1()", "1+1 1", "1+1+", "1+1(", "1+1)", "-",
                "2 & 3", "A =", "= 2", "1 = 2", "A = 2 = 3"]
    {
        assert_failure(src);
    }
}

#[test]
fn runtime_errors() {
    assert_error("1/0", RuntimeError::DivisionByZero { span: Span::at(1) });
    assert_error("1//0", RuntimeError::DivisionByZero { span: Span::new(1, 2) });
    assert_error("5%0", RuntimeError::DivisionByZero { span: Span::at(1) });
    assert_failure("asin 2");
    assert_failure("acos 2");
    assert_failure("2v-2");
    assert_error("foo + 1", RuntimeError::UndefinedVariable { name: "foo".to_string(),
                                                               span: Span::new(0, 3), });
}

#[test]
fn error_spans_point_into_the_statement() {
    assert_error("1+1)", ParseError::UnmatchedClosingBracket { span: Span::at(3) });
    assert_error("1+", ParseError::ExpressionExpected { span: Span::at(2) });
    assert_error("2 & 3", ParseError::UnexpectedCharacter { character: '&',
                                                            span:      Span::at(2), });
    assert_error("1+1 1", ParseError::ConsecutiveOperands { span: Span::new(2, 3) });
    assert_error("1+ +1", ParseError::ConsecutiveOperators { span: Span::new(1, 3) });
    assert_error("asin 2",
                 RuntimeError::NotANumber { expression: "asin(2)".to_string(),
                                            span:       Span::new(0, 4), });
    assert_error("A = 2 + x", RuntimeError::UndefinedVariable { name: "x".to_string(),
                                                                 span: Span::at(8), });
    assert_error("A = 1+", ParseError::ExpressionExpected { span: Span::at(6) });
    assert_error("A = ", ParseError::ExpressionExpected { span: Span::at(3) });
    assert_error("sin (", ParseError::ExpressionExpected { span: Span::at(5) });
    assert_error("sin 4*", ParseError::ExpressionExpected { span: Span::at(6) });
    assert_error("B = sin (", ParseError::ExpressionExpected { span: Span::at(9) });
}

#[test]
fn errors_know_their_stage() {
    let Err(Error::Parse(e)) = eval_last("1 $") else {
        panic!("expected a parse error");
    };
    assert_eq!(e.stage(), Stage::Lexer);

    let Err(Error::Parse(e)) = eval_last("1++2") else {
        panic!("expected a parse error");
    };
    assert_eq!(e.stage(), Stage::Preprocessor);

    let Err(Error::Parse(e)) = eval_last("1+1)") else {
        panic!("expected a parse error");
    };
    assert_eq!(e.stage(), Stage::Parser);
}

#[test]
fn invalid_assignment_target() {
    let Err(Error::Parse(ParseError::InvalidAssignment { span })) = eval_last("2 = 3") else {
        panic!("expected an invalid assignment");
    };
    assert_eq!(span, Span::at(2));
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.calc").expect("missing file");
    let mut env = Environment::with_constants();
    let reports = get_result(&script, &mut env);

    assert!(!reports.is_empty());
    for report in &reports {
        assert!(report.outcome.is_ok(), "{:?} failed", report.statement);
    }
}
