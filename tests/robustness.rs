use proptest::prelude::*;
use spacecalc::{
    display::render_report,
    error::{Error, RuntimeError},
    get_result,
    interpreter::evaluator::core::Environment,
};

const OPERATORS: &[&str] = &["+", "-", "*", "/", "//", "%", "v", "**"];
const FUNCTIONS: &[&str] = &["sin", "cos", "tan", "asin", "acos", "atan"];
const TOKENS: &[&str] = &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*",
                          "/", "//", "%", "v", "**", "(", ")", " ", "sin", "cos", "tan", "asin",
                          "acos", "atan", "a", "b", "c", "d", "=", ";"];

/// One step of a well-formed statement: an optional space, an optional `(`,
/// a digit, an operator and optionally a function followed by a space or `(`.
#[derive(Debug, Clone)]
struct Step {
    space:    bool,
    open:     bool,
    digit:    u8,
    operator: usize,
    function: Option<(usize, bool)>,
}

fn step() -> impl Strategy<Value = Step> {
    (prop::bool::weighted(1.0 / 15.0),
     prop::bool::weighted(1.0 / 15.0),
     0u8..10,
     0..OPERATORS.len(),
     prop::option::weighted(0.1, (0..FUNCTIONS.len(), any::<bool>())))
        .prop_map(|(space, open, digit, operator, function)| Step { space,
                                                                     open,
                                                                     digit,
                                                                     operator,
                                                                     function })
}

/// Joins the steps into a statement. The last step contributes only its
/// digit, so the statement never ends on an operator or function.
fn well_formed(steps: &[Step]) -> String {
    let mut input = String::new();
    for (i, step) in steps.iter().enumerate() {
        if step.space {
            input.push(' ');
        }
        if step.open {
            input.push('(');
        }

        let after_division = input.ends_with('/') || input.ends_with('%');
        let digit = if after_division && step.digit == 0 { 1 } else { step.digit };
        input.push(char::from(b'0' + digit));

        if i + 1 == steps.len() {
            break;
        }

        let operator = OPERATORS[step.operator];
        input.push_str(operator);
        if let Some((function, bracket)) = step.function
           && operator != "v"
        {
            input.push_str(FUNCTIONS[function]);
            input.push(if bracket { '(' } else { ' ' });
        }
    }
    input
}

fn evaluate(input: &str) -> Vec<Result<f64, Error>> {
    let mut env = Environment::new();
    env.assign("a", 1.5);
    env.assign("b", -2.0);

    get_result(input, &mut env).into_iter()
                               .map(|report| {
                                   // Rendering must cope with every span the pipeline produces.
                                   let _ = render_report(&report, true);
                                   report.outcome.map(|e| e.value)
                               })
                               .collect()
}

proptest! {
    #[test]
    fn well_formed_statements_evaluate(steps in prop::collection::vec(step(), 1..40)) {
        let input = well_formed(&steps);
        for outcome in evaluate(&input) {
            match outcome {
                Ok(_)
                | Err(Error::Runtime(RuntimeError::DivisionByZero { .. }
                                     | RuntimeError::NotANumber { .. })) => {},
                Err(e) => prop_assert!(false, "{input:?} failed: {e}"),
            }
        }
    }

    #[test]
    fn token_soup_never_panics(tokens in prop::collection::vec(prop::sample::select(TOKENS), 0..60)) {
        let input = tokens.concat();
        evaluate(&input);
    }

    #[test]
    fn arbitrary_text_never_panics(input in any::<String>()) {
        evaluate(&input);
    }

    #[test]
    fn error_spans_stay_inside_the_statement(tokens in prop::collection::vec(prop::sample::select(TOKENS), 1..40)) {
        let input = tokens.concat();
        let mut env = Environment::new();
        for report in get_result(&input, &mut env) {
            if let Err(e) = report.outcome {
                prop_assert!(e.span().position <= report.statement.len(),
                             "{:?}: {e:?} points past {:?}", input, report.statement);
            }
        }
    }
}
