use std::collections::HashMap;

use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the variables of a session.
///
/// ## Usage
///
/// An `Environment` is created once per session and handed to every
/// statement. Evaluation only reads it; the statement driver binds the
/// result of a successful assignment.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Environment {
    /// Creates an environment without any variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment with the constant `PI` already bound.
    ///
    /// # Example
    /// ```
    /// use spacecalc::interpreter::evaluator::core::Environment;
    ///
    /// assert_eq!(Environment::with_constants().get("PI"), Some(std::f64::consts::PI));
    /// assert_eq!(Environment::new().get("PI"), None);
    /// ```
    #[must_use]
    pub fn with_constants() -> Self {
        let mut environment = Self::new();
        environment.assign("PI", std::f64::consts::PI);
        environment
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn assign(&mut self, name: impl Into<String>, value: f64) {
        self.variables.insert(name.into(), value);
    }

    /// Evaluates an expression tree.
    ///
    /// Operands are evaluated left before right, and the first error aborts
    /// the walk.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Errors
    /// - `RuntimeError::UndefinedVariable` for a symbol with no binding.
    /// - `RuntimeError::DivisionByZero` and `RuntimeError::NotANumber` from
    ///   the operators and functions.
    ///
    /// # Example
    /// ```
    /// use spacecalc::interpreter::{
    ///     evaluator::core::Environment, lexer::tokenize, parser::core::parse_tokens,
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.assign("A", 4.0);
    ///
    /// let expr = parse_tokens(&tokenize("A*(1+2)").unwrap()).unwrap();
    /// assert_eq!(env.eval(&expr), Ok(12.0));
    ///
    /// let expr = parse_tokens(&tokenize("B").unwrap()).unwrap();
    /// assert!(env.eval(&expr).is_err());
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Symbol { name, token } => {
                self.get(name)
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                     span: token.origin, })
            },
            Expr::Operation { op,
                              left,
                              right,
                              token, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, token.origin)
            },
            Expr::FunctionCall { function,
                                 argument,
                                 token, } => {
                let argument = self.eval(argument)?;
                Self::eval_function(*function, argument, token.origin)
            },
        }
    }
}
