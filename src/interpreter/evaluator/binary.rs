use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Environment},
    util::span::Span,
};

impl Environment {
    /// Applies a binary operator to two values.
    ///
    /// - `/`, `//` and `%` reject a right operand of exactly 0.
    /// - `//` is the floor of the quotient and `%` the truncated remainder.
    /// - `n v x` is `x` raised to `1/n`.
    ///
    /// Any result that is not a number is an error.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `span`: The operator token, reported by errors.
    ///
    /// # Example
    /// ```
    /// use spacecalc::{
    ///     ast::BinaryOperator, interpreter::evaluator::core::Environment, util::span::Span,
    /// };
    ///
    /// let span = Span::at(1);
    /// assert_eq!(Environment::eval_binary(BinaryOperator::FloorDiv, 4.0, 6.0, span), Ok(0.0));
    /// let cube_root = Environment::eval_binary(BinaryOperator::Root, 3.0, 27.0, span).unwrap();
    /// assert!((cube_root - 3.0).abs() < 1e-10);
    /// assert!(Environment::eval_binary(BinaryOperator::Mod, 7.0, 0.0, span).is_err());
    /// assert!(Environment::eval_binary(BinaryOperator::Root, 2.0, -2.0, span).is_err());
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64, span: Span) -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Root, Sub};

        if matches!(op, Div | FloorDiv | Mod) && right == 0.0 {
            return Err(RuntimeError::DivisionByZero { span });
        }

        let result = match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => left / right,
            FloorDiv => (left / right).floor(),
            Mod => left % right,
            Pow => left.powf(right),
            Root => right.powf(left.recip()),
        };

        if result.is_nan() {
            return Err(RuntimeError::NotANumber { expression: format!("{left}{op}{right}"),
                                                  span });
        }
        Ok(result)
    }
}
