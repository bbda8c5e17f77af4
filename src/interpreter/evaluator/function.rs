use crate::{
    ast::Function,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Environment},
    util::span::Span,
};

impl Environment {
    /// Applies a builtin function to its argument.
    ///
    /// Angles are in radians. A result that is not a number, such as `asin 2`,
    /// is an error at the function token.
    pub fn eval_function(function: Function, argument: f64, span: Span) -> EvalResult<f64> {
        let result = match function {
            Function::Sin => argument.sin(),
            Function::Cos => argument.cos(),
            Function::Tan => argument.tan(),
            Function::Asin => argument.asin(),
            Function::Acos => argument.acos(),
            Function::Atan => argument.atan(),
        };

        if result.is_nan() {
            return Err(RuntimeError::NotANumber { expression: format!("{function}({argument})"),
                                                  span });
        }
        Ok(result)
    }
}
