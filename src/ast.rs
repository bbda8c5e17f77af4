use crate::interpreter::lexer::Token;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node keeps the token it was built from, so the evaluator can point
/// an error at the exact operator, function or symbol responsible for it.
/// Implicit multiplications keep the token that triggered them (the `(` or
/// the number following a `)`).
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value, sign included.
        value: f64,
        /// The number token.
        token: Token,
    },
    /// Reference to a variable by name.
    Symbol {
        /// Name of the variable.
        name:  String,
        /// The symbol token.
        token: Token,
    },
    /// A binary operation.
    Operation {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// The operator token.
        token: Token,
    },
    /// A function applied to one argument, such as `sin 2`.
    FunctionCall {
        /// The function.
        function: Function,
        /// The argument.
        argument: Box<Self>,
        /// The function token.
        token:    Token,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`), also used for implicit multiplication.
    Mul,
    /// Division (`/`)
    Div,
    /// Floor division (`//`)
    FloorDiv,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Root (`v`): `n v x` is the `n`-th root of `x`.
    Root,
}

impl BinaryOperator {
    /// Maps operator text to the operator.
    ///
    /// # Example
    /// ```
    /// use spacecalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("//"), Some(BinaryOperator::FloorDiv));
    /// assert_eq!(BinaryOperator::from_symbol("v"), Some(BinaryOperator::Root));
    /// assert_eq!(BinaryOperator::from_symbol("^"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "//" => Some(Self::FloorDiv),
            "%" => Some(Self::Mod),
            "**" => Some(Self::Pow),
            "v" => Some(Self::Root),
            _ => None,
        }
    }

    /// The operator as written in source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::Pow => "**",
            Self::Root => "v",
        }
    }

    /// Binding strength: additive 1, multiplicative 2, power and root 3.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div | Self::FloorDiv | Self::Mod => 2,
            Self::Pow | Self::Root => 3,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A builtin function of one argument.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Function {
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
    /// `asin`
    Asin,
    /// `acos`
    Acos,
    /// `atan`
    Atan,
}

impl Function {
    /// Maps a function name to the function.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "asin" => Some(Self::Asin),
            "acos" => Some(Self::Acos),
            "atan" => Some(Self::Atan),
            _ => None,
        }
    }

    /// The function name.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
        }
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
