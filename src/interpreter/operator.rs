use std::fmt;

use crate::{
    error::{EvalResult, EvaluationError},
    interpreter::value::Number,
};

/// How repeated operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// The binary operators understood by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, always real division.
    Div,
    /// `^`, exponentiation with the exponent on the right.
    Pow,
}

impl Operator {
    /// Every operator, in ascending order of precedence.
    pub const ALL: [Self; 5] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Pow];

    /// Maps an operator symbol to its operator.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("^"), Some(Operator::Pow));
    /// assert_eq!(Operator::from_symbol("%"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// The symbol the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// Binding strength: `+ -` are 1, `* /` are 2, `^` is 3. Parentheses sit
    /// below all of them at 0.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// `^` is right-associative; everything else is left-associative.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Whether `self`, arriving at the operator stack, must first let `top`
    /// go to the output.
    ///
    /// That is the case when `top` binds tighter, or binds equally and `self`
    /// groups to the left.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::operator::Operator;
    ///
    /// assert!(Operator::Add.yields_to(Operator::Mul));
    /// assert!(Operator::Sub.yields_to(Operator::Add));
    /// assert!(!Operator::Mul.yields_to(Operator::Add));
    /// assert!(!Operator::Pow.yields_to(Operator::Pow));
    /// ```
    #[must_use]
    pub const fn yields_to(self, top: Self) -> bool {
        top.precedence() > self.precedence()
        || (top.precedence() == self.precedence()
            && matches!(self.associativity(), Associativity::Left))
    }

    /// Applies the operator to two operands.
    ///
    /// # Parameters
    /// - `left`: The operand pushed first.
    /// - `right`: The operand pushed last.
    /// - `position`: Index of the operator token, for error reporting.
    ///
    /// # Errors
    /// - `DivisionByZero` when dividing by exactly zero, or raising zero to a
    ///   negative power.
    /// - `Overflow` when the result does not fit in an `i64` or is not a
    ///   finite real.
    ///
    /// # Example
    /// ```
    /// use shunt::{error::EvaluationError, interpreter::{operator::Operator, value::Number}};
    ///
    /// let result = Operator::Pow.apply(Number::Integer(2), Number::Integer(10), 0).unwrap();
    /// assert_eq!(result, Number::Integer(1024));
    ///
    /// let result = Operator::Div.apply(Number::Integer(10), Number::Integer(4), 0).unwrap();
    /// assert_eq!(result, 2.5);
    ///
    /// let result = Operator::Add.apply(Number::Integer(i64::MAX), Number::Integer(1), 3);
    /// assert!(matches!(result, Err(EvaluationError::Overflow { position: 3, .. })));
    /// ```
    pub fn apply(self, left: Number, right: Number, position: usize) -> EvalResult<Number> {
        let divides_by_zero = match self {
            Self::Div => right.is_zero(),
            Self::Pow => left.is_zero() && right.is_negative(),
            _ => false,
        };
        if divides_by_zero {
            return Err(EvaluationError::DivisionByZero { position });
        }

        let result = match self {
            Self::Add => left.checked_add(right),
            Self::Sub => left.checked_sub(right),
            Self::Mul => left.checked_mul(right),
            Self::Div => left.checked_div(right),
            Self::Pow => left.checked_pow(right),
        };
        result.ok_or_else(|| EvaluationError::Overflow { operator: self.symbol().to_string(),
                                                         position })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
