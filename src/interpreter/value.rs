use std::fmt;

use crate::util::num::{f64_to_i64_exact, i64_to_f64, i64_to_u32_checked};

/// The result of evaluating an expression.
///
/// Values stay integers for as long as every operation is exact; inexact
/// division and negative exponents move them to `Real`. Integer arithmetic
/// never silently turns into floating point: an `i64` overflow is reported
/// by the checked operations as `None`.
///
/// Comparison is exact, so `Integer(100) == Real(100.0)` but
/// `Integer(i64::MAX) != Real(9.223372036854776e18)`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A finite double precision floating-point number.
    Real(f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Number {
    /// Parses a number token.
    ///
    /// # Returns
    /// `None` unless `text` is one or more ASCII digits whose value fits in
    /// an `i64`.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::value::Number;
    ///
    /// assert_eq!(Number::from_literal("42"), Some(Number::Integer(42)));
    /// assert_eq!(Number::from_literal("99999999999999999999"), None);
    /// assert_eq!(Number::from_literal("4x"), None);
    /// ```
    #[must_use]
    pub fn from_literal(text: &str) -> Option<Self> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        text.parse().map(Self::Integer).ok()
    }

    /// The value as an `f64`. Integers beyond
    /// [`MAX_SAFE_I64_INT`](crate::util::num::MAX_SAFE_I64_INT) lose precision.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Real(r) => r,
        }
    }

    /// Returns `true` for `Integer`.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns `true` for integer `0` and real `0.0` (of either sign).
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Returns `true` for values below zero.
    #[must_use]
    pub fn is_negative(self) -> bool {
        match self {
            Self::Integer(n) => n < 0,
            Self::Real(r) => r < 0.0,
        }
    }

    /// Addition, or `None` on overflow.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.combine(rhs, i64::checked_add, |a, b| a + b)
    }

    /// Subtraction, or `None` on overflow.
    #[must_use]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.combine(rhs, i64::checked_sub, |a, b| a - b)
    }

    /// Multiplication, or `None` on overflow.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::value::Number;
    ///
    /// assert_eq!(Number::Integer(6).checked_mul(Number::Integer(7)), Some(Number::Integer(42)));
    /// assert_eq!(Number::Integer(i64::MAX).checked_mul(Number::Integer(2)), None);
    /// ```
    #[must_use]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        self.combine(rhs, i64::checked_mul, |a, b| a * b)
    }

    /// Real division.
    ///
    /// Two integers that divide exactly give an `Integer`; any other quotient
    /// is `Real`.
    ///
    /// # Returns
    /// `None` if `rhs` is zero or the quotient is not finite.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::value::Number;
    ///
    /// assert_eq!(Number::Integer(10).checked_div(Number::Integer(2)),
    ///            Some(Number::Integer(5)));
    /// assert_eq!(Number::Integer(10).checked_div(Number::Integer(4)),
    ///            Some(Number::Real(2.5)));
    /// assert_eq!(Number::Integer(1).checked_div(Number::Integer(0)), None);
    /// ```
    #[must_use]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) if a.checked_rem(b) == Some(0) => {
                Some(Self::Integer(a / b))
            },
            _ => finite(self.as_f64() / rhs.as_f64()),
        }
    }

    /// Raises `self` to the power `exponent`.
    ///
    /// Integer bases with non-negative integer exponents use checked integer
    /// exponentiation. Negative exponents and real operands use `powf`.
    ///
    /// # Returns
    /// `None` if the integer result overflows or the real result is not
    /// finite (including `0` raised to a negative power).
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::value::Number;
    ///
    /// assert_eq!(Number::Integer(-4).checked_pow(Number::Integer(8)), Some(Number::Integer(65536)));
    /// assert_eq!(Number::Integer(2).checked_pow(Number::Integer(-1)), Some(Number::Real(0.5)));
    /// assert_eq!(Number::Integer(2).checked_pow(Number::Integer(64)), None);
    /// ```
    #[must_use]
    pub fn checked_pow(self, exponent: Self) -> Option<Self> {
        match (self, exponent) {
            (Self::Integer(base), Self::Integer(exp)) if exp >= 0 => {
                i64_to_u32_checked(exp).and_then(|exp| base.checked_pow(exp))
                                       .map(Self::Integer)
            },
            _ => finite(self.as_f64().powf(exponent.as_f64())),
        }
    }

    /// Applies an integer operation, or the real one when either side is
    /// real.
    fn combine(self,
               rhs: Self,
               int_op: fn(i64, i64) -> Option<i64>,
               real_op: fn(f64, f64) -> f64)
               -> Option<Self> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => int_op(a, b).map(Self::Integer),
            _ => finite(real_op(self.as_f64(), rhs.as_f64())),
        }
    }
}

/// Wraps a real result, rejecting infinities and NaN.
fn finite(value: f64) -> Option<Number> {
    value.is_finite().then_some(Number::Real(value))
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => a == b,
            (Self::Integer(n), Self::Real(r)) | (Self::Real(r), Self::Integer(n)) => {
                f64_to_i64_exact(r) == Some(n)
            },
        }
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        *self == Self::Integer(*other)
    }
}

impl PartialEq<i32> for Number {
    fn eq(&self, other: &i32) -> bool {
        *self == i64::from(*other)
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        *self == Self::Real(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
