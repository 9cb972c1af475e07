//! The 32-bit signed integer literal value.

use std::fmt;
use std::num::IntErrorKind;
use std::ops::{Add, Mul};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ArithmeticError, ParseLiteralError};
use crate::op::BinaryOp;

/// A 32-bit signed integer literal.
///
/// The wrapped integer is fixed at construction; arithmetic always produces
/// a fresh value. Generated code refers to this type as `INT32_LIT`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Int32Value {
    value: i32,
}

impl Int32Value {
    pub const ZERO: Int32Value = Int32Value::new(0);
    pub const ONE: Int32Value = Int32Value::new(1);
    pub const MIN: Int32Value = Int32Value::new(i32::MIN);
    pub const MAX: Int32Value = Int32Value::new(i32::MAX);

    /// Wrap a raw integer unchanged.
    pub const fn new(value: i32) -> Self {
        Self { value }
    }

    pub const fn value(self) -> i32 {
        self.value
    }

    /// Two's-complement wrapping addition.
    pub fn wrapping_add(self, rhs: Int32Value) -> Int32Value {
        let (value, overflowed) = self.value.overflowing_add(rhs.value);
        if overflowed {
            tracing::trace!(lhs = self.value, rhs = rhs.value, value, "S32_ADD wrapped");
        }
        Int32Value::new(value)
    }

    /// Two's-complement wrapping multiplication.
    pub fn wrapping_mul(self, rhs: Int32Value) -> Int32Value {
        let (value, overflowed) = self.value.overflowing_mul(rhs.value);
        if overflowed {
            tracing::trace!(lhs = self.value, rhs = rhs.value, value, "S32_MUL wrapped");
        }
        Int32Value::new(value)
    }

    /// Addition that fails instead of wrapping.
    pub fn checked_add(self, rhs: Int32Value) -> Result<Int32Value, ArithmeticError> {
        self.value
            .checked_add(rhs.value)
            .map(Int32Value::new)
            .ok_or_else(|| overflow(BinaryOp::Add, self, rhs))
    }

    /// Multiplication that fails instead of wrapping.
    pub fn checked_mul(self, rhs: Int32Value) -> Result<Int32Value, ArithmeticError> {
        self.value
            .checked_mul(rhs.value)
            .map(Int32Value::new)
            .ok_or_else(|| overflow(BinaryOp::Mul, self, rhs))
    }
}

fn overflow(op: BinaryOp, lhs: Int32Value, rhs: Int32Value) -> ArithmeticError {
    tracing::debug!(%op, lhs = lhs.value, rhs = rhs.value, "checked arithmetic overflowed");
    ArithmeticError::IntegerOverflow {
        op,
        lhs: lhs.value,
        rhs: rhs.value,
    }
}

/// Construct a literal from a raw integer.
pub fn construct(raw: i32) -> Int32Value {
    Int32Value::new(raw)
}

/// `S32_ADD`: wrapping sum of two literals.
pub fn add(a: Int32Value, b: Int32Value) -> Int32Value {
    a.wrapping_add(b)
}

/// `S32_MUL`: wrapping product of two literals.
pub fn multiply(a: Int32Value, b: Int32Value) -> Int32Value {
    a.wrapping_mul(b)
}

/// Like [`add`], but reports `IntegerOverflow` instead of wrapping.
pub fn checked_add(a: Int32Value, b: Int32Value) -> Result<Int32Value, ArithmeticError> {
    a.checked_add(b)
}

/// Like [`multiply`], but reports `IntegerOverflow` instead of wrapping.
pub fn checked_multiply(a: Int32Value, b: Int32Value) -> Result<Int32Value, ArithmeticError> {
    a.checked_mul(b)
}

impl Add for Int32Value {
    type Output = Int32Value;

    fn add(self, rhs: Int32Value) -> Int32Value {
        self.wrapping_add(rhs)
    }
}

impl Mul for Int32Value {
    type Output = Int32Value;

    fn mul(self, rhs: Int32Value) -> Int32Value {
        self.wrapping_mul(rhs)
    }
}

impl From<i32> for Int32Value {
    fn from(value: i32) -> Self {
        Int32Value::new(value)
    }
}

impl From<Int32Value> for i32 {
    fn from(value: Int32Value) -> Self {
        value.value
    }
}

impl TryFrom<i64> for Int32Value {
    type Error = ArithmeticError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        i32::try_from(value)
            .map(Int32Value::new)
            .map_err(|_| ArithmeticError::OutOfRange { value })
    }
}

impl fmt::Display for Int32Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl FromStr for Int32Value {
    type Err = ParseLiteralError;

    /// Parse a decimal literal: optional sign, then digits with optional `_`
    /// separators after the first digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ParseLiteralError::Empty);
        }

        let (sign, digits) = match text.as_bytes()[0] {
            b'-' => ("-", &text[1..]),
            b'+' => ("", &text[1..]),
            _ => ("", text),
        };
        if !digits.starts_with(|c: char| c.is_ascii_digit())
            || !digits.chars().all(|c| c.is_ascii_digit() || c == '_')
        {
            return Err(ParseLiteralError::Invalid(text.to_string()));
        }

        let normalized: String = sign
            .chars()
            .chain(digits.chars().filter(|&c| c != '_'))
            .collect();
        match normalized.parse::<i32>() {
            Ok(value) => Ok(Int32Value::new(value)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(ParseLiteralError::OutOfRange(text.to_string()))
                }
                _ => Err(ParseLiteralError::Invalid(text.to_string())),
            },
        }
    }
}
