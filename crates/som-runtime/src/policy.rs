//! Overflow policy selection for the arithmetic primitives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ArithmeticError, ParseNameError};
use crate::op::BinaryOp;
use crate::value::Int32Value;

/// How `S32_ADD` and `S32_MUL` treat results outside the 32-bit range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Wrap modulo 2^32, like native fixed-width arithmetic.
    #[default]
    Wrapping,
    /// Fail with [`ArithmeticError::IntegerOverflow`].
    Checked,
}

impl OverflowPolicy {
    pub fn add(self, a: Int32Value, b: Int32Value) -> Result<Int32Value, ArithmeticError> {
        self.apply(BinaryOp::Add, a, b)
    }

    pub fn multiply(self, a: Int32Value, b: Int32Value) -> Result<Int32Value, ArithmeticError> {
        self.apply(BinaryOp::Mul, a, b)
    }

    /// Evaluate `a op b` under this policy. Never fails for `Wrapping`.
    pub fn apply(
        self,
        op: BinaryOp,
        a: Int32Value,
        b: Int32Value,
    ) -> Result<Int32Value, ArithmeticError> {
        match (self, op) {
            (OverflowPolicy::Wrapping, BinaryOp::Add) => Ok(a.wrapping_add(b)),
            (OverflowPolicy::Wrapping, BinaryOp::Mul) => Ok(a.wrapping_mul(b)),
            (OverflowPolicy::Checked, BinaryOp::Add) => a.checked_add(b),
            (OverflowPolicy::Checked, BinaryOp::Mul) => a.checked_mul(b),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OverflowPolicy::Wrapping => "wrapping",
            OverflowPolicy::Checked => "checked",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverflowPolicy {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "wrapping" => Ok(OverflowPolicy::Wrapping),
            "checked" => Ok(OverflowPolicy::Checked),
            other => Err(ParseNameError::UnknownPolicy(other.to_string())),
        }
    }
}
