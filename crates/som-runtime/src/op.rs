use std::fmt;
use std::str::FromStr;

use crate::error::ParseNameError;

/// A binary arithmetic primitive over 32-bit literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Mul,
}

impl BinaryOp {
    /// Name of the primitive as emitted into generated code.
    pub fn runtime_name(self) -> &'static str {
        match self {
            BinaryOp::Add => "S32_ADD",
            BinaryOp::Mul => "S32_MUL",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Mul => "*",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.runtime_name())
    }
}

impl FromStr for BinaryOp {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "add" | "+" | "S32_ADD" => Ok(BinaryOp::Add),
            "mul" | "*" | "S32_MUL" => Ok(BinaryOp::Mul),
            other => Err(ParseNameError::UnknownOp(other.to_string())),
        }
    }
}
