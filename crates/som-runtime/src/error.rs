//! Error types for som-runtime.

use crate::op::BinaryOp;
use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by checked integer arithmetic.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The mathematical result does not fit in 32 signed bits.
    #[error("integer overflow: {lhs} {} {rhs} does not fit in a 32-bit signed integer", .op.glyph())]
    #[diagnostic(
        code(som::integer_overflow),
        help("use the `wrapping` overflow policy to get two's-complement wraparound")
    )]
    IntegerOverflow { op: BinaryOp, lhs: i32, rhs: i32 },

    /// A wider integer was narrowed into a 32-bit literal.
    #[error("integer {value} is outside the 32-bit signed range")]
    #[diagnostic(code(som::out_of_range))]
    OutOfRange { value: i64 },
}

/// Errors raised when parsing an integer literal from text.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ParseLiteralError {
    /// No digits at all.
    #[error("empty integer literal")]
    #[diagnostic(code(som::parse::empty))]
    Empty,

    /// Text contains something other than a sign, digits and `_` separators.
    #[error("invalid integer literal `{0}`")]
    #[diagnostic(
        code(som::parse::invalid),
        help("literals are decimal digits with an optional sign, e.g. `-42` or `1_000`")
    )]
    Invalid(String),

    /// Well-formed, but does not fit in 32 signed bits.
    #[error("integer literal `{0}` is outside the 32-bit signed range")]
    #[diagnostic(
        code(som::parse::out_of_range),
        help("the range is -2147483648 ..= 2147483647")
    )]
    OutOfRange(String),
}

/// Errors raised when parsing a policy or operator name.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ParseNameError {
    #[error("unknown overflow policy `{0}`")]
    #[diagnostic(
        code(som::parse::unknown_policy),
        help("expected one of: wrapping, checked")
    )]
    UnknownPolicy(String),

    #[error("unknown operator `{0}`")]
    #[diagnostic(
        code(som::parse::unknown_op),
        help("expected one of: add, +, S32_ADD, mul, *, S32_MUL")
    )]
    UnknownOp(String),
}
