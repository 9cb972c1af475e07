//! Runtime value types for the som integer literal primitives.
//!
//! Generated programs lower integer literals and arithmetic to a small set of
//! runtime primitives:
//!
//! ```text
//! INT32_LIT(2)                      ->  construct(2)
//! S32_ADD(INT32_LIT(2), INT32_LIT(2))  ->  add(construct(2), construct(2))
//! S32_MUL(x, INT32_LIT(2))          ->  multiply(x, construct(2))
//! ```
//!
//! `add` and `multiply` wrap on overflow, matching native 32-bit signed
//! arithmetic. `checked_add` and `checked_multiply` report
//! [`ArithmeticError::IntegerOverflow`] instead; [`OverflowPolicy`] selects
//! between the two at runtime.
//!
//! # Example
//!
//! ```
//! use som_runtime::{add, construct, multiply};
//!
//! let answer = multiply(add(construct(2), construct(2)), construct(2));
//! assert_eq!(answer.value(), 8);
//! ```

mod error;
mod op;
mod policy;
mod value;

pub use error::{ArithmeticError, ParseLiteralError, ParseNameError};
pub use op::BinaryOp;
pub use policy::OverflowPolicy;
pub use value::{add, checked_add, checked_multiply, construct, multiply, Int32Value};
