//! Bounded exact-arithmetic fractions: `i32` numerator/denominator pairs kept
//! in lowest terms, with overflow-checked operations and a fixed
//! three-decimal-digit precision policy for float interop.

mod error;
mod fraction;

pub use error::FractionError;
pub use fraction::Fraction;
