/*!
The DEC alpha format: a 64-bit decimal floating-point encoding with
correctly-rounded negation, addition, subtraction, and multiplication.

See the crate-level documentation for the bit layout. This module is
organized the way a single-format number system in this crate's style
is expected to be: [`number`] owns the bit layout, decoding, and
encoding; [`round`] owns the rounding kernel that every arithmetic core
funnels through; [`ops`] owns the arithmetic cores and the public
operators.
*/

mod number;
mod ops;
mod round;

pub use number::Value;
pub use ops::{add, mult, neg, pred, succ, sub};
pub use round::from_integer_and_biased_exp;
