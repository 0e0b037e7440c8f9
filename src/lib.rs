/*!
`decalpha` implements DEC alpha, a 64-bit decimal floating-point format:
sign, a decimal biased exponent, and a 17-significant-digit significand
packed into a single word, ordered so that unsigned integer comparison
of two non-negative finite words agrees with comparison of the real
numbers they encode.

This is the API documentation.

The crate exports a single number type, [`Value`], and the arithmetic
operators defined on it: [`add`], [`sub`], [`mult`], [`neg`], [`pred`],
and [`succ`], plus the constructor [`from_integer_and_biased_exp`] and
the sentinels [`Value::POS_ZERO`], [`Value::NEG_ZERO`],
[`Value::INFINITY`], and [`Value::NAN`].

Every operator is a pure, total function of its arguments: there is no
heap allocation, no I/O, and no panic on any input a [`Value`] can
hold. Rounding is always round-to-nearest, ties-to-even. Division,
transcendental functions, and parsing from strings are out of scope;
the only textual form this crate produces is the one in [`Value`]'s
`Display` implementation, intended for tests and the `decalpha-demo`
binary rather than general-purpose formatting.
*/

mod decalpha;
mod util;

pub use decalpha::{add, from_integer_and_biased_exp, mult, neg, pred, succ, sub, Value};
