// decalpha/round.rs
//
// The normalizer: the innermost rounding kernel (spec §4.3). Every
// arithmetic core funnels its unrounded integer/exponent pair through
// here before returning a `Value`.

use super::number::{encode, Value, DECADE_HI, DECADE_LO, EXP_INFNAN};
use crate::util::is_odd;

/// Returns the closest representable non-negative [`Value`] to
/// `i * 10^(exp - 140)`, with no alignment-discarded digits to account for.
pub(crate) fn normalize(i: u64, exp: i64) -> Value {
    normalize_extra(i, exp, false)
}

/// Like [`normalize`], but `extra` records that alignment discarded a
/// non-zero low digit, upgrading an exact tie into strictly-greater-than-half
/// (spec §4.3).
pub(crate) fn normalize_extra(i: u64, mut exp: i64, extra: bool) -> Value {
    let significand = if i <= DECADE_HI {
        // Case A: already fits; shift up out of subnormal range if possible.
        let mut i = i;
        while i < DECADE_LO && exp > 0 {
            exp -= 1;
            i *= 10;
        }
        i
    } else {
        // Case B: drop one or two decimal digits and round half-to-even.
        let (factor, tenth, bump) = if i > DECADE_HI * 10 {
            (100u64, 10u64, 2i64)
        } else {
            (10u64, 1u64, 1i64)
        };
        exp += bump;

        let mut candidate = i / factor;
        let remainder = i % factor;

        if candidate == DECADE_HI {
            // DECADE_HI is even; the next decade starts at the odd
            // DECADE_LO, so the halfway point stays put (round to even
            // means staying at DECADE_HI).
            let half = 4 * tenth;
            if remainder > half || (remainder == half && extra) {
                candidate = DECADE_LO;
                exp += 1;
            }
        } else {
            let half = 5 * tenth;
            if remainder > half || (remainder == half && (extra || is_odd(candidate))) {
                candidate += 1;
            }
        }
        candidate
    };

    if exp >= EXP_INFNAN as i64 {
        return Value::INFINITY;
    }
    Value::from_bits(encode(exp as u32, significand))
}

/// Returns the closest DEC alpha representation of `i * 10^(exp - 140)`.
///
/// Requires `0 <= exp <= 0x7FFF_FFF0`.
pub fn from_integer_and_biased_exp(i: u64, exp: i32) -> Value {
    debug_assert!((0..=0x7FFF_FFF0).contains(&exp), "biased exponent out of range");
    normalize(i, exp as i64)
}
