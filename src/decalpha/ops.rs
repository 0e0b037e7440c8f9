// decalpha/ops.rs
//
// The additive, subtractive, and multiplicative cores (spec §4.4-4.6),
// plus the signed wrappers and special-value dispatch (spec §4.7).

use super::number::{decode_finite, Value, DECADE_HI, DECADE_LO};
use super::round::{normalize, normalize_extra};
use crate::util::pow10;

/// Adds two non-negative finite values (spec §4.4). `x` and `y` are
/// magnitudes only; the caller applies sign.
fn add_pos_pos(x: u64, y: u64) -> Value {
    let (lm, sm) = if x >= y { (x, y) } else { (y, x) };
    let (lexp, lsd) = decode_finite(lm);
    let (sexp, ssd) = decode_finite(sm);
    let (mut lexp, sexp) = (lexp as i64, sexp as i64);

    if lexp == sexp {
        return normalize(lsd + ssd, lexp);
    }
    if lexp - sexp >= 17 {
        return Value::from_bits(lm);
    }

    // Make room for one more decimal place before realigning `ssd`.
    lexp -= 1;
    let lsd = lsd * 10;

    let d = (lexp - sexp) as u32;
    let p = pow10(d);
    let q = ssd / p;
    let r = ssd % p;
    let extra = r != 0;

    normalize_extra(lsd + q, lexp, extra)
}

/// Subtracts non-negative finite `y` from non-negative finite `x`,
/// assuming `x >= y` as reals (spec §4.5).
fn sub_pos_pos(x: u64, y: u64) -> Value {
    let (xexp, xsd) = decode_finite(x);
    let (yexp, ysd) = decode_finite(y);
    let (mut xexp, yexp) = (xexp as i64, yexp as i64);
    let mut xsd = xsd;

    if xexp - yexp >= 18 {
        return Value::from_bits(x);
    }

    let one_decade_above = xexp == yexp + 1;
    if one_decade_above {
        xsd *= 10;
    }
    if one_decade_above || xexp == yexp {
        return normalize(xsd - ysd, yexp);
    }

    xexp -= 2;
    xsd *= 100;

    let d = (xexp - yexp) as u32;
    let p = pow10(d);
    let mut q = ysd / p;
    let r = ysd % p;
    let extra = r != 0;
    // Rather than subtracting `q*p + r` in two steps, fold the discarded
    // remainder into the quotient and let `extra` tell the normalizer a
    // non-zero digit was dropped.
    q += extra as u64;

    normalize_extra(xsd - q, xexp, extra)
}

/// Multiplies two non-negative finite values (spec §4.6).
fn mul_pos_pos(x: u64, y: u64) -> Value {
    let (xexp, xsd) = decode_finite(x);
    let (yexp, ysd) = decode_finite(y);
    let mut exp = xexp as i64 + yexp as i64 - 123;

    let mut m = xsd as u128 * ysd as u128;
    if m == 0 {
        return Value::POS_ZERO;
    }

    let decade_lo_1e17 = DECADE_LO as u128 * pow10(17) as u128;
    while m < decade_lo_1e17 {
        m *= 10;
        exp -= 1;
    }

    let sd = (m / pow10(17) as u128) as u64;
    let rem = (m % pow10(17) as u128) as u64;

    if exp < 0 {
        // Underflow: round into a subnormal, or flush to +0 if it would
        // not even round up to the smallest subnormal.
        if exp < -16 {
            return Value::POS_ZERO;
        }
        let p = pow10((-exp) as u32);
        let rsd = sd / p;
        let rrem = sd % p;
        let half = p >> 1;
        let round_up = rrem > half || (rrem == half && (rem != 0 || sd % 2 == 1));
        return Value::from_bits(super::number::encode(0, rsd + round_up as u64));
    }

    let mut sd = sd;
    if sd >= DECADE_HI + 5 || (sd == DECADE_HI + 4 && rem > 0) {
        // DECADE_LO is odd: the exact tie at DECADE_HI + 4 rounds to even,
        // i.e. stays put.
        exp += 1;
        sd = DECADE_LO;
    } else if sd >= DECADE_HI - 5 {
        sd = DECADE_HI;
    } else {
        let half = 5 * pow10(16);
        if rem > half || (rem == half && sd % 2 == 1) {
            sd += 1;
        }
    }

    if exp >= 255 {
        return Value::INFINITY;
    }
    Value::from_bits(super::number::encode(exp as u32, sd))
}

fn neg_bits(x: Value) -> Value {
    Value::from_bits(x.to_bits() ^ super::number::SIGN_MASK)
}

/// Flips the sign bit.
pub fn neg(x: Value) -> Value {
    neg_bits(x)
}

/// Correctly-rounded addition, with sign rules and special-value dispatch
/// (spec §4.7).
pub fn add(x: Value, y: Value) -> Value {
    if x.is_nan() {
        return x;
    }
    if y.is_nan() {
        return y;
    }
    match (x.is_infinite(), y.is_infinite()) {
        (true, true) => {
            if x.sign() == y.sign() {
                x
            } else {
                Value::NAN
            }
        }
        (true, false) => x,
        (false, true) => y,
        (false, false) => {
            if x.sign() == y.sign() {
                let mag = add_pos_pos(x.magnitude(), y.magnitude());
                if x.sign() {
                    neg_bits(mag)
                } else {
                    mag
                }
            } else if x.magnitude() == y.magnitude() {
                // Exact cancellation: the standard round-to-nearest
                // convention is +0 regardless of which operand carried
                // which sign, so this can't depend on argument order.
                Value::POS_ZERO
            } else {
                let (big_mag, small_mag, big_sign) = if x.magnitude() > y.magnitude() {
                    (x.magnitude(), y.magnitude(), x.sign())
                } else {
                    (y.magnitude(), x.magnitude(), y.sign())
                };
                let mag = sub_pos_pos(big_mag, small_mag);
                if big_sign {
                    neg_bits(mag)
                } else {
                    mag
                }
            }
        }
    }
}

/// Correctly-rounded subtraction: `sub(x, y) == add(x, neg(y))`.
pub fn sub(x: Value, y: Value) -> Value {
    add(x, neg(y))
}

/// Correctly-rounded multiplication, with sign rules and special-value
/// dispatch (spec §4.7).
pub fn mult(x: Value, y: Value) -> Value {
    if x.is_nan() {
        return x;
    }
    if y.is_nan() {
        return y;
    }

    let sign = x.sign() ^ y.sign();
    let result = if x.is_infinite() || y.is_infinite() {
        if x.is_zero() || y.is_zero() {
            return Value::NAN;
        }
        Value::INFINITY
    } else {
        mul_pos_pos(x.magnitude(), y.magnitude())
    };

    if sign {
        neg_bits(result)
    } else {
        result
    }
}

/// Steps to the previous representable word. Defined only for
/// non-negative finite inputs (spec §4.7). `pred(POS_ZERO)` is `NEG_ZERO`:
/// the word immediately below `+0` in sign-magnitude order; stepping
/// further down is negative-side territory and out of scope.
pub fn pred(x: Value) -> Value {
    debug_assert!(x.is_finite() && !x.sign(), "pred is defined only for non-negative finite values");
    if x.is_zero() {
        return Value::NEG_ZERO;
    }
    Value::from_bits(x.to_bits() - 1)
}

/// Steps to the next representable word. Defined only for non-negative
/// finite inputs (spec §4.7).
pub fn succ(x: Value) -> Value {
    debug_assert!(x.is_finite() && !x.sign(), "succ is defined only for non-negative finite values");
    Value::from_bits(x.to_bits() + 1)
}
