//! Fixed-sequence smoke test for the DEC alpha format.
//!
//! Reproduces the walkthrough from the original reference implementation:
//! the zero/subnormal boundary, the decade boundary, an additive chain
//! building up to eleven, an eleven-step countdown back to zero, and a
//! handful of multiplications including two that underflow to subnormal.
//! This is a demo driver, not a CLI: it takes no arguments and always
//! prints the same sequence.

use decalpha::{add, from_integer_and_biased_exp, mult, sub, Value};

fn main() {
    println!("{}", Value::POS_ZERO);
    println!("{}", Value::from_bits(1));
    println!("{}", Value::from_bits(2));
    println!("...");

    println!("{}", Value::from_bits(DECADE_LO - 2));
    println!("{}", Value::from_bits(DECADE_LO - 1));
    println!("{}", Value::from_bits(DECADE_LO));
    println!("{}", Value::from_bits(DECADE_LO + 1));
    println!("{}", Value::from_bits(DECADE_LO + 2));
    println!("...");

    println!("{}", Value::from_bits(DECADE_HI - 2));
    println!("{}", Value::from_bits(DECADE_HI - 1));
    println!("{}", Value::from_bits(DECADE_HI));
    println!("{}", Value::from_bits(DECADE_HI + 1));
    println!("{}", Value::from_bits(DECADE_HI + 2));
    println!("...");

    let one = from_integer_and_biased_exp(1, 140);
    println!("{}", Value::from_bits(one.to_bits() - 1));
    println!("{one}");
    println!("{}", Value::from_bits(one.to_bits() + 1));
    println!("...");

    let two = add(one, one);
    println!("{two}");
    println!("...");

    let three = add(two, one);
    println!("{three} (2+1)");
    println!("...");

    let five = add(two, three);
    println!("{five} (2+3)");
    println!("...");

    let eight = add(five, three);
    println!("{eight} (5+3)");
    println!("...");

    let eleven = add(eight, three);
    println!("{eleven} (8+3)");
    println!("...");

    println!("{}", Value::from_bits(0x4000000000000000));
    println!("\n...");
    println!("{}", Value::from_bits(Value::INFINITY.to_bits() - 2));
    let da_max = Value::from_bits(Value::INFINITY.to_bits() - 1);
    println!("{da_max} DA_MAX");
    println!("{}", Value::INFINITY);
    println!("{}\n\nCountdown:", Value::NAN);

    let mut x = eleven;
    for _ in 0..11 {
        x = sub(x, one);
        println!("{x}");
    }

    println!("\nMultiplication:");
    let x = mult(five, eight);
    println!("{x} (8*5)");
    let x = mult(eight, eight);
    println!("{x} (8*8)");
    let x = mult(five, five);
    println!("{x} (5*5)");

    let third = from_integer_and_biased_exp(333_333_333_333_333_333, 122);
    println!("{} (3*.333...)", mult(third, three));
    let ninth = mult(third, third);
    println!("{ninth} (.333...*.333...)");
    println!("{} (11*.111...)", mult(ninth, eleven));
    println!("{} (1E-140*DA_MAX)", mult(Value::from_bits(1), da_max));
    println!("{} (9E-140*DA_MAX)", mult(Value::from_bits(9), da_max));
    println!(
        "{} (987654321E-140*DA_MAX)",
        mult(Value::from_bits(987_654_321), da_max)
    );

    println!("\nSubnormal result of *");
    println!(
        "{} (1001E-140*999)",
        mult(Value::from_bits(1001), from_integer_and_biased_exp(999, 140))
    );
    println!(
        "{} (99999E-70*10000001E-70)",
        mult(
            from_integer_and_biased_exp(99999, 70),
            from_integer_and_biased_exp(10_000_001, 70)
        )
    );
}

const DECADE_LO: u64 = 4_003_199_668_773_775;
const DECADE_HI: u64 = 40_031_996_687_737_742;
