use crate::domain::model::{Classification, NumberProperty};

/// Decimal digits of |n|, most significant first.
fn digits(n: i64) -> Vec<u64> {
    let mut m = n.unsigned_abs();
    if m == 0 {
        return vec![0];
    }
    let mut ds = Vec::new();
    while m > 0 {
        ds.push(m % 10);
        m /= 10;
    }
    ds.reverse();
    ds
}

/// True iff n has exactly two positive divisors. Trial division up to
/// sqrt(n); `i <= n / i` avoids overflowing `i * i` near i64::MAX.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// True iff the sum of the proper divisors of n equals n (6, 28, 496, ...).
pub fn is_perfect(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut sum = 1;
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            sum += i;
            let pair = n / i;
            if pair != i {
                sum += pair;
            }
        }
        i += 1;
    }
    sum == n
}

/// True iff n equals the sum of its digits each raised to the digit count.
/// Digits come from the magnitude, so a negative n can never match its
/// non-negative digit-power sum.
pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let ds = digits(n);
    let k = ds.len() as u32;
    // u128 accumulator: 19 digits of 9^19 stays far below the limit
    let sum: u128 = ds.iter().map(|&d| (d as u128).pow(k)).sum();
    sum == n as u128
}

/// Sum of the decimal digits of |n|.
pub fn digit_sum(n: i64) -> u32 {
    let mut m = n.unsigned_abs();
    let mut sum = 0u32;
    while m > 0 {
        sum += (m % 10) as u32;
        m /= 10;
    }
    sum
}

/// Armstrong numbers get their expansion spelled out; everything else gets a
/// fixed fallback message.
pub fn fun_fact(n: i64) -> String {
    if is_armstrong(n) {
        let ds = digits(n);
        let k = ds.len();
        let terms = ds
            .iter()
            .map(|d| format!("{}^{}", d, k))
            .collect::<Vec<_>>()
            .join(" + ");
        format!("{} is an Armstrong number because {} = {}", n, terms, n)
    } else {
        format!("No fun fact available for {}.", n)
    }
}

/// Runs every predicate independently and assembles the result record.
/// Pure and re-entrant: identical input always yields an identical record.
pub fn classify(n: i64) -> Classification {
    let is_prime = is_prime(n);
    let is_perfect = is_perfect(n);
    let armstrong = is_armstrong(n);

    let mut properties = Vec::new();
    if is_prime {
        properties.push(NumberProperty::Prime);
    }
    if is_perfect {
        properties.push(NumberProperty::Perfect);
    }
    if armstrong {
        properties.push(NumberProperty::Armstrong);
    }
    if n % 2 != 0 {
        properties.push(NumberProperty::Odd);
    }

    Classification {
        number: n,
        is_prime,
        is_perfect,
        properties,
        digit_sum: digit_sum(n),
        fun_fact: fun_fact(n),
    }
}
