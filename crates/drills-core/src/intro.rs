//! Warm-up drills: max, fizzbuzz, average

/// The greater of `a` and `b`; `a` when they compare equal.
#[must_use]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// Classic fizzbuzz for a single number.
#[must_use]
pub fn fizz_buzz(n: i64) -> String {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => "FizzBuzz".to_string(),
        (true, false) => "Fizz".to_string(),
        (false, true) => "Buzz".to_string(),
        (false, false) => n.to_string(),
    }
}

/// Arithmetic mean. An empty slice yields NaN.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn calculate_average(numbers: &[f64]) -> f64 {
    numbers.iter().sum::<f64>() / numbers.len() as f64
}
