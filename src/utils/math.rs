/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Combinatorial primitives and quadrature
//!
//! The exact routines (`factorial`, `perm`, `comb`) work on `u64` and report
//! overflow instead of wrapping. The real-valued series of the angular and
//! radial factors need far larger factorials and take them as logarithms
//! from `ln_factorial` instead.

use super::errors::{MathError, Result};

/// Largest n whose factorial is finite in `f64`
pub const MAX_FACTORIAL_F64: u32 = 170;

fn overflow(what: String) -> MathError {
    MathError::NumericOverflow(format!("{} does not fit in the target width", what))
}

/// Calculate the factorial of n
///
/// # Arguments
///
/// * `n` - The non-negative integer for which to calculate the factorial
///
/// # Returns
///
/// n! or `MathError::NumericOverflow` once the product exceeds `u64`
pub fn factorial(n: u32) -> Result<u64> {
    let mut result = 1u64;
    for i in (1..=u64::from(n)).rev() {
        result = result
            .checked_mul(i)
            .ok_or_else(|| overflow(format!("{}!", n)))?;
    }
    Ok(result)
}

/// Falling factorial n·(n-1)·…·(n-m+1), i.e. n!/(n-m)!
///
/// Returns 0 when `m > n`, since the product then passes through zero.
pub fn perm(n: u32, m: u32) -> Result<u64> {
    if m > n {
        return Ok(0);
    }

    let mut result = 1u64;
    for i in 0..m {
        result = result
            .checked_mul(u64::from(n - i))
            .ok_or_else(|| overflow(format!("P({}, {})", n, m)))?;
    }
    Ok(result)
}

/// Binomial coefficient (n choose m)
///
/// Uses C(n, m) = C(n, n-m) to always work with the smaller of `m` and `n-m`
/// before dividing the falling factorial by m!.
pub fn comb(n: u32, m: u32) -> Result<u64> {
    if m > n {
        return Ok(0);
    }

    let m = if 2 * u64::from(m) > u64::from(n) { n - m } else { m };
    let numerator = perm(n, m)?;
    let denominator = factorial(m)?;

    Ok(numerator / denominator)
}

/// Factorial accumulated in double precision
///
/// Exact up to 22!, correctly rounded well beyond that, and reported as
/// overflow past 170!.
pub fn factorial_f64(n: u32) -> Result<f64> {
    let mut result = 1.0_f64;
    for i in (1..=n).rev() {
        result *= f64::from(i);
    }

    if result.is_finite() {
        Ok(result)
    } else {
        Err(overflow(format!("{}! as f64", n)))
    }
}

/// Natural logarithm of n!
///
/// The product is formed exactly in `f64` up to 170! and continued as a sum
/// of logarithms beyond, so ratios of large factorials can be taken without
/// overflowing.
pub fn ln_factorial(n: u32) -> f64 {
    let head = n.min(MAX_FACTORIAL_F64);
    let mut result = factorial_f64(head).map_or(f64::INFINITY, f64::ln);
    for i in head + 1..=n {
        result += f64::from(i).ln();
    }
    result
}

/// Reject a factorial argument outside 0..=170
///
/// Widens to `i64` first so callers can pass sums such as `n + l` of two
/// `i32` values without overflowing.
pub fn ensure_factorial_range(arg: i64, what: &str) -> Result<u32> {
    if (0..=i64::from(MAX_FACTORIAL_F64)).contains(&arg) {
        Ok(arg as u32)
    } else {
        Err(MathError::NumericOverflow(format!(
            "{} = {} is outside the double-precision factorial range 0..={}",
            what, arg, MAX_FACTORIAL_F64
        )))
    }
}

/// Performs numerical integration using Simpson's rule
///
/// # Arguments
///
/// * `f` - The function to integrate
/// * `a` - The lower bound of integration
/// * `b` - The upper bound of integration
/// * `n` - The number of intervals (must be even and non-zero)
///
/// # Returns
///
/// The approximate value of the integral or an error if n is not even
pub fn integrate_simpson<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    if n == 0 || n % 2 != 0 {
        return Err(MathError::InvalidArgument(format!(
            "Simpson's rule needs a non-zero even number of intervals, got {}",
            n
        )));
    }

    if a == b {
        return Ok(0.0);
    }

    let h = (b - a) / n as f64;
    let mut sum = f(a) + f(b);

    // Odd-indexed points carry weight 4, interior even-indexed points weight 2
    for i in 1..n {
        let x = a + i as f64 * h;
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * f(x);
    }

    Ok(sum * h / 3.0)
}
