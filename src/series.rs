//! Closed-form arithmetic series.
//!
//! `sum_to_n(n)` evaluates 1+2+...+N as N·(N+1)/2. One of two consecutive
//! integers is always even, so the division is exact for every N.
//!
//! # Overflow
//!
//! Arithmetic is fixed-width `i64`. When N·(N+1) does not fit, the product
//! wraps in two's complement and the result is meaningless. This is a known
//! limitation, not an error: callers that need to detect it use
//! [`checked_sum_to_n`].

/// Sum of the integers 1 through `n`.
///
/// Negative `n` follows the same formula, so `sum_to_n(-1) == 0` and
/// `sum_to_n(-5) == 10`. Overflow wraps (see module docs).
pub const fn sum_to_n(n: i64) -> i64 {
    n.wrapping_mul(n.wrapping_add(1)) / 2
}

/// Like [`sum_to_n`], but `None` when N·(N+1) overflows `i64`.
pub const fn checked_sum_to_n(n: i64) -> Option<i64> {
    let Some(next) = n.checked_add(1) else {
        return None;
    };
    match n.checked_mul(next) {
        Some(product) => Some(product / 2),
        None => None,
    }
}
