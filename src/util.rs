//! Constant time helpers for byte strings derived from secrets
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Compares two byte strings without stopping at the first difference.
/// Strings of different lengths are never equal; the length itself is not secret.
pub fn constant_time_are_equal(a: &[u8], b: &[u8]) -> bool {
    bool::from(ct_equal(a, b))
}

pub fn ct_equal(a: &[u8], b: &[u8]) -> Choice {
    a.ct_eq(b)
}

/// True when every byte is zero, scanning the whole slice
pub fn ct_is_zero(a: &[u8]) -> Choice {
    let acc = a.iter().fold(0u8, |acc, b| acc | b);
    acc.ct_eq(&0)
}

/// Picks `a` when `choice` is 0 and `b` when it is 1, byte by byte
pub fn conditional_select_bytes(a: &[u8], b: &[u8], choice: Choice) -> Vec<u8> {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(x, y)| u8::conditional_select(x, y, choice))
        .collect()
}
