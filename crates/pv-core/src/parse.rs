// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Numeric string parsing.
//!
//! Every scalar and coordinate arrives as a string, either `0x`-prefixed hex
//! or plain decimal. Signs, whitespace and digit separators are rejected so
//! that one value has exactly one accepted spelling per radix (modulo leading
//! zeros).

use num_bigint::BigUint;

/// Upper bound on digits accepted per value; bn128 values need at most 78
/// decimal digits, the rest is room for zero padding.
pub const MAX_DIGITS: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty value")]
    Empty,

    #[error("more than {MAX_DIGITS} digits")]
    TooLong,

    #[error("'{0}' is not a 0x-prefixed hex or decimal number")]
    InvalidDigits(String),
}

/// Parse a `0x` hex or decimal string into an unsigned integer
pub fn parse_uint(s: &str) -> Result<BigUint, ParseError> {
    let (digits, radix) = match s.strip_prefix("0x") {
        Some(rest) => (rest, 16),
        None => (s, 10),
    };
    if digits.is_empty() {
        return Err(ParseError::Empty);
    }
    if digits.len() > MAX_DIGITS {
        return Err(ParseError::TooLong);
    }
    let ok = match radix {
        16 => digits.bytes().all(|b| b.is_ascii_hexdigit()),
        _ => digits.bytes().all(|b| b.is_ascii_digit()),
    };
    if !ok {
        return Err(ParseError::InvalidDigits(truncate(s)));
    }
    BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| ParseError::InvalidDigits(truncate(s)))
}

fn truncate(s: &str) -> String {
    if s.chars().count() <= 24 {
        s.to_string()
    } else {
        let head: String = s.chars().take(24).collect();
        format!("{head}…")
    }
}
