//! Leading zero removal and sign rejection

use std::fmt;
use std::ops::Deref;

use crate::error::{ConversionError, ConversionResult};

/// A canonical digit string borrowed from the caller's input.
///
/// Either exactly `"0"` or free of leading zeros. Characters are not checked
/// to be digits here; the word parser reports non-digit chunks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NormalizedDigits<'a> {
    digits: &'a str,
}

impl<'a> NormalizedDigits<'a> {
    /// Returns the canonical digits
    pub fn as_str(&self) -> &'a str {
        self.digits
    }

    /// Returns true if the digits denote zero
    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }
}

impl Deref for NormalizedDigits<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        self.digits
    }
}

impl AsRef<str> for NormalizedDigits<'_> {
    fn as_ref(&self) -> &str {
        self.digits
    }
}

impl PartialEq<str> for NormalizedDigits<'_> {
    fn eq(&self, other: &str) -> bool {
        self.digits == other
    }
}

impl PartialEq<&str> for NormalizedDigits<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.digits == *other
    }
}

impl fmt::Display for NormalizedDigits<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.digits)
    }
}

/// Strips insignificant leading zeros from `input`.
///
/// Fails with [`ConversionError::Malformed`] when the input is empty, starts
/// with a sign, or contains non-ASCII characters. An all-zero input yields
/// `"0"`, never an empty string.
pub fn normalize(input: &str) -> ConversionResult<NormalizedDigits<'_>> {
    match input.as_bytes().first() {
        None => return Err(ConversionError::malformed("empty input")),
        Some(b'-') | Some(b'+') => {
            return Err(ConversionError::malformed("signed input"));
        }
        Some(_) => {}
    }
    if !input.is_ascii() {
        return Err(ConversionError::malformed("non-ASCII input"));
    }

    let stripped = input.trim_start_matches('0');
    let digits = if stripped.is_empty() {
        // keep the final zero of the input
        &input[input.len() - 1..]
    } else {
        stripped
    };

    Ok(NormalizedDigits { digits })
}
