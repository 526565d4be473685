//! Word to decimal string conversion

use std::fmt;

use crate::error::{ConversionError, ConversionResult};
use crate::words::{Word, MAX_WORD, WORD_DIGITS};

/// Writes the canonical decimal form of `words` (least significant first).
///
/// Zero limbs above the most significant non-zero limb are skipped, so
/// padded and unpadded sequences print the same. Zero prints as `"0"`.
pub(crate) fn write_digits<W: fmt::Write>(words: &[Word], out: &mut W) -> fmt::Result {
    let top = match words.iter().rposition(|&w| w != 0) {
        Some(top) => top,
        None => return out.write_char('0'),
    };

    write!(out, "{}", words[top])?;
    for word in words[..top].iter().rev() {
        write!(out, "{:0width$}", word, width = WORD_DIGITS)?;
    }
    Ok(())
}

/// Converts limbs back to a canonical decimal string.
///
/// Fails with [`ConversionError::WordOutOfRange`] if any limb is not below
/// 10^9 instead of printing a corrupted number.
pub fn to_digits(words: &[Word]) -> ConversionResult<String> {
    if let Some(index) = words.iter().position(|&w| w > MAX_WORD) {
        return Err(ConversionError::WordOutOfRange {
            index,
            value: words[index] as u64,
        });
    }
    Ok(to_digits_unchecked(words))
}

/// Like [`to_digits`] without the range check. Out-of-range limbs produce
/// a wrong but well-formed digit string.
pub fn to_digits_unchecked(words: &[Word]) -> String {
    let mut out = String::with_capacity(words.len().max(1) * WORD_DIGITS);
    // writing into a String never fails
    let _ = write_digits(words, &mut out);
    out
}
