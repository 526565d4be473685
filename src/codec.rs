//! Decimal string codec
//!
//! Composes normalization, chunking and word parsing into the full parse
//! path, and exposes the serialize path through [`std::fmt::Display`].

use std::fmt;
use std::str::FromStr;

use crate::digits::{normalize, DigitChunks};
use crate::error::{ConversionError, ConversionResult};
use crate::words::{pad_to_power_of_two, parse_words, serialize, WordSequence, WORD_DIGITS};

/// Packaging applied to a freshly parsed word sequence
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Packing {
    /// One limb per chunk, nothing appended
    #[default]
    Natural,
    /// Zero limbs appended up to a power-of-two length
    PowerOfTwo,
}

/// Parses a decimal string into its natural word sequence
pub fn parse(input: &str) -> ConversionResult<WordSequence> {
    parse_with(input, Packing::Natural)
}

/// Parses a decimal string and pads the result for a radix-2 transform
pub fn parse_padded(input: &str) -> ConversionResult<WordSequence> {
    parse_with(input, Packing::PowerOfTwo)
}

/// Parses a decimal string with the given packaging.
///
/// Zero parses to a single zero limb.
pub fn parse_with(input: &str, packing: Packing) -> ConversionResult<WordSequence> {
    let digits = normalize(input)?;
    let words = parse_words(DigitChunks::new(digits.as_str(), WORD_DIGITS))?;

    Ok(match packing {
        Packing::Natural => words,
        Packing::PowerOfTwo => pad_to_power_of_two(words),
    })
}

impl FromStr for WordSequence {
    type Err = ConversionError;

    fn from_str(s: &str) -> ConversionResult<Self> {
        parse(s)
    }
}

impl fmt::Display for WordSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        serialize::write_digits(self.words(), f)
    }
}
