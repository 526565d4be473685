//! Base 10^9 word sequences
//!
//! A [`WordSequence`] is the little-endian limb representation consumed by
//! arithmetic layers. Limbs are kept below 10^9 so that the product of two
//! limbs plus carries fits in a 64-bit accumulator.

use std::ops::Deref;
use std::slice;

use num_traits::{ToPrimitive, Zero};

use crate::error::{ConversionError, ConversionResult};

pub mod padding;
pub mod parse;
pub mod serialize;

pub use padding::pad_to_power_of_two;
pub use parse::{parse_word, parse_words};
pub use serialize::{to_digits, to_digits_unchecked};

/// A single base 10^9 limb
pub type Word = u32;

/// Number of decimal digits held by one word
pub const WORD_DIGITS: usize = 9;

/// Radix of the word representation
pub const WORD_BASE: u64 = 1_000_000_000;

/// Largest value a word may hold
pub const MAX_WORD: Word = 999_999_999;

/// Ordered limbs of an unsigned integer, least significant first.
///
/// Equality is structural: a sequence carrying power-of-two padding is not
/// equal to its unpadded form even though both denote the same value. Use
/// [`WordSequence::trimmed`] to compare values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WordSequence {
    words: Vec<Word>,
}

impl WordSequence {
    /// Creates a sequence from raw limbs, checking that each is below 10^9
    pub fn from_words(words: Vec<Word>) -> ConversionResult<Self> {
        if let Some(index) = words.iter().position(|&w| w > MAX_WORD) {
            return Err(ConversionError::WordOutOfRange {
                index,
                value: words[index] as u64,
            });
        }
        Ok(Self { words })
    }

    /// Limbs are trusted to be in range
    pub(crate) fn from_words_unchecked(words: Vec<Word>) -> Self {
        debug_assert!(words.iter().all(|&w| w <= MAX_WORD));
        Self { words }
    }

    /// The canonical zero: a single zero limb
    pub fn zero() -> Self {
        Self { words: vec![0] }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the limbs, least significant first
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    /// Returns true if every limb is zero (including the empty sequence)
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(Zero::is_zero)
    }

    /// Number of limbs up to and including the most significant non-zero one
    pub fn significant_len(&self) -> usize {
        self.words
            .iter()
            .rposition(|w| !w.is_zero())
            .map_or(0, |i| i + 1)
    }

    /// Returns the same value without zero limbs above the most significant
    /// non-zero limb. A non-empty zero value keeps a single zero limb.
    pub fn trimmed(&self) -> Self {
        let keep = self.significant_len().max(1).min(self.words.len());
        Self {
            words: self.words[..keep].to_vec(),
        }
    }

    /// Returns true if the length is suitable for a radix-2 transform
    pub fn is_power_of_two_len(&self) -> bool {
        self.words.len().is_power_of_two()
    }

    /// Returns a copy padded with zero limbs to a power-of-two length
    pub fn padded_to_power_of_two(&self) -> Self {
        pad_to_power_of_two(self.clone())
    }
}

impl Deref for WordSequence {
    type Target = [Word];

    fn deref(&self) -> &[Word] {
        &self.words
    }
}

impl AsRef<[Word]> for WordSequence {
    fn as_ref(&self) -> &[Word] {
        &self.words
    }
}

impl<'a> IntoIterator for &'a WordSequence {
    type Item = &'a Word;
    type IntoIter = slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl TryFrom<Vec<Word>> for WordSequence {
    type Error = ConversionError;

    fn try_from(words: Vec<Word>) -> ConversionResult<Self> {
        Self::from_words(words)
    }
}

impl From<WordSequence> for Vec<Word> {
    fn from(sequence: WordSequence) -> Self {
        sequence.words
    }
}

impl ToPrimitive for WordSequence {
    fn to_i64(&self) -> Option<i64> {
        self.to_u64().and_then(|v| i64::try_from(v).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.words.iter().rev().try_fold(0u64, |acc, &w| {
            acc.checked_mul(WORD_BASE)?.checked_add(w as u64)
        })
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_u128().and_then(|v| i128::try_from(v).ok())
    }

    fn to_u128(&self) -> Option<u128> {
        self.words.iter().rev().try_fold(0u128, |acc, &w| {
            acc.checked_mul(WORD_BASE as u128)?.checked_add(w as u128)
        })
    }
}
