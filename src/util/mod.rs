//! Utility functions for interop with `num-bigint`

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::words::{Word, WordSequence, WORD_BASE};

/// Converts little-endian base 10^9 limbs to a BigUint
pub fn words_to_biguint(words: &[Word]) -> BigUint {
    words
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, &w| acc * WORD_BASE + w)
}

/// Converts a BigUint to little-endian base 10^9 limbs
pub fn biguint_to_words(value: &BigUint) -> Vec<Word> {
    if value.is_zero() {
        return vec![0];
    }

    let base = BigUint::from(WORD_BASE);
    let mut words = Vec::with_capacity((value.bits() / 29 + 1) as usize);
    let mut rest = value.clone();
    while !rest.is_zero() {
        let (quotient, remainder) = rest.div_rem(&base);
        // remainder < 10^9
        words.push(remainder.to_u32().unwrap_or_default());
        rest = quotient;
    }
    words
}

impl From<&WordSequence> for BigUint {
    fn from(sequence: &WordSequence) -> Self {
        words_to_biguint(sequence.words())
    }
}

impl From<&BigUint> for WordSequence {
    fn from(value: &BigUint) -> Self {
        WordSequence::from_words_unchecked(biguint_to_words(value))
    }
}
