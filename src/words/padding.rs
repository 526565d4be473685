//! Power-of-two alignment for radix-2 transforms

use crate::words::WordSequence;

/// Appends zero limbs at the most significant end until the length is the
/// smallest power of two not below the current length.
///
/// Sequences whose length is already a power of two, including length 1,
/// are returned unchanged. So is the empty sequence.
pub fn pad_to_power_of_two(sequence: WordSequence) -> WordSequence {
    let len = sequence.len();
    if len == 0 || len.is_power_of_two() {
        return sequence;
    }

    let mut words = sequence.into_words();
    words.resize(len.next_power_of_two(), 0);
    WordSequence::from_words_unchecked(words)
}
