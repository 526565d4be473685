//! Chunk to word conversion

use crate::error::{ConversionError, ConversionResult};
use crate::words::{Word, WordSequence, MAX_WORD};

/// Parses one decimal chunk into a word.
///
/// `index` is the chunk's limb position and is only used for error reporting.
pub fn parse_word(index: usize, chunk: &str) -> ConversionResult<Word> {
    if chunk.is_empty() || !chunk.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConversionError::InvalidDigitChunk(chunk.to_owned()));
    }

    // saturate so oversized chunks are reported rather than wrapped
    let value = chunk.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add((b - b'0') as u64)
    });

    if value > MAX_WORD as u64 {
        return Err(ConversionError::WordOutOfRange { index, value });
    }
    Ok(value as Word)
}

/// Converts chunks, least significant first, into a word sequence.
///
/// The result carries no padding; see [`super::pad_to_power_of_two`].
pub fn parse_words<'a, I>(chunks: I) -> ConversionResult<WordSequence>
where
    I: IntoIterator<Item = &'a str>,
{
    let words = chunks
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| parse_word(index, chunk))
        .collect::<ConversionResult<Vec<Word>>>()?;

    Ok(WordSequence::from_words_unchecked(words))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_word() {
        assert_eq!(parse_word(0, "000000042").unwrap(), 42);
        assert_eq!(parse_word(0, "999999999").unwrap(), MAX_WORD);
        assert_eq!(parse_word(0, "0").unwrap(), 0);
    }

    #[test]
    fn test_parse_word_rejects_non_digits() {
        assert_eq!(
            parse_word(0, "12a4"),
            Err(ConversionError::InvalidDigitChunk("12a4".to_string()))
        );
        assert_eq!(
            parse_word(0, ""),
            Err(ConversionError::InvalidDigitChunk(String::new()))
        );
        assert!(parse_word(0, " 1").is_err());
    }

    #[test]
    fn test_parse_word_rejects_wide_chunk() {
        assert_eq!(
            parse_word(3, "1000000000"),
            Err(ConversionError::WordOutOfRange {
                index: 3,
                value: 1_000_000_000
            })
        );
        assert!(matches!(
            parse_word(0, "99999999999999999999999"),
            Err(ConversionError::WordOutOfRange { value: u64::MAX, .. })
        ));
    }

    #[test]
    fn test_parse_words_keeps_chunk_order() {
        let words = parse_words(["456789123", "123", "7"]).unwrap();
        assert_eq!(words.words(), &[456_789_123, 123, 7]);
    }

    #[test]
    fn test_parse_words_empty() {
        let words = parse_words(std::iter::empty()).unwrap();
        assert!(words.is_empty());
    }
}
