//! Right-to-left chunking of digit strings

use std::iter::FusedIterator;

use num_integer::Integer;

/// Iterator over fixed-width chunks of a digit string, least significant first.
///
/// Boundaries are computed backward from the end of the string, so every
/// chunk except the last (most significant) one is exactly `chunk_size`
/// digits wide. Each chunk keeps the original left-to-right digit order.
#[derive(Clone, Debug)]
pub struct DigitChunks<'a> {
    digits: &'a str,
    /// Exclusive end of the next chunk
    end: usize,
    chunk_size: usize,
}

impl<'a> DigitChunks<'a> {
    /// Creates a chunk iterator over `digits`.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is 0.
    pub fn new(digits: &'a str, chunk_size: usize) -> Self {
        assert!(chunk_size != 0, "chunk size must be non-zero");
        Self {
            digits,
            end: digits.len(),
            chunk_size,
        }
    }
}

impl<'a> Iterator for DigitChunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.end == 0 {
            return None;
        }
        let mut start = self.end.saturating_sub(self.chunk_size);
        // never cut a multi-byte character in two
        while !self.digits.is_char_boundary(start) {
            start -= 1;
        }
        let chunk = &self.digits[start..self.end];
        self.end = start;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.end == 0 {
            return (0, Some(0));
        }
        (1, Some(Integer::div_ceil(&self.end, &self.chunk_size)))
    }
}

impl FusedIterator for DigitChunks<'_> {}

/// Splits `digits` into chunks of `chunk_size` digits counted from the least
/// significant end. Chunk 0 holds the lowest digits.
///
/// An empty string yields no chunks; a string no longer than `chunk_size`
/// yields itself as the only chunk.
pub fn chunk(digits: &str, chunk_size: usize) -> Vec<&str> {
    DigitChunks::new(digits, chunk_size).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunks_from_the_right() {
        assert_eq!(chunk("1234567", 3), vec!["567", "234", "1"]);
        assert_eq!(chunk("123456", 3), vec!["456", "123"]);
    }

    #[test]
    fn test_short_input_is_single_chunk() {
        assert_eq!(chunk("42", 9), vec!["42"]);
        assert_eq!(chunk("123456789", 9), vec!["123456789"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(chunk("", 9).is_empty());
    }

    #[test]
    fn test_twenty_eight_digits() {
        let chunks = chunk("1123456789123456789123456789", 9);
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0], "123456789");
        assert_eq!(chunks[3], "1");
    }

    #[test]
    fn test_multibyte_characters_stay_whole() {
        let chunks = chunk("12é3", 2);
        assert_eq!(chunks, vec!["é3", "12"]);
    }

    #[test]
    fn test_size_hint_bounds() {
        let chunks = DigitChunks::new("1234567890", 3);
        assert_eq!(chunks.size_hint(), (1, Some(4)));
        assert_eq!(chunks.count(), 4);
    }

    #[test]
    #[should_panic(expected = "chunk size must be non-zero")]
    fn test_zero_chunk_size_panics() {
        let _ = chunk("123", 0);
    }
}
