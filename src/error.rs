//! Error types for decimal/word conversion

/// Error types for conversion operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Input is empty, signed, or not ASCII
    #[error("Malformed input: {reason}")]
    Malformed { reason: &'static str },

    /// A chunk handed to the word parser contains something other than decimal digits
    #[error("Invalid digit chunk: {0:?}")]
    InvalidDigitChunk(String),

    /// A word does not fit the base 10^9 limb range
    #[error("Word {value} at index {index} exceeds 999999999")]
    WordOutOfRange { index: usize, value: u64 },
}

impl ConversionError {
    pub(crate) fn malformed(reason: &'static str) -> Self {
        Self::Malformed { reason }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
