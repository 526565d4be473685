//! decwords: decimal string conversion for arbitrary-precision unsigned integers
//!
//! This library turns decimal digit strings into little-endian base 10^9
//! word sequences and back, the representation consumed by arithmetic
//! layers built on top of it.

pub mod codec;
pub mod digits;
pub mod error;
pub mod words;

#[cfg(feature = "bigint")]
pub mod util;

// Re-export commonly used types
pub use codec::{parse, parse_padded, parse_with, Packing};
pub use digits::{chunk, normalize, NormalizedDigits};
pub use error::{ConversionError, ConversionResult};
pub use words::{pad_to_power_of_two, parse_words, to_digits, Word, WordSequence};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
