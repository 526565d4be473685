//! Decimal digit strings
//!
//! Canonicalization of user supplied decimal text and positional chunking
//! of the canonical digits into word-sized groups.

pub mod chunk;
pub mod normalize;

pub use chunk::{chunk, DigitChunks};
pub use normalize::{normalize, NormalizedDigits};
