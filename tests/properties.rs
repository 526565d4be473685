use std::str::FromStr;

#[cfg(feature = "bigint")]
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use proptest::prelude::*;

use decwords::words::WORD_DIGITS;
use decwords::{chunk, normalize, parse, parse_padded, parse_words, to_digits, WordSequence};

// Canonical digit strings without a leading zero
prop_compose! {
    fn arb_canonical_digits()(head in "[1-9]", tail in "[0-9]{0,120}") -> String {
        format!("{}{}", head, tail)
    }
}

prop_compose! {
    fn arb_zero_prefixed_digits()(zeros in 0usize..20, digits in arb_canonical_digits()) -> (String, String) {
        ("0".repeat(zeros) + &digits, digits)
    }
}

proptest! {
    #[test]
    fn test_round_trip(s in arb_canonical_digits()) {
        let digits = normalize(&s).unwrap();
        let words = parse_words(chunk(&digits, WORD_DIGITS)).unwrap();
        prop_assert_eq!(to_digits(&words).unwrap(), s.clone());

        // padding never changes the printed value
        let padded = parse_padded(&s).unwrap();
        prop_assert_eq!(to_digits(&padded).unwrap(), s);
    }

    #[test]
    fn test_leading_zeros_absorbed((prefixed, canonical) in arb_zero_prefixed_digits()) {
        prop_assert_eq!(normalize(&prefixed).unwrap().as_str(), canonical.as_str());
        prop_assert_eq!(parse(&prefixed).unwrap(), parse(&canonical).unwrap());
        prop_assert_eq!(parse(&prefixed).unwrap().to_string(), canonical);
    }

    #[test]
    fn test_all_zero_inputs(zeros in 1usize..40) {
        let input = "0".repeat(zeros);
        prop_assert_eq!(normalize(&input).unwrap().as_str(), "0");
        prop_assert_eq!(parse(&input).unwrap(), WordSequence::zero());
        prop_assert_eq!(parse_padded(&input).unwrap().to_string(), "0");
    }

    #[test]
    fn test_chunk_widths(s in arb_canonical_digits()) {
        let chunks = chunk(&s, WORD_DIGITS);
        prop_assert_eq!(chunks.len(), (s.len() + WORD_DIGITS - 1) / WORD_DIGITS);

        let (last, rest) = chunks.split_last().unwrap();
        prop_assert!(rest.iter().all(|c| c.len() == WORD_DIGITS));
        prop_assert!(!last.is_empty() && last.len() <= WORD_DIGITS);

        // reassembling most significant first restores the input
        let joined: String = chunks.iter().rev().copied().collect();
        prop_assert_eq!(joined, s);
    }

    #[test]
    fn test_padded_length(s in arb_canonical_digits()) {
        let natural = parse(&s).unwrap();
        let padded = parse_padded(&s).unwrap();

        prop_assert!(padded.is_power_of_two_len());
        prop_assert_eq!(padded.len(), natural.len().next_power_of_two());
        prop_assert_eq!(&padded.words()[..natural.len()], natural.words());
        prop_assert!(padded.words()[natural.len()..].iter().all(|&w| w == 0));
        prop_assert_eq!(padded.trimmed(), natural);
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_agrees_with_biguint(s in arb_canonical_digits()) {
        let words = parse_padded(&s).unwrap();
        let expected = BigUint::from_str(&s).unwrap();

        prop_assert_eq!(BigUint::from(&words), expected.clone());
        prop_assert_eq!(WordSequence::from(&expected), parse(&s).unwrap());
    }

    #[test]
    fn test_small_values_convert_to_u64(value in any::<u64>()) {
        let words = parse(&value.to_string()).unwrap();
        prop_assert_eq!(words.to_u64(), Some(value));
        prop_assert!(words.words().iter().all(|&w| w < 1_000_000_000));
    }
}
