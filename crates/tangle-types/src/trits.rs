//! Balanced-ternary codec.
//!
//! Every tryte encodes three trits (balanced digits in `{-1, 0, 1}`),
//! little-endian within the tryte. Numbers are little-endian balanced
//! ternary over the full trit sequence.

use crate::constants::{TRITS_PER_TRYTE, TRYTE_ALPHABET};
use crate::error::{TypeError, TypeResult};

/// Decode a single tryte character into its three trits.
pub fn tryte_to_trits(tryte: char) -> TypeResult<[i8; 3]> {
    let index = TRYTE_ALPHABET
        .find(tryte)
        .ok_or(TypeError::InvalidTryte(tryte))? as i8;
    // '9' and A..M carry 0..13, N..Z carry -13..-1
    let value = if index > 13 { index - 27 } else { index };
    Ok(balanced_digits(value))
}

/// Encode three trits as a tryte character.
pub fn trits_to_tryte(trits: &[i8; 3]) -> TypeResult<char> {
    for &t in trits {
        if !(-1..=1).contains(&t) {
            return Err(TypeError::InvalidTrit(t));
        }
    }
    let value = trits[0] as i32 + 3 * trits[1] as i32 + 9 * trits[2] as i32;
    let index = value.rem_euclid(27) as usize;
    Ok(TRYTE_ALPHABET.as_bytes()[index] as char)
}

/// Decode a tryte string into its trit sequence.
pub fn trits_from_trytes(trytes: &str) -> TypeResult<Vec<i8>> {
    let mut trits = Vec::with_capacity(trytes.len() * TRITS_PER_TRYTE);
    for tryte in trytes.chars() {
        trits.extend_from_slice(&tryte_to_trits(tryte)?);
    }
    Ok(trits)
}

/// Encode a trit sequence as trytes. The length must be a multiple of 3.
pub fn trytes_from_trits(trits: &[i8]) -> TypeResult<String> {
    if trits.len() % TRITS_PER_TRYTE != 0 {
        return Err(TypeError::InvalidLength {
            expected: trits.len().div_ceil(TRITS_PER_TRYTE) * TRITS_PER_TRYTE,
            actual: trits.len(),
        });
    }
    let mut trytes = String::with_capacity(trits.len() / TRITS_PER_TRYTE);
    for chunk in trits.chunks_exact(TRITS_PER_TRYTE) {
        trytes.push(trits_to_tryte(&[chunk[0], chunk[1], chunk[2]])?);
    }
    Ok(trytes)
}

/// Interpret a trit sequence as a little-endian balanced-ternary integer.
pub fn value_from_trits(trits: &[i8]) -> i128 {
    trits
        .iter()
        .rev()
        .fold(0i128, |acc, &trit| acc * 3 + trit as i128)
}

/// Encode an integer as `length` little-endian balanced trits.
///
/// The value must fit: `|value| <= (3^length - 1) / 2`.
pub fn trits_from_value(value: i64, length: usize) -> TypeResult<Vec<i8>> {
    let mut trits = vec![0i8; length];
    let mut remainder = value;
    for trit in trits.iter_mut() {
        if remainder == 0 {
            break;
        }
        let mut digit = (remainder % 3) as i8;
        remainder /= 3;
        if digit > 1 {
            digit -= 3;
            remainder += 1;
        } else if digit < -1 {
            digit += 3;
            remainder -= 1;
        }
        *trit = digit;
    }
    if remainder != 0 {
        return Err(TypeError::ValueOutOfRange {
            field: "trits",
            value: value as i128,
        });
    }
    Ok(trits)
}

fn balanced_digits(value: i8) -> [i8; 3] {
    let mut digits = [0i8; 3];
    let mut remainder = value;
    for digit in digits.iter_mut() {
        let mut d = remainder % 3;
        remainder /= 3;
        if d > 1 {
            d -= 3;
            remainder += 1;
        } else if d < -1 {
            d += 3;
            remainder -= 1;
        }
        *digit = d;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_tryte_is_all_zero_trits() {
        assert_eq!(tryte_to_trits('9').unwrap(), [0, 0, 0]);
    }

    #[test]
    fn known_tryte_encodings() {
        assert_eq!(tryte_to_trits('A').unwrap(), [1, 0, 0]);
        assert_eq!(tryte_to_trits('B').unwrap(), [-1, 1, 0]);
        assert_eq!(tryte_to_trits('M').unwrap(), [1, 1, 1]);
        assert_eq!(tryte_to_trits('N').unwrap(), [-1, -1, -1]);
        assert_eq!(tryte_to_trits('Z').unwrap(), [-1, 0, 0]);
    }

    #[test]
    fn invalid_tryte_rejected() {
        assert_eq!(tryte_to_trits('a').unwrap_err(), TypeError::InvalidTryte('a'));
        assert_eq!(tryte_to_trits('0').unwrap_err(), TypeError::InvalidTryte('0'));
    }

    #[test]
    fn tryte_roundtrip_full_alphabet() {
        for tryte in TRYTE_ALPHABET.chars() {
            let trits = tryte_to_trits(tryte).unwrap();
            assert_eq!(trits_to_tryte(&trits).unwrap(), tryte);
        }
    }

    #[test]
    fn trytes_string_roundtrip() {
        let trytes = "AB9CZ";
        let trits = trits_from_trytes(trytes).unwrap();
        assert_eq!(trits.len(), 15);
        assert_eq!(trytes_from_trits(&trits).unwrap(), trytes);
    }

    #[test]
    fn non_multiple_of_three_rejected() {
        let err = trytes_from_trits(&[1, 0]).unwrap_err();
        assert!(matches!(err, TypeError::InvalidLength { .. }));
    }

    #[test]
    fn value_decoding() {
        // 'A' = 1, 'B' = 2 in the low tryte
        assert_eq!(value_from_trits(&[1, 0, 0]), 1);
        assert_eq!(value_from_trits(&[-1, 1, 0]), 2);
        assert_eq!(value_from_trits(&[0, 0, 0]), 0);
        assert_eq!(value_from_trits(&[-1, 0, 0]), -1);
    }

    #[test]
    fn value_encoding_roundtrip() {
        for value in [-1_000_000i64, -14, -1, 0, 1, 13, 14, 1_000_000] {
            let trits = trits_from_value(value, 27).unwrap();
            assert_eq!(value_from_trits(&trits), value as i128);
        }
    }

    #[test]
    fn max_timestamp_fits_27_trits() {
        let trits = trits_from_value(crate::constants::MAX_TIMESTAMP_VALUE, 27).unwrap();
        assert_eq!(
            value_from_trits(&trits),
            crate::constants::MAX_TIMESTAMP_VALUE as i128
        );
    }

    #[test]
    fn overflowing_value_rejected() {
        // 3^3 = 27 does not fit 3 trits (max is 13)
        assert!(trits_from_value(14, 3).is_err());
        assert!(trits_from_value(13, 3).is_ok());
    }

    proptest! {
        #[test]
        fn prop_value_roundtrip(value in -3_812_798_742_493i64..=3_812_798_742_493) {
            let trits = trits_from_value(value, 27).unwrap();
            prop_assert_eq!(value_from_trits(&trits), value as i128);
        }

        #[test]
        fn prop_trytes_roundtrip(trytes in "[9A-Z]{0,81}") {
            let trits = trits_from_trytes(&trytes).unwrap();
            prop_assert_eq!(trytes_from_trits(&trits).unwrap(), trytes);
        }
    }
}
