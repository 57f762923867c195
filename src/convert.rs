//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Conversions between `SparseInteger` and a conventional arbitrary-precision
//! integer (`rug::Integer`), plus decimal string formatting/parsing. Used
//! only for testing and debugging: values of real interest here almost never
//! fit into a conventional big integer at all.

use crate::error::{TowerError, TowerResult};
use crate::int::SparseInteger;
use rug::Integer;

impl SparseInteger {
    /// Converts to a `rug::Integer`.
    ///
    /// Fails with `TowerError::TooLargeForBigInt` unless every position's
    /// numeric value fits into a signed 32-bit integer (i.e. unless the
    /// value itself is small enough to plausibly live in a conventional
    /// big integer in the first place).
    pub fn to_big_int(&self) -> TowerResult<Integer> {
        match self {
            SparseInteger::Small(word) => Ok(Integer::from(*word)),
            SparseInteger::Large(positions) => {
                let mut result = Integer::new();
                for p in positions.iter() {
                    // A position that is itself Large is astronomically out
                    // of i32 range; reject before trying to read its word.
                    let word = p.as_u64().ok_or(TowerError::TooLargeForBigInt)?;
                    let exponent =
                        i32::try_from(word).map_err(|_| TowerError::TooLargeForBigInt)?;
                    let mut term = Integer::from(1u32);
                    term <<= exponent as u32;
                    result += term;
                }
                Ok(result)
            }
        }
    }

    /// Builds a `SparseInteger` from a `rug::Integer`.
    ///
    /// Fails with `TowerError::NegativeValue` if `value` is negative.
    pub fn try_from_big_int(value: &Integer) -> TowerResult<SparseInteger> {
        if value.cmp0() == std::cmp::Ordering::Less {
            return Err(TowerError::NegativeValue);
        }
        if let Some(word) = value.to_u64() {
            return Ok(SparseInteger::Small(word));
        }
        let mut positions = Vec::new();
        for bit in 0..value.significant_bits() {
            if value.get_bit(bit) {
                positions.push(SparseInteger::Small(bit as u64));
            }
        }
        Ok(SparseInteger::from_sorted_positions(positions))
    }

    /// Formats this value as an invariant (culture-independent) decimal
    /// string. Only meaningful for values that fit a conventional big
    /// integer; see `to_big_int`.
    pub fn to_decimal_string(&self) -> TowerResult<String> {
        Ok(self.to_big_int()?.to_string())
    }

    /// Parses a non-negative decimal integer literal.
    ///
    /// Fails with `TowerError::ParseError` if `s` is not a valid
    /// non-negative integer literal, or `TowerError::NegativeValue` if it
    /// parses but is negative.
    pub fn from_decimal_str(s: &str) -> TowerResult<SparseInteger> {
        let value: Integer = s
            .parse()
            .map_err(|_| TowerError::ParseError(s.to_string()))?;
        SparseInteger::try_from_big_int(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_small() {
        for word in [0u64, 1, 2, 64, 1000, u64::MAX] {
            let x = SparseInteger::Small(word);
            let big = x.to_big_int().unwrap();
            assert_eq!(big, Integer::from(word));
            let back = SparseInteger::try_from_big_int(&big).unwrap();
            assert_eq!(back, x);
        }
    }

    #[test]
    fn test_round_trip_large_but_big_int_representable() {
        // (2^64) is Large([64]) but still fits comfortably in a rug::Integer.
        let x = SparseInteger::exp2(&SparseInteger::Small(64));
        let big = x.to_big_int().unwrap();
        assert_eq!(big, Integer::from(1u32) << 64u32);
        let back = SparseInteger::try_from_big_int(&big).unwrap();
        assert_eq!(back, x);
    }

    #[test]
    fn test_decimal_round_trip() {
        let x = SparseInteger::exp2(&SparseInteger::Small(100));
        let s = x.to_decimal_string().unwrap();
        let back = SparseInteger::from_decimal_str(&s).unwrap();
        assert_eq!(back, x);
    }

    #[test]
    fn test_parse_error_on_garbage() {
        assert_eq!(
            SparseInteger::from_decimal_str("not a number"),
            Err(TowerError::ParseError("not a number".to_string()))
        );
    }

    #[test]
    fn test_negative_value_rejected() {
        let negative = Integer::from(-5);
        assert_eq!(
            SparseInteger::try_from_big_int(&negative),
            Err(TowerError::NegativeValue)
        );
        assert_eq!(
            SparseInteger::from_decimal_str("-5"),
            Err(TowerError::NegativeValue)
        );
    }

    #[test]
    fn test_too_large_for_big_int() {
        // A position that itself doesn't fit an i32 makes the whole value
        // inconvertible, even though the SparseInteger representation
        // handles it fine.
        let huge_position = SparseInteger::exp2(&SparseInteger::Small(40)); // 2^(2^40)-ish exponent
        let x = SparseInteger::exp2(&huge_position);
        assert_eq!(x.to_big_int(), Err(TowerError::TooLargeForBigInt));
    }
}
