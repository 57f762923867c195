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

//! `SparseInteger`: an immutable non-negative integer capable of representing
//! tower-of-two magnitudes, stored by the positions of its set bits rather
//! than the bits themselves.
//!
//! A value is either `Small` (fits an unsigned 64-bit word) or `Large` (a
//! strictly increasing sequence of distinct bit positions, each position
//! itself a `SparseInteger`). A value that fits `Small` is always stored
//! that way — this is the single invariant that makes `Small < Large`
//! ordering and cheap equality sound. See `ord.rs` for comparison/hashing
//! and `arith.rs` for the arithmetic operations.

pub mod arith;
pub mod ord;

use std::rc::Rc;

/// An immutable non-negative tower-of-two-scale integer.
///
/// Cloning is cheap: `Small` is `Copy`-like, `Large` clones an `Rc` handle
/// to a shared positions slice.
///
/// Both variants are `#[non_exhaustive]`: the only sanctioned way to build a
/// value from a positions sequence is `from_sorted_positions`, the single
/// construction funnel that keeps the Small/Large dichotomy canonical (see
/// `from_sorted_positions` below). Constructing a variant directly bypasses
/// that funnel and can produce a value whose `Eq`/`Ord`/`Hash` (int/ord.rs)
/// disagree with its true numeric value.
#[derive(Clone, Debug)]
pub enum SparseInteger {
    /// Value fits into a 64-bit word, stored verbatim.
    #[non_exhaustive]
    Small(u64),
    /// Value is `sum(2^p for p in positions)`, `positions` strictly
    /// increasing, non-empty, never representable as `Small`.
    #[non_exhaustive]
    Large(Rc<[SparseInteger]>),
}

impl SparseInteger {
    /// Returns the additive identity.
    #[inline]
    pub fn zero() -> SparseInteger {
        SparseInteger::Small(0)
    }

    /// True iff this value fits into a 64-bit word and is stored as `Small`.
    #[inline]
    pub fn is_small(&self) -> bool {
        matches!(self, SparseInteger::Small(_))
    }

    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        matches!(self, SparseInteger::Small(0))
    }

    #[inline]
    pub(crate) fn is_one(&self) -> bool {
        matches!(self, SparseInteger::Small(1))
    }

    /// Returns the stored word if this value `is_small()`.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            SparseInteger::Small(w) => Some(*w),
            SparseInteger::Large(_) => None,
        }
    }

    /// Returns the sorted sequence of positions of the 1-bits of this value.
    ///
    /// For `Small`, the sequence is computed on demand from the stored word
    /// via Hamming-weight-sized allocation and a bit scan. For `Large`, the
    /// shared slice is handed back directly (an `Rc` clone, not a copy).
    pub fn positions(&self) -> Rc<[SparseInteger]> {
        match self {
            SparseInteger::Large(positions) => Rc::clone(positions),
            SparseInteger::Small(word) => {
                let mut remaining = *word;
                let mut out = Vec::with_capacity(remaining.count_ones() as usize);
                while remaining != 0 {
                    let bit = remaining.trailing_zeros() as u64;
                    out.push(SparseInteger::Small(bit));
                    remaining &= remaining - 1;
                }
                out.into()
            }
        }
    }

    /// Builds a value from a positions sequence that the caller guarantees is
    /// already strictly sorted, duplicate-free, and canonical in its
    /// elements. Downcasts to `Small` when the sequence's maximum position is
    /// itself `Small` and less than 64 — the single construction funnel that
    /// keeps `Small`/`Large` canonical, per the representation invariants.
    pub(crate) fn from_sorted_positions(positions: Vec<SparseInteger>) -> SparseInteger {
        debug_assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "positions must be strictly increasing"
        );
        let Some(max) = positions.last() else {
            return SparseInteger::Small(0);
        };
        if let SparseInteger::Small(max_word) = max {
            if *max_word < 64 {
                let mut word: u64 = 0;
                for p in &positions {
                    let bit = p.as_u64().expect("max is small, so all positions are small");
                    word |= 1u64 << bit;
                }
                return SparseInteger::Small(word);
            }
        }
        SparseInteger::Large(positions.into())
    }
}

impl Default for SparseInteger {
    fn default() -> Self {
        SparseInteger::zero()
    }
}

impl From<u64> for SparseInteger {
    fn from(word: u64) -> Self {
        SparseInteger::Small(word)
    }
}

impl From<u32> for SparseInteger {
    fn from(word: u32) -> Self {
        SparseInteger::Small(word as u64)
    }
}
