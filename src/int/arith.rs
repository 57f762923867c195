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

//! Arithmetic on `SparseInteger`: increment, addition, multiplication, and
//! the power-of-two family (`Exp2`/`Log2`/`MulByExp2`/`Power`).
//!
//! All of these bottom out at the `Small` case; recursion through `Large`
//! positions is well-founded because a carried bit's position strictly
//! increases each time it cascades.

use super::SparseInteger;
use crate::error::{TowerError, TowerResult};
use crate::sorted_array;
use std::ops::{Add, Mul};

impl SparseInteger {
    /// Returns `self + 1`.
    pub fn plus_one(&self) -> SparseInteger {
        match self {
            SparseInteger::Small(word) => {
                if *word == u64::MAX {
                    SparseInteger::from_sorted_positions(vec![SparseInteger::Small(64)])
                } else {
                    SparseInteger::Small(word + 1)
                }
            }
            SparseInteger::Large(_) => {
                let positions = self.positions().to_vec();
                let zero = SparseInteger::Small(0);
                let (without_zero, bit0_set) = sorted_array::remove(&positions, &zero);
                if !bit0_set {
                    let with_zero = sorted_array::insert_unique(&without_zero, zero)
                        .expect("bit 0 confirmed absent by remove() above");
                    SparseInteger::from_sorted_positions(with_zero)
                } else {
                    // Cascading carry: reuse the general addition path rather
                    // than re-deriving carry propagation here.
                    let base = SparseInteger::from_sorted_positions(without_zero);
                    let carry_exponent = zero.plus_one(); // == Small(1)
                    let carry_value = SparseInteger::exp2(&carry_exponent);
                    base.add_to(&carry_value)
                }
            }
        }
    }

    /// Returns `self + other`.
    pub fn add_to(&self, other: &SparseInteger) -> SparseInteger {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        if let (SparseInteger::Small(a), SparseInteger::Small(b)) = (self, other) {
            if let Some(sum) = a.checked_add(*b) {
                return SparseInteger::Small(sum);
            }
        }
        // Iterate the shorter side's positions into the longer accumulator.
        let (mut acc, smaller) = if self.positions().len() >= other.positions().len() {
            (self.clone(), other.positions())
        } else {
            (other.clone(), self.positions())
        };
        for q in smaller.iter() {
            acc = acc.add_position(q.clone());
        }
        acc
    }

    /// Folds a single bit position `q` into `self`, carrying into the
    /// general addition path when `q` is already set.
    fn add_position(&self, q: SparseInteger) -> SparseInteger {
        let positions = self.positions().to_vec();
        let (without_q, present) = sorted_array::remove(&positions, &q);
        if !present {
            let with_q = sorted_array::insert_unique(&without_q, q)
                .expect("q confirmed absent by remove() above");
            SparseInteger::from_sorted_positions(with_q)
        } else {
            let base = SparseInteger::from_sorted_positions(without_q);
            let carry_exponent = q.plus_one();
            let carry_value = SparseInteger::exp2(&carry_exponent);
            base.add_to(&carry_value)
        }
    }

    /// Returns `self * other`.
    pub fn mul_by(&self, other: &SparseInteger) -> SparseInteger {
        if self.is_zero() || other.is_zero() {
            return SparseInteger::zero();
        }
        if self.is_one() {
            return other.clone();
        }
        if other.is_one() {
            return self.clone();
        }
        if let (SparseInteger::Small(a), SparseInteger::Small(b)) = (self, other) {
            if let Some(product) = a.checked_mul(*b) {
                return SparseInteger::Small(product);
            }
        }
        let mut acc = SparseInteger::zero();
        for q in other.positions().iter() {
            let term = self.mul_by_exp2(q);
            acc = acc.add_to(&term);
        }
        acc
    }

    /// Returns `self * 2^k`.
    pub fn mul_by_exp2(&self, k: &SparseInteger) -> SparseInteger {
        if self.is_zero() {
            return self.clone();
        }
        if k.is_zero() {
            return self.clone();
        }
        if let (SparseInteger::Small(x), SparseInteger::Small(kv)) = (self, k) {
            if *kv < 63 {
                let shifted = x << kv;
                if shifted >> kv == *x {
                    return SparseInteger::Small(shifted);
                }
            }
        }
        let shifted_positions: Vec<SparseInteger> =
            self.positions().iter().map(|p| p.add_to(k)).collect();
        SparseInteger::from_sorted_positions(shifted_positions)
    }

    /// Returns `2^exponent`.
    pub fn exp2(exponent: &SparseInteger) -> SparseInteger {
        if let SparseInteger::Small(e) = exponent {
            if *e < 64 {
                return SparseInteger::Small(1u64 << e);
            }
        }
        SparseInteger::from_sorted_positions(vec![exponent.clone()])
    }

    /// Returns `k` such that `self == 2^k`, failing if `self` is not an
    /// exact power of two.
    pub fn log2(&self) -> TowerResult<SparseInteger> {
        match self {
            SparseInteger::Small(word) => {
                if *word != 0 && (word & (word - 1)) == 0 {
                    Ok(SparseInteger::Small(word.trailing_zeros() as u64))
                } else {
                    Err(TowerError::NotPowerOfTwo)
                }
            }
            SparseInteger::Large(positions) => {
                if positions.len() == 1 {
                    Ok(positions[0].clone())
                } else {
                    Err(TowerError::NotPowerOfTwo)
                }
            }
        }
    }

    /// Returns `self^exponent`, requiring `self` to be an exact power of two.
    pub fn power(&self, exponent: &SparseInteger) -> TowerResult<SparseInteger> {
        let log = self.log2()?;
        let product = log.mul_by(exponent);
        Ok(SparseInteger::exp2(&product))
    }
}

impl Add for &SparseInteger {
    type Output = SparseInteger;
    fn add(self, rhs: &SparseInteger) -> SparseInteger {
        self.add_to(rhs)
    }
}

impl Mul for &SparseInteger {
    type Output = SparseInteger;
    fn mul(self, rhs: &SparseInteger) -> SparseInteger {
        self.mul_by(rhs)
    }
}

impl Add for SparseInteger {
    type Output = SparseInteger;
    fn add(self, rhs: SparseInteger) -> SparseInteger {
        self.add_to(&rhs)
    }
}

impl Mul for SparseInteger {
    type Output = SparseInteger;
    fn mul(self, rhs: SparseInteger) -> SparseInteger {
        self.mul_by(&rhs)
    }
}
