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

//! Equality, total ordering, and hashing for `SparseInteger`, all defined by
//! numeric value rather than representation.

use super::SparseInteger;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

impl PartialEq for SparseInteger {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SparseInteger::Small(a), SparseInteger::Small(b)) => a == b,
            (SparseInteger::Large(a), SparseInteger::Large(b)) => {
                Rc::ptr_eq(a, b) || (a.len() == b.len() && a.iter().eq(b.iter()))
            }
            // A Small value is never numerically equal to a Large one: the
            // canonical form guarantees every Large value exceeds u64::MAX.
            _ => false,
        }
    }
}

impl Eq for SparseInteger {}

impl PartialOrd for SparseInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SparseInteger {
    /// Small values compare by word. A Small value is always strictly less
    /// than a Large one. Two Large values compare their positions from the
    /// highest index downward: the first differing position (compared by
    /// this same ordering, recursively) decides; if one sequence is a
    /// suffix-aligned prefix of the other, the longer sequence — which has
    /// strictly more bits set — is greater.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SparseInteger::Small(a), SparseInteger::Small(b)) => a.cmp(b),
            (SparseInteger::Small(_), SparseInteger::Large(_)) => Ordering::Less,
            (SparseInteger::Large(_), SparseInteger::Small(_)) => Ordering::Greater,
            (SparseInteger::Large(a), SparseInteger::Large(b)) => {
                if Rc::ptr_eq(a, b) {
                    return Ordering::Equal;
                }
                let mut i = a.len();
                let mut j = b.len();
                while i > 0 && j > 0 {
                    i -= 1;
                    j -= 1;
                    match a[i].cmp(&b[j]) {
                        Ordering::Equal => continue,
                        other => return other,
                    }
                }
                i.cmp(&j)
            }
        }
    }
}

impl Hash for SparseInteger {
    /// Small values hash the stored word. Large values combine the hashes of
    /// all positions in order — order-sensitive, which is fine because the
    /// positions sequence is canonical (no two distinct canonical sequences
    /// represent the same value).
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            SparseInteger::Small(word) => {
                state.write_u8(0);
                word.hash(state);
            }
            SparseInteger::Large(positions) => {
                state.write_u8(1);
                for p in positions.iter() {
                    p.hash(state);
                }
            }
        }
    }
}

impl PartialEq<u64> for SparseInteger {
    fn eq(&self, other: &u64) -> bool {
        matches!(self, SparseInteger::Small(w) if w == other)
    }
}

impl PartialOrd<u64> for SparseInteger {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        match self {
            SparseInteger::Small(w) => Some(w.cmp(other)),
            SparseInteger::Large(_) => Some(Ordering::Greater),
        }
    }
}
