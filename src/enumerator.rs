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

//! Lazy, memoized enumeration of distinct values of size-`n` power-tower
//! expressions, and `a(n)` = the cardinality of that set.

use crate::error::{TowerError, TowerResult};
use crate::int::SparseInteger;
use fnv::FnvBuildHasher;
use std::collections::HashMap;
use std::collections::HashSet;

type ValueSet = HashSet<SparseInteger, FnvBuildHasher>;

/// Owns the size -> value-set cache for A002845. Not thread-safe; one
/// instance per computation, as spec'd: there is no shared mutable state
/// across instances.
pub struct Enumerator {
    cache: HashMap<usize, ValueSet>,
}

impl Enumerator {
    /// Builds a fresh enumerator, seeded with the size-1 set `{2}`.
    pub fn new() -> Enumerator {
        let mut cache = HashMap::new();
        let mut seed: ValueSet = HashSet::default();
        seed.insert(SparseInteger::Small(2));
        cache.insert(1, seed);
        Enumerator { cache }
    }

    /// Returns the set of distinct values of size-`n` power-tower
    /// expressions, computing and caching it (and every size below it that
    /// isn't cached yet) on first request.
    ///
    /// Fails with `TowerError::InvalidIndex` for `n <= 0`.
    pub fn values_of_size(&mut self, n: usize) -> TowerResult<&ValueSet> {
        if n == 0 {
            return Err(TowerError::InvalidIndex(0));
        }
        if !self.cache.contains_key(&n) {
            // Ensure every smaller size this split needs is cached first, so
            // the combination pass below can borrow from `self.cache`
            // directly instead of cloning whole value sets per split.
            for i in 1..n {
                self.values_of_size(i)?;
                self.values_of_size(n - i)?;
            }
            let mut values: ValueSet = HashSet::default();
            for i in 1..n {
                let bases = self.cache.get(&i).expect("ensured above");
                let exponents = self.cache.get(&(n - i)).expect("ensured above");
                for base in bases {
                    for exponent in exponents {
                        // Every base produced here descends from the size-1
                        // seed {2} through `Power`, so it is always an exact
                        // power of two; the precondition holds inductively.
                        let value = base
                            .power(exponent)
                            .expect("base is an exact power of two by construction");
                        values.insert(value);
                    }
                }
            }
            log::trace!("computed value set for size {n}: {} distinct values", values.len());
            self.cache.insert(n, values);
        }
        Ok(self.cache.get(&n).expect("just inserted or already present"))
    }

    /// `a(n)`: the number of distinct values of size-`n` power-tower
    /// expressions. Fails with `TowerError::InvalidIndex` for `n <= 0`.
    pub fn a(&mut self, n: i64) -> TowerResult<usize> {
        if n <= 0 {
            return Err(TowerError::InvalidIndex(n));
        }
        Ok(self.values_of_size(n as usize)?.len())
    }

    /// An unbounded, lazy, restartable iterator yielding `a(1), a(2), ...`,
    /// benefiting from this enumerator's cache as it advances.
    pub fn sequence(self) -> Sequence {
        Sequence {
            enumerator: self,
            next_n: 1,
        }
    }
}

impl Default for Enumerator {
    fn default() -> Self {
        Enumerator::new()
    }
}

/// Unbounded iterator over `a(1), a(2), ...`. Restart by constructing a new
/// `Enumerator` and calling `sequence()` again.
pub struct Sequence {
    enumerator: Enumerator,
    next_n: i64,
}

impl Iterator for Sequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let n = self.next_n;
        self.next_n += 1;
        // InvalidIndex cannot occur: next_n starts at 1 and only increases.
        Some(
            self.enumerator
                .a(n)
                .expect("sequence index is always >= 1"),
        )
    }
}
