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

//! `a002845` enumerates [OEIS A002845](https://oeis.org/A002845): the number
//! of distinct numerical values of `2^2^...^2` over all bracketings of `n`
//! twos.
//!
//! The values involved grow as power towers — already past modest `n` they
//! have more binary digits than fit in memory bit-by-bit — so this crate
//! never materializes them densely. Instead, [`SparseInteger`] represents a
//! non-negative integer by the positions of its 1-bits, recursively, and
//! [`Enumerator`] combines these sparse values under exponentiation,
//! deduplicating to compute `a(n)`.
//!
//! # Example
//! ```
//! use a002845::Enumerator;
//!
//! let mut enumerator = Enumerator::new();
//! assert_eq!(enumerator.a(1).unwrap(), 1); // just "2"
//! assert_eq!(enumerator.a(4).unwrap(), 2); // 2^2^2^2 has 2 distinct values
//!
//! let first_five: Vec<usize> = Enumerator::new().sequence().take(5).collect();
//! assert_eq!(first_five, vec![1, 1, 1, 2, 4]);
//! ```

extern crate fnv;

mod convert;
pub mod enumerator;
pub mod error;
pub mod int;
mod sorted_array;

pub use crate::enumerator::{Enumerator, Sequence};
pub use crate::error::{TowerError, TowerResult};
pub use crate::int::SparseInteger;
