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

use thiserror::Error;

/// Errors produced at the boundary of the tower-integer core.
///
/// `DuplicateInsert` is an internal invariant breach; it is never expected to
/// reach a caller of this crate (see `sorted_array::insert_unique`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TowerError {
    /// `a(n)` was requested for `n <= 0`.
    #[error("invalid sequence index: {0} (must be >= 1)")]
    InvalidIndex(i64),

    /// `Log2`/`Power` called on a value that is not an exact power of two.
    #[error("value is not an exact power of two")]
    NotPowerOfTwo,

    /// A sorted-array `insert_unique` was asked to insert a value already present.
    #[error("duplicate insert into sorted array (internal invariant breach)")]
    DuplicateInsert,

    /// A `SparseInteger` has a position that does not fit in a signed 32-bit
    /// integer, so it cannot be converted to a conventional big integer.
    #[error("value too large to convert to a big integer")]
    TooLargeForBigInt,

    /// Conversion from a negative big integer was attempted.
    #[error("cannot convert a negative value to a SparseInteger")]
    NegativeValue,

    /// A decimal string was not a valid non-negative integer literal.
    #[error("not a valid non-negative decimal integer: {0:?}")]
    ParseError(String),
}

/// Result alias used throughout the crate.
pub type TowerResult<T> = std::result::Result<T, TowerError>;
