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

//! Pure helpers over strictly-sorted, duplicate-free `Vec<T>`s.
//!
//! These back `SparseInteger`'s position arrays: insertion/removal of a
//! single bit position during carrying and canonicalization.

use crate::error::TowerError;

/// Removes `x` from the sorted array `a`, if present.
///
/// Returns the new array and whether `x` was present. Uses binary search:
/// `O(log n)` comparisons, `O(n)` element moves on a hit.
pub fn remove<T: Ord + Clone>(a: &[T], x: &T) -> (Vec<T>, bool) {
    match a.binary_search(x) {
        Ok(idx) => {
            let mut out = Vec::with_capacity(a.len() - 1);
            out.extend_from_slice(&a[..idx]);
            out.extend_from_slice(&a[idx + 1..]);
            (out, true)
        }
        Err(_) => (a.to_vec(), false),
    }
}

/// Inserts `x` into the sorted array `a`, which must not already contain it.
///
/// Fails with `TowerError::DuplicateInsert` if `x` is already present; this
/// signals a broken caller invariant and should never be observed outside
/// this crate's own arithmetic code.
pub fn insert_unique<T: Ord + Clone>(a: &[T], x: T) -> Result<Vec<T>, TowerError> {
    match a.binary_search(&x) {
        Ok(_) => Err(TowerError::DuplicateInsert),
        Err(idx) => {
            let mut out = Vec::with_capacity(a.len() + 1);
            out.extend_from_slice(&a[..idx]);
            out.push(x);
            out.extend_from_slice(&a[idx..]);
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_present() {
        let a = vec![1, 3, 5, 7];
        let (out, present) = remove(&a, &5);
        assert!(present);
        assert_eq!(out, vec![1, 3, 7]);
    }

    #[test]
    fn test_remove_absent() {
        let a = vec![1, 3, 5, 7];
        let (out, present) = remove(&a, &4);
        assert!(!present);
        assert_eq!(out, a);
    }

    #[test]
    fn test_remove_empty() {
        let a: Vec<i32> = vec![];
        let (out, present) = remove(&a, &4);
        assert!(!present);
        assert!(out.is_empty());
    }

    #[test]
    fn test_remove_singleton() {
        let a = vec![9];
        let (out, present) = remove(&a, &9);
        assert!(present);
        assert!(out.is_empty());
    }

    #[test]
    fn test_insert_unique_middle() {
        let a = vec![1, 3, 7];
        let out = insert_unique(&a, 5).unwrap();
        assert_eq!(out, vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_insert_unique_ends() {
        let a = vec![3, 5];
        assert_eq!(insert_unique(&a, 1).unwrap(), vec![1, 3, 5]);
        assert_eq!(insert_unique(&a, 9).unwrap(), vec![3, 5, 9]);
    }

    #[test]
    fn test_insert_unique_empty() {
        let a: Vec<i32> = vec![];
        assert_eq!(insert_unique(&a, 4).unwrap(), vec![4]);
    }

    #[test]
    fn test_insert_duplicate_fails() {
        let a = vec![1, 3, 5];
        assert_eq!(insert_unique(&a, 3), Err(TowerError::DuplicateInsert));
    }
}
