use std::collections::BinaryHeap;

use super::{Selector, Strategy};
use crate::error::{Error, Result};

/// Returns the `n`-th smallest (1-based) element of `data` with a max-heap capped at `n`.
///
/// After each element the heap holds the `n` smallest values seen so far, so once the
/// pass is done its top is the answer. `data` is only read.
///
/// # Complexity
/// * Time: O(M log N)
/// * Space: O(N)
///
/// # Errors
/// * `InvalidArgument` if `n` is zero or larger than `data.len()`
///
/// # Examples
/// ```
/// use nth_smallest::cs::select::bounded_heap_select;
///
/// assert_eq!(bounded_heap_select(&[5, 1, 1, 3], 2).unwrap(), 1);
/// ```
pub fn bounded_heap_select<T: Ord + Copy>(data: &[T], n: usize) -> Result<T> {
    if n == 0 || n > data.len() {
        return Err(Error::invalid_argument(format!(
            "rank out of range: 1..{}",
            data.len()
        )));
    }

    let mut heap = BinaryHeap::with_capacity(n);
    for &x in data {
        if heap.len() < n {
            heap.push(x);
        } else if let Some(mut top) = heap.peek_mut() {
            if x < *top {
                // Replacing through PeekMut sifts down on drop, same as pop + push.
                *top = x;
            }
        }
    }

    match heap.peek() {
        Some(&top) => Ok(top),
        None => Err(Error::invariant_violation("bounded heap empty after pass")),
    }
}

/// Max-heap strategy. Stateless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundedHeapSelect;

impl BoundedHeapSelect {
    pub fn new() -> Self {
        BoundedHeapSelect
    }
}

impl<T: Ord + Copy> Selector<T> for BoundedHeapSelect {
    fn select(&self, data: &[T], n: usize) -> Result<T> {
        bounded_heap_select(data, n)
    }

    fn strategy(&self) -> Strategy {
        Strategy::BoundedHeap
    }
}
