//! Order-statistic selection: the `n`-th smallest element of an unsorted slice.
//!
//! Two interchangeable strategies implement [`Selector`]:
//!
//! * [`BoundedHeapSelect`] keeps a max-heap of at most `n` elements. O(M log N) time,
//!   O(N) space, one read-only pass.
//! * [`RandomizedQuickSelect`] partitions a private copy around random pivots.
//!   Expected O(M) time, O(M^2) worst case, O(M) space.
//!
//! Ranks are 1-based throughout. With duplicates, any occurrence of the value at
//! that rank is an acceptable answer since only values are returned.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub mod bounded_heap;
pub mod partition;
pub mod randomized_quickselect;

pub use bounded_heap::{bounded_heap_select, BoundedHeapSelect};
pub use partition::{partition, randomized_partition};
pub use randomized_quickselect::{randomized_quickselect, RandomizedQuickSelect};

/// Common contract of the selection strategies.
pub trait Selector<T: Ord + Copy>: Send + Sync {
    /// Returns the `n`-th smallest (1-based) element of `data`.
    fn select(&self, data: &[T], n: usize) -> Result<T>;

    /// The strategy this selector implements.
    fn strategy(&self) -> Strategy;
}

/// Which selection algorithm a service delegates to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    BoundedHeap,
    #[default]
    RandomizedQuickSelect,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::BoundedHeap, Strategy::RandomizedQuickSelect];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::BoundedHeap => "heap",
            Strategy::RandomizedQuickSelect => "quickselect",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "unknown strategy '{s}', expected 'heap' or 'quickselect'"
                ))
            })
    }
}
