use std::sync::{Mutex, PoisonError};

use log::{error, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::partition::randomized_partition;
use super::{Selector, Strategy};
use crate::error::{Error, Result};

/// Returns the `n`-th smallest (1-based) element of `data` using randomized quickselect.
///
/// The search runs on a private copy, so `data` is left untouched. Pivots are drawn
/// from `rng`, which makes the pivot sequence reproducible for a seeded generator.
///
/// # Complexity
/// * Time: expected O(M), worst case O(M^2)
/// * Space: O(M) for the working copy
///
/// # Errors
/// * `InvariantViolation` if `n` does not address an element of `data`
///
/// # Examples
/// ```
/// use nth_smallest::cs::select::randomized_quickselect;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(42);
/// let data = [7, 2, 9, 4, 1];
/// assert_eq!(randomized_quickselect(&data, 3, &mut rng).unwrap(), 4);
/// assert_eq!(data, [7, 2, 9, 4, 1]);
/// ```
pub fn randomized_quickselect<T, R>(data: &[T], n: usize, rng: &mut R) -> Result<T>
where
    T: Ord + Copy,
    R: Rng + ?Sized,
{
    let mut buf = data.to_vec();
    let k = n.wrapping_sub(1);
    let mut left = 0;
    let mut right = buf.len().wrapping_sub(1);

    loop {
        if buf.is_empty() || left > right || right >= buf.len() || k < left || k > right {
            let msg = format!(
                "range [{left}, {right}] with target {k} outside buffer of length {}",
                buf.len()
            );
            error!("{msg}");
            return Err(Error::invariant_violation(msg));
        }

        if left == right {
            return Ok(buf[left]);
        }

        let i = randomized_partition(&mut buf, left, right, rng);
        trace!("partitioned [{left}, {right}], pivot settled at {i}");

        if k == i {
            return Ok(buf[i]);
        } else if k < i {
            right = i - 1;
        } else {
            left = i + 1;
        }
    }
}

/// Quickselect strategy carrying its own pivot generator.
///
/// The generator sits behind a mutex so one selector can serve callers on several
/// threads; each call still works on its own copy of the data.
#[derive(Debug)]
pub struct RandomizedQuickSelect<R = ChaCha20Rng> {
    rng: Mutex<R>,
}

impl RandomizedQuickSelect<ChaCha20Rng> {
    /// Creates a selector seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(ChaCha20Rng::from_entropy())
    }

    /// Creates a selector with a fixed seed, for reproducible pivot sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl Default for RandomizedQuickSelect<ChaCha20Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomizedQuickSelect<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl<T, R> Selector<T> for RandomizedQuickSelect<R>
where
    T: Ord + Copy,
    R: Rng + Send,
{
    fn select(&self, data: &[T], n: usize) -> Result<T> {
        // Generator state stays valid after a poisoning panic.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        randomized_quickselect(data, n, &mut *rng)
    }

    fn strategy(&self) -> Strategy {
        Strategy::RandomizedQuickSelect
    }
}
