//! Validating front door to the selection strategies.
//!
//! ```rust
//! use nth_smallest::service::SelectionServiceBuilder;
//! use nth_smallest::cs::select::Strategy;
//!
//! let service = SelectionServiceBuilder::new()
//!     .strategy(Strategy::BoundedHeap)
//!     .build();
//! assert_eq!(service.find_nth_minimal(&[7, 2, 9, 4, 1], 3).unwrap(), 4);
//! ```

use log::debug;

use crate::cs::select::{BoundedHeapSelect, RandomizedQuickSelect, Selector, Strategy};
use crate::error::{Error, Result};

/// Checks that `data` is non-empty and `n` lies in `1..=data.len()`.
pub fn validate<T>(data: &[T], n: usize) -> Result<()> {
    if data.is_empty() {
        return Err(Error::invalid_argument("dataset must not be empty"));
    }
    if n == 0 || n > data.len() {
        return Err(Error::invalid_argument(format!(
            "rank out of range: 1..{}",
            data.len()
        )));
    }
    Ok(())
}

/// Builder for [`SelectionService`].
#[derive(Debug, Clone, Default)]
pub struct SelectionServiceBuilder {
    strategy: Strategy,
    seed: Option<u64>,
}

impl SelectionServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Fixes the pivot generator seed. Only the quickselect strategy draws randomness.
    /// If not called, the generator is seeded from OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> SelectionService {
        let selector: Box<dyn Selector<i64>> = match self.strategy {
            Strategy::BoundedHeap => Box::new(BoundedHeapSelect::new()),
            Strategy::RandomizedQuickSelect => match self.seed {
                Some(seed) => Box::new(RandomizedQuickSelect::with_seed(seed)),
                None => Box::new(RandomizedQuickSelect::new()),
            },
        };
        SelectionService { selector }
    }
}

/// Validates requests and dispatches them to the strategy chosen at construction.
///
/// The strategy never changes afterwards, and the service is shareable across threads.
pub struct SelectionService {
    selector: Box<dyn Selector<i64>>,
}

impl SelectionService {
    pub fn new(strategy: Strategy) -> Self {
        SelectionServiceBuilder::new().strategy(strategy).build()
    }

    /// Wraps an arbitrary selector, e.g. one with a custom generator.
    pub fn with_selector(selector: impl Selector<i64> + 'static) -> Self {
        Self {
            selector: Box::new(selector),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.selector.strategy()
    }

    /// Returns the `n`-th smallest (1-based) value of `data`.
    ///
    /// # Errors
    /// * `InvalidArgument` for an empty dataset or a rank outside `1..=data.len()`
    /// * `InvariantViolation` if the strategy detects an internal defect
    pub fn find_nth_minimal(&self, data: &[i64], n: usize) -> Result<i64> {
        validate(data, n)?;
        debug!(
            "selecting rank {n} of {} values with {}",
            data.len(),
            self.strategy()
        );
        self.selector.select(data, n)
    }
}

impl Default for SelectionService {
    fn default() -> Self {
        SelectionServiceBuilder::new().build()
    }
}

impl std::fmt::Debug for SelectionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionService")
            .field("strategy", &self.strategy())
            .finish()
    }
}
