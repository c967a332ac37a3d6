//! Bounded counter used to number generated items

use portalkit_core::limits::DEFAULT_INDEX_UPPER;
use portalkit_core::{Error, Result};

/// Counter yielding `pos + 1` on each step while `pos <= upper`
///
/// With the defaults it yields `1..=upper + 1`.
///
/// ```
/// use portalkit_site::index_iter::IndexIterator;
///
/// let mut it = IndexIterator::new(2, 0);
/// assert_eq!(it.next_index().unwrap(), 1);
/// assert_eq!(it.by_ref().collect::<Vec<_>>(), vec![2, 3]);
/// assert!(it.next_index().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexIterator {
    upper: u64,
    pos: u64,
}

impl Default for IndexIterator {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_UPPER, 0)
    }
}

impl IndexIterator {
    /// Counter starting after `pos`
    pub fn new(upper: u64, pos: u64) -> Self {
        Self { upper, pos }
    }

    /// Last value handed out, or the starting position
    pub fn pos(&self) -> u64 {
        self.pos
    }

    /// Upper bound
    pub fn upper(&self) -> u64 {
        self.upper
    }

    /// Advance and return the new position.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` once the position passed `upper`, or
    /// when the position cannot grow any further.
    pub fn next_index(&mut self) -> Result<u64> {
        let exhausted = || Error::invalid_input("Reached upper bounds");
        if self.pos > self.upper {
            return Err(exhausted());
        }
        self.pos = self.pos.checked_add(1).ok_or_else(exhausted)?;
        Ok(self.pos)
    }
}

impl Iterator for IndexIterator {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.next_index().ok()
    }
}
