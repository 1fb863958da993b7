//! The population of worker threads the harness is expected to spawn.
//!
//! IDs are assigned contiguously from zero, so the expected set is `[0, count)`.

use std::ops::Range;

/// Worker count the harness runs with.
pub const DEFAULT_THREAD_COUNT: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedThreads {
    count: u64,
}

impl ExpectedThreads {
    pub fn new(count: u64) -> Self {
        Self { count }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn ids(&self) -> Range<u64> {
        0..self.count
    }

    pub fn contains(&self, id: u64) -> bool {
        id < self.count
    }
}

impl Default for ExpectedThreads {
    fn default() -> Self {
        Self::new(DEFAULT_THREAD_COUNT)
    }
}
