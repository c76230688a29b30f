use std::sync::atomic::{AtomicUsize, Ordering};

// Shared cap on the number of fault lines across all workers.
// A claim is a single compare-and-increment, so the count can never pass `limit`
// no matter how many workers race for the last slot.
#[derive(Debug)]
pub struct FaultBudget {
    limit: usize,
    claimed: AtomicUsize,
}

impl FaultBudget {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            claimed: AtomicUsize::new(0),
        }
    }

    // Reserve the next slot. Returns its 0-based index, or None once exhausted.
    pub fn try_claim(&self) -> Option<usize> {
        self.claimed
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| {
                (n < self.limit).then_some(n + 1)
            })
            .ok()
    }

    pub fn claimed(&self) -> usize {
        self.claimed.load(Ordering::Relaxed)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn remaining(&self) -> usize {
        self.limit - self.claimed()
    }
}
