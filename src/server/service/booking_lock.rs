//! Per-(salon, date) booking locks.
//!
//! Admission checks for overlapping appointments and then inserts. Two requests
//! for the same salon timeline must not interleave between those steps, so
//! every create or reschedule holds the lock for its salon and booking date
//! until its transaction commits.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

type LockKey = (i32, NaiveDate);

/// Registry of async locks keyed by salon and calendar date.
///
/// Cloning shares the registry. Entries no guard refers to are pruned on the
/// next acquisition, so the map only grows with concurrently booked days.
#[derive(Clone, Default)]
pub struct BookingLocks {
    locks: Arc<Mutex<HashMap<LockKey, Arc<Mutex<()>>>>>,
}

impl BookingLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to the timeline of `salon_id` on `date`.
    ///
    /// The lock is released when the returned guard is dropped.
    pub async fn acquire(&self, salon_id: i32, date: NaiveDate) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks
                .entry((salon_id, date))
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        lock.lock_owned().await
    }

    #[cfg(test)]
    async fn tracked(&self) -> usize {
        self.locks.lock().await.len()
    }
}
