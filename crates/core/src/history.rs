use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Seconds of history kept per metric.
pub const HISTORY_LEN: usize = 60;

/// Fixed-capacity rolling history of samples that feeds the line charts.
///
/// Always holds exactly `capacity` values: the buffer starts zero-filled and
/// every push evicts the oldest value, so chart x-axes never change length.
///
/// The sampler thread pushes while the UI thread snapshots.  The lock is held
/// only for the O(1) push or the copy, so a reader sees either the pre- or the
/// post-push state and never a torn element.
#[derive(Debug)]
pub struct History {
    samples:  Mutex<VecDeque<f32>>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: Mutex::new(std::iter::repeat(0.0).take(capacity).collect()),
            capacity,
        }
    }

    /// Push a new sample, evicting the oldest.
    ///
    /// Non-finite values are stored as 0 so plotting never sees NaN.
    pub fn push(&self, value: f32) {
        if self.capacity == 0 {
            return;
        }
        let value = if value.is_finite() { value } else { 0.0 };

        let mut samples = self.lock();
        if samples.len() == self.capacity {
            samples.pop_front();
        }
        samples.push_back(value);
    }

    /// Copy of the current contents, oldest first.  Length is always `capacity`.
    #[must_use]
    pub fn snapshot(&self) -> Vec<f32> {
        self.lock().iter().copied().collect()
    }

    /// Most recently pushed value (0 before the first push).
    #[must_use]
    pub fn latest(&self) -> f32 {
        self.lock().back().copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<f32>> {
        // A panicking pusher cannot leave a half-written f32 behind.
        self.samples.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(HISTORY_LEN)
    }
}

/// The three rolling histories plotted by the charts.
#[derive(Debug, Default)]
pub struct Histories {
    pub cpu: History,
    pub mem: History,
    /// Network throughput in KiB/s.
    pub net: History,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn starts_zero_filled() {
        let history = History::new(HISTORY_LEN);
        let snapshot = history.snapshot();
        assert_eq!(snapshot.len(), HISTORY_LEN);
        assert!(snapshot.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn length_is_constant_for_any_push_count() {
        let history = History::new(5);
        for n in 0..20 {
            assert_eq!(history.snapshot().len(), 5, "after {n} pushes");
            history.push(n as f32);
        }
    }

    #[test]
    fn keeps_last_capacity_values_in_push_order() {
        let history = History::new(4);
        for v in 1..=7 {
            history.push(v as f32);
        }
        assert_eq!(history.snapshot(), vec![4.0, 5.0, 6.0, 7.0]);
        assert_eq!(history.latest(), 7.0);
    }

    #[test]
    fn partial_fill_keeps_leading_zeros() {
        let history = History::new(4);
        history.push(9.0);
        history.push(3.0);
        assert_eq!(history.snapshot(), vec![0.0, 0.0, 9.0, 3.0]);
    }

    #[test]
    fn non_finite_values_stored_as_zero() {
        let history = History::new(2);
        history.push(f32::NAN);
        history.push(f32::INFINITY);
        assert_eq!(history.snapshot(), vec![0.0, 0.0]);
    }

    #[test]
    fn zero_capacity_is_inert() {
        let history = History::new(0);
        history.push(1.0);
        assert!(history.snapshot().is_empty());
    }

    #[test]
    fn concurrent_push_and_snapshot_never_tear() {
        let history = Arc::new(History::new(HISTORY_LEN));
        let writer = {
            let history = Arc::clone(&history);
            std::thread::spawn(move || {
                for _ in 0..10_000 {
                    history.push(42.0);
                }
            })
        };

        for _ in 0..1_000 {
            let snapshot = history.snapshot();
            assert_eq!(snapshot.len(), HISTORY_LEN);
            assert!(snapshot.iter().all(|v| *v == 0.0 || *v == 42.0));
        }

        writer.join().unwrap();
        assert!(history.snapshot().iter().all(|v| *v == 42.0));
    }
}
