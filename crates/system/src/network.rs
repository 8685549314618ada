/// Cumulative network byte counter, remembered between cycles so each sample
/// reports only the bytes moved since the previous one.
///
/// Owned by the sampler alone.
#[derive(Debug, Default)]
pub struct NetCounter {
    prev_total: Option<u64>,
}

impl NetCounter {
    /// Seed with the counter value read before the first cycle, if any.
    pub fn new(initial: Option<u64>) -> Self {
        Self { prev_total: initial }
    }

    /// Record `curr_total` and return KiB moved since the previous reading.
    ///
    /// The first reading after a gap (no previous value) reports 0.
    pub fn update(&mut self, curr_total: u64) -> f32 {
        let kbps = self.prev_total.map_or(0.0, |prev| rate_kbps(prev, curr_total));
        self.prev_total = Some(curr_total);
        kbps
    }

    /// Forget the previous reading after a failed read, so the next success
    /// doesn't report two cycles' worth of traffic as one.
    pub fn reset(&mut self) {
        self.prev_total = None;
    }
}

/// KiB transferred between two cumulative totals.  Counter resets (an
/// interface vanishing, a wrap) clamp to 0 instead of going negative.
pub fn rate_kbps(prev_total: u64, curr_total: u64) -> f32 {
    curr_total.saturating_sub(prev_total) as f32 / 1024.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_from_totals() {
        assert_eq!(rate_kbps(1_000_000, 1_025_600), 25.0);
    }

    #[test]
    fn counter_reset_clamps_to_zero() {
        assert_eq!(rate_kbps(1_025_600, 1_000_000), 0.0);
    }

    #[test]
    fn counter_tracks_previous_total() {
        let mut counter = NetCounter::new(Some(1_000_000));
        assert_eq!(counter.update(1_025_600), 25.0);
        assert_eq!(counter.update(1_025_600), 0.0);
        assert_eq!(counter.update(1_026_624), 1.0);
    }

    #[test]
    fn first_reading_after_reset_is_zero() {
        let mut counter = NetCounter::new(Some(0));
        counter.reset();
        assert_eq!(counter.update(5_000_000), 0.0);
        assert_eq!(counter.update(5_002_048), 2.0);
    }
}
