use pulse_core::{PulseError, Result};

/// `used / total` as a percentage.  A zero total means the OS gave us nothing.
pub fn used_percent(used: u64, total: u64) -> Result<f32> {
    if total == 0 {
        return Err(PulseError::metric("memory", "total memory reported as 0"));
    }
    Ok(pulse_core::clamp_percent((used as f64 / total as f64 * 100.0) as f32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_used() {
        assert_eq!(used_percent(2 << 30, 8 << 30).unwrap(), 25.0);
    }

    #[test]
    fn zero_total_is_an_error() {
        assert!(used_percent(0, 0).is_err());
    }

    #[test]
    fn over_reporting_is_clamped() {
        assert_eq!(used_percent(9, 8).unwrap(), 100.0);
    }
}
