use pulse_core::Result;
use std::path::PathBuf;

/// Usage of one mounted partition, or why it couldn't be read this cycle.
#[derive(Debug)]
pub struct PartitionReading {
    pub mount_point: PathBuf,
    pub usage:       Result<f32>,
}

/// Arithmetic mean of the readable partitions, rounded to one decimal.
///
/// Unreadable partitions are skipped, not counted as 0.  No readable
/// partitions at all gives 0.
pub fn mean_usage(readings: &[PartitionReading]) -> f32 {
    let readable: Vec<f32> = readings
        .iter()
        .filter_map(|r| match &r.usage {
            Ok(pct) => Some(*pct),
            Err(e) => {
                tracing::debug!("skipping partition {}: {e}", r.mount_point.display());
                None
            }
        })
        .collect();

    if readable.is_empty() {
        return 0.0;
    }
    let mean = readable.iter().sum::<f32>() / readable.len() as f32;
    pulse_core::clamp_percent((mean * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::PulseError;

    fn ok(mount: &str, pct: f32) -> PartitionReading {
        PartitionReading { mount_point: mount.into(), usage: Ok(pct) }
    }

    fn broken(mount: &str) -> PartitionReading {
        PartitionReading {
            mount_point: mount.into(),
            usage:       Err(PulseError::metric("disk", "media removed")),
        }
    }

    #[test]
    fn unreadable_partitions_are_skipped() {
        let readings = [ok("/", 20.0), ok("/home", 80.0), broken("/media/usb")];
        assert_eq!(mean_usage(&readings), 50.0);
    }

    #[test]
    fn nothing_readable_is_zero() {
        assert_eq!(mean_usage(&[]), 0.0);
        assert_eq!(mean_usage(&[broken("/mnt")]), 0.0);
    }

    #[test]
    fn rounds_to_one_decimal() {
        let readings = [ok("/", 33.32), ok("/boot", 33.40)];
        assert_eq!(mean_usage(&readings), 33.4);
    }
}
