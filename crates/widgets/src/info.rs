use chrono::{DateTime, Local};
use pulse_core::{HostInfo, Sample};

/// The status line under the gauges:
/// `"Linux 6.8.0 | Drives: 3 | Uptime: 2d 5h | Battery: 87% (Charging)"`.
pub fn info_line(host: &HostInfo, sample: &Sample, now: DateTime<Local>) -> String {
    let uptime_secs = u64::try_from(now.timestamp())
        .unwrap_or(0)
        .saturating_sub(host.boot_time);

    format!(
        "{} {} | Drives: {} | Uptime: {} | Battery: {}",
        host.os_name,
        host.os_release,
        sample.partition_count,
        fmt_uptime(uptime_secs),
        sample.battery_text(),
    )
}

/// Whole days and hours, e.g. `"0d 3h"`.
pub fn fmt_uptime(secs: u64) -> String {
    let hours = secs / 3600;
    format!("{}d {}h", hours / 24, hours % 24)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pulse_core::Battery;

    #[test]
    fn uptime_formatting() {
        assert_eq!(fmt_uptime(0), "0d 0h");
        assert_eq!(fmt_uptime(3 * 3600 + 59 * 60), "0d 3h");
        assert_eq!(fmt_uptime(2 * 86_400 + 5 * 3600), "2d 5h");
    }

    #[test]
    fn full_line() {
        let now = Local.timestamp_opt(1_700_000_000, 0).unwrap();
        let host = HostInfo {
            os_name:    "Linux".into(),
            os_release: "6.8.0".into(),
            boot_time:  1_700_000_000 - (86_400 + 2 * 3600),
        };
        let sample = Sample {
            partition_count: 3,
            battery: Some(Battery { percent: 87.0, charging: true }),
            ..Sample::default()
        };

        assert_eq!(
            info_line(&host, &sample, now),
            "Linux 6.8.0 | Drives: 3 | Uptime: 1d 2h | Battery: 87% (Charging)"
        );
    }

    #[test]
    fn boot_time_in_future_reads_zero() {
        let now = Local.timestamp_opt(1_000, 0).unwrap();
        let host = HostInfo { boot_time: 5_000, ..HostInfo::default() };
        assert!(info_line(&host, &Sample::default(), now).contains("Uptime: 0d 0h"));
        assert!(info_line(&host, &Sample::default(), now).ends_with("Battery: N/A"));
    }
}
