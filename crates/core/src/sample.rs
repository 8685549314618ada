use chrono::{DateTime, Local};

/// One second's worth of aggregated system metrics.
///
/// Produced by the background sampler and handed to the UI thread as an
/// immutable message; nothing in here is ever mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Global CPU utilization over the last measurement window (0.0 – 100.0).
    pub cpu_percent: f32,
    /// Used RAM as a percentage of total (0.0 – 100.0).
    pub mem_percent: f32,
    /// Mean usage across readable mounted partitions, 0 if none were readable.
    pub disk_percent: f32,
    /// KiB transferred (sent + received) since the previous sample.
    pub net_kbps: f32,
    /// `None` when the machine has no battery or it could not be read.
    pub battery: Option<Battery>,
    /// Number of enumerated partitions, readable or not.
    pub partition_count: usize,
    pub timestamp: DateTime<Local>,
}

impl Sample {
    /// Human-readable battery state: `"87%"`, `"87% (Charging)"` or `"N/A"`.
    #[must_use]
    pub fn battery_text(&self) -> String {
        match self.battery {
            Some(Battery { percent, charging: true }) => format!("{percent:.0}% (Charging)"),
            Some(Battery { percent, charging: false }) => format!("{percent:.0}%"),
            None => "N/A".to_string(),
        }
    }
}

impl Default for Sample {
    fn default() -> Self {
        Self {
            cpu_percent:     0.0,
            mem_percent:     0.0,
            disk_percent:    0.0,
            net_kbps:        0.0,
            battery:         None,
            partition_count: 0,
            timestamp:       Local::now(),
        }
    }
}

/// Battery charge level and charging state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Battery {
    /// Charge level (0.0 – 100.0).
    pub percent: f32,
    /// `true` = charging / full, `false` = discharging.
    pub charging: bool,
}

/// Static facts about the host, read once when sampling starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostInfo {
    /// OS name, e.g. `"Linux"` or `"Darwin"`.
    pub os_name: String,
    /// OS release, e.g. the kernel version `"6.8.0-45-generic"`.
    pub os_release: String,
    /// Boot time in seconds since the UNIX epoch.
    pub boot_time: u64,
}

/// Clamp a percentage into `[0, 100]`, mapping NaN / infinities to 0.
#[must_use]
pub fn clamp_percent(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_percent_bounds() {
        assert_eq!(clamp_percent(-3.0), 0.0);
        assert_eq!(clamp_percent(42.5), 42.5);
        assert_eq!(clamp_percent(130.0), 100.0);
        assert_eq!(clamp_percent(f32::NAN), 0.0);
        assert_eq!(clamp_percent(f32::INFINITY), 0.0);
    }

    #[test]
    fn battery_text_variants() {
        let mut sample = Sample::default();
        assert_eq!(sample.battery_text(), "N/A");

        sample.battery = Some(Battery { percent: 87.0, charging: false });
        assert_eq!(sample.battery_text(), "87%");

        sample.battery = Some(Battery { percent: 87.0, charging: true });
        assert_eq!(sample.battery_text(), "87% (Charging)");
    }
}
