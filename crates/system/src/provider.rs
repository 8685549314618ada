use crate::disk::PartitionReading;
use pulse_core::{Battery, HostInfo, PulseError, Result};
use std::time::Duration;
use sysinfo::{Disks, Networks, System};

/// Source of raw OS metrics.
///
/// Every call is independent and may fail on its own; the sampler turns
/// failures into per-statistic defaults.  Implementations may block.
pub trait MetricsProvider: Send {
    /// Global CPU utilization measured over `window`.  Blocks for `window`.
    fn cpu_percent(&mut self, window: Duration) -> Result<f32>;

    /// Instantaneous RAM utilization.
    fn memory_percent(&mut self) -> Result<f32>;

    /// One reading per mounted partition.  `Err` when enumeration itself fails.
    fn partitions(&mut self) -> Result<Vec<PartitionReading>>;

    /// Cumulative bytes sent + received across all interfaces.
    fn net_total_bytes(&mut self) -> Result<u64>;

    /// `Ok(None)` when the machine has no battery.
    fn battery(&mut self) -> Result<Option<Battery>>;

    /// OS name, release, and boot time.
    fn host_info(&self) -> HostInfo;
}

/// [`MetricsProvider`] backed by `sysinfo` and the sysfs battery interface.
pub struct SysinfoProvider {
    sys:      System,
    networks: Networks,
}

impl SysinfoProvider {
    pub fn new() -> Self {
        Self {
            sys:      System::new(),
            networks: Networks::new_with_refreshed_list(),
        }
    }
}

impl Default for SysinfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for SysinfoProvider {
    fn cpu_percent(&mut self, window: Duration) -> Result<f32> {
        // sysinfo computes usage between two refreshes.
        self.sys.refresh_cpu_usage();
        std::thread::sleep(window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
        self.sys.refresh_cpu_usage();

        if self.sys.cpus().is_empty() {
            return Err(PulseError::metric("cpu", "no CPUs reported"));
        }
        Ok(pulse_core::clamp_percent(self.sys.global_cpu_usage()))
    }

    fn memory_percent(&mut self) -> Result<f32> {
        self.sys.refresh_memory();
        crate::memory::used_percent(self.sys.used_memory(), self.sys.total_memory())
    }

    fn partitions(&mut self) -> Result<Vec<PartitionReading>> {
        // Re-enumerate every cycle so newly (un)mounted media are noticed.
        let disks = Disks::new_with_refreshed_list();

        Ok(disks
            .iter()
            .map(|d| {
                let total = d.total_space();
                let usage = if total == 0 {
                    Err(PulseError::metric("disk", "partition reports zero size"))
                } else {
                    let used = total.saturating_sub(d.available_space());
                    Ok(pulse_core::clamp_percent((used as f64 / total as f64 * 100.0) as f32))
                };
                PartitionReading {
                    mount_point: d.mount_point().to_path_buf(),
                    usage,
                }
            })
            .collect())
    }

    fn net_total_bytes(&mut self) -> Result<u64> {
        self.networks.refresh(true);
        if self.networks.list().is_empty() {
            return Err(PulseError::metric("network", "no interfaces"));
        }

        Ok(self
            .networks
            .list()
            .values()
            .map(|d| d.total_received() + d.total_transmitted())
            .sum())
    }

    fn battery(&mut self) -> Result<Option<Battery>> {
        crate::battery::read_battery()
    }

    fn host_info(&self) -> HostInfo {
        HostInfo {
            os_name:    os_family(std::env::consts::OS),
            os_release: System::kernel_version().unwrap_or_default(),
            boot_time:  System::boot_time(),
        }
    }
}

/// Kernel family name as `uname -s` spells it, e.g. `"linux"` -> `"Linux"`.
///
/// `System::name()` reports the distribution ("Ubuntu"), which reads oddly
/// next to a kernel release.
fn os_family(os: &str) -> String {
    match os {
        "linux" => "Linux".to_string(),
        "macos" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        other => {
            let mut chars = other.chars();
            chars
                .next()
                .map(|c| c.to_ascii_uppercase().to_string() + chars.as_str())
                .unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_family_matches_uname() {
        assert_eq!(os_family("linux"), "Linux");
        assert_eq!(os_family("macos"), "Darwin");
        assert_eq!(os_family("windows"), "Windows");
        assert_eq!(os_family("netbsd"), "Netbsd");
        assert_eq!(os_family(""), "");
    }

    #[test]
    fn host_info_uses_family_name() {
        let host = SysinfoProvider::new().host_info();
        assert_eq!(host.os_name, os_family(std::env::consts::OS));
    }
}
