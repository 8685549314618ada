use pulse_core::{Battery, PulseError, Result};
use std::path::Path;

/// Linux sysfs power-supply class directory.
pub const POWER_SUPPLY_DIR: &str = "/sys/class/power_supply";

/// Read battery state from the Linux sysfs power-supply interface.
///
/// `Ok(None)` when the system has no battery (desktop, VM, non-Linux).
pub fn read_battery() -> Result<Option<Battery>> {
    read_battery_at(Path::new(POWER_SUPPLY_DIR))
}

/// Same as [`read_battery`] but rooted at `root` instead of sysfs.
///
/// Returns the first of `BAT0`..`BAT2` that exists.  A battery directory
/// whose files can't be read or parsed is an error, not an absent battery.
pub fn read_battery_at(root: &Path) -> Result<Option<Battery>> {
    for name in ["BAT0", "BAT1", "BAT2"] {
        let base = root.join(name);
        if !base.exists() {
            continue;
        }

        let capacity = std::fs::read_to_string(base.join("capacity"))?;
        let status   = std::fs::read_to_string(base.join("status"))?;

        let percent = capacity
            .trim()
            .parse::<f32>()
            .map_err(|e| PulseError::Battery(format!("{name}: bad capacity {capacity:?}: {e}")))?;
        let charging = matches!(status.trim(), "Charging" | "Full");

        return Ok(Some(Battery {
            percent: pulse_core::clamp_percent(percent),
            charging,
        }));
    }
    Ok(None)
}
