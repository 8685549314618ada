use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `pulse.toml`.
///
/// Everything here is presentational.  Sampling cadence, history length,
/// the network gauge heuristic and the disk color tiers are fixed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    /// Main window geometry.
    pub window: WindowConfig,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

/// Window settings, read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Width in logical pixels.
    pub width: f32,
    /// Height in logical pixels.
    pub height: f32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width:     840.0,
            height:    560.0,
            resizable: false,
        }
    }
}

/// Theme / styling configuration.  All colors are hex strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background.
    pub background: String,
    /// Unfilled part of every gauge.
    pub trough: String,
    /// Fixed gauge color, title, and the disk gauge's nominal tier.
    pub accent: String,
    /// Disk gauge between 50% and 75%.
    pub warning: String,
    /// Disk gauge at or above 75%.
    pub critical: String,
    /// Gauge labels.
    pub label: String,
    /// Info line under the gauges.
    pub info: String,
    /// Plot area background.
    pub chart_background: String,
    /// Axis tick and label text.
    pub chart_axis: String,
    /// Plot frame.
    pub chart_spine: String,
    pub cpu_line: String,
    pub mem_line: String,
    pub net_line: String,
    /// Base font size in points.
    pub font_size: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:       "#0a0f1a".to_string(),
            trough:           "#1a1f2b".to_string(),
            accent:           "#00E0B8".to_string(), // aqua
            warning:          "#FFD700".to_string(), // yellow
            critical:         "#FF3B3B".to_string(), // red
            label:            "#ffffff".to_string(),
            info:             "#9be8da".to_string(),
            chart_background: "#071028".to_string(),
            chart_axis:       "#cfeeff".to_string(),
            chart_spine:      "#223447".to_string(),
            cpu_line:         "#00E0B8".to_string(),
            mem_line:         "#45ffd6".to_string(),
            net_line:         "#80ffd6".to_string(),
            font_size:        11.0,
        }
    }
}
