use pulse_core::{clamp_percent, Sample};
use pulse_theme::{Color, Theme};
use iced::{
    widget::{container, progress_bar, row, text},
    Alignment, Element, Length,
};

/// Disk usage below this is nominal.
pub const WARNING_AT: f32 = 50.0;
/// Disk usage at or above this is critical.
pub const CRITICAL_AT: f32 = 75.0;

/// KiB/s per gauge percent.  A fixed heuristic, not a measured link maximum:
/// 1000 KiB/s and above pins the network gauge at 100.
pub const NET_KBPS_PER_PERCENT: f32 = 10.0;

/// Map a network rate onto the 0–100 gauge scale.
pub fn net_gauge_value(net_kbps: f32) -> f32 {
    clamp_percent((net_kbps / NET_KBPS_PER_PERCENT).min(100.0))
}

/// Severity band for a tiered gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Nominal,
    Warning,
    Critical,
}

impl Tier {
    pub fn of(value: f32) -> Self {
        if value < WARNING_AT {
            Tier::Nominal
        } else if value < CRITICAL_AT {
            Tier::Warning
        } else {
            Tier::Critical
        }
    }

    pub fn color(self, theme: &Theme) -> Color {
        match self {
            Tier::Nominal  => theme.accent,
            Tier::Warning  => theme.warning,
            Tier::Critical => theme.critical,
        }
    }
}

/// How a gauge picks its bar color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPolicy {
    /// Always the theme accent.
    Fixed,
    /// Follows [`Tier::of`] the current value.
    Tiered,
}

/// A labelled 0–100 progress bar that owns its own color.
#[derive(Debug, Clone)]
pub struct Gauge {
    label:   &'static str,
    policy:  ColorPolicy,
    value:   f32,
    color:   Color,
    /// Text shown right of the bar.
    readout: String,
}

impl Gauge {
    pub fn new(label: &'static str, policy: ColorPolicy, theme: &Theme) -> Self {
        let mut gauge = Self {
            label,
            policy,
            value: 0.0,
            color: theme.accent,
            readout: percent_readout(0.0),
        };
        gauge.recolor(theme);
        gauge
    }

    /// Set the value (clamped into `[0, 100]`) and update the color.
    /// The readout shows the value as a percentage.
    pub fn set(&mut self, value: f32, theme: &Theme) {
        self.value = clamp_percent(value);
        self.readout = percent_readout(self.value);
        self.recolor(theme);
    }

    /// Like [`Gauge::set`], but with a caller-supplied readout.
    pub fn set_with_readout(&mut self, value: f32, readout: String, theme: &Theme) {
        self.set(value, theme);
        self.readout = readout;
    }

    /// Re-derive the color after a theme change.
    pub fn recolor(&mut self, theme: &Theme) {
        self.color = match self.policy {
            ColorPolicy::Fixed  => theme.accent,
            ColorPolicy::Tiered => Tier::of(self.value).color(theme),
        };
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn readout(&self) -> &str {
        &self.readout
    }

    pub fn view<'a, M: 'a>(&'a self, theme: &'a Theme) -> Element<'a, M> {
        let style = theme.gauge(self.color);
        let bar = progress_bar(0.0..=100.0, self.value).style(move |_: &iced::Theme| style.to_iced());

        row![
            text(self.label)
                .size(theme.font_size + 1.0)
                .color(theme.label.to_iced())
                .width(Length::Fixed(110.0)),
            container(bar).width(Length::Fixed(200.0)),
            text(&self.readout)
                .size(theme.font_size)
                .color(theme.info.to_iced()),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
    }
}

fn percent_readout(value: f32) -> String {
    format!("{value:>3.0}%")
}

/// The five gauges in the left column.
#[derive(Debug, Clone)]
pub struct Gauges {
    pub cpu:     Gauge,
    pub memory:  Gauge,
    pub disk:    Gauge,
    pub network: Gauge,
    pub battery: Gauge,
}

impl Gauges {
    pub fn new(theme: &Theme) -> Self {
        Self {
            cpu:     Gauge::new("CPU Usage", ColorPolicy::Fixed, theme),
            memory:  Gauge::new("Memory Usage", ColorPolicy::Fixed, theme),
            disk:    Gauge::new("Disk Usage", ColorPolicy::Tiered, theme),
            network: Gauge::new("Network Speed", ColorPolicy::Fixed, theme),
            battery: Gauge::new("Battery", ColorPolicy::Fixed, theme),
        }
    }

    /// Reflect `sample` in all five gauges.  No battery shows an empty bar
    /// reading "N/A"; the network readout is the raw rate, not the bar scale.
    pub fn apply(&mut self, sample: &Sample, theme: &Theme) {
        self.cpu.set(sample.cpu_percent, theme);
        self.memory.set(sample.mem_percent, theme);
        self.disk.set(sample.disk_percent, theme);
        self.network.set_with_readout(
            net_gauge_value(sample.net_kbps),
            format!("{:.1} KB/s", sample.net_kbps),
            theme,
        );
        self.battery.set_with_readout(
            sample.battery.map_or(0.0, |b| b.percent),
            sample.battery.map_or_else(|| "N/A".to_string(), |b| percent_readout(b.percent)),
            theme,
        );
    }

    pub fn recolor(&mut self, theme: &Theme) {
        for gauge in self.iter_mut() {
            gauge.recolor(theme);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gauge> {
        [&self.cpu, &self.memory, &self.disk, &self.network, &self.battery].into_iter()
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut Gauge> {
        [
            &mut self.cpu,
            &mut self.memory,
            &mut self.disk,
            &mut self.network,
            &mut self.battery,
        ]
        .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::Battery;

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::of(49.0), Tier::Nominal);
        assert_eq!(Tier::of(49.99), Tier::Nominal);
        assert_eq!(Tier::of(50.0), Tier::Warning);
        assert_eq!(Tier::of(74.9), Tier::Warning);
        assert_eq!(Tier::of(75.0), Tier::Critical);
        assert_eq!(Tier::of(100.0), Tier::Critical);
    }

    #[test]
    fn disk_gauge_colors_follow_tier() {
        let theme = Theme::default();
        let mut disk = Gauge::new("Disk Usage", ColorPolicy::Tiered, &theme);

        disk.set(49.0, &theme);
        assert_eq!(disk.color(), theme.accent);
        disk.set(50.0, &theme);
        assert_eq!(disk.color(), theme.warning);
        disk.set(75.0, &theme);
        assert_eq!(disk.color(), theme.critical);
    }

    #[test]
    fn network_scaling_heuristic() {
        assert_eq!(net_gauge_value(1000.0), 100.0);
        assert_eq!(net_gauge_value(500.0), 50.0);
        assert_eq!(net_gauge_value(50_000.0), 100.0);
        assert_eq!(net_gauge_value(0.0), 0.0);
    }

    #[test]
    fn critical_disk_leaves_other_gauges_alone() {
        let theme = Theme::default();
        let mut gauges = Gauges::new(&theme);
        let sample = Sample {
            cpu_percent:  90.0,
            disk_percent: 80.0,
            net_kbps:     500.0,
            battery:      Some(Battery { percent: 64.0, charging: false }),
            ..Sample::default()
        };
        gauges.apply(&sample, &theme);

        assert_eq!(gauges.disk.color(), theme.critical);
        assert_eq!(gauges.cpu.color(), theme.accent);
        assert_eq!(gauges.network.value(), 50.0);
        assert_eq!(gauges.battery.value(), 64.0);
        assert!(gauges.iter().filter(|g| g.color() == theme.critical).count() == 1);
    }

    #[test]
    fn missing_battery_reads_zero() {
        let theme = Theme::default();
        let mut gauges = Gauges::new(&theme);
        gauges.battery.set(80.0, &theme);
        gauges.apply(&Sample::default(), &theme);
        assert_eq!(gauges.battery.value(), 0.0);
        assert_eq!(gauges.battery.readout(), "N/A");
    }

    #[test]
    fn readouts_show_units_not_bar_scale() {
        let theme = Theme::default();
        let mut gauges = Gauges::new(&theme);
        let sample = Sample {
            cpu_percent: 42.0,
            net_kbps:    500.0,
            battery:     Some(Battery { percent: 87.0, charging: true }),
            ..Sample::default()
        };
        gauges.apply(&sample, &theme);

        assert_eq!(gauges.cpu.readout(), " 42%");
        assert_eq!(gauges.network.value(), 50.0);
        assert_eq!(gauges.network.readout(), "500.0 KB/s");
        assert_eq!(gauges.battery.readout(), " 87%");
    }

    #[test]
    fn recolor_tracks_new_theme() {
        let theme = Theme::default();
        let mut gauges = Gauges::new(&theme);
        gauges.disk.set(60.0, &theme);

        let cfg = pulse_config::ThemeConfig {
            warning: "#ff8800".to_string(),
            ..pulse_config::ThemeConfig::default()
        };
        let orange = Theme::from_config(&cfg);
        gauges.recolor(&orange);
        assert_eq!(gauges.disk.color(), Color::rgb(0xff, 0x88, 0x00));
    }
}
