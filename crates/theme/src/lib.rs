pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::{ChartStyle, GaugeStyle};

use pulse_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible: invalid color strings fall
/// back to the built-in palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background:       Color,
    pub trough:           Color,
    pub accent:           Color,
    pub warning:          Color,
    pub critical:         Color,
    pub label:            Color,
    pub info:             Color,
    pub chart_background: Color,
    pub chart_axis:       Color,
    pub chart_spine:      Color,
    pub cpu_line:         Color,
    pub mem_line:         Color,
    pub net_line:         Color,
    pub font_size:        f32,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        let parse = |hex: &str, fallback: Color| Color::from_hex(hex).unwrap_or(fallback);

        Self {
            background:       parse(&cfg.background, Color::NAVY),
            trough:           parse(&cfg.trough, Color::SLATE),
            accent:           parse(&cfg.accent, Color::AQUA),
            warning:          parse(&cfg.warning, Color::YELLOW),
            critical:         parse(&cfg.critical, Color::RED),
            label:            parse(&cfg.label, Color::WHITE),
            info:             parse(&cfg.info, Color::MINT),
            chart_background: parse(&cfg.chart_background, Color::INK),
            chart_axis:       parse(&cfg.chart_axis, Color::ICE),
            chart_spine:      parse(&cfg.chart_spine, Color::STEEL),
            cpu_line:         parse(&cfg.cpu_line, Color::AQUA),
            mem_line:         parse(&cfg.mem_line, Color::SPRING),
            net_line:         parse(&cfg.net_line, Color::FOAM),
            font_size:        if cfg.font_size > 0.0 { cfg.font_size } else { 11.0 },
        }
    }

    /// Gauge drawn in `bar` over the shared trough color.
    pub fn gauge(&self, bar: Color) -> GaugeStyle {
        GaugeStyle { trough: self.trough, bar }
    }

    /// Chart style for a series drawn in `line`.
    pub fn chart(&self, line: Color) -> ChartStyle {
        ChartStyle {
            background: self.chart_background,
            axis:       self.chart_axis,
            spine:      self.chart_spine,
            line,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
