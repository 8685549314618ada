pub mod chart;
pub mod gauge;
pub mod info;

pub use chart::{ChartFrame, Charts, LineChart, YScale};
pub use gauge::{net_gauge_value, ColorPolicy, Gauge, Gauges, Tier};
pub use info::{fmt_uptime, info_line};
