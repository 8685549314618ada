//! Rolling line charts drawn on an iced canvas.
//!
//! Each chart keeps the last plotted [`ChartFrame`] next to a geometry
//! cache.  Refreshing with identical data keeps the cached geometry; any
//! change clears the cache and the next draw rebuilds it from scratch.

use pulse_core::{Histories, HISTORY_LEN};
use pulse_theme::{ChartStyle, Theme};
use iced::{
    mouse,
    widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text},
    Element, Length, Point, Rectangle, Renderer,
};

/// Series line width in logical pixels.
const LINE_WIDTH: f32 = 1.8;
/// Space reserved left of the plot for y tick labels.
const MARGIN_LEFT: f32 = 44.0;
/// Space reserved under the plot for x tick labels.
const MARGIN_BOTTOM: f32 = 16.0;
const MARGIN_TOP: f32 = 6.0;
const MARGIN_RIGHT: f32 = 8.0;
/// Seconds between x tick labels.
const X_TICK_STEP: usize = 10;

/// How a chart picks its y-axis upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YScale {
    /// Always `[0, max]` regardless of data.
    Fixed { max: f32 },
    /// `[0, max(floor, factor × largest value)]` so spikes keep headroom.
    Headroom { floor: f32, factor: f32 },
}

impl YScale {
    pub const PERCENT: Self = YScale::Fixed { max: 100.0 };
    pub const THROUGHPUT: Self = YScale::Headroom { floor: 10.0, factor: 1.4 };

    pub fn upper(self, values: &[f32]) -> f32 {
        match self {
            YScale::Fixed { max } => max,
            YScale::Headroom { floor, factor } => {
                let peak = values.iter().copied().fold(0.0, f32::max);
                floor.max(peak * factor)
            }
        }
    }
}

/// Everything that determines what a chart looks like, minus colors.
///
/// Points are `(x, y)` with x the offset in seconds from the newest sample,
/// so a full history spans `-(len - 1) ..= 0`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartFrame {
    pub points: Vec<(f32, f32)>,
    pub y_max:  f32,
}

impl ChartFrame {
    pub fn build(values: &[f32], scale: YScale) -> Self {
        let values: Vec<f32> = values
            .iter()
            .map(|v| if v.is_finite() { *v } else { 0.0 })
            .collect();

        let newest = values.len().saturating_sub(1) as f32;
        let points = values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f32 - newest, *v))
            .collect();

        Self {
            points,
            y_max: scale.upper(&values),
        }
    }

    /// `(oldest, newest)` x offsets; `(0, 0)` when empty.
    pub fn x_range(&self) -> (f32, f32) {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first.0, last.0),
            _ => (0.0, 0.0),
        }
    }

    pub fn y_range(&self) -> (f32, f32) {
        (0.0, self.y_max)
    }
}

/// One rolling line chart.
pub struct LineChart {
    /// Y-axis label, e.g. `"CPU %"`.
    title:     &'static str,
    /// Optional x-axis caption under the tick labels.
    x_label:   Option<&'static str>,
    scale:     YScale,
    style:     ChartStyle,
    font_size: f32,
    frame:     ChartFrame,
    cache:     Cache,
}

impl LineChart {
    pub fn new(title: &'static str, scale: YScale, style: ChartStyle, font_size: f32) -> Self {
        Self {
            title,
            x_label: None,
            scale,
            style,
            font_size,
            frame: ChartFrame::build(&[0.0; HISTORY_LEN], scale),
            cache: Cache::new(),
        }
    }

    #[must_use]
    pub fn with_x_label(mut self, label: &'static str) -> Self {
        self.x_label = Some(label);
        self
    }

    /// Re-plot from `values`.  Returns whether the chart will be redrawn.
    pub fn refresh(&mut self, values: &[f32]) -> bool {
        let frame = ChartFrame::build(values, self.scale);
        if frame == self.frame {
            return false;
        }
        self.frame = frame;
        self.cache.clear();
        true
    }

    pub fn set_style(&mut self, style: ChartStyle, font_size: f32) {
        self.style = style;
        self.font_size = font_size;
        self.cache.clear();
    }

    pub fn frame(&self) -> &ChartFrame {
        &self.frame
    }

    pub fn view<'a, M: 'a>(&'a self) -> Element<'a, M> {
        canvas::Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn draw_frame(&self, frame: &mut Frame) {
        let size = frame.size();
        let plot = Rectangle {
            x:      MARGIN_LEFT,
            y:      MARGIN_TOP,
            width:  (size.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (size.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        };
        let (x_min, x_max) = self.frame.x_range();
        let x_span = (x_max - x_min).max(1.0);
        let y_max = if self.frame.y_max > 0.0 { self.frame.y_max } else { 1.0 };

        let to_screen = |(x, y): (f32, f32)| Point {
            x: plot.x + (x - x_min) / x_span * plot.width,
            y: plot.y + plot.height - (y.clamp(0.0, y_max) / y_max) * plot.height,
        };

        frame.fill_rectangle(Point::ORIGIN, size, self.style.background.to_iced());
        frame.stroke(
            &Path::rectangle(plot.position(), plot.size()),
            Stroke::default().with_color(self.style.spine.to_iced()).with_width(1.0),
        );

        // y ticks at 0, mid and max; the series title goes inside the plot.
        let axis = self.style.axis.to_iced();
        let small = self.font_size - 2.0;
        for tick in [0.0, y_max / 2.0, y_max] {
            let p = to_screen((x_min, tick));
            frame.fill_text(Text {
                content: fmt_tick(tick),
                position: Point::new(4.0, p.y - small / 2.0),
                color: axis,
                size: small.into(),
                ..Text::default()
            });
        }
        frame.fill_text(Text {
            content: self.title.to_string(),
            position: Point::new(plot.x + 4.0, plot.y + 2.0),
            color: axis,
            size: self.font_size.into(),
            ..Text::default()
        });

        // x ticks every X_TICK_STEP seconds, anchored at 0.
        let mut offset = 0usize;
        while -(offset as f32) >= x_min {
            let p = to_screen((-(offset as f32), 0.0));
            frame.fill_text(Text {
                content: if offset == 0 { "0".to_string() } else { format!("-{offset}") },
                position: Point::new(p.x - small / 2.0, plot.y + plot.height + 2.0),
                color: axis,
                size: small.into(),
                ..Text::default()
            });
            offset += X_TICK_STEP;
        }
        if let Some(label) = self.x_label {
            frame.fill_text(Text {
                content: label.to_string(),
                position: Point::new(plot.x + plot.width * 0.75 - 20.0, plot.y + plot.height + 2.0),
                color: axis,
                size: small.into(),
                ..Text::default()
            });
        }

        if self.frame.points.len() < 2 {
            return;
        }
        let line = Path::new(|b| {
            let mut points = self.frame.points.iter().copied().map(to_screen);
            if let Some(first) = points.next() {
                b.move_to(first);
            }
            for p in points {
                b.line_to(p);
            }
        });
        frame.stroke(
            &line,
            Stroke::default()
                .with_color(self.style.line.to_iced())
                .with_width(LINE_WIDTH),
        );
    }
}

impl<Message> canvas::Program<Message> for LineChart {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        vec![self.cache.draw(renderer, bounds.size(), |frame| self.draw_frame(frame))]
    }
}

/// Tick label: integers without decimals, small values with one.
fn fmt_tick(value: f32) -> String {
    if value >= 10.0 || value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// The three stacked charts: CPU %, memory %, network KiB/s.
pub struct Charts {
    pub cpu: LineChart,
    pub mem: LineChart,
    pub net: LineChart,
}

impl Charts {
    pub fn new(theme: &Theme) -> Self {
        Self {
            cpu: LineChart::new("CPU %", YScale::PERCENT, theme.chart(theme.cpu_line), theme.font_size),
            mem: LineChart::new("Mem %", YScale::PERCENT, theme.chart(theme.mem_line), theme.font_size),
            net: LineChart::new("KB/s", YScale::THROUGHPUT, theme.chart(theme.net_line), theme.font_size)
                .with_x_label("Seconds"),
        }
    }

    /// Re-plot all three charts from the current history snapshots.
    ///
    /// Idempotent: with no intervening push nothing changes.
    pub fn refresh(&mut self, histories: &Histories) {
        let redrawn = [
            self.cpu.refresh(&histories.cpu.snapshot()),
            self.mem.refresh(&histories.mem.snapshot()),
            self.net.refresh(&histories.net.snapshot()),
        ];
        tracing::trace!(?redrawn, "charts refreshed");
    }

    pub fn restyle(&mut self, theme: &Theme) {
        self.cpu.set_style(theme.chart(theme.cpu_line), theme.font_size);
        self.mem.set_style(theme.chart(theme.mem_line), theme.font_size);
        self.net.set_style(theme.chart(theme.net_line), theme.font_size);
    }

    /// Plotted frames, cpu / mem / net.
    pub fn frames(&self) -> [&ChartFrame; 3] {
        [self.cpu.frame(), self.mem.frame(), self.net.frame()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_axis_spans_last_sixty_seconds() {
        let frame = ChartFrame::build(&[0.0; HISTORY_LEN], YScale::PERCENT);
        assert_eq!(frame.points.len(), HISTORY_LEN);
        assert_eq!(frame.x_range(), (-59.0, 0.0));
    }

    #[test]
    fn percent_scale_is_fixed() {
        let frame = ChartFrame::build(&[42.0; HISTORY_LEN], YScale::PERCENT);
        assert_eq!(frame.y_range(), (0.0, 100.0));
        let frame = ChartFrame::build(&[0.0; HISTORY_LEN], YScale::PERCENT);
        assert_eq!(frame.y_range(), (0.0, 100.0));
    }

    #[test]
    fn throughput_scale_has_headroom_and_floor() {
        let quiet = ChartFrame::build(&[0.0, 2.0, 5.0], YScale::THROUGHPUT);
        assert_eq!(quiet.y_max, 10.0);

        let busy = ChartFrame::build(&[0.0, 100.0, 50.0], YScale::THROUGHPUT);
        assert!((busy.y_max - 140.0).abs() < 1e-3);
    }

    #[test]
    fn non_finite_points_plot_as_zero() {
        let frame = ChartFrame::build(&[f32::NAN, 3.0], YScale::PERCENT);
        assert_eq!(frame.points, vec![(-1.0, 0.0), (0.0, 3.0)]);
    }

    #[test]
    fn empty_series_has_degenerate_range() {
        let frame = ChartFrame::build(&[], YScale::THROUGHPUT);
        assert!(frame.points.is_empty());
        assert_eq!(frame.x_range(), (0.0, 0.0));
        assert_eq!(frame.y_max, 10.0);
    }

    #[test]
    fn refresh_only_redraws_on_change() {
        let theme = Theme::default();
        let mut chart = LineChart::new("CPU %", YScale::PERCENT, theme.chart(theme.cpu_line), 11.0);

        let mut values = vec![0.0; HISTORY_LEN];
        assert!(!chart.refresh(&values));
        values[HISTORY_LEN - 1] = 12.0;
        assert!(chart.refresh(&values));
        assert!(!chart.refresh(&values));
    }

    #[test]
    fn refresh_charts_is_idempotent() {
        let theme = Theme::default();
        let histories = Histories::default();
        let mut charts = Charts::new(&theme);

        for v in [5.0, 80.0, 33.0] {
            histories.cpu.push(v);
            histories.mem.push(v / 2.0);
            histories.net.push(v * 10.0);
        }

        charts.refresh(&histories);
        let first: Vec<ChartFrame> = charts.frames().into_iter().cloned().collect();
        charts.refresh(&histories);
        let second: Vec<ChartFrame> = charts.frames().into_iter().cloned().collect();

        assert_eq!(first, second);
        assert!((second[2].y_max - 1120.0).abs() < 1e-2);
    }

    #[test]
    fn constant_cpu_keeps_fixed_range() {
        let theme = Theme::default();
        let histories = Histories::default();
        let mut charts = Charts::new(&theme);

        for _ in 0..HISTORY_LEN + 10 {
            histories.cpu.push(42.0);
        }
        charts.refresh(&histories);

        let cpu = charts.cpu.frame();
        assert_eq!(cpu.points.len(), HISTORY_LEN);
        assert!(cpu.points.iter().all(|(_, y)| *y == 42.0));
        assert_eq!(cpu.y_range(), (0.0, 100.0));
    }

    #[test]
    fn tick_labels() {
        assert_eq!(fmt_tick(0.0), "0");
        assert_eq!(fmt_tick(7.5), "7.5");
        assert_eq!(fmt_tick(140.0), "140");
    }
}
