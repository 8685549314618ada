use crate::colors::Color;

/// Colors for one gauge.  Each gauge owns its own copy, so retinting the
/// disk gauge never bleeds into its neighbours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeStyle {
    /// Unfilled part of the bar.
    pub trough: Color,
    /// Filled part of the bar.
    pub bar: Color,
}

impl GaugeStyle {
    /// Convert to the style struct `iced::widget::progress_bar` expects.
    pub fn to_iced(self) -> iced::widget::progress_bar::Style {
        iced::widget::progress_bar::Style {
            background: iced::Background::Color(self.trough.to_iced()),
            bar:        iced::Background::Color(self.bar.to_iced()),
            border:     iced::Border {
                color:  self.bar.to_iced(),
                width:  1.0,
                radius: 2.0.into(),
            },
        }
    }
}

/// Colors for one line chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub background: Color,
    pub axis:       Color,
    pub spine:      Color,
    pub line:       Color,
}
