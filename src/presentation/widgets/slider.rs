use std::borrow::Cow;

use ratatui::{prelude::*, widgets::LineGauge};

use crate::domain::{split::MAX_PERCENTAGE, text::format_percentage};

/// Percentage slider rendered as a labelled [`LineGauge`]
#[derive(Debug, Clone, PartialEq)]
pub struct SliderWidget<'a> {
    label: Cow<'a, str>,
    value: f64,
    style: Style,
    label_style: Style,
}

impl<'a> SliderWidget<'a> {
    pub fn new(label: impl Into<Cow<'a, str>>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            style: Style::default(),
            label_style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    /// Position of the gauge in 0..=1
    pub fn ratio(&self) -> f64 {
        if self.value.is_finite() {
            (self.value / MAX_PERCENTAGE).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

impl Widget for SliderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let ratio = self.ratio();
        let label = Line::from(vec![
            Span::styled(self.label, self.label_style),
            Span::raw(" "),
            Span::styled(format!("{:>7}", format_percentage(self.value)), self.style),
        ]);
        LineGauge::default()
            .ratio(ratio)
            .label(label)
            .filled_style(self.style)
            .line_set(symbols::line::THICK)
            .render(area, buf);
    }
}
