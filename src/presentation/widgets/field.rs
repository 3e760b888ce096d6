use std::borrow::Cow;

use ratatui::{prelude::*, widgets::Paragraph};

const CURSOR: &str = "▏";

/// Single-line labelled text input with an optional inline message
#[derive(Debug, Clone, PartialEq)]
pub struct FieldWidget<'a> {
    label: Cow<'a, str>,
    value: &'a str,
    message: Option<String>,
    editing: bool,
    label_style: Style,
    value_style: Style,
    message_style: Style,
}

impl<'a> FieldWidget<'a> {
    pub fn new(label: impl Into<Cow<'a, str>>, value: &'a str) -> Self {
        Self {
            label: label.into(),
            value,
            message: None,
            editing: false,
            label_style: Style::default(),
            value_style: Style::default(),
            message_style: Style::default(),
        }
    }

    pub fn message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }

    /// Shows a cursor after the value
    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    pub fn value_style(mut self, style: Style) -> Self {
        self.value_style = style;
        self
    }

    pub fn message_style(mut self, style: Style) -> Self {
        self.message_style = style;
        self
    }

    pub fn line(&self) -> Line<'a> {
        let mut spans = vec![
            Span::styled(self.label.clone(), self.label_style),
            Span::raw(": "),
            Span::styled(self.value, self.value_style),
        ];
        if self.editing {
            spans.push(Span::styled(CURSOR, self.value_style));
        }
        if let Some(message) = &self.message {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(message.clone(), self.message_style));
        }
        Line::from(spans)
    }
}

impl Widget for FieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Paragraph::new(self.line()).render(area, buf);
    }
}
