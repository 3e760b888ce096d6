use ratatui::{prelude::*, widgets::Paragraph};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewContext<'a> {
    pub mode: &'a str,
    pub hints: Vec<(String, &'a str)>,
    pub message: Option<&'a str>,
}

/// Two rows: mode with key hints, then the latest status message
pub struct StatusBarWidget<'a> {
    ctx: ViewContext<'a>,
    style: Style,
    key_style: Style,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(ctx: ViewContext<'a>) -> Self {
        Self {
            ctx,
            style: Style::default(),
            key_style: Style::default().bold(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn hint_line(&self) -> Line<'a> {
        let mut spans = vec![Span::styled(
            format!(" {} ", self.ctx.mode),
            self.style.reversed(),
        )];
        for (key, description) in &self.ctx.hints {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(key.clone(), self.key_style));
            spans.push(Span::raw(format!(" {description}")));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),
                Constraint::Length(1), // mode and hints
                Constraint::Length(1), // status message
            ],
        )
        .split(area);

        Paragraph::new(self.hint_line())
            .style(self.style)
            .render(layout[1], buf);

        let message = self.ctx.message.unwrap_or_default();
        Paragraph::new(message).render(layout[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn ctx<'a>(message: Option<&'a str>) -> ViewContext<'a> {
        ViewContext {
            mode: "NAVIGATE",
            hints: vec![("<enter>".to_string(), "edit"), ("<s>".to_string(), "save")],
            message,
        }
    }

    #[test]
    fn test_render_with_message() {
        let area = Rect::new(0, 0, 60, 2);
        let mut buffer = Buffer::empty(area);

        StatusBarWidget::new(ctx(Some("[Saved] Split 1"))).render(area, &mut buffer);

        assert_eq!(row(&buffer, 0), " NAVIGATE  <enter> edit <s> save");
        assert_eq!(row(&buffer, 1), "[Saved] Split 1");
    }

    #[test]
    fn test_render_empty_message() {
        let area = Rect::new(0, 0, 60, 2);
        let mut buffer = Buffer::empty(area);

        StatusBarWidget::new(ctx(None)).render(area, &mut buffer);

        assert_eq!(row(&buffer, 1), "");
    }

    #[test]
    fn test_render_uses_bottom_rows() {
        let area = Rect::new(0, 0, 60, 4);
        let mut buffer = Buffer::empty(area);

        StatusBarWidget::new(ctx(Some("[ERR: Load] saved split 3 not found (1 saved)")))
            .render(area, &mut buffer);

        assert_eq!(row(&buffer, 0), "");
        assert_eq!(
            row(&buffer, 3),
            "[ERR: Load] saved split 3 not found (1 saved)"
        );
    }

    #[test]
    fn test_render_small_area() {
        let area = Rect::new(0, 0, 5, 1);
        let mut buffer = Buffer::empty(area);

        StatusBarWidget::new(ctx(Some("message"))).render(area, &mut buffer);
    }
}
